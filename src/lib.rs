// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod aggregator;
pub mod alphabet;
pub mod anchor;
pub mod board_layout;
pub mod board_state;
pub mod display;
pub mod expander;
pub mod fash;
pub mod game_config;
pub mod lexicon;
pub mod matcher;
pub mod materializer;
pub mod matrix;
pub mod pattern;
pub mod placement;
pub mod play_scorer;
pub mod rack;
pub mod strategy;
