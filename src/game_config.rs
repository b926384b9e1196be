// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig {
    alphabet: alphabet::Alphabet,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    bingo_bonus: i64,
}

pub enum GameConfig {
    Static(StaticGameConfig),
}

impl GameConfig {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    // Bonus for playing a full rack, or unconditionally when forced.
    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize, forced: bool) -> i64 {
        match self {
            GameConfig::Static(x) => {
                // branchless
                x.bingo_bonus & -((forced || num_played == x.rack_size as usize) as i64)
            }
        }
    }
}

pub fn make_game_config(
    alphabet: alphabet::Alphabet,
    board_layout: board_layout::BoardLayout,
) -> GameConfig {
    GameConfig::Static(StaticGameConfig {
        alphabet,
        board_layout,
        rack_size: 7,
        bingo_bonus: 50,
    })
}

pub fn make_english_game_config() -> GameConfig {
    make_game_config(
        alphabet::make_english_alphabet(),
        board_layout::make_standard_board_layout(),
    )
}
