// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_state, game_config, placement};

pub struct PlayScorer {
    // new tile per cell, 0 where the cell is not part of the placement.
    new_tiles: Vec<u8>,
}

impl Default for PlayScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayScorer {
    pub fn new() -> Self {
        Self {
            new_tiles: Vec::new(),
        }
    }

    // Assume placement passed the geometry checks. Out-of-bounds tiles are
    // ignored rather than trusted.
    //
    // Every word formed is counted once. Only new tiles get premiums, letter
    // premium first, then the product of the word premiums under new tiles.
    pub fn compute_score(
        &mut self,
        game_config: &game_config::GameConfig,
        board_tiles: &[u8],
        play: &placement::Placement,
        force_bonus: bool,
    ) -> i64 {
        if play.is_empty() {
            return 0;
        }
        let alphabet = game_config.alphabet();
        let board_layout = game_config.board_layout();
        let premiums = board_layout.premiums();
        let dim = board_layout.dim();

        self.new_tiles.clear();
        self.new_tiles.resize(dim.num_cells(), 0);
        let mut overlay = board_tiles.to_vec();
        for placed in play.tiles() {
            if dim.contains(placed.row, placed.col) {
                let idx = dim.at_row_col(placed.row, placed.col);
                self.new_tiles[idx] = placed.tile;
                overlay[idx] = placed.tile;
            }
        }

        // Saturates instead of wrapping on extreme premium grids.
        let mut recounted_score = 0i64;
        for run in board_state::word_runs_on(dim, &overlay, play) {
            let mut word_multiplier = 1i64;
            let mut word_score = 0i64;
            for &idx in run.iter() {
                let new_tile = self.new_tiles[idx];
                let tile_score = if new_tile != 0 {
                    let premium = premiums[idx];
                    word_multiplier =
                        word_multiplier.saturating_mul(premium.word_multiplier as i64);
                    alphabet.score(new_tile) as i64 * premium.letter_multiplier as i64
                } else {
                    alphabet.score(board_tiles[idx]) as i64
                };
                word_score = word_score.saturating_add(tile_score);
            }
            recounted_score =
                recounted_score.saturating_add(word_score.saturating_mul(word_multiplier));
        }
        recounted_score.saturating_add(game_config.num_played_bonus(play.len(), force_bonus))
    }
}
