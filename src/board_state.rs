// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, game_config, lexicon, matrix, placement, play_scorer};
use std::collections::BTreeSet;

// Source of uniform choices, so callers decide how random they want to be.
pub trait RandomPick {
    // Returns an index in 0..n. n is never 0.
    fn pick(&mut self, n: usize) -> usize;
}

impl<R: rand::RngCore> RandomPick for R {
    #[inline(always)]
    fn pick(&mut self, n: usize) -> usize {
        rand::Rng::random_range(self, 0..n)
    }
}

// Runs of two or more tiles formed by a placement on an overlay, as cell
// indexes. The main run follows the placement's axis (across for a single
// tile), plus one perpendicular run per new tile. Each run appears once.
pub fn word_runs_on(
    dim: matrix::Dim,
    overlay: &[u8],
    play: &placement::Placement,
) -> Vec<Box<[usize]>> {
    let axis = play.axis().unwrap_or(matrix::Axis::Across);
    let mut runs = Vec::<Box<[usize]>>::new();
    let mut push_run = |axis: matrix::Axis, row: i8, col: i8| {
        if !dim.contains(row, col) {
            return;
        }
        let (lane, idx) = axis.lane_idx(row, col);
        let strider = dim.lane(axis, lane);
        let (start, end) = strider.run_around(idx, |i| overlay[i] != 0);
        if end > start {
            let cells = (start..=end).map(|i| strider.at(i)).collect::<Box<[usize]>>();
            if !runs.contains(&cells) {
                runs.push(cells);
            }
        }
    };
    if let Some(first) = play.tiles().first() {
        push_run(axis, first.row, first.col);
    }
    for placed in play.tiles() {
        push_run(axis.flip(), placed.row, placed.col);
    }
    runs
}

#[derive(Clone)]
pub struct BoardState<'a> {
    game_config: &'a game_config::GameConfig,
    lexicon: &'a lexicon::Lexicon,
    board_tiles: Box<[u8]>,
}

impl<'a> BoardState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig, lexicon: &'a lexicon::Lexicon) -> Self {
        let dim = game_config.board_layout().dim();
        Self {
            game_config,
            lexicon,
            board_tiles: vec![0u8; dim.num_cells()].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn game_config(&self) -> &'a game_config::GameConfig {
        self.game_config
    }

    #[inline(always)]
    pub fn lexicon(&self) -> &'a lexicon::Lexicon {
        self.lexicon
    }

    #[inline(always)]
    pub fn board_tiles(&self) -> &[u8] {
        &self.board_tiles
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.game_config.board_layout().dim()
    }

    // Takes over tiles from another board of the same shape, for example to
    // keep the position when switching lexicons.
    pub fn with_board_tiles(
        game_config: &'a game_config::GameConfig,
        lexicon: &'a lexicon::Lexicon,
        board_tiles: &[u8],
    ) -> Result<Self, error::Error> {
        let mut ret = Self::new(game_config, lexicon);
        if board_tiles.len() != ret.board_tiles.len() {
            return Err(error::Error::InvalidLayout(format!(
                "board must have {} cells, not {}",
                ret.board_tiles.len(),
                board_tiles.len()
            )));
        }
        ret.board_tiles.copy_from_slice(board_tiles);
        Ok(ret)
    }

    pub fn reset(&mut self) {
        self.board_tiles.iter_mut().for_each(|m| *m = 0);
    }

    // Seeds the board from text rows, skipping every rule. '.' (or a space)
    // is empty, upper-case is a tile, lower-case is a blank.
    pub fn load_rows<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), error::Error> {
        let dim = self.dim();
        let mut board_tiles = vec![0u8; dim.num_cells()];
        if rows.len() != dim.rows as usize {
            return Err(error::Error::InvalidLayout(format!(
                "board must have {} rows, not {}",
                dim.rows,
                rows.len()
            )));
        }
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            if text.chars().count() != dim.cols as usize {
                return Err(error::Error::InvalidLayout(format!(
                    "row {row} must have {} cells: {text:?}",
                    dim.cols
                )));
            }
            for (col, c) in text.chars().enumerate() {
                let tile = match c {
                    '.' | ' ' => 0,
                    _ => match alphabet::tile_from_char(c) {
                        Some(tile) if !alphabet::is_unresolved(tile) => tile,
                        _ => return Err(error::Error::InvalidTile(c)),
                    },
                };
                board_tiles[dim.at_row_col(row as i8, col as i8)] = tile;
            }
        }
        self.board_tiles = board_tiles.into_boxed_slice();
        Ok(())
    }

    // 0 when empty or outside the board.
    #[inline(always)]
    pub fn tile_at(&self, row: i8, col: i8) -> u8 {
        let dim = self.dim();
        if dim.contains(row, col) {
            self.board_tiles[dim.at_row_col(row, col)]
        } else {
            0
        }
    }

    pub fn num_tiles(&self) -> usize {
        self.board_tiles.iter().filter(|&&t| t != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.board_tiles.iter().all(|&t| t == 0)
    }

    pub fn has_neighbor(&self, row: i8, col: i8) -> bool {
        self.dim()
            .neighbors(row, col)
            .any(|(r, c)| self.tile_at(r, c) != 0)
    }

    // Empty cells next to a tile, row-major. Only the star on an empty board.
    pub fn anchors(&self) -> Vec<(i8, i8)> {
        let board_layout = self.game_config.board_layout();
        if self.is_empty() {
            return vec![(board_layout.star_row(), board_layout.star_col())];
        }
        let dim = board_layout.dim();
        (0..dim.rows)
            .flat_map(|row| (0..dim.cols).map(move |col| (row, col)))
            .filter(|&(row, col)| self.tile_at(row, col) == 0 && self.has_neighbor(row, col))
            .collect()
    }

    // Checks bounds, overlaps, collinearity and the absence of holes.
    pub fn verify_geometry(
        &self,
        play: &placement::Placement,
    ) -> Result<matrix::Axis, error::Error> {
        if play.is_empty() {
            return Err(error::Error::EmptyPlacement);
        }
        let dim = self.dim();
        if let Some(placed) = play.tiles().iter().find(|t| !dim.contains(t.row, t.col)) {
            return Err(error::Error::OutOfBounds {
                row: placed.row,
                col: placed.col,
            });
        }
        let mut new_cells = Vec::with_capacity(play.len());
        for placed in play.tiles() {
            let idx = dim.at_row_col(placed.row, placed.col);
            if self.board_tiles[idx] != 0 || new_cells.contains(&idx) {
                return Err(error::Error::Overlap {
                    row: placed.row,
                    col: placed.col,
                });
            }
            new_cells.push(idx);
        }
        let axis = play.axis().ok_or(error::Error::NonCollinear)?;
        let mut lane = 0;
        let mut lo = i8::MAX;
        let mut hi = i8::MIN;
        for placed in play.tiles() {
            let (l, idx) = axis.lane_idx(placed.row, placed.col);
            lane = l;
            lo = lo.min(idx);
            hi = hi.max(idx);
        }
        let strider = dim.lane(axis, lane);
        for i in lo..=hi {
            let idx = strider.at(i);
            if self.board_tiles[idx] == 0 && !new_cells.contains(&idx) {
                return Err(error::Error::Discontinuous);
            }
        }
        Ok(axis)
    }

    pub fn verify_board_rule(&self, play: &placement::Placement) -> Result<(), error::Error> {
        if self.is_empty() {
            let board_layout = self.game_config.board_layout();
            let star = (board_layout.star_row(), board_layout.star_col());
            if play.tiles().iter().any(|t| (t.row, t.col) == star) {
                Ok(())
            } else {
                Err(error::Error::FirstMoveMustCoverCenter)
            }
        } else if play.tiles().iter().any(|t| self.has_neighbor(t.row, t.col)) {
            Ok(())
        } else {
            Err(error::Error::Disconnected)
        }
    }

    // A copy of the board with the placement written in.
    pub fn overlay(&self, play: &placement::Placement) -> Box<[u8]> {
        let dim = self.dim();
        let mut overlay = self.board_tiles.clone();
        for placed in play.tiles() {
            if dim.contains(placed.row, placed.col) {
                overlay[dim.at_row_col(placed.row, placed.col)] = placed.tile;
            }
        }
        overlay
    }

    pub fn word_runs(&self, play: &placement::Placement) -> Vec<Box<[usize]>> {
        word_runs_on(self.dim(), &self.overlay(play), play)
    }

    // Words formed by the placement, in upper case.
    pub fn affected_words(&self, play: &placement::Placement) -> BTreeSet<String> {
        let overlay = self.overlay(play);
        word_runs_on(self.dim(), &overlay, play)
            .iter()
            .map(|run| alphabet::fmt_word(&run.iter().map(|&i| overlay[i]).collect::<Vec<_>>()))
            .collect()
    }

    fn invalid_words(&self, overlay: &[u8], runs: &[Box<[usize]>]) -> Vec<String> {
        let mut invalid = BTreeSet::new();
        let mut word = Vec::new();
        for run in runs {
            word.clear();
            word.extend(run.iter().map(|&i| overlay[i]));
            if !self.lexicon.contains(&word) {
                invalid.insert(alphabet::fmt_word(&word));
            }
        }
        invalid.into_iter().collect()
    }

    pub fn validate_dictionary(&self, play: &placement::Placement) -> Result<(), error::Error> {
        let overlay = self.overlay(play);
        let runs = word_runs_on(self.dim(), &overlay, play);
        let invalid = self.invalid_words(&overlay, &runs);
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(error::Error::InvalidWords(invalid))
        }
    }

    // Tries every letter for every unresolved blank, keeps the combinations
    // that leave all formed words valid, and picks one of them.
    pub fn resolve_wildcards(
        &self,
        play: &mut placement::Placement,
        rng: &mut dyn RandomPick,
    ) -> Result<(), error::Error> {
        let slots = play
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, t)| alphabet::is_unresolved(t.tile))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        if slots.is_empty() {
            return Ok(());
        }
        let dim = self.dim();
        if let Some(placed) = play.tiles().iter().find(|t| !dim.contains(t.row, t.col)) {
            return Err(error::Error::OutOfBounds {
                row: placed.row,
                col: placed.col,
            });
        }
        let mut overlay = self.overlay(play);
        let runs = word_runs_on(dim, &overlay, play);
        let cells = slots
            .iter()
            .map(|&i| {
                let placed = play.tiles()[i];
                dim.at_row_col(placed.row, placed.col)
            })
            .collect::<Vec<_>>();
        let mut letters = vec![1u8; slots.len()];
        let mut valid = Vec::new();
        let mut word = Vec::new();
        'combos: loop {
            for (&cell, &letter) in cells.iter().zip(letters.iter()) {
                overlay[cell] = alphabet::BLANK | letter;
            }
            if runs.iter().all(|run| {
                word.clear();
                word.extend(run.iter().map(|&i| overlay[i]));
                self.lexicon.contains(&word)
            }) {
                valid.push(letters.clone());
            }
            // odometer, last slot turns fastest
            let mut i = letters.len();
            loop {
                if i == 0 {
                    break 'combos;
                }
                i -= 1;
                if letters[i] < alphabet::NUM_LETTERS {
                    letters[i] += 1;
                    break;
                }
                letters[i] = 1;
            }
        }
        if valid.is_empty() {
            log::debug!("no letters fit wildcards in {play}");
            return Err(error::Error::NoValidWildcardLetter(play.wildcard_positions()));
        }
        let chosen = &valid[rng.pick(valid.len())];
        for (&slot, &letter) in slots.iter().zip(chosen.iter()) {
            play.tiles_mut()[slot].tile = alphabet::BLANK | letter;
        }
        log::debug!("resolved wildcards among {} options: {play}", valid.len());
        Ok(())
    }

    // Geometry, board rule, then dictionary. Does not resolve wildcards.
    pub fn validate(&self, play: &placement::Placement) -> Result<(), error::Error> {
        self.verify_geometry(play)?;
        self.verify_board_rule(play)?;
        self.validate_dictionary(play)
    }

    pub fn score(&self, play: &placement::Placement, force_bonus: bool) -> i64 {
        play_scorer::PlayScorer::new().compute_score(
            self.game_config,
            &self.board_tiles,
            play,
            force_bonus,
        )
    }

    // Blank flags are kept on the board.
    pub fn commit(&mut self, play: &placement::Placement) {
        let dim = self.dim();
        for placed in play.tiles() {
            if dim.contains(placed.row, placed.col) {
                self.board_tiles[dim.at_row_col(placed.row, placed.col)] = placed.tile;
            }
        }
    }

    // Validates, resolves wildcards in place, scores and commits. The board
    // is untouched on any error.
    pub fn new_move(
        &mut self,
        play: &mut placement::Placement,
        rng: &mut dyn RandomPick,
    ) -> Result<i64, error::Error> {
        self.verify_geometry(play)?;
        self.verify_board_rule(play)?;
        if play.has_wildcards() {
            self.resolve_wildcards(play, rng)?;
        }
        self.validate_dictionary(play)?;
        let score = self.score(play, false);
        self.commit(play);
        log::debug!("played {play} for {score}");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    struct FirstPick;

    impl RandomPick for FirstPick {
        fn pick(&mut self, _n: usize) -> usize {
            0
        }
    }

    fn play(s: &str) -> placement::Placement {
        s.parse().unwrap()
    }

    fn words(v: &[&str]) -> lexicon::Lexicon {
        lexicon::Lexicon::from_words(v).unwrap()
    }

    #[test]
    fn geometry_rejections() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["cat"]);
        let mut board = BoardState::new(&game_config, &lexicon);
        board.commit(&play("C@7,7 A@7,8 T@7,9"));
        assert_eq!(
            board.verify_geometry(&placement::Placement::default()),
            Err(error::Error::EmptyPlacement)
        );
        assert_eq!(
            board.verify_geometry(&play("A@7,15")),
            Err(error::Error::OutOfBounds { row: 7, col: 15 })
        );
        assert_eq!(
            board.verify_geometry(&play("A@-1,3")),
            Err(error::Error::OutOfBounds { row: -1, col: 3 })
        );
        assert_eq!(
            board.verify_geometry(&play("S@7,8")),
            Err(error::Error::Overlap { row: 7, col: 8 })
        );
        assert_eq!(
            board.verify_geometry(&play("S@3,3 T@3,3")),
            Err(error::Error::Overlap { row: 3, col: 3 })
        );
        assert_eq!(
            board.verify_geometry(&play("A@1,1 B@2,2")),
            Err(error::Error::NonCollinear)
        );
        assert_eq!(
            board.verify_geometry(&play("A@1,1 B@1,3")),
            Err(error::Error::Discontinuous)
        );
        // the gap at 7,7..9 is filled by CAT
        assert_eq!(
            board.verify_geometry(&play("S@7,6 S@7,10")),
            Ok(matrix::Axis::Across)
        );
        assert_eq!(
            board.verify_geometry(&play("A@6,8 T@8,8 S@5,8")),
            Ok(matrix::Axis::Down)
        );
    }

    #[test]
    fn board_rule() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["cat"]);
        let mut board = BoardState::new(&game_config, &lexicon);
        assert_eq!(
            board.verify_board_rule(&play("C@8,7 A@8,8 T@8,9")),
            Err(error::Error::FirstMoveMustCoverCenter)
        );
        assert_eq!(board.verify_board_rule(&play("C@7,6 A@7,7 T@7,8")), Ok(()));
        board.commit(&play("C@7,6 A@7,7 T@7,8"));
        assert_eq!(
            board.verify_board_rule(&play("A@0,0 T@0,1")),
            Err(error::Error::Disconnected)
        );
        assert_eq!(board.verify_board_rule(&play("S@7,9")), Ok(()));
        assert_eq!(board.verify_board_rule(&play("A@8,6")), Ok(()));
    }

    #[test]
    fn affected_words_are_distinct_and_long() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["cat"]);
        let mut board = BoardState::new(&game_config, &lexicon);
        board.commit(&play("Q@8,3 U@8,4"));
        let found = board.affected_words(&play("I@9,3 N@9,4"));
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec!["IN".to_string(), "QI".into(), "UN".into()]
        );
        // a lone tile with one neighbor only forms one word
        let found = board.affected_words(&play("S@8,5"));
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["QUS".to_string()]);
        let found = board.affected_words(&play("A@7,3"));
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["AQ".to_string()]);
        assert!(board.affected_words(&play("A@0,0")).is_empty());
    }

    #[test]
    fn dictionary_reports_all_invalid_words() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["in", "qi"]);
        let mut board = BoardState::new(&game_config, &lexicon);
        board.commit(&play("Q@8,3 U@8,4"));
        assert_eq!(
            board.validate_dictionary(&play("I@9,3 N@9,4")),
            Err(error::Error::InvalidWords(vec!["UN".into()]))
        );
        assert_eq!(
            board.validate_dictionary(&play("X@9,3 Z@9,4")),
            Err(error::Error::InvalidWords(vec![
                "QX".into(),
                "UZ".into(),
                "XZ".into()
            ]))
        );
        assert_eq!(board.validate_dictionary(&play("I@9,3")), Ok(()));
    }

    #[test]
    fn single_wildcard_option() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["cat", "at"]);
        let board = BoardState::new(&game_config, &lexicon);
        let mut p = play("C@7,7 -@7,8 T@7,9");
        board
            .resolve_wildcards(&mut p, &mut rand_chacha::ChaCha20Rng::seed_from_u64(1))
            .unwrap();
        assert_eq!(p.to_string(), "C@7,7 a@7,8 T@7,9");
        assert_eq!(board.validate(&p), Ok(()));
    }

    #[test]
    fn wildcards_pick_among_valid_letters() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["cat", "bat", "rat", "mat", "hat", "at"]);
        let board = BoardState::new(&game_config, &lexicon);
        for seed in 0..10 {
            let mut p = play("-@7,7 A@7,8 T@7,9");
            let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
            board.resolve_wildcards(&mut p, &mut rng).unwrap();
            let c = alphabet::tile_to_char(p.tiles()[0].tile);
            assert!("bchmr".contains(c), "{c}");
            assert_eq!(board.validate(&p), Ok(()));
        }
        let mut p = play("-@7,7 A@7,8 T@7,9");
        board.resolve_wildcards(&mut p, &mut FirstPick).unwrap();
        assert_eq!(p.to_string(), "b@7,7 A@7,8 T@7,9");
    }

    #[test]
    fn two_wildcards_and_cross_words() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["cab", "ab"]);
        let board = BoardState::new(&game_config, &lexicon);
        let mut p = play("-@7,7 A@7,8 -@7,9");
        board.resolve_wildcards(&mut p, &mut FirstPick).unwrap();
        assert_eq!(p.to_string(), "c@7,7 A@7,8 b@7,9");

        let lexicon = words(&["cat", "at", "ca"]);
        let mut board = BoardState::new(&game_config, &lexicon);
        board.commit(&play("C@6,8"));
        let mut p = play("C@7,7 -@7,8 T@7,9");
        board.resolve_wildcards(&mut p, &mut FirstPick).unwrap();
        assert_eq!(p.tiles()[1].tile, alphabet::BLANK | 1);
    }

    #[test]
    fn no_valid_wildcard_letter() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["xyz"]);
        let board = BoardState::new(&game_config, &lexicon);
        let mut p = play("A@7,7 -@7,8");
        assert_eq!(
            board.resolve_wildcards(&mut p, &mut FirstPick),
            Err(error::Error::NoValidWildcardLetter(vec![(7, 8)]))
        );
        assert_eq!(p.to_string(), "A@7,7 -@7,8");

        let mut p = play("A@14,20 -@14,21");
        assert_eq!(
            board.resolve_wildcards(&mut p, &mut FirstPick),
            Err(error::Error::OutOfBounds { row: 14, col: 20 })
        );
        assert_eq!(p.to_string(), "A@14,20 -@14,21");
    }

    #[test]
    fn new_move_commits_only_on_success() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["word", "words", "cat", "cats"]);
        let mut board = BoardState::new(&game_config, &lexicon);
        let mut p = play("C@8,7 A@8,8 T@8,9");
        assert_eq!(
            board.new_move(&mut p, &mut FirstPick),
            Err(error::Error::FirstMoveMustCoverCenter)
        );
        assert!(board.is_empty());

        let mut p = play("W@7,6 O@7,7 R@7,8 D@7,9");
        assert_eq!(board.new_move(&mut p, &mut FirstPick), Ok(16));
        assert_eq!(board.num_tiles(), 4);

        let mut p = play("X@7,10");
        assert_eq!(
            board.new_move(&mut p, &mut FirstPick),
            Err(error::Error::InvalidWords(vec!["WORDX".into()]))
        );
        assert_eq!(board.num_tiles(), 4);

        let mut p = play("-@7,10");
        assert_eq!(board.new_move(&mut p, &mut FirstPick), Ok(8));
        assert_eq!(board.tile_at(7, 10), alphabet::BLANK | 19);
        assert_eq!(board.num_tiles(), 5);
    }

    #[test]
    fn new_move_scores_like_a_fresh_score() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["word", "words"]);
        let mut board = BoardState::new(&game_config, &lexicon);
        let mut p = play("W@7,6 O@7,7 R@7,8 D@7,9");
        board.new_move(&mut p, &mut FirstPick).unwrap();
        assert_eq!(board.score(&play("S@7,10"), false), 9);
        let mut p = play("S@7,10");
        assert_eq!(board.new_move(&mut p, &mut FirstPick), Ok(9));
    }

    #[test]
    fn anchors_and_seeding() {
        let game_config = game_config::make_english_game_config();
        let lexicon = words(&["cat"]);
        let mut board = BoardState::new(&game_config, &lexicon);
        assert_eq!(board.anchors(), vec![(7, 7)]);
        let mut rows = vec!["...............".to_string(); 15];
        rows[7] = "......CaT......".into();
        board.load_rows(&rows).unwrap();
        assert_eq!(board.tile_at(7, 7), alphabet::BLANK | 1);
        assert_eq!(board.num_tiles(), 3);
        assert_eq!(
            board.anchors(),
            vec![
                (6, 6),
                (6, 7),
                (6, 8),
                (7, 5),
                (7, 9),
                (8, 6),
                (8, 7),
                (8, 8)
            ]
        );
        rows[0] = "..-............".into();
        assert_eq!(board.load_rows(&rows), Err(error::Error::InvalidTile('-')));
        assert!(matches!(
            board.load_rows(&rows[..3]),
            Err(error::Error::InvalidLayout(_))
        ));
        let copied =
            BoardState::with_board_tiles(&game_config, &lexicon, board.board_tiles()).unwrap();
        assert_eq!(copied.num_tiles(), 3);
        assert!(matches!(
            BoardState::with_board_tiles(&game_config, &lexicon, &[0; 3]),
            Err(error::Error::InvalidLayout(_))
        ));
        board.reset();
        assert!(board.is_empty());
    }
}
