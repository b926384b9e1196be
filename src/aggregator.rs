// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_state, rack, strategy};
use std::collections::BTreeMap;

// Which strategies apply to this board. Only prize cells make sense before
// the first move.
pub fn strategies_for(board_state: &board_state::BoardState<'_>) -> &'static [strategy::Strategy] {
    if board_state.is_empty() {
        &[strategy::Strategy::PrizeCells]
    } else {
        &strategy::Strategy::ALL
    }
}

// Runs every applicable strategy against the same board snapshot. A strategy
// that finds nothing maps to an empty list.
pub fn recommend_all(
    board_state: &board_state::BoardState<'_>,
    rack: &rack::Rack,
) -> BTreeMap<strategy::Strategy, Vec<strategy::ScoredPlacement>> {
    strategies_for(board_state)
        .iter()
        .map(|&s| (s, strategy::recommend(s, board_state, rack)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game_config, lexicon};

    #[test]
    fn empty_board_only_seeks_prizes() {
        let game_config = game_config::make_english_game_config();
        let lexicon = lexicon::Lexicon::from_words(["cat", "act", "at"]).unwrap();
        let mut board_state = board_state::BoardState::new(&game_config, &lexicon);
        let rack = "CAT".parse::<rack::Rack>().unwrap();
        let all = recommend_all(&board_state, &rack);
        assert_eq!(
            all.keys().copied().collect::<Vec<_>>(),
            vec![strategy::Strategy::PrizeCells]
        );
        assert_eq!(all[&strategy::Strategy::PrizeCells].len(), 4);

        board_state.commit(&"C@7,6 A@7,7 T@7,8".parse().unwrap());
        let before = board_state.board_tiles().to_vec();
        let all = recommend_all(&board_state, &"ZZ".parse().unwrap());
        assert_eq!(
            all.keys().copied().collect::<Vec<_>>(),
            strategy::Strategy::ALL.to_vec()
        );
        assert!(all.values().all(|found| found.is_empty()));
        assert_eq!(board_state.board_tiles(), &before[..]);
    }
}
