// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, anchor, fash, matrix, placement, rack};

// Where the anchor falls in a word found with this pattern: the first
// offset that leaves a feasible length on both sides.
pub fn anchor_index(
    word_len: usize,
    left: &anchor::SideScan,
    right: &anchor::SideScan,
) -> Option<usize> {
    let min_left = left.min_len();
    let min_right = right.min_len();
    let max_right = min_right + right.tail as usize;
    (min_left..=min_left + left.tail as usize).find(|&idx| {
        idx < word_len && (min_right..=max_right).contains(&(word_len - idx - 1))
    })
}

// Lays a word found through an anchor onto the board. Empty cells become new
// tiles drawn from the rack (a blank when the letter runs out), occupied
// cells must already hold the same letter. None when it does not fit.
#[allow(clippy::too_many_arguments)]
pub fn materialize(
    board_tiles: &[u8],
    dim: matrix::Dim,
    row: i8,
    col: i8,
    axis: matrix::Axis,
    word: &[u8],
    found_with: &anchor::AnchorPattern,
    rack: &rack::Rack,
) -> Option<placement::Placement> {
    let idx = anchor_index(word.len(), &found_with.left, &found_with.right)?;
    let (lane, anchor_pos) = axis.lane_idx(row, col);
    let strider = dim.lane(axis, lane);
    let start = anchor_pos as isize - idx as isize;
    let mut tally = *rack.tally();
    let mut tiles = Vec::new();
    for (i, &letter) in word.iter().enumerate() {
        let pos = start + i as isize;
        if pos < 0 || pos >= strider.len() as isize {
            return None;
        }
        let pos = pos as i8;
        let on_board = board_tiles[strider.at(pos)];
        if on_board != 0 {
            if alphabet::letter_of(on_board) != letter {
                return None;
            }
            continue;
        }
        let tile = if tally[letter as usize] > 0 {
            tally[letter as usize] -= 1;
            letter
        } else if tally[0] > 0 {
            tally[0] -= 1;
            alphabet::BLANK | letter
        } else {
            return None;
        };
        let (row, col) = axis.row_col(lane, pos);
        tiles.push(placement::PlacedTile { row, col, tile });
    }
    if tiles.is_empty() {
        None
    } else {
        Some(placement::Placement::new(tiles))
    }
}

// Every word that fits, without structural duplicates.
#[allow(clippy::too_many_arguments)]
pub fn materialize_words<'w>(
    board_tiles: &[u8],
    dim: matrix::Dim,
    row: i8,
    col: i8,
    axis: matrix::Axis,
    words: impl IntoIterator<Item = &'w [u8]>,
    found_with: &anchor::AnchorPattern,
    rack: &rack::Rack,
) -> Vec<placement::Placement> {
    let mut seen = fash::TileHashSet::<Vec<placement::PlacedTile>>::default();
    words
        .into_iter()
        .filter_map(|word| materialize(board_tiles, dim, row, col, axis, word, found_with, rack))
        .filter(|p| seen.insert(p.key()))
        .collect()
}
