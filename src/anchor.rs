// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, matrix, pattern};

// What lies on one side of an anchor along a lane: the tile blocks a rack
// can reach (nearest first, each spelled in board order), the empty cells
// before each block, and how many more cells a word may stretch past them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SideScan {
    pub blocks: Vec<Vec<u8>>,
    pub gaps: Vec<u8>,
    pub tail: u8,
}

impl SideScan {
    // Cells a word covers on this side at the very least.
    pub fn min_len(&self) -> usize {
        self.blocks.iter().map(|b| b.len()).sum::<usize>()
            + self.gaps.iter().map(|&g| g as usize).sum::<usize>()
    }

    fn cost_of_first(&self, n: usize) -> i32 {
        self.gaps[..n].iter().map(|&g| g as i32).sum()
    }

    fn first(&self, n: usize, tail: u8) -> SideScan {
        SideScan {
            blocks: self.blocks[..n].to_vec(),
            gaps: self.gaps[..n].to_vec(),
            tail,
        }
    }
}

// A search pattern through one anchor, with the board letters it fixes and
// the side scans it was built from (tails already capped).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorPattern {
    pub pattern: pattern::Pattern,
    pub fixed_letters: Vec<u8>,
    pub left: SideScan,
    pub right: SideScan,
}

// Walks from the anchor in direction step (-1 or 1). The anchor itself
// costs one tile, each gap costs its length. A block is reachable while the
// cost stays within the rack. The scan stops at the edge or at the first
// unreachable block, and the gap walked last becomes the tail.
pub fn scan_side(
    board_tiles: &[u8],
    dim: matrix::Dim,
    axis: matrix::Axis,
    row: i8,
    col: i8,
    step: i8,
    rack_len: usize,
) -> SideScan {
    let (lane, idx) = axis.lane_idx(row, col);
    let strider = dim.lane(axis, lane);
    let in_bounds = |j: i8| (0..strider.len()).contains(&j);
    let cell = |j: i8| board_tiles[strider.at(j)];
    let rack = rack_len as i32;
    let mut ret = SideScan::default();
    let mut cost = 1i32;
    let mut j = idx + step;
    loop {
        let mut gap = 0i32;
        while in_bounds(j) && cell(j) == 0 {
            gap += 1;
            j += step;
        }
        if !in_bounds(j) || cost + gap > rack {
            ret.tail = gap.min(rack - cost).max(0) as u8;
            return ret;
        }
        cost += gap;
        ret.gaps.push(gap as u8);
        let mut block = Vec::new();
        while in_bounds(j) && cell(j) != 0 {
            block.push(alphabet::letter_of(cell(j)));
            j += step;
        }
        if step < 0 {
            block.reverse();
        }
        ret.blocks.push(block);
    }
}

// One pattern for each way of taking the nearest blocks on each side that
// the rack can still reach. Tails are capped to what the rack has left
// after the gaps. Duplicate patterns are dropped, first one wins.
pub fn build_patterns(
    board_tiles: &[u8],
    dim: matrix::Dim,
    row: i8,
    col: i8,
    axis: matrix::Axis,
    rack_len: usize,
) -> Vec<AnchorPattern> {
    let left = scan_side(board_tiles, dim, axis, row, col, -1, rack_len);
    let right = scan_side(board_tiles, dim, axis, row, col, 1, rack_len);
    let rack = rack_len as i32;
    let mut ret = Vec::<AnchorPattern>::new();
    for num_left in 0..=left.blocks.len() {
        for num_right in 0..=right.blocks.len() {
            let cost = 1 + left.cost_of_first(num_left) + right.cost_of_first(num_right);
            if cost > rack {
                continue;
            }
            let remaining = rack - cost;
            let cap = |tail: u8| {
                if remaining > 0 {
                    (tail as i32).min(remaining) as u8
                } else {
                    0
                }
            };
            let left_sel = left.first(num_left, cap(left.tail));
            let right_sel = right.first(num_right, cap(right.tail));

            let mut pattern = pattern::Pattern::default();
            pattern.push_range(0, left_sel.tail);
            for (block, &gap) in left_sel.blocks.iter().zip(left_sel.gaps.iter()).rev() {
                pattern.push_letters(block);
                pattern.push_wild(gap);
            }
            pattern.push_wild(1);
            for (block, &gap) in right_sel.blocks.iter().zip(right_sel.gaps.iter()) {
                pattern.push_wild(gap);
                pattern.push_letters(block);
            }
            pattern.push_range(0, right_sel.tail);
            let pattern = pattern.simplified();

            if ret.iter().any(|x| x.pattern == pattern) {
                continue;
            }
            let fixed_letters = left_sel
                .blocks
                .iter()
                .chain(right_sel.blocks.iter())
                .flatten()
                .copied()
                .collect();
            ret.push(AnchorPattern {
                pattern,
                fixed_letters,
                left: left_sel,
                right: right_sel,
            });
        }
    }
    ret
}
