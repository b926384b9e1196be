// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

impl Premium {
    // Any bonus at all, letter or word.
    #[inline(always)]
    pub fn is_prized(&self) -> bool {
        self.word_multiplier > 1 || self.letter_multiplier > 1
    }
}

static TWS: Premium = Premium {
    word_multiplier: 3,
    letter_multiplier: 1,
};
static DWS: Premium = Premium {
    word_multiplier: 2,
    letter_multiplier: 1,
};
static TLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 3,
};
static DLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 2,
};
static FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

#[rustfmt::skip]
static TW_CELLS: &[(i8, i8)] = &[
    (0, 0), (0, 7), (0, 14), (7, 0), (7, 14), (14, 0), (14, 7), (14, 14),
];
#[rustfmt::skip]
static DW_CELLS: &[(i8, i8)] = &[
    (1, 1), (1, 13), (2, 2), (2, 12), (3, 3), (3, 11), (4, 4), (4, 10), (7, 7),
    (10, 4), (10, 10), (11, 3), (11, 11), (12, 2), (12, 12), (13, 1), (13, 13),
];
#[rustfmt::skip]
static TL_CELLS: &[(i8, i8)] = &[
    (1, 5), (1, 9), (5, 1), (5, 5), (5, 9), (5, 13),
    (9, 1), (9, 5), (9, 9), (9, 13), (13, 5), (13, 9),
];
#[rustfmt::skip]
static DL_CELLS: &[(i8, i8)] = &[
    (0, 3), (0, 11), (2, 6), (2, 8), (3, 0), (3, 7), (3, 14), (6, 2),
    (6, 6), (6, 8), (6, 12), (7, 3), (7, 11), (8, 2), (8, 6), (8, 8),
    (8, 12), (11, 0), (11, 7), (11, 14), (12, 6), (12, 8), (14, 3), (14, 11),
];

pub const BOARD_SIZE: i8 = 15;

pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }

    // Builds a 15x15 layout from separate word and letter multiplier grids.
    // The center cell is the star.
    pub fn from_grids(
        word_multipliers: &[Vec<i8>],
        letter_multipliers: &[Vec<i8>],
    ) -> Result<Self, error::Error> {
        let dim = matrix::Dim {
            rows: BOARD_SIZE,
            cols: BOARD_SIZE,
        };
        for (name, grid) in [("word", word_multipliers), ("letter", letter_multipliers)] {
            if grid.len() != dim.rows as usize
                || grid.iter().any(|row| row.len() != dim.cols as usize)
            {
                return Err(error::Error::InvalidLayout(format!(
                    "{name} multiplier grid must be {}x{}",
                    dim.rows, dim.cols
                )));
            }
            if let Some(v) = grid.iter().flatten().find(|&&v| v < 1) {
                return Err(error::Error::InvalidLayout(format!(
                    "{name} multiplier {v} is below 1"
                )));
            }
        }
        let premiums = word_multipliers
            .iter()
            .flatten()
            .zip(letter_multipliers.iter().flatten())
            .map(|(&word_multiplier, &letter_multiplier)| Premium {
                word_multiplier,
                letter_multiplier,
            })
            .collect();
        Ok(Self {
            premiums,
            dim,
            star_row: dim.rows / 2,
            star_col: dim.cols / 2,
        })
    }
}

pub fn make_standard_board_layout() -> BoardLayout {
    let dim = matrix::Dim {
        rows: BOARD_SIZE,
        cols: BOARD_SIZE,
    };
    let mut premiums = vec![FVS; dim.num_cells()].into_boxed_slice();
    for (cells, premium) in [
        (TW_CELLS, TWS),
        (DW_CELLS, DWS),
        (TL_CELLS, TLS),
        (DL_CELLS, DLS),
    ] {
        for &(row, col) in cells {
            premiums[dim.at_row_col(row, col)] = premium;
        }
    }
    BoardLayout {
        premiums,
        dim,
        star_row: 7,
        star_col: 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_is_symmetric() {
        let layout = make_standard_board_layout();
        for r in 0..15 {
            for c in 0..15 {
                let p = layout.premium_at(r, c);
                assert_eq!(p, layout.premium_at(c, r));
                assert_eq!(p, layout.premium_at(14 - r, c));
                assert_eq!(p, layout.premium_at(r, 14 - c));
            }
        }
        assert_eq!(layout.premium_at(7, 7), DWS);
        assert_eq!(layout.premium_at(0, 0), TWS);
        assert_eq!(layout.premium_at(9, 5), TLS);
        assert_eq!(layout.premium_at(7, 3), DLS);
        assert_eq!(layout.premium_at(7, 4), FVS);
        let prized = layout.premiums().iter().filter(|p| p.is_prized()).count();
        assert_eq!(prized, 8 + 17 + 12 + 24);
    }

    #[test]
    fn grids_must_be_square_and_positive() {
        let ones = vec![vec![1i8; 15]; 15];
        let layout = BoardLayout::from_grids(&ones, &ones).unwrap();
        assert!(layout.premiums().iter().all(|p| !p.is_prized()));
        assert_eq!((layout.star_row(), layout.star_col()), (7, 7));

        let short = vec![vec![1i8; 15]; 14];
        assert!(matches!(
            BoardLayout::from_grids(&short, &ones),
            Err(error::Error::InvalidLayout(_))
        ));
        let mut zero = ones.clone();
        zero[3][4] = 0;
        assert!(matches!(
            BoardLayout::from_grids(&ones, &zero),
            Err(error::Error::InvalidLayout(_))
        ));
    }
}
