// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    // H: along a row.
    Across,
    // V: along a column.
    Down,
}

impl Axis {
    #[inline(always)]
    pub fn flip(self) -> Axis {
        match self {
            Axis::Across => Axis::Down,
            Axis::Down => Axis::Across,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::Across => "H",
            Axis::Down => "V",
        }
    }

    // (lane, index within lane) of a cell.
    #[inline(always)]
    pub fn lane_idx(self, row: i8, col: i8) -> (i8, i8) {
        match self {
            Axis::Across => (row, col),
            Axis::Down => (col, row),
        }
    }

    #[inline(always)]
    pub fn row_col(self, lane: i8, idx: i8) -> (i8, i8) {
        match self {
            Axis::Across => (lane, idx),
            Axis::Down => (idx, lane),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }

    // Maximal run of cells satisfying is_filled that includes idx.
    // Returns (start, end) inclusive. idx itself is assumed filled.
    pub fn run_around(&self, idx: i8, is_filled: impl Fn(usize) -> bool) -> (i8, i8) {
        let mut start = idx;
        while start > 0 && is_filled(self.at(start - 1)) {
            start -= 1;
        }
        let mut end = idx;
        while end + 1 < self.len && is_filled(self.at(end + 1)) {
            end += 1;
        }
        (start, end)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, axis: Axis, lane: i8) -> Strider {
        match axis {
            Axis::Across => self.across(lane),
            Axis::Down => self.down(lane),
        }
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        (0..self.rows).contains(&row) && (0..self.cols).contains(&col)
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    // In-bounds orthogonal neighbors of a cell.
    pub fn neighbors(self, row: i8, col: i8) -> impl Iterator<Item = (i8, i8)> {
        let dim = self;
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(move |(dr, dc)| (row + dr, col + dc))
            .filter(move |&(r, c)| dim.contains(r, c))
    }
}
