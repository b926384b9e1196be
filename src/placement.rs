// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, matrix};

// One new tile. Ordering is (row, col, tile), which is the canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacedTile {
    pub row: i8,
    pub col: i8,
    pub tile: u8,
}

impl std::fmt::Display for PlacedTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{},{}",
            alphabet::tile_to_char(self.tile),
            self.row,
            self.col
        )
    }
}

// Only the tiles being added by one move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    tiles: Vec<PlacedTile>,
}

impl Placement {
    pub fn new(tiles: Vec<PlacedTile>) -> Self {
        Self { tiles }
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[PlacedTile] {
        &self.tiles
    }

    #[inline(always)]
    pub fn tiles_mut(&mut self) -> &mut [PlacedTile] {
        &mut self.tiles
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // Structurally equal placements have equal keys.
    pub fn key(&self) -> Vec<PlacedTile> {
        let mut key = self.tiles.clone();
        key.sort_unstable();
        key
    }

    // Single tiles count as across.
    pub fn axis(&self) -> Option<matrix::Axis> {
        let first = self.tiles.first()?;
        if self.tiles.iter().all(|t| t.row == first.row) {
            Some(matrix::Axis::Across)
        } else if self.tiles.iter().all(|t| t.col == first.col) {
            Some(matrix::Axis::Down)
        } else {
            None
        }
    }

    pub fn wildcard_positions(&self) -> Vec<(i8, i8)> {
        self.tiles
            .iter()
            .filter(|t| alphabet::is_unresolved(t.tile))
            .map(|t| (t.row, t.col))
            .collect()
    }

    pub fn has_wildcards(&self) -> bool {
        self.tiles.iter().any(|t| alphabet::is_unresolved(t.tile))
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

// Parses "C@7,7 a@7,8 -@7,9": upper-case is a normal tile, lower-case a
// resolved blank, '-' or '?' a blank to be resolved.
impl std::str::FromStr for Placement {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = Vec::new();
        for token in s.split_whitespace() {
            let unparseable = || error::Error::Unparseable(token.to_string());
            let (letter, pos) = token.split_once('@').ok_or_else(unparseable)?;
            let mut chars = letter.chars();
            let c = chars.next().ok_or_else(unparseable)?;
            if chars.next().is_some() {
                return Err(unparseable());
            }
            let tile = alphabet::tile_from_char(c).ok_or(error::Error::InvalidTile(c))?;
            let (row, col) = pos.split_once(',').ok_or_else(unparseable)?;
            let row = row.trim().parse::<i8>().map_err(|_| unparseable())?;
            let col = col.trim().parse::<i8>().map_err(|_| unparseable())?;
            tiles.push(PlacedTile { row, col, tile });
        }
        Ok(Self::new(tiles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints() {
        let placement = "C@7,7 a@7,8 -@7,9".parse::<Placement>().unwrap();
        assert_eq!(placement.len(), 3);
        assert_eq!(placement.tiles()[1].tile, 0x81);
        assert_eq!(placement.wildcard_positions(), vec![(7, 9)]);
        assert_eq!(placement.to_string(), "C@7,7 a@7,8 -@7,9");
        assert!("".parse::<Placement>().unwrap().is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            "C@7".parse::<Placement>(),
            Err(error::Error::Unparseable("C@7".into()))
        );
        assert_eq!(
            "CA@7,7".parse::<Placement>(),
            Err(error::Error::Unparseable("CA@7,7".into()))
        );
        assert_eq!(
            "1@7,7".parse::<Placement>(),
            Err(error::Error::InvalidTile('1'))
        );
    }

    #[test]
    fn axis_of_single_tile_is_across() {
        let single = "A@3,4".parse::<Placement>().unwrap();
        assert_eq!(single.axis(), Some(matrix::Axis::Across));
        let down = "A@3,4 B@4,4".parse::<Placement>().unwrap();
        assert_eq!(down.axis(), Some(matrix::Axis::Down));
        let bent = "A@3,4 B@4,5".parse::<Placement>().unwrap();
        assert_eq!(bent.axis(), None);
        assert_eq!(Placement::default().axis(), None);
    }

    #[test]
    fn key_ignores_order() {
        let a = "T@7,9 C@7,7 A@7,8".parse::<Placement>().unwrap();
        let b = "C@7,7 A@7,8 T@7,9".parse::<Placement>().unwrap();
        assert_ne!(a, b);
        assert_eq!(a.key(), b.key());
    }
}
