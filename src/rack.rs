// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

// Letters in hand, as a tally. Slot 0 counts blanks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rack {
    tally: [u8; alphabet::TALLY_SIZE],
}

impl Rack {
    #[inline(always)]
    fn slot_of(tile: u8) -> usize {
        if alphabet::is_blank(tile) {
            0
        } else {
            tile as usize
        }
    }

    // Saturates at 255 of one letter.
    #[inline(always)]
    fn add(&mut self, tile: u8) {
        let slot = Self::slot_of(tile);
        self.tally[slot] = self.tally[slot].saturating_add(1);
    }

    #[inline(always)]
    pub fn tally(&self) -> &[u8; alphabet::TALLY_SIZE] {
        &self.tally
    }

    #[inline(always)]
    pub fn num_blanks(&self) -> u8 {
        self.tally[0]
    }

    pub fn len(&self) -> usize {
        self.tally.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The rack together with some extra letters, such as those already on
    // the board that a word will run through.
    pub fn with_letters(&self, letters: &[u8]) -> Self {
        let mut ret = self.clone();
        for &letter in letters {
            ret.add(alphabet::letter_of(letter));
        }
        ret
    }

    // Letters missing from the rack to spell these, before blanks.
    pub fn shortfall(&self, letters: &[u8]) -> usize {
        let mut need = [0usize; alphabet::TALLY_SIZE];
        for &letter in letters {
            need[alphabet::letter_of(letter) as usize] += 1;
        }
        need.iter()
            .zip(self.tally.iter())
            .skip(1)
            .map(|(&n, &have)| n.saturating_sub(have as usize))
            .sum()
    }
}

impl std::str::FromStr for Rack {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ret = Self::default();
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let tile = alphabet::tile_from_char(c.to_ascii_uppercase())
                .ok_or(error::Error::InvalidTile(c))?;
            let slot = Self::slot_of(tile);
            ret.tally[slot] = ret.tally[slot]
                .checked_add(1)
                .ok_or_else(|| error::Error::Unparseable(format!("too many {c} in rack")))?;
        }
        Ok(ret)
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (tile, &n) in self.tally.iter().enumerate().skip(1) {
            for _ in 0..n {
                write!(f, "{}", alphabet::tile_to_char(tile as u8))?;
            }
        }
        for _ in 0..self.tally[0] {
            write!(f, "-")?;
        }
        Ok(())
    }
}
