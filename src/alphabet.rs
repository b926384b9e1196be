// Copyright (C) 2020-2026 Andy Kurnia.

// Tiles are bytes. 0 is an empty cell, 1..=26 are A..Z, and the high bit
// marks a blank. A blank whose letter is not yet chosen is BLANK itself.

pub const BLANK: u8 = 0x80;
pub const NUM_LETTERS: u8 = 26;

// Number of tally slots: one for blanks plus one per letter.
pub const TALLY_SIZE: usize = NUM_LETTERS as usize + 1;

#[inline(always)]
pub fn is_blank(tile: u8) -> bool {
    tile & 0x80 != 0
}

#[inline(always)]
pub fn is_unresolved(tile: u8) -> bool {
    tile == BLANK
}

// The letter a tile stands for, regardless of blank-ness. 0 if none yet.
#[inline(always)]
pub fn letter_of(tile: u8) -> u8 {
    tile & 0x7f
}

pub fn tile_from_char(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A' + 1),
        'a'..='z' => Some((c as u8 - b'a' + 1) | 0x80),
        '-' | '?' => Some(BLANK),
        _ => None,
    }
}

// A letter for a word lookup; case is irrelevant there.
pub fn letter_from_char(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A' + 1),
        'a'..='z' => Some(c as u8 - b'a' + 1),
        _ => None,
    }
}

pub fn tile_to_char(tile: u8) -> char {
    let c = letter_of(tile);
    if c == 0 {
        if tile == 0 { '.' } else { '-' }
    } else if is_blank(tile) {
        (b'a' + c - 1) as char
    } else {
        (b'A' + c - 1) as char
    }
}

// Spells out letters ignoring blank-ness. Unresolved blanks stay '-'.
pub fn fmt_word(tiles: &[u8]) -> String {
    tiles
        .iter()
        .map(|&t| tile_to_char(if is_unresolved(t) { t } else { letter_of(t) }))
        .collect()
}

pub fn fmt_tiles(tiles: &[u8]) -> String {
    tiles.iter().map(|&t| tile_to_char(t)).collect()
}

pub fn word_from_str(s: &str) -> Option<Vec<u8>> {
    s.chars().map(letter_from_char).collect()
}

pub struct Alphabet {
    // indexed by letter, slot 0 is the blank.
    scores: [i8; TALLY_SIZE],
}

impl Alphabet {
    pub fn new(scores: [i8; TALLY_SIZE]) -> Self {
        Self { scores }
    }

    #[inline(always)]
    pub fn len(&self) -> u8 {
        TALLY_SIZE as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        false
    }

    // Blanks score what slot 0 says, whatever letter they represent.
    #[inline(always)]
    pub fn score(&self, tile: u8) -> i8 {
        if is_blank(tile) {
            self.scores[0]
        } else {
            self.scores[tile as usize]
        }
    }
}

static ENGLISH_SCORES: [i8; TALLY_SIZE] = [
    0, // ?
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A..M
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N..Z
];

pub fn make_english_alphabet() -> Alphabet {
    Alphabet::new(ENGLISH_SCORES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_round_trip_through_tiles() {
        assert_eq!(tile_from_char('A'), Some(1));
        assert_eq!(tile_from_char('z'), Some(0x80 | 26));
        assert_eq!(tile_from_char('-'), Some(BLANK));
        assert_eq!(tile_from_char('?'), Some(BLANK));
        assert_eq!(tile_from_char('1'), None);
        assert_eq!(tile_to_char(3), 'C');
        assert_eq!(tile_to_char(0x80 | 3), 'c');
        assert_eq!(tile_to_char(BLANK), '-');
        assert_eq!(tile_to_char(0), '.');
    }

    #[test]
    fn words_ignore_case() {
        assert_eq!(word_from_str("Cat"), Some(vec![3, 1, 20]));
        assert_eq!(word_from_str("c-t"), None);
        assert_eq!(fmt_word(&[3, 0x81, 20]), "CAT");
        assert_eq!(fmt_tiles(&[3, 0x81, 20]), "CaT");
    }

    #[test]
    fn blanks_score_zero() {
        let alphabet = make_english_alphabet();
        assert_eq!(alphabet.score(17), 10);
        assert_eq!(alphabet.score(0x80 | 17), 0);
        assert_eq!(alphabet.score(BLANK), 0);
        assert_eq!(alphabet.score(5), 1);
        assert_eq!(alphabet.score(26), 10);
    }
}
