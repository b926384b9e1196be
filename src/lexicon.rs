// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, fash};

// Read-only word list. Words are kept as letter tiles (1..=26), grouped by
// length and sorted within each length.
#[derive(Default)]
pub struct Lexicon {
    words: fash::TileHashSet<Box<[u8]>>,
    by_len: Vec<Vec<Box<[u8]>>>,
}

impl Lexicon {
    pub fn from_words<I, S>(words: I) -> Result<Self, error::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = fash::TileHashSet::<Box<[u8]>>::default();
        for (i, word) in words.into_iter().enumerate() {
            let text = word.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            match alphabet::word_from_str(text) {
                Some(tiles) => {
                    set.insert(tiles.into_boxed_slice());
                }
                None => {
                    return Err(error::Error::InvalidLexicon {
                        line: i + 1,
                        text: text.to_string(),
                    });
                }
            }
        }
        let max_len = set.iter().map(|w| w.len()).max().unwrap_or(0);
        let mut by_len = vec![Vec::new(); max_len + 1];
        for word in set.iter() {
            by_len[word.len()].push(word.clone());
        }
        for words in by_len.iter_mut() {
            words.sort_unstable();
        }
        Ok(Self { words: set, by_len })
    }

    // One word per line.
    pub fn from_text(text: &str) -> Result<Self, error::Error> {
        Self::from_words(text.lines())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline(always)]
    pub fn max_len(&self) -> usize {
        self.by_len.len().saturating_sub(1)
    }

    // Blank flags on the tiles are ignored.
    pub fn contains(&self, tiles: &[u8]) -> bool {
        if tiles.iter().any(|&t| alphabet::is_blank(t)) {
            let letters = tiles
                .iter()
                .map(|&t| alphabet::letter_of(t))
                .collect::<Vec<_>>();
            self.words.contains(&letters[..])
        } else {
            self.words.contains(tiles)
        }
    }

    // Sorted words of exactly this length.
    pub fn words_of_len(&self, len: usize) -> &[Box<[u8]>] {
        match self.by_len.get(len) {
            Some(words) => words,
            None => &[],
        }
    }
}
