// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, lexicon, pattern, rack};

// Finds lexicon words fitting a fixed-length pattern with the letters at
// hand. The rack passed in is everything usable, including letters already
// on the board that the pattern fixes. Those are taken out first, and what
// remains (blanks covering shortfalls) must fill the wildcard cells.
#[derive(Default)]
pub struct PatternMatcher {
    remaining: [u8; alphabet::TALLY_SIZE],
    need: [usize; alphabet::TALLY_SIZE],
}

// The fixed letters must come out of the deck, blanks covering shortfalls.
pub fn check_feasible(fixed_letters: &[u8], deck: &rack::Rack) -> Result<(), error::Error> {
    let missing = deck.shortfall(fixed_letters);
    let blanks = deck.num_blanks() as usize;
    if missing > blanks {
        Err(error::Error::InsufficientRackForPattern { missing, blanks })
    } else {
        Ok(())
    }
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    // cells: letters, or 0 for a wildcard.
    pub fn match_cells<'l>(
        &mut self,
        cells: &[u8],
        deck: &rack::Rack,
        lexicon: &'l lexicon::Lexicon,
    ) -> Result<Vec<&'l [u8]>, error::Error> {
        if cells.is_empty() {
            return Err(error::Error::PatternSyntaxError(
                "pattern cannot be empty".into(),
            ));
        }
        let fixed = cells.iter().copied().filter(|&c| c != 0).collect::<Vec<_>>();
        check_feasible(&fixed, deck)?;

        self.remaining.copy_from_slice(deck.tally());
        for &letter in fixed.iter() {
            if self.remaining[letter as usize] > 0 {
                self.remaining[letter as usize] -= 1;
            } else {
                self.remaining[0] -= 1;
            }
        }

        let mut ret = Vec::new();
        'words: for word in lexicon.words_of_len(cells.len()) {
            self.need.iter_mut().for_each(|m| *m = 0);
            for (&cell, &letter) in cells.iter().zip(word.iter()) {
                if cell == 0 {
                    self.need[letter as usize] += 1;
                } else if cell != letter {
                    continue 'words;
                }
            }
            let mut blanks = self.remaining[0] as usize;
            for (&need, &have) in self.need.iter().zip(self.remaining.iter()).skip(1) {
                if need > have as usize {
                    let short = need - have as usize;
                    if short > blanks {
                        continue 'words;
                    }
                    blanks -= short;
                }
            }
            ret.push(&word[..]);
        }
        Ok(ret)
    }

    // Text interface: a pattern of letters and '_' and a rack of letters
    // and '-'. Words come back sorted, in upper case.
    pub fn match_pattern(
        &mut self,
        pattern_text: &str,
        rack_text: &str,
        lexicon: &lexicon::Lexicon,
    ) -> Result<Vec<String>, error::Error> {
        let pattern = pattern_text.parse::<pattern::Pattern>()?;
        if pattern.has_ranges() {
            return Err(error::Error::PatternSyntaxError(
                "pattern can only contain letters and '_'".into(),
            ));
        }
        let deck = parse_deck(rack_text)?;
        let cells = pattern.expand().pop().unwrap_or_default();
        Ok(self
            .match_cells(&cells, &deck, lexicon)?
            .into_iter()
            .map(alphabet::fmt_word)
            .collect())
    }
}

pub(crate) fn parse_deck(rack_text: &str) -> Result<rack::Rack, error::Error> {
    if let Some(c) = rack_text.chars().find(|c| c.is_whitespace()) {
        return Err(error::Error::PatternSyntaxError(format!(
            "deck can only contain letters and '-' for blanks, not {c:?}"
        )));
    }
    rack_text.parse::<rack::Rack>().map_err(|e| match e {
        error::Error::InvalidTile(c) => error::Error::PatternSyntaxError(format!(
            "deck can only contain letters and '-' for blanks, not {c:?}"
        )),
        e => e,
    })
}
