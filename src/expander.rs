// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, lexicon, matcher, pattern, rack};

// Matches patterns with (n,m) ranges by trying every length the ranges
// allow and pooling the words found.
#[derive(Default)]
pub struct PatternExpander {
    matcher: matcher::PatternMatcher,
}

impl PatternExpander {
    pub fn new() -> Self {
        Self::default()
    }

    // Words come back sorted and distinct. Expansions with no cells at all
    // match nothing.
    pub fn expand_and_match<'l>(
        &mut self,
        pattern: &pattern::Pattern,
        deck: &rack::Rack,
        lexicon: &'l lexicon::Lexicon,
    ) -> Result<Vec<&'l [u8]>, error::Error> {
        matcher::check_feasible(&pattern.fixed_letters(), deck)?;
        let mut ret = Vec::new();
        for cells in pattern.expand() {
            if cells.is_empty() || cells.len() > lexicon.max_len() {
                continue;
            }
            ret.extend(self.matcher.match_cells(&cells, deck, lexicon)?);
        }
        ret.sort_unstable();
        ret.dedup();
        Ok(ret)
    }

    pub fn expand_pattern(
        &mut self,
        pattern_text: &str,
        rack_text: &str,
        lexicon: &lexicon::Lexicon,
    ) -> Result<Vec<String>, error::Error> {
        let pattern = pattern_text.parse::<pattern::Pattern>()?;
        if pattern.is_empty() {
            return Err(error::Error::PatternSyntaxError(
                "pattern cannot be empty".into(),
            ));
        }
        let deck = matcher::parse_deck(rack_text)?;
        Ok(self
            .expand_and_match(&pattern, &deck, lexicon)?
            .into_iter()
            .map(alphabet::fmt_word)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> lexicon::Lexicon {
        lexicon::Lexicon::from_words([
            "a", "at", "cat", "cats", "scat", "scats", "catch", "act", "tact",
        ])
        .unwrap()
    }

    #[test]
    fn unions_every_length() {
        let lexicon = lexicon();
        let mut expander = PatternExpander::new();
        assert_eq!(
            expander.expand_pattern("(0,1)CAT(0,1)", "CATS", &lexicon).unwrap(),
            vec!["CAT", "CATS", "SCAT"]
        );
        assert_eq!(
            expander.expand_pattern("(0,1)CAT(0,1)", "CATS-", &lexicon).unwrap(),
            vec!["CAT", "CATS", "SCAT", "SCATS"]
        );
        assert_eq!(
            expander.expand_pattern("(1,1)CAT(1,1)", "CATSS", &lexicon).unwrap(),
            vec!["SCATS"]
        );
        assert_eq!(
            expander.expand_pattern("_(0,3)", "AT", &lexicon).unwrap(),
            vec!["A", "AT"]
        );
    }

    #[test]
    fn no_ranges_passes_through() {
        let lexicon = lexicon();
        let mut expander = PatternExpander::new();
        assert_eq!(
            expander.expand_pattern("_AT", "CAT", &lexicon).unwrap(),
            vec!["CAT"]
        );
    }

    #[test]
    fn checks_syntax_and_feasibility_first() {
        let lexicon = lexicon();
        let mut expander = PatternExpander::new();
        assert!(matches!(
            expander.expand_pattern("(2,1)A", "A", &lexicon),
            Err(error::Error::PatternSyntaxError(_))
        ));
        assert!(matches!(
            expander.expand_pattern("", "A", &lexicon),
            Err(error::Error::PatternSyntaxError(_))
        ));
        assert_eq!(
            expander.expand_pattern("(0,2)QZ", "Q", &lexicon),
            Err(error::Error::InsufficientRackForPattern {
                missing: 1,
                blanks: 0
            })
        );
        assert_eq!(
            expander.expand_pattern("(0,2)", "AT", &lexicon).unwrap(),
            vec!["A", "AT"]
        );
    }
}
