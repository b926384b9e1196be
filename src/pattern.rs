// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

// A pattern is a sequence of fixed letters, single-cell wildcards ('_') and
// optional runs of wildcards written (n,m) for n to m cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // letters 1..=26
    Letters(Vec<u8>),
    Wild(u8),
    Range(u8, u8),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    #[inline(always)]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn push_letters(&mut self, letters: &[u8]) {
        if !letters.is_empty() {
            self.tokens.push(Token::Letters(
                letters.iter().map(|&t| alphabet::letter_of(t)).collect(),
            ));
        }
    }

    pub fn push_wild(&mut self, n: u8) {
        if n > 0 {
            self.tokens.push(Token::Wild(n));
        }
    }

    pub fn push_range(&mut self, min: u8, max: u8) {
        if max > 0 {
            self.tokens.push(Token::Range(min, max));
        }
    }

    pub fn has_ranges(&self) -> bool {
        self.tokens.iter().any(|t| matches!(t, Token::Range(..)))
    }

    // Fixed letters in order of appearance.
    pub fn fixed_letters(&self) -> Vec<u8> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Letters(letters) => Some(letters.iter().copied()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    // Shortest and longest expansion.
    pub fn len_bounds(&self) -> (usize, usize) {
        self.tokens.iter().fold((0, 0), |(lo, hi), t| match t {
            Token::Letters(letters) => (lo + letters.len(), hi + letters.len()),
            &Token::Wild(n) => (lo + n as usize, hi + n as usize),
            &Token::Range(min, max) => (lo + min as usize, hi + max as usize),
        })
    }

    // Merges neighboring wildcard and range tokens into one, adding their
    // bounds. Equal bounds become plain wildcards. Letter runs also merge.
    pub fn simplified(&self) -> Pattern {
        let mut tokens = Vec::<Token>::with_capacity(self.tokens.len());
        for token in self.tokens.iter() {
            let merged = match (tokens.last_mut(), token) {
                (Some(Token::Letters(prev)), Token::Letters(letters)) => {
                    prev.extend_from_slice(letters);
                    true
                }
                (Some(last), Token::Wild(_) | Token::Range(..)) => {
                    // Left apart when the sum would not fit.
                    match (bounds_of(last), bounds_of(token)) {
                        (Some((lo0, hi0)), Some((lo1, hi1))) => {
                            match (lo0.checked_add(lo1), hi0.checked_add(hi1)) {
                                (Some(lo), Some(hi)) => {
                                    *last = Token::Range(lo, hi);
                                    true
                                }
                                _ => false,
                            }
                        }
                        _ => false,
                    }
                }
                _ => false,
            };
            if !merged {
                tokens.push(token.clone());
            }
        }
        for token in tokens.iter_mut() {
            if let Token::Range(min, max) = *token {
                if min == max {
                    *token = Token::Wild(min);
                }
            }
        }
        Pattern { tokens }
    }

    // Every fixed-length pattern the ranges allow. Cells are letters, or 0
    // for a wildcard.
    pub fn expand(&self) -> Vec<Vec<u8>> {
        let mut ret = vec![Vec::<u8>::new()];
        for token in self.tokens.iter() {
            match token {
                Token::Letters(letters) => {
                    for cells in ret.iter_mut() {
                        cells.extend_from_slice(letters);
                    }
                }
                &Token::Wild(n) => {
                    for cells in ret.iter_mut() {
                        cells.resize(cells.len() + n as usize, 0);
                    }
                }
                &Token::Range(min, max) => {
                    ret = ret
                        .iter()
                        .flat_map(|cells| {
                            (min..=max).map(move |k| {
                                let mut v = cells.clone();
                                v.resize(cells.len() + k as usize, 0);
                                v
                            })
                        })
                        .collect();
                }
            }
        }
        ret
    }
}

fn bounds_of(token: &Token) -> Option<(u8, u8)> {
    match *token {
        Token::Wild(n) => Some((n, n)),
        Token::Range(min, max) => Some((min, max)),
        Token::Letters(_) => None,
    }
}

fn syntax_error(msg: String) -> error::Error {
    error::Error::PatternSyntaxError(msg)
}

impl std::str::FromStr for Pattern {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ret = Pattern::default();
        let mut chars = s.char_indices().peekable();
        while let Some((pos, c)) = chars.next() {
            match c {
                '_' => {
                    let mut n = 1u8;
                    while chars.next_if(|&(_, c)| c == '_').is_some() {
                        n = n.checked_add(1).ok_or_else(|| {
                            syntax_error(format!("too many blanks in a row at {pos}"))
                        })?;
                    }
                    ret.push_wild(n);
                }
                '(' => {
                    let end = s[pos..]
                        .find(')')
                        .ok_or_else(|| syntax_error(format!("unclosed range at {pos}")))?;
                    let inner = &s[pos + 1..pos + end];
                    let range = || {
                        let (n, m) = inner.split_once(',')?;
                        Some((n.parse::<u8>().ok()?, m.parse::<u8>().ok()?))
                    };
                    let (n, m) = range().ok_or_else(|| {
                        syntax_error(format!("expected (n,m) at {pos}, got ({inner})"))
                    })?;
                    if n > m {
                        return Err(syntax_error(format!(
                            "invalid range ({n},{m}), must have n <= m"
                        )));
                    }
                    ret.tokens.push(Token::Range(n, m));
                    while chars.next_if(|&(p, _)| p <= pos + end).is_some() {}
                }
                _ => match alphabet::letter_from_char(c) {
                    Some(letter) => {
                        let mut letters = vec![letter];
                        while let Some((_, c)) =
                            chars.next_if(|&(_, c)| alphabet::letter_from_char(c).is_some())
                        {
                            letters.extend(alphabet::letter_from_char(c));
                        }
                        ret.tokens.push(Token::Letters(letters));
                    }
                    None => {
                        return Err(syntax_error(format!(
                            "invalid character {c:?}, use only letters, '_' and (n,m)"
                        )));
                    }
                },
            }
        }
        Ok(ret)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in self.tokens.iter() {
            match token {
                Token::Letters(letters) => write!(f, "{}", alphabet::fmt_word(letters))?,
                Token::Wild(n) => {
                    for _ in 0..*n {
                        write!(f, "_")?;
                    }
                }
                Token::Range(min, max) => write!(f, "({min},{max})")?,
            }
        }
        Ok(())
    }
}
