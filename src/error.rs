// Copyright (C) 2020-2026 Andy Kurnia.

// Rejections raised by the board, the pattern language and the loaders.
// Every variant carries enough context to explain itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no tiles placed")]
    EmptyPlacement,
    #[error("position ({row},{col}) is out of bounds")]
    OutOfBounds { row: i8, col: i8 },
    #[error("position ({row},{col}) is already occupied")]
    Overlap { row: i8, col: i8 },
    #[error("tiles must be placed in a single row or column")]
    NonCollinear,
    #[error("tiles must form a continuous line without gaps")]
    Discontinuous,
    #[error("first move must cover the center square")]
    FirstMoveMustCoverCenter,
    #[error("new tiles must connect to existing tiles")]
    Disconnected,
    #[error("formed invalid words: {}", .0.join(", "))]
    InvalidWords(Vec<String>),
    #[error("no valid letter combination for wildcards at {0:?}")]
    NoValidWildcardLetter(Vec<(i8, i8)>),
    #[error("invalid pattern: {0}")]
    PatternSyntaxError(String),
    #[error(
        "pattern requires more letters than available: missing {missing} letter(s), but only {blanks} blank(s) available"
    )]
    InsufficientRackForPattern { missing: usize, blanks: usize },
    #[error("invalid tile {0:?}")]
    InvalidTile(char),
    #[error("cannot parse {0:?}")]
    Unparseable(String),
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error("invalid word {text:?} on line {line}")]
    InvalidLexicon { line: usize, text: String },
}

// Process-level failures in the binaries are just messages.
pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails_with_message() -> Returns<()> {
        return_error!(format!("bad {}", 42));
    }

    #[test]
    fn invalid_words_lists_every_word() {
        let e = Error::InvalidWords(vec!["QX".into(), "ZZT".into()]);
        assert_eq!(e.to_string(), "formed invalid words: QX, ZZT");
    }

    #[test]
    fn insufficient_rack_reports_both_counts() {
        let e = Error::InsufficientRackForPattern {
            missing: 3,
            blanks: 1,
        };
        let s = e.to_string();
        assert!(s.contains("missing 3"));
        assert!(s.contains("only 1 blank"));
    }

    #[test]
    fn return_error_boxes_the_message() {
        let err = fails_with_message().unwrap_err();
        assert_eq!(err.to_string(), "bad 42");
    }
}
