//! Recognizers for the tokens of the option sublanguage.
//!
//! Every recognizer searches the whole input on its own and reports the
//! leftmost match, so tokens may appear in any order.

use std::ops::Range;

pub const CASE_FLAG: &str = "(?i)";
pub const GLOBAL_EXCLUSION: &str = "!!";
pub const LOCAL_EXCLUSION: &str = "(!!)";
pub const PRECISION_OPEN: &str = "(?#";
pub const PRECISION_CLOSE: &str = ")";
pub const Y_KEY: &str = "y=";
pub const FONT_HEIGHT_KEY: &str = "FontHeight=";
pub const EXCLUDE_OPEN: &str = "exclude={";
pub const EXCLUDE_CLOSE: &str = "}";

/// One recognizable token of either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `(?i)`
    CaseFlag,
    /// `(?#N)`
    Precision,
    /// `!!` not preceded by `(`
    GlobalExclusion,
    /// `(!!)`
    LocalExclusion,
    /// `y=N` or `y=max`
    Y,
    /// `FontHeight=N`
    FontHeight,
    /// `exclude={...}`
    CharExclusion,
}

/// Keyword tokens, in the order the decoder strips them.
pub const KEYWORD_TOKENS: [Token; 4] = [
    Token::CaseFlag,
    Token::Precision,
    Token::GlobalExclusion,
    Token::LocalExclusion,
];

/// Where a token was found and the text it captured (empty for flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch<'a> {
    pub range: Range<usize>,
    pub capture: &'a str,
}

impl Token {
    /// Find the leftmost occurrence of this token in `input`.
    pub fn find(self, input: &str) -> Option<TokenMatch<'_>> {
        match self {
            Self::CaseFlag => find_literal(input, CASE_FLAG),
            Self::LocalExclusion => find_literal(input, LOCAL_EXCLUSION),
            Self::GlobalExclusion => find_global_exclusion(input),
            Self::Precision => find_keyed(input, PRECISION_OPEN, digits, PRECISION_CLOSE),
            Self::Y => find_keyed(input, Y_KEY, digits_or_max, ""),
            Self::FontHeight => find_keyed(input, FONT_HEIGHT_KEY, digits, ""),
            Self::CharExclusion => {
                find_keyed(input, EXCLUDE_OPEN, until_close_brace, EXCLUDE_CLOSE)
            }
        }
    }
}

fn find_literal<'a>(input: &'a str, lit: &str) -> Option<TokenMatch<'a>> {
    input.find(lit).map(|start| TokenMatch {
        range: start..start + lit.len(),
        capture: "",
    })
}

fn find_global_exclusion(input: &str) -> Option<TokenMatch<'_>> {
    let bytes = input.as_bytes();
    bytes
        .windows(2)
        .enumerate()
        .find(|&(i, w)| w == b"!!" && (i == 0 || bytes[i - 1] != b'('))
        .map(|(start, _)| TokenMatch {
            range: start..start + GLOBAL_EXCLUSION.len(),
            capture: "",
        })
}

/// Find `key`, a non-empty capture measured by `capture_len`, then `close`.
///
/// None of the keys can overlap themselves, so scanning non-overlapping
/// occurrences visits every candidate start.
fn find_keyed<'a>(
    input: &'a str,
    key: &str,
    capture_len: fn(&str) -> usize,
    close: &str,
) -> Option<TokenMatch<'a>> {
    input.match_indices(key).find_map(|(start, _)| {
        let body = start + key.len();
        let rest = &input[body..];
        let n = capture_len(rest);
        if n == 0 || !rest[n..].starts_with(close) {
            return None;
        }
        Some(TokenMatch {
            range: start..body + n + close.len(),
            capture: &rest[..n],
        })
    })
}

fn digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn digits_or_max(s: &str) -> usize {
    match digits(s) {
        0 if s.starts_with(crate::options::MAX_Y) => crate::options::MAX_Y.len(),
        n => n,
    }
}

fn until_close_brace(s: &str) -> usize {
    s.find(EXCLUDE_CLOSE).unwrap_or(0)
}
