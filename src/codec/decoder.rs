//! Raw string to unvalidated field bag.
//!
//! Decoding never fails: a token that is missing or malformed simply leaves
//! its field absent, and the validator fills in the default.

use tracing::trace;

use super::token::{KEYWORD_TOKENS, Token};
use crate::options::Family;

/// Keyword fields as found in the input, borrowing from it where possible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawKeyword<'a> {
    /// Input with every recognized token stripped once, trimmed.
    pub pattern: String,
    pub casse: bool,
    /// Digits of the precision flag, if present.
    pub precision: Option<&'a str>,
    pub global_exclusion: bool,
    pub local_exclusion: bool,
}

/// Reader fields as found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawReader<'a> {
    /// Digits or `max`.
    pub y: Option<&'a str>,
    pub font_height: Option<&'a str>,
    pub char_exclusion: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFields<'a> {
    Keyword(RawKeyword<'a>),
    Reader(RawReader<'a>),
}

/// Decode `raw` as a member of `family`.
pub fn decode(raw: &str, family: Family) -> RawFields<'_> {
    match family {
        Family::Keyword => RawFields::Keyword(decode_keyword(raw)),
        Family::Reader => RawFields::Reader(decode_reader(raw)),
    }
}

pub fn decode_keyword(raw: &str) -> RawKeyword<'_> {
    let casse = Token::CaseFlag.find(raw).is_some();
    let precision = Token::Precision.find(raw).map(|m| m.capture);
    let global_exclusion = Token::GlobalExclusion.find(raw).is_some();
    let local_exclusion = Token::LocalExclusion.find(raw).is_some();

    // Each removal works on what the previous one left behind.
    let mut pattern = raw.to_string();
    for token in KEYWORD_TOKENS {
        if let Some(range) = token.find(&pattern).map(|m| m.range) {
            pattern.replace_range(range, "");
        }
    }
    let pattern = pattern.trim().to_string();

    trace!(
        casse,
        ?precision,
        global_exclusion,
        local_exclusion,
        %pattern,
        "decoded keyword tokens"
    );

    RawKeyword {
        pattern,
        casse,
        precision,
        global_exclusion,
        local_exclusion,
    }
}

pub fn decode_reader(raw: &str) -> RawReader<'_> {
    let capture = |token: Token| token.find(raw).map(|m| m.capture);
    let fields = RawReader {
        y: capture(Token::Y),
        font_height: capture(Token::FontHeight),
        char_exclusion: capture(Token::CharExclusion),
    };
    trace!(?fields, "decoded reader tokens");
    fields
}
