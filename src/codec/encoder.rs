//! Typed options to canonical string.
//!
//! Fields at their default value are never written. For keyword options a
//! set global exclusion wins over the local exclusion and the precision,
//! which are then left out of the output entirely.

use itertools::Itertools;

use super::token::{
    CASE_FLAG, EXCLUDE_CLOSE, EXCLUDE_OPEN, FONT_HEIGHT_KEY, GLOBAL_EXCLUSION, LOCAL_EXCLUSION,
    PRECISION_CLOSE, PRECISION_OPEN, Y_KEY,
};
use crate::options::{DEFAULT_PRECISION, KeywordOptions, Options, ReaderOptions};

/// The token text each keyword field contributes, `None` when it contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFragments<'a> {
    pub global_exclusion: Option<&'static str>,
    pub local_exclusion: Option<&'static str>,
    pub precision: Option<String>,
    pub casse: Option<&'static str>,
    pub pattern: &'a str,
}

/// The directive text each reader field contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderFragments {
    pub font_height: String,
    pub y: String,
    pub char_exclusion: Option<String>,
}

impl KeywordOptions {
    pub fn fragments(&self) -> KeywordFragments<'_> {
        KeywordFragments {
            global_exclusion: self.global_exclusion.then_some(GLOBAL_EXCLUSION),
            local_exclusion: self.local_exclusion.then_some(LOCAL_EXCLUSION),
            precision: (self.precision != DEFAULT_PRECISION)
                .then(|| format!("{PRECISION_OPEN}{}{PRECISION_CLOSE}", self.precision)),
            casse: self.casse.then_some(CASE_FLAG),
            pattern: &self.pattern,
        }
    }
}

impl ReaderOptions {
    pub fn fragments(&self) -> ReaderFragments {
        ReaderFragments {
            font_height: format!("{FONT_HEIGHT_KEY}{}", self.font_height),
            y: format!("{Y_KEY}{}", self.y),
            char_exclusion: self
                .char_exclusion
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| format!("{EXCLUDE_OPEN}{s}{EXCLUDE_CLOSE}")),
        }
    }
}

pub fn encode(opts: &Options) -> String {
    match opts {
        Options::Keyword(opts) => encode_keyword(opts),
        Options::Reader(opts) => encode_reader(opts),
    }
}

pub fn encode_keyword(opts: &KeywordOptions) -> String {
    let frags = opts.fragments();
    let mut out = String::new();
    if let Some(global) = frags.global_exclusion {
        out.push_str(global);
    } else {
        out.extend(frags.local_exclusion);
        out.extend(frags.precision);
    }
    out.extend(frags.casse);
    out.push_str(frags.pattern);
    out
}

pub fn encode_reader(opts: &ReaderOptions) -> String {
    let frags = opts.fragments();
    let directives = [Some(frags.font_height), Some(frags.y), frags.char_exclusion];
    format!("[{}]", directives.into_iter().flatten().join(","))
}
