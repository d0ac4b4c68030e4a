//! Structured option records for the two families.
//!
//! A string starting with `[` holds [`ReaderOptions`]; anything else holds
//! [`KeywordOptions`]. [`Options`] is the tagged union of both.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::codec::{encoder, parse};
use crate::error::ValidationError;

/// Minimum number of characters in a keyword pattern.
pub const MIN_PATTERN_LENGTH: usize = 3;
/// Precision meaning "exact match"; never written out.
pub const DEFAULT_PRECISION: u32 = 100;
/// Lowest accepted precision.
pub const MIN_PRECISION: u32 = 50;
/// Font height used when a reader string does not name one.
pub const DEFAULT_FONT_HEIGHT: u32 = 10;
/// Literal for the [`YAnchor::Max`] value.
pub const MAX_Y: &str = "max";

/// Which option family a string or record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Keyword,
    Reader,
}

/// Search pattern with its modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordOptions {
    pub pattern: String,
    /// Case-insensitive matching.
    #[serde(default)]
    pub casse: bool,
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default)]
    pub global_exclusion: bool,
    #[serde(default)]
    pub local_exclusion: bool,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl KeywordOptions {
    /// A pattern with every modifier at its default.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            casse: false,
            precision: DEFAULT_PRECISION,
            global_exclusion: false,
            local_exclusion: false,
        }
    }
}

/// Vertical anchor of a reader surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YAnchor {
    #[default]
    Max,
    Offset(u32),
}

impl fmt::Display for YAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => f.write_str(MAX_Y),
            Self::Offset(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for YAnchor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Max => serializer.serialize_str(MAX_Y),
            Self::Offset(n) => serializer.serialize_u32(*n),
        }
    }
}

impl<'de> Deserialize<'de> for YAnchor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Offset(u32),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Offset(n) => Ok(Self::Offset(n)),
            Repr::Text(s) if s == MAX_Y => Ok(Self::Max),
            Repr::Text(s) => Err(de::Error::custom(format!(
                "y must be {MAX_Y:?} or a number, got {s:?}"
            ))),
        }
    }
}

/// Display directives for a reader surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderOptions {
    pub y: YAnchor,
    pub font_height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_exclusion: Option<String>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            y: YAnchor::Max,
            font_height: DEFAULT_FONT_HEIGHT,
            char_exclusion: None,
        }
    }
}

/// Either family of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum Options {
    Keyword(KeywordOptions),
    Reader(ReaderOptions),
}

impl Options {
    pub fn family(&self) -> Family {
        match self {
            Self::Keyword(_) => Family::Keyword,
            Self::Reader(_) => Family::Reader,
        }
    }
}

impl From<KeywordOptions> for Options {
    fn from(opts: KeywordOptions) -> Self {
        Self::Keyword(opts)
    }
}

impl From<ReaderOptions> for Options {
    fn from(opts: ReaderOptions) -> Self {
        Self::Reader(opts)
    }
}

impl FromStr for Options {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for KeywordOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::encode_keyword(self))
    }
}

impl fmt::Display for ReaderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::encode_reader(self))
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(opts) => fmt::Display::fmt(opts, f),
            Self::Reader(opts) => fmt::Display::fmt(opts, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_json_fills_defaults() {
        let opts: Options =
            serde_json::from_str(r#"{"family":"keyword","pattern":"keyword"}"#).unwrap();
        assert_eq!(opts, Options::Keyword(KeywordOptions::new("keyword")));
    }

    #[test]
    fn test_keyword_json_requires_pattern() {
        assert!(serde_json::from_str::<Options>(r#"{"family":"keyword","casse":true}"#).is_err());
    }

    #[test]
    fn test_keyword_json_uses_camel_case() {
        let opts = KeywordOptions {
            global_exclusion: true,
            ..KeywordOptions::new("keyword")
        };
        let json = serde_json::to_value(Options::from(opts)).unwrap();
        assert_eq!(json["family"], "keyword");
        assert_eq!(json["globalExclusion"], true);
        assert_eq!(json["localExclusion"], false);
        assert_eq!(json["precision"], 100);
    }

    #[test]
    fn test_reader_json_round_trip() {
        let opts = Options::Reader(ReaderOptions {
            y: YAnchor::Offset(600),
            font_height: 12,
            char_exclusion: Some("abc".to_string()),
        });
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(
            json,
            r#"{"family":"reader","y":600,"fontHeight":12,"charExclusion":"abc"}"#
        );
        assert_eq!(serde_json::from_str::<Options>(&json).unwrap(), opts);
    }

    #[test]
    fn test_reader_json_defaults_and_max() {
        let opts: Options = serde_json::from_str(r#"{"family":"reader"}"#).unwrap();
        assert_eq!(opts, Options::Reader(ReaderOptions::default()));
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"family":"reader","y":"max","fontHeight":10}"#);
    }

    #[test]
    fn test_reader_json_rejects_unknown_y_text() {
        let err = serde_json::from_str::<Options>(r#"{"family":"reader","y":"invalid"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_reader_json_rejects_stringly_numbers() {
        let err = serde_json::from_str::<Options>(r#"{"family":"reader","fontHeight":"12"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_family_of_record() {
        assert_eq!(
            Options::from(KeywordOptions::new("abc")).family(),
            Family::Keyword
        );
        assert_eq!(
            Options::from(ReaderOptions::default()).family(),
            Family::Reader
        );
    }
}
