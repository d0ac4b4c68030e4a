//! Field bag to typed options, enforcing the record constraints.

use tracing::debug;

use super::decoder::{RawFields, RawKeyword, RawReader};
use super::token::EXCLUDE_CLOSE;
use crate::error::ValidationError;
use crate::options::{
    DEFAULT_FONT_HEIGHT, DEFAULT_PRECISION, KeywordOptions, MAX_Y, MIN_PATTERN_LENGTH,
    MIN_PRECISION, Options, ReaderOptions, YAnchor,
};

/// Substrings a keyword pattern may not contain.
pub const RESERVED_OPERATORS: [&str; 2] = ["|", "&&"];

/// Apply defaults to `raw` and check the result.
pub fn validate(raw: RawFields<'_>) -> Result<Options, ValidationError> {
    let result = match raw {
        RawFields::Keyword(raw) => validate_keyword(raw).map(Options::Keyword),
        RawFields::Reader(raw) => validate_reader(raw).map(Options::Reader),
    };
    if let Err(err) = &result {
        debug!(%err, "rejected options");
    }
    result
}

pub fn validate_keyword(raw: RawKeyword<'_>) -> Result<KeywordOptions, ValidationError> {
    check_pattern(&raw.pattern)?;
    let precision = match raw.precision {
        Some(digits) => precision_from_digits(digits)?,
        None => DEFAULT_PRECISION,
    };
    let opts = KeywordOptions {
        pattern: raw.pattern,
        casse: raw.casse,
        precision,
        global_exclusion: raw.global_exclusion,
        local_exclusion: raw.local_exclusion,
    };
    check_precision(opts.precision)?;
    Ok(opts)
}

pub fn validate_reader(raw: RawReader<'_>) -> Result<ReaderOptions, ValidationError> {
    let font_height = match raw.font_height {
        Some(digits) => parse_numeric("fontHeight", digits)?,
        None => DEFAULT_FONT_HEIGHT,
    };
    let y = match raw.y {
        None | Some(MAX_Y) => YAnchor::Max,
        Some(digits) => YAnchor::Offset(parse_numeric("y", digits)?),
    };
    Ok(ReaderOptions {
        y,
        font_height,
        char_exclusion: raw.char_exclusion.map(str::to_string),
    })
}

/// Check a record built directly rather than decoded.
///
/// A pattern containing token text such as `!!` or `(?i)` still passes, but
/// its canonical string reads back with that text taken as a flag.
pub fn check(opts: &Options) -> Result<(), ValidationError> {
    match opts {
        Options::Keyword(opts) => check_keyword(opts),
        Options::Reader(opts) => check_reader(opts),
    }
}

pub fn check_keyword(opts: &KeywordOptions) -> Result<(), ValidationError> {
    if opts.pattern != opts.pattern.trim() {
        return Err(ValidationError::PatternNotTrimmed {
            pattern: opts.pattern.clone(),
        });
    }
    check_pattern(&opts.pattern)?;
    check_precision(opts.precision)
}

/// `exclude={...}` cannot hold `}` and is never written when empty.
pub fn check_reader(opts: &ReaderOptions) -> Result<(), ValidationError> {
    match opts.char_exclusion.as_deref() {
        Some(value) if value.is_empty() || value.contains(EXCLUDE_CLOSE) => {
            Err(ValidationError::InvalidCharExclusion {
                value: value.to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn check_pattern(pattern: &str) -> Result<(), ValidationError> {
    let len = pattern.chars().count();
    if len < MIN_PATTERN_LENGTH {
        return Err(ValidationError::PatternTooShort {
            len,
            min: MIN_PATTERN_LENGTH,
        });
    }
    match RESERVED_OPERATORS.into_iter().find(|op| pattern.contains(op)) {
        Some(operator) => Err(ValidationError::PatternContainsReservedOperator { operator }),
        None => Ok(()),
    }
}

fn check_precision(precision: u32) -> Result<(), ValidationError> {
    if (MIN_PRECISION..=DEFAULT_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(ValidationError::PrecisionOutOfRange {
            value: precision.to_string(),
        })
    }
}

/// A zero precision falls back to the default; too many digits is out of range.
fn precision_from_digits(digits: &str) -> Result<u32, ValidationError> {
    match digits.parse::<u32>() {
        Ok(0) => Ok(DEFAULT_PRECISION),
        Ok(n) => Ok(n),
        Err(_) => Err(ValidationError::PrecisionOutOfRange {
            value: digits.to_string(),
        }),
    }
}

fn parse_numeric(field: &'static str, digits: &str) -> Result<u32, ValidationError> {
    digits
        .parse()
        .map_err(|_| ValidationError::InvalidNumericValue {
            field,
            value: digits.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_keyword(pattern: &str) -> RawKeyword<'static> {
        RawKeyword {
            pattern: pattern.to_string(),
            ..RawKeyword::default()
        }
    }

    fn with_precision(digits: &'static str) -> RawKeyword<'static> {
        RawKeyword {
            precision: Some(digits),
            ..raw_keyword("keyword")
        }
    }

    #[test]
    fn test_defaults_applied() {
        let opts = validate_keyword(raw_keyword("keyword")).unwrap();
        assert_eq!(opts, KeywordOptions::new("keyword"));
    }

    #[test]
    fn test_pattern_length_boundary() {
        assert_eq!(
            validate_keyword(raw_keyword("ke")),
            Err(ValidationError::PatternTooShort { len: 2, min: 3 })
        );
        assert!(validate_keyword(raw_keyword("key")).is_ok());
    }

    #[test]
    fn test_pattern_length_counts_chars() {
        assert!(validate_keyword(raw_keyword("éüß")).is_ok());
        assert!(validate_keyword(raw_keyword("éü")).is_err());
    }

    #[test]
    fn test_reserved_operators() {
        assert_eq!(
            validate_keyword(raw_keyword("keyword|other")),
            Err(ValidationError::PatternContainsReservedOperator { operator: "|" })
        );
        assert_eq!(
            validate_keyword(raw_keyword("keyword&&other")),
            Err(ValidationError::PatternContainsReservedOperator { operator: "&&" })
        );
        assert!(validate_keyword(raw_keyword("keyword&other")).is_ok());
    }

    #[test]
    fn test_short_pattern_reported_before_operator() {
        assert!(matches!(
            validate_keyword(raw_keyword("||")),
            Err(ValidationError::PatternTooShort { .. })
        ));
    }

    #[test]
    fn test_precision_bounds() {
        assert_eq!(validate_keyword(with_precision("50")).unwrap().precision, 50);
        assert_eq!(validate_keyword(with_precision("100")).unwrap().precision, 100);
        assert!(matches!(
            validate_keyword(with_precision("49")),
            Err(ValidationError::PrecisionOutOfRange { .. })
        ));
        assert!(matches!(
            validate_keyword(with_precision("101")),
            Err(ValidationError::PrecisionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_precision_means_default() {
        assert_eq!(validate_keyword(with_precision("0")).unwrap().precision, 100);
        assert_eq!(validate_keyword(with_precision("000")).unwrap().precision, 100);
    }

    #[test]
    fn test_huge_precision_out_of_range() {
        assert_eq!(
            validate_keyword(with_precision("99999999999999999999")),
            Err(ValidationError::PrecisionOutOfRange {
                value: "99999999999999999999".to_string()
            })
        );
    }

    #[test]
    fn test_reader_defaults() {
        assert_eq!(
            validate_reader(RawReader::default()),
            Ok(ReaderOptions::default())
        );
    }

    #[test]
    fn test_reader_values() {
        let opts = validate_reader(RawReader {
            y: Some("600"),
            font_height: Some("12"),
            char_exclusion: Some("abc"),
        })
        .unwrap();
        assert_eq!(opts.y, YAnchor::Offset(600));
        assert_eq!(opts.font_height, 12);
        assert_eq!(opts.char_exclusion.as_deref(), Some("abc"));
    }

    #[test]
    fn test_reader_y_max() {
        let opts = validate_reader(RawReader {
            y: Some("max"),
            ..RawReader::default()
        })
        .unwrap();
        assert_eq!(opts.y, YAnchor::Max);
    }

    #[test]
    fn test_reader_numeric_overflow() {
        assert_eq!(
            validate_reader(RawReader {
                font_height: Some("4294967296"),
                ..RawReader::default()
            }),
            Err(ValidationError::InvalidNumericValue {
                field: "fontHeight",
                value: "4294967296".to_string()
            })
        );
        assert!(matches!(
            validate_reader(RawReader {
                y: Some("99999999999"),
                ..RawReader::default()
            }),
            Err(ValidationError::InvalidNumericValue { field: "y", .. })
        ));
    }

    #[test]
    fn test_check_direct_keyword_records() {
        let both = KeywordOptions {
            global_exclusion: true,
            local_exclusion: true,
            ..KeywordOptions::new("keyword")
        };
        assert_eq!(check(&Options::Keyword(both)), Ok(()));

        let bad = KeywordOptions {
            precision: 49,
            ..KeywordOptions::new("keyword")
        };
        assert_eq!(
            check_keyword(&bad),
            Err(ValidationError::PrecisionOutOfRange {
                value: "49".to_string()
            })
        );
        assert!(check_keyword(&KeywordOptions::new("ke")).is_err());
    }

    #[test]
    fn test_check_reader_records() {
        assert_eq!(check(&Options::Reader(ReaderOptions::default())), Ok(()));
        let with = |s: &str| ReaderOptions {
            char_exclusion: Some(s.to_string()),
            ..ReaderOptions::default()
        };
        assert_eq!(check_reader(&with("abc")), Ok(()));
        assert_eq!(
            check_reader(&with("a}b")),
            Err(ValidationError::InvalidCharExclusion {
                value: "a}b".to_string()
            })
        );
        assert!(matches!(
            check(&Options::Reader(with(""))),
            Err(ValidationError::InvalidCharExclusion { .. })
        ));
    }

    #[test]
    fn test_check_rejects_untrimmed_pattern() {
        assert_eq!(
            check_keyword(&KeywordOptions::new(" ab ")),
            Err(ValidationError::PatternNotTrimmed {
                pattern: " ab ".to_string()
            })
        );
        assert!(matches!(
            check_keyword(&KeywordOptions::new("keyword\n")),
            Err(ValidationError::PatternNotTrimmed { .. })
        ));
    }
}
