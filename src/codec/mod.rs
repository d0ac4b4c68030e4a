//! Codec for option strings.
//!
//! Keyword options are a pattern with optional flag tokens in any order;
//! reader options are a bracketed directive list. Decoding finds each token
//! independently, strips it, and hands the leftovers to the validator.
//! Encoding writes the tokens back in a fixed order.
//!
//! # Keyword tokens
//!
//! | Token    | Meaning                                          |
//! |----------|--------------------------------------------------|
//! | `!!`     | Global exclusion (not when preceded by `(`)      |
//! | `(!!)`   | Local exclusion                                  |
//! | `(?#N)`  | Precision, 50 to 100; 100 is never written       |
//! | `(?i)`   | Case-insensitive                                 |
//!
//! Canonical order is `!!` or `(!!)`, then `(?#N)`, then `(?i)`, then the
//! pattern. With `!!` set, `(!!)` and `(?#N)` are not written.
//!
//! # Reader directives
//!
//! | Directive       | Meaning                     | Default |
//! |-----------------|-----------------------------|---------|
//! | `FontHeight=N`  | Font height                 | `10`    |
//! | `y=N`, `y=max`  | Vertical anchor             | `max`   |
//! | `exclude={S}`   | Excluded characters         | none    |
//!
//! Canonical form is `[FontHeight=N,y=V]` with `,exclude={S}` appended when set.

pub mod decoder;
pub mod dispatch;
pub mod encoder;
pub mod token;
pub mod validator;


use crate::error::ValidationError;
use crate::options::{Family, KeywordOptions, Options, ReaderOptions};

/// Parse a raw options string, choosing the family from its first character.
pub fn parse(raw: &str) -> Result<Options, ValidationError> {
    dispatch::decode_any(raw)
}

/// Write `options` in canonical form.
pub fn format(options: &Options) -> String {
    encoder::encode(options)
}

/// Parse `raw` as keyword options regardless of how it starts.
pub fn parse_keyword(raw: &str) -> Result<KeywordOptions, ValidationError> {
    validator::validate_keyword(decoder::decode_keyword(raw))
}

/// Parse `raw` as reader options regardless of how it starts.
pub fn parse_reader(raw: &str) -> Result<ReaderOptions, ValidationError> {
    validator::validate_reader(decoder::decode_reader(raw))
}

/// Decode `raw` in the given family without going through the dispatcher.
pub fn parse_as(raw: &str, family: Family) -> Result<Options, ValidationError> {
    validator::validate(decoder::decode(raw, family))
}
