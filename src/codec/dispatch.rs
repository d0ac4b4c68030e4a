//! Picks the option family of a raw string.

use tracing::debug;

use super::decoder::decode;
use super::validator::validate;
use crate::error::ValidationError;
use crate::options::{Family, Options};

/// Leading character of every reader string.
pub const READER_OPEN: char = '[';

impl Family {
    /// The family `raw` is routed to.
    ///
    /// Keyword patterns are not forbidden from starting with `[`, so such a
    /// pattern comes back as reader options when re-parsed.
    pub fn of(raw: &str) -> Self {
        if raw.starts_with(READER_OPEN) {
            Self::Reader
        } else {
            Self::Keyword
        }
    }
}

/// Decode and validate `raw` in whichever family it belongs to.
pub fn decode_any(raw: &str) -> Result<Options, ValidationError> {
    let family = Family::of(raw);
    debug!(?family, raw, "routing options string");
    validate(decode(raw, family))
}
