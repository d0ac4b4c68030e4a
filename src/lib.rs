//! Compact string forms for keyword search options and reader display options.
//!
//! # Example
//!
//! ```rust
//! use searchopts::{KeywordOptions, Options, ReaderOptions, YAnchor, format, parse};
//!
//! let opts = parse("(?i)(?#75)keyword").unwrap();
//! assert_eq!(
//!     opts,
//!     Options::Keyword(KeywordOptions {
//!         casse: true,
//!         precision: 75,
//!         ..KeywordOptions::new("keyword")
//!     })
//! );
//! assert_eq!(format(&opts), "(?#75)(?i)keyword");
//!
//! let reader = parse("[FontHeight=12,y=600,exclude={abc}]").unwrap();
//! assert_eq!(
//!     reader,
//!     Options::Reader(ReaderOptions {
//!         y: YAnchor::Offset(600),
//!         font_height: 12,
//!         char_exclusion: Some("abc".to_string()),
//!     })
//! );
//! ```

pub mod codec;
mod error;
mod options;

pub use codec::encoder::{KeywordFragments, ReaderFragments};
pub use codec::validator::check;
pub use codec::{format, parse, parse_as, parse_keyword, parse_reader};
pub use error::ValidationError;
pub use options::{
    DEFAULT_FONT_HEIGHT, DEFAULT_PRECISION, Family, KeywordOptions, MAX_Y, MIN_PATTERN_LENGTH,
    MIN_PRECISION, Options, ReaderOptions, YAnchor,
};
