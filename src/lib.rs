//! # engfmt
//!
//! Engineering notation for `f64` values: a decimal mantissa in [1, 1000)
//! paired with either an SI magnitude prefix (`k`, `M`, `m`, `µ`, …) or an
//! explicit power-of-ten exponent that is always a multiple of three,
//! optionally followed by a unit string.
//!
//! The crate provides three pure conversions:
//!
//! - **Formatting**: pick the power-of-three exponent, round the mantissa to
//!   a requested number of significant digits with correct carry propagation
//!   across magnitude boundaries, and render a prefix symbol or `e<exp>`
//!   suffix
//! - **Parsing**: recognize a trailing prefix letter and rewrite it to the
//!   equivalent exponent before numeric parsing
//! - **Stepping**: move a displayed value up or down by one unit in its last
//!   significant digit — the operation behind a numeric input widget's
//!   increment/decrement controls
//!
//! ## Examples
//!
//! ```rust
//! use engfmt::{from_engineering, step, to_engineering, Direction, Notation};
//!
//! // Format with an SI prefix or an explicit exponent
//! assert_eq!(to_engineering(1230.0, 3, Notation::Prefixed), "1.23 k");
//! assert_eq!(to_engineering(1230.0, 3, Notation::Exponential), "1.23e3");
//!
//! // Parse either form back
//! assert_eq!(from_engineering("1.23 k"), 1230.0);
//! assert_eq!(from_engineering("1.23e3"), 1230.0);
//!
//! // Step by the smallest increment at the displayed precision
//! assert_eq!(step("999", 3, Notation::Prefixed, Direction::Increment), "1.00 k");
//! ```
//!
//! ## Notation overview
//!
//! A formatted value is an optional sign, a mantissa whose integer part has
//! one to three digits, and a magnitude tail:
//!
//! - prefixed: a space and an SI symbol (`"1.23 k"`), except at magnitude 0
//!   where nothing is rendered (`"1.23"`)
//! - exponential: an `e<exp>` suffix (`"1.23e3"`, `"990e-3"`)
//!
//! Exponents beyond the prefix table (±24) always render exponentially, so
//! `1e98` becomes `"100e96"` in either mode. NaN renders `"NaN"` and
//! infinities render `"INFINITE"`. A unit string, when given, is appended
//! verbatim (`"1.23 kPa"`).
//!
//! All operations are pure functions over immutable inputs; the prefix table
//! is a process-wide constant, so everything here may be called concurrently
//! without coordination.

pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod parse;
pub(crate) mod prefix;
pub(crate) mod step;

// Re-export main types and functions
pub use error::{ParseError, ParseResult};
pub use format::{to_engineering, to_engineering_with_unit, Notation};
pub use parse::{from_engineering, try_from_engineering};
pub use step::{step, Direction};
