//! Parsing of engineering-notation strings back into numbers.
//!
//! The decoder reverses the formatter's prefix mapping: a trailing prefix
//! letter is rewritten to an `e<exp>` suffix and the result is parsed as an
//! ordinary decimal literal. Input should not carry a unit — the first
//! letter after the space is read as an SI prefix, so `"1 T"` is 1e12, not
//! one tesla.

use crate::error::{ParseError, ParseResult};
use crate::prefix;

/// Parse an engineering-notation string, reporting failures as errors.
///
/// Accepts everything [`to_engineering`](crate::to_engineering) produces:
/// plain decimals (`"1.23"`), exponential forms (`"990e-3"`), prefixed forms
/// (`"98.76 m"`), and the `"INFINITE"` sentinel with an optional sign. A
/// token after the space that is not a known prefix is discarded and the
/// number before the space stands alone, matching the formatter's own
/// unit-appending convention.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] for blank input and
/// [`ParseError::InvalidNumber`] when no numeric literal can be extracted.
pub fn try_from_engineering(text: &str) -> ParseResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(infinity) = parse_infinite(text) {
        return Ok(infinity);
    }

    match text.split_once(' ') {
        // No prefix token to separate from the mantissa; the whole text is a
        // decimal literal, possibly with an e<exp> suffix
        None => parse_number(text),
        Some((magnitude, rest)) => {
            // Prefix symbols are single characters; anything following the
            // first one is trailing unit text
            let token = rest.chars().next().map(|c| &rest[..c.len_utf8()]);
            match token.and_then(prefix::exponent) {
                Some(exp) => parse_number(&format!("{magnitude}e{exp}")),
                None => parse_number(magnitude),
            }
        }
    }
}

/// Parse an engineering-notation string, mapping any failure to NaN.
///
/// This is the permissive companion of [`try_from_engineering`]. Returning
/// NaN rather than 0 keeps "no value" distinguishable from a value that is
/// exactly zero.
///
/// ```
/// use engfmt::from_engineering;
///
/// assert_eq!(from_engineering("98.76 m"), 98.76e-3);
/// assert_eq!(from_engineering("1.23e3"), 1230.0);
/// assert!(from_engineering("Howdie").is_nan());
/// ```
#[must_use]
pub fn from_engineering(text: &str) -> f64 {
    try_from_engineering(text).unwrap_or(f64::NAN)
}

/// Recognize the formatter's infinity sentinel, with an optional sign.
fn parse_infinite(text: &str) -> Option<f64> {
    match text {
        "INFINITE" | "+INFINITE" => Some(f64::INFINITY),
        "-INFINITE" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn parse_number(literal: &str) -> ParseResult<f64> {
    literal
        .parse()
        .map_err(|_| ParseError::InvalidNumber(literal.to_owned()))
}
