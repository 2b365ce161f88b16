//! Stepping a displayed value by one unit in its last significant digit.
//!
//! This is the operation behind a numeric entry widget's increment and
//! decrement controls: decode the displayed text, add the smallest increment
//! representable at the display precision, and re-encode. The increment is
//! defined against the plain decimal exponent, not the engineering group, so
//! `"1.0"` at three digits steps by 0.01 while `"999"` steps by 1.

use crate::format::{clamp_digits, to_engineering, Notation};
use crate::parse::from_engineering;

/// Direction in which [`step`] moves a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

/// Step a formatted value by one unit in its last significant digit.
///
/// `digits` is clamped to the same [3, 9] policy as the formatter. Crossing
/// a magnitude boundary re-normalizes through the formatter's own carry
/// handling:
///
/// ```
/// use engfmt::{step, Direction, Notation};
///
/// assert_eq!(step("999", 3, Notation::Prefixed, Direction::Increment), "1.00 k");
/// assert_eq!(step("1.0 M", 3, Notation::Prefixed, Direction::Decrement), "990 k");
/// ```
///
/// Text that does not parse (see
/// [`from_engineering`](crate::from_engineering)) steps to `"NaN"`.
#[must_use]
pub fn step(text: &str, digits: u32, notation: Notation, direction: Direction) -> String {
    let value = from_engineering(text);
    let digits = clamp_digits(digits);

    let power = decimal_exponent(value) + 1 - digits as i32;
    let increment = match direction {
        Direction::Increment => 10f64.powi(power),
        Direction::Decrement => -(10f64.powi(power)),
    };

    to_engineering(value + increment, digits, notation)
}

/// `floor(log10(|value|))`, with zero and non-finite values pinned to 0.
///
/// Computed on the absolute value so negative inputs step by the same
/// magnitude as their positive counterparts.
#[allow(clippy::cast_possible_truncation)]
fn decimal_exponent(value: f64) -> i32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let magnitude = value.abs();
    let mut exponent = magnitude.log10().floor() as i32;
    // Hold 10^e <= |value| < 10^(e+1) even when log10 lands an ulp off
    if 10f64.powi(exponent) > magnitude {
        exponent -= 1;
    } else if 10f64.powi(exponent + 1) <= magnitude {
        exponent += 1;
    }
    exponent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_at_unit_magnitude() {
        assert_eq!(
            step("1.0", 3, Notation::Prefixed, Direction::Increment),
            "1.01"
        );
        assert_eq!(
            step("1.0", 3, Notation::Exponential, Direction::Increment),
            "1.01e0"
        );
        assert_eq!(
            step("1.0", 3, Notation::Prefixed, Direction::Decrement),
            "990 m"
        );
        assert_eq!(
            step("1.0", 3, Notation::Exponential, Direction::Decrement),
            "990e-3"
        );
    }

    #[test]
    fn test_step_with_prefix() {
        assert_eq!(
            step("1.0 k", 3, Notation::Prefixed, Direction::Increment),
            "1.01 k"
        );
        assert_eq!(
            step("1.0 k", 3, Notation::Exponential, Direction::Increment),
            "1.01e3"
        );
        assert_eq!(
            step("1.0 k", 3, Notation::Prefixed, Direction::Decrement),
            "990"
        );
        assert_eq!(
            step("1.0 k", 3, Notation::Exponential, Direction::Decrement),
            "990e0"
        );
        assert_eq!(
            step("1.0 M", 3, Notation::Prefixed, Direction::Decrement),
            "990 k"
        );
        assert_eq!(
            step("1.0 M", 3, Notation::Exponential, Direction::Decrement),
            "990e3"
        );
    }

    #[test]
    fn test_step_crosses_group_boundary_upward() {
        assert_eq!(
            step("999", 3, Notation::Prefixed, Direction::Increment),
            "1.00 k"
        );
    }

    #[test]
    fn test_step_zero() {
        // Zero is pinned to decimal exponent 0, so the increment is
        // 10^(1 - digits)
        assert_eq!(
            step("0.00", 3, Notation::Prefixed, Direction::Increment),
            "10.0 m"
        );
        assert_eq!(
            step("0.00", 3, Notation::Prefixed, Direction::Decrement),
            "-10.0 m"
        );
    }

    #[test]
    fn test_step_negative_value() {
        // Magnitude of the increment matches the positive counterpart
        assert_eq!(
            step("-1.0", 3, Notation::Prefixed, Direction::Decrement),
            "-1.01"
        );
    }

    #[test]
    fn test_step_digit_clamp() {
        assert_eq!(
            step("1.0", 0, Notation::Prefixed, Direction::Increment),
            step("1.0", 3, Notation::Prefixed, Direction::Increment)
        );
    }

    #[test]
    fn test_step_unparsable_input() {
        assert_eq!(
            step("Howdie", 3, Notation::Prefixed, Direction::Increment),
            "NaN"
        );
    }

    #[test]
    fn test_increment_then_decrement_restores() {
        for text in ["1.0", "54.3", "1.0 k", "98.76 m", "999"] {
            let up = step(text, 4, Notation::Prefixed, Direction::Increment);
            let back = step(&up, 4, Notation::Prefixed, Direction::Decrement);
            let original = from_engineering(text);
            let restored = from_engineering(&back);
            assert!(
                (restored - original).abs() <= 1e-9 * original.abs().max(1.0),
                "{text:?} stepped up to {up:?} and back to {back:?}"
            );
        }
    }
}
