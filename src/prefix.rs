//! Bidirectional mapping between engineering magnitudes and SI prefix symbols.
//!
//! One table drives both directions: the formatter asks for the symbol of an
//! exponent, the parser asks for the exponent of a symbol. Keeping a single
//! source of truth is what guarantees that decoding reverses exactly what
//! encoding produced, for every entry.

/// The 17 engineering magnitudes, yocto (-24) through yotta (+24), ordered
/// by exponent.
///
/// Exponent 0 maps to the empty string: no symbol is rendered there. The
/// micro symbol is the canonical `µ` (U+00B5); [`exponent`] additionally
/// accepts the ASCII spelling `u`.
const TABLE: [(i32, &str); 17] = [
    (-24, "y"),
    (-21, "z"),
    (-18, "a"),
    (-15, "f"),
    (-12, "p"),
    (-9, "n"),
    (-6, "µ"),
    (-3, "m"),
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
    (12, "T"),
    (15, "P"),
    (18, "E"),
    (21, "Z"),
    (24, "Y"),
];

/// Look up the symbol for a magnitude exponent.
///
/// Returns `None` when `exp` is not a multiple of 3 in -24..=24; the
/// formatter falls back to exponential notation in that case.
#[must_use]
pub(crate) fn symbol(exp: i32) -> Option<&'static str> {
    TABLE.iter().find(|&&(e, _)| e == exp).map(|&(_, s)| s)
}

/// Look up the magnitude exponent for a symbol token.
///
/// The match is exact and case-sensitive: `"k"` is kilo but `"K"` is
/// unknown. The empty symbol is not matched — a bare number carries no
/// token for the parser to look up. `None` tells the parser there is no
/// known prefix here and the token should be treated as an opaque unit.
#[must_use]
pub(crate) fn exponent(sym: &str) -> Option<i32> {
    if sym == "u" {
        return Some(-6);
    }
    TABLE
        .iter()
        .find(|&&(_, s)| !s.is_empty() && s == sym)
        .map(|&(e, _)| e)
}
