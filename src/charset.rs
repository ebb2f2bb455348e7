//! GSM 03.38 character classification.
//!
//! The default alphabet is split into two disjoint sets: the basic set (one
//! septet per character) and the extension set (two septets, because the
//! character is sent as ESC plus a second code). Everything outside the union
//! needs substitution before it can travel in a 7-bit message.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Classification of a single code point against the GSM 03.38 alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GsmClass {
    /// Member of the default alphabet; costs 1 septet.
    Basic,
    /// Member of the single-escape extension table; costs 2 septets.
    Extended,
    /// Not representable in GSM 03.38 at all.
    Unsupported,
}

/// GSM character sets (lazy-initialized static data).
static GSM_SETS: Lazy<(HashSet<char>, HashSet<char>)> =
    Lazy::new(|| (build_basic_set(), build_extended_set()));

/// Classify a code point against the GSM 03.38 alphabet.
///
/// Total over all Unicode scalar values and free of side effects.
///
/// # Example
///
/// ```rust
/// use gsm_sanitize::{classify, GsmClass};
///
/// assert_eq!(classify('A'), GsmClass::Basic);
/// assert_eq!(classify('€'), GsmClass::Extended);
/// assert_eq!(classify('“'), GsmClass::Unsupported);
/// ```
pub fn classify(ch: char) -> GsmClass {
    let (basic, extended) = &*GSM_SETS;
    if basic.contains(&ch) {
        GsmClass::Basic
    } else if extended.contains(&ch) {
        GsmClass::Extended
    } else {
        GsmClass::Unsupported
    }
}

/// Check whether a character is representable in GSM 03.38 (basic or extended).
pub fn is_gsm_char(ch: char) -> bool {
    classify(ch) != GsmClass::Unsupported
}

/// GSM 03.38 default alphabet.
fn build_basic_set() -> HashSet<char> {
    let chars: &[char] = &[
        '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
        'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', '\x1B', 'Æ', 'æ', 'ß', 'É',
        ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
        '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
        'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
        '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
        'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
    ];

    chars.iter().copied().collect()
}

/// GSM 03.38 extension table (characters sent as ESC plus a second code).
fn build_extended_set() -> HashSet<char> {
    let chars: &[char] = &['\x0C', '^', '{', '}', '\\', '[', '~', ']', '|', '€'];

    chars.iter().copied().collect()
}
