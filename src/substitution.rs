//! Unicode to GSM substitution table and the preserve list.
//!
//! The table folds visually or semantically equivalent Unicode characters to
//! GSM-safe replacements: smart quotes become `"` or `'`, dash variants become
//! `-`, fullwidth presentation forms become their ASCII counterparts, and a
//! few symbols expand to bracketed ASCII (`TM`, `(C)`, `<=`). Replacements may
//! be longer than one character, or empty for characters that should vanish
//! (zero-width space, word joiner, BOM).
//!
//! Keys never overlap with the GSM alphabet itself; a GSM-safe character is
//! never remapped.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Substitution mappings and preserve set (lazy-initialized static data).
static SUBST_TABLES: Lazy<(HashMap<char, &'static str>, HashSet<char>)> =
    Lazy::new(|| (build_substitution_table(), build_preserve_set()));

/// Look up the GSM-safe replacement for a Unicode character.
///
/// Returns `None` when the table has no entry. An empty replacement string
/// means the character is removed rather than replaced.
///
/// # Example
///
/// ```rust
/// use gsm_sanitize::lookup;
///
/// assert_eq!(lookup('“'), Some("\""));
/// assert_eq!(lookup('½'), Some("1/2"));
/// assert_eq!(lookup('\u{200B}'), Some(""));
/// assert_eq!(lookup('A'), None);
/// ```
pub fn lookup(ch: char) -> Option<&'static str> {
    let (table, _) = &*SUBST_TABLES;
    table.get(&ch).copied()
}

/// The built-in preserve list: status and marketing symbols a deployment may
/// keep verbatim despite forcing UCS-2 encoding.
pub fn default_preserve_set() -> &'static HashSet<char> {
    let (_, preserve) = &*SUBST_TABLES;
    preserve
}

/// Characters kept verbatim when preservation is enabled.
fn build_preserve_set() -> HashSet<char> {
    let chars: &[char] = &[
        '\u{1F680}', // rocket
        '\u{1F4B0}', // money bag
        '\u{2B50}',  // star
        '\u{2764}',  // heavy black heart
        '\u{1F389}', // party popper
        '\u{1F525}', // fire
        '\u{1F4A1}', // light bulb
        '\u{2705}',  // check mark
        '\u{274C}',  // cross mark
        '\u{26A1}',  // lightning
    ];

    chars.iter().copied().collect()
}

/// Full Unicode to GSM replacement table.
fn build_substitution_table() -> HashMap<char, &'static str> {
    let table: &[(char, &'static str)] = &[
        // Smart quotes and quotation marks
        ('\u{201C}', "\""), // left double quotation mark
        ('\u{201D}', "\""), // right double quotation mark
        ('\u{2018}', "'"),  // left single quotation mark
        ('\u{2019}', "'"),  // right single quotation mark
        ('\u{301E}', "\""), // double prime quotation mark
        ('\u{00AB}', "\""), // left-pointing double angle quotation mark
        ('\u{00BB}', "\""), // right-pointing double angle quotation mark
        ('\u{2039}', "<"),  // single left-pointing angle quotation mark
        ('\u{203A}', ">"),  // single right-pointing angle quotation mark
        ('\u{02BA}', "\""), // modifier letter double prime
        ('\u{02EE}', "\""), // modifier letter double apostrophe
        ('\u{201F}', "\""), // double high-reversed-9 quotation mark
        ('\u{275D}', "\""), // heavy double turned comma quotation mark ornament
        ('\u{275E}', "\""), // heavy double comma quotation mark ornament
        ('\u{301D}', "\""), // reversed double prime quotation mark
        ('\u{FF02}', "\""), // fullwidth quotation mark
        ('\u{02BB}', "'"),  // modifier letter turned comma
        ('\u{02C8}', "'"),  // modifier letter vertical line
        ('\u{02BC}', "'"),  // modifier letter apostrophe
        ('\u{02BD}', "'"),  // modifier letter reversed comma
        ('\u{02B9}', "'"),  // modifier letter prime
        ('\u{201B}', "'"),  // single high-reversed-9 quotation mark
        ('\u{FF07}', "'"),  // fullwidth apostrophe
        ('\u{00B4}', "'"),  // acute accent
        ('\u{02CA}', "'"),  // modifier letter acute accent
        ('\u{0060}', "'"),  // grave accent
        ('\u{02CB}', "'"),  // modifier letter grave accent
        ('\u{275B}', "'"),  // heavy single turned comma quotation mark ornament
        ('\u{275C}', "'"),  // heavy single comma quotation mark ornament
        ('\u{201A}', ","),  // single low-9 quotation mark
        ('\u{201E}', "\""), // double low quotation mark
        // Dashes and lines
        ('\u{2014}', "-"), // em dash
        ('\u{2013}', "-"), // en dash
        ('\u{2015}', "-"), // horizontal bar
        ('\u{2010}', "-"), // hyphen
        ('\u{2043}', "-"), // hyphen bullet
        ('\u{2017}', "_"), // double low line
        ('\u{23BC}', "-"), // horizontal scan line-7
        ('\u{23BD}', "-"), // horizontal scan line-9
        ('\u{FE63}', "-"), // small hyphen-minus
        ('\u{FF0D}', "-"), // fullwidth hyphen-minus
        // Slashes and division
        ('\u{00F7}', "/"),  // division sign
        ('\u{29F8}', "/"),  // big solidus
        ('\u{2044}', "/"),  // fraction slash
        ('\u{2215}', "/"),  // division slash
        ('\u{FF0F}', "/"),  // fullwidth solidus
        ('\u{29F9}', "\\"), // big reverse solidus
        ('\u{29F5}', "\\"), // reverse solidus operator
        ('\u{FE68}', "\\"), // small reverse solidus
        ('\u{FF3C}', "\\"), // fullwidth reverse solidus
        // Underscores and vertical lines
        ('\u{0332}', "_"), // combining low line
        ('\u{FF3F}', "_"), // fullwidth low line
        ('\u{20D2}', "|"), // combining long vertical line overlay
        ('\u{20D3}', "|"), // combining short vertical line overlay
        ('\u{2223}', "|"), // divides
        ('\u{FF5C}', "|"), // fullwidth vertical line
        ('\u{23B8}', "|"), // left vertical box line
        ('\u{23B9}', "|"), // right vertical box line
        ('\u{23D0}', "|"), // vertical line extension
        ('\u{239C}', "|"), // left parenthesis extension
        ('\u{239F}', "|"), // right parenthesis extension
        // Fractions
        ('\u{00BC}', "1/4"), // vulgar fraction one quarter
        ('\u{00BD}', "1/2"), // vulgar fraction one half
        ('\u{00BE}', "3/4"), // vulgar fraction three quarters
        // Punctuation marks
        ('\u{2026}', "..."), // horizontal ellipsis
        ('\u{2022}', "*"),   // bullet
        ('\u{203C}', "!!"),  // double exclamation mark
        ('\u{204E}', "*"),   // low asterisk
        ('\u{2217}', "*"),   // asterisk operator
        ('\u{229B}', "*"),   // circled asterisk operator
        ('\u{2722}', "*"),   // four teardrop-spoked asterisk
        ('\u{2723}', "*"),   // four balloon-spoked asterisk
        ('\u{2724}', "*"),   // heavy four balloon-spoked asterisk
        ('\u{2725}', "*"),   // four club-spoked asterisk
        ('\u{2731}', "*"),   // heavy asterisk
        ('\u{2732}', "*"),   // open center asterisk
        ('\u{2733}', "*"),   // eight spoked asterisk
        ('\u{273A}', "*"),   // sixteen pointed asterisk
        ('\u{273B}', "*"),   // teardrop-spoked asterisk
        ('\u{273C}', "*"),   // open center teardrop-spoked asterisk
        ('\u{273D}', "*"),   // heavy teardrop-spoked asterisk
        ('\u{2743}', "*"),   // heavy teardrop-spoked pinwheel asterisk
        ('\u{2749}', "*"),   // balloon-spoked asterisk
        ('\u{274A}', "*"),   // eight teardrop-spoked propeller asterisk
        ('\u{274B}', "*"),   // heavy eight teardrop-spoked propeller asterisk
        ('\u{29C6}', "*"),   // squared asterisk
        ('\u{FE61}', "*"),   // small asterisk
        ('\u{FF0A}', "*"),   // fullwidth asterisk
        // Fullwidth punctuation and symbols
        ('\u{FE6B}', "@"), // small commercial at sign
        ('\u{FF20}', "@"), // fullwidth commercial at sign
        ('\u{FE69}', "$"), // small dollar sign
        ('\u{FF04}', "$"), // fullwidth dollar sign
        ('\u{01C3}', "!"), // Latin letter retroflex click
        ('\u{FE15}', "!"), // presentation form for vertical exclamation mark
        ('\u{FE57}', "!"), // small exclamation mark
        ('\u{FF01}', "!"), // fullwidth exclamation mark
        ('\u{FE5F}', "#"), // small number sign
        ('\u{FF03}', "#"), // fullwidth number sign
        ('\u{FE6A}', "%"), // small percent sign
        ('\u{FF05}', "%"), // fullwidth percent sign
        ('\u{FE60}', "&"), // small ampersand
        ('\u{FF06}', "&"), // fullwidth ampersand
        ('\u{FE50}', ","), // small comma
        ('\u{3001}', ","), // ideographic comma
        ('\u{FE51}', ","), // small ideographic comma
        ('\u{FF0C}', ","), // fullwidth comma
        ('\u{FF64}', ","), // halfwidth ideographic comma
        ('\u{3002}', "."), // ideographic full stop
        ('\u{FE52}', "."), // small full stop
        ('\u{FF0E}', "."), // fullwidth full stop
        ('\u{FF61}', "."), // halfwidth ideographic full stop
        ('\u{02D0}', ":"), // modifier letter triangular colon
        ('\u{02F8}', ":"), // modifier letter raised colon
        ('\u{2982}', ":"), // z notation type colon
        ('\u{A789}', ":"), // modifier letter colon
        ('\u{FE13}', ":"), // presentation form for vertical colon
        ('\u{FF1A}', ":"), // fullwidth colon
        ('\u{204F}', ";"), // reversed semicolon
        ('\u{FE14}', ";"), // presentation form for vertical semicolon
        ('\u{FE54}', ";"), // small semicolon
        ('\u{FF1B}', ";"), // fullwidth semicolon
        ('\u{FE64}', "<"), // small less-than sign
        ('\u{FF1C}', "<"), // fullwidth less-than sign
        ('\u{FE65}', ">"), // small greater-than sign
        ('\u{FF1E}', ">"), // fullwidth greater-than sign
        ('\u{FE16}', "?"), // presentation form for vertical question mark
        ('\u{FE56}', "?"), // small question mark
        ('\u{FF1F}', "?"), // fullwidth question mark
        // Parentheses and brackets
        ('\u{2768}', "("), // medium left parenthesis ornament
        ('\u{276A}', "("), // medium flattened left parenthesis ornament
        ('\u{FE59}', "("), // small left parenthesis
        ('\u{FF08}', "("), // fullwidth left parenthesis
        ('\u{27EE}', "("), // mathematical left flattened parenthesis
        ('\u{2985}', "("), // left white parenthesis
        ('\u{2769}', ")"), // medium right parenthesis ornament
        ('\u{276B}', ")"), // medium flattened right parenthesis ornament
        ('\u{FE5A}', ")"), // small right parenthesis
        ('\u{FF09}', ")"), // fullwidth right parenthesis
        ('\u{27EF}', ")"), // mathematical right flattened parenthesis
        ('\u{2986}', ")"), // right white parenthesis
        ('\u{2774}', "{"), // medium left curly bracket ornament
        ('\u{FE5B}', "{"), // small left curly bracket
        ('\u{FF5B}', "{"), // fullwidth left curly bracket
        ('\u{2775}', "}"), // medium right curly bracket ornament
        ('\u{FE5C}', "}"), // small right curly bracket
        ('\u{FF5D}', "}"), // fullwidth right curly bracket
        ('\u{FF3B}', "["), // fullwidth left square bracket
        ('\u{FF3D}', "]"), // fullwidth right square bracket
        // Plus and other operators
        ('\u{02D6}', "+"), // modifier letter plus sign
        ('\u{FE62}', "+"), // small plus sign
        ('\u{FF0B}', "+"), // fullwidth plus sign
        // Circumflex and tilde
        ('\u{02C6}', "^"), // modifier letter circumflex accent
        ('\u{0302}', "^"), // combining circumflex accent
        ('\u{FF3E}', "^"), // fullwidth circumflex accent
        ('\u{1DCD}', "^"), // combining double circumflex above
        ('\u{02DC}', "~"), // small tilde
        ('\u{02F7}', "~"), // modifier letter low tilde
        ('\u{0303}', "~"), // combining tilde
        ('\u{0330}', "~"), // combining tilde below
        ('\u{0334}', "~"), // combining tilde overlay
        ('\u{223C}', "~"), // tilde operator
        ('\u{FF5E}', "~"), // fullwidth tilde
        // Fullwidth digits
        ('\u{FF10}', "0"),
        ('\u{FF11}', "1"),
        ('\u{FF12}', "2"),
        ('\u{FF13}', "3"),
        ('\u{FF14}', "4"),
        ('\u{FF15}', "5"),
        ('\u{FF16}', "6"),
        ('\u{FF17}', "7"),
        ('\u{FF18}', "8"),
        ('\u{FF19}', "9"),
        // Fullwidth uppercase letters
        ('\u{FF21}', "A"),
        ('\u{FF22}', "B"),
        ('\u{FF23}', "C"),
        ('\u{FF24}', "D"),
        ('\u{FF25}', "E"),
        ('\u{FF26}', "F"),
        ('\u{FF27}', "G"),
        ('\u{FF28}', "H"),
        ('\u{FF29}', "I"),
        ('\u{FF2A}', "J"),
        ('\u{FF2B}', "K"),
        ('\u{FF2C}', "L"),
        ('\u{FF2D}', "M"),
        ('\u{FF2E}', "N"),
        ('\u{FF2F}', "O"),
        ('\u{FF30}', "P"),
        ('\u{FF31}', "Q"),
        ('\u{FF32}', "R"),
        ('\u{FF33}', "S"),
        ('\u{FF34}', "T"),
        ('\u{FF35}', "U"),
        ('\u{FF36}', "V"),
        ('\u{FF37}', "W"),
        ('\u{FF38}', "X"),
        ('\u{FF39}', "Y"),
        ('\u{FF3A}', "Z"),
        // Small capital letters (fold to regular capitals)
        ('\u{1D00}', "A"),
        ('\u{0299}', "B"),
        ('\u{1D04}', "C"),
        ('\u{1D05}', "D"),
        ('\u{1D07}', "E"),
        ('\u{A730}', "F"),
        ('\u{0262}', "G"),
        ('\u{029C}', "H"),
        ('\u{026A}', "I"),
        ('\u{1D0A}', "J"),
        ('\u{1D0B}', "K"),
        ('\u{029F}', "L"),
        ('\u{1D0D}', "M"),
        ('\u{0274}', "N"),
        ('\u{1D0F}', "O"),
        ('\u{1D18}', "P"),
        ('\u{0280}', "R"),
        ('\u{A731}', "S"),
        ('\u{1D1B}', "T"),
        ('\u{1D1C}', "U"),
        ('\u{1D20}', "V"),
        ('\u{1D21}', "W"),
        ('\u{028F}', "Y"),
        ('\u{1D22}', "Z"),
        // Spaces and whitespace
        ('\u{00A0}', " "), // no-break space
        ('\u{2000}', " "), // en quad
        ('\u{2001}', " "), // em quad
        ('\u{2002}', " "), // en space
        ('\u{2003}', " "), // em space
        ('\u{2004}', " "), // three-per-em space
        ('\u{2005}', " "), // four-per-em space
        ('\u{2006}', " "), // six-per-em space
        ('\u{2007}', " "), // figure space
        ('\u{2008}', " "), // punctuation space
        ('\u{2009}', " "), // thin space
        ('\u{200A}', " "), // hair space
        ('\u{200B}', ""),  // zero width space (removed)
        ('\u{202F}', " "), // narrow no-break space
        ('\u{205F}', " "), // medium mathematical space
        ('\u{2028}', " "), // line separator
        ('\u{2029}', " "), // paragraph separator
        ('\u{2060}', ""),  // word joiner (removed)
        ('\u{3000}', " "), // ideographic space
        ('\u{FEFF}', ""),  // zero width no-break space (removed)
        // Symbol expansions
        ('\u{2122}', "TM"),  // trademark
        ('\u{00A9}', "(C)"), // copyright
        ('\u{00AE}', "(R)"), // registered
        ('\u{00B0}', "deg"), // degree sign
        ('\u{2264}', "<="),  // less-than or equal to
        ('\u{2265}', ">="),  // greater-than or equal to
        ('\u{2260}', "!="),  // not equal to
        ('\u{00B1}', "+/-"), // plus-minus sign
    ];

    table.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::is_gsm_char;

    #[test]
    fn test_quote_family() {
        assert_eq!(lookup('\u{201C}'), Some("\""));
        assert_eq!(lookup('\u{201D}'), Some("\""));
        assert_eq!(lookup('\u{2018}'), Some("'"));
        assert_eq!(lookup('\u{2019}'), Some("'"));
        assert_eq!(lookup('\u{00AB}'), Some("\""));
        assert_eq!(lookup('`'), Some("'"));
        assert_eq!(lookup('\u{201A}'), Some(","));
    }

    #[test]
    fn test_dash_family() {
        for ch in ['\u{2014}', '\u{2013}', '\u{2015}', '\u{2010}', '\u{FF0D}'] {
            assert_eq!(lookup(ch), Some("-"), "dash variant {ch:?}");
        }
    }

    #[test]
    fn test_expansions() {
        assert_eq!(lookup('\u{00BC}'), Some("1/4"));
        assert_eq!(lookup('\u{00BD}'), Some("1/2"));
        assert_eq!(lookup('\u{00BE}'), Some("3/4"));
        assert_eq!(lookup('\u{2026}'), Some("..."));
        assert_eq!(lookup('\u{203C}'), Some("!!"));
        assert_eq!(lookup('\u{2122}'), Some("TM"));
        assert_eq!(lookup('\u{00A9}'), Some("(C)"));
        assert_eq!(lookup('\u{00AE}'), Some("(R)"));
        assert_eq!(lookup('\u{00B0}'), Some("deg"));
        assert_eq!(lookup('\u{2264}'), Some("<="));
        assert_eq!(lookup('\u{2265}'), Some(">="));
        assert_eq!(lookup('\u{2260}'), Some("!="));
        assert_eq!(lookup('\u{00B1}'), Some("+/-"));
    }

    #[test]
    fn test_fullwidth_forms() {
        assert_eq!(lookup('\u{FF10}'), Some("0"));
        assert_eq!(lookup('\u{FF19}'), Some("9"));
        assert_eq!(lookup('\u{FF21}'), Some("A"));
        assert_eq!(lookup('\u{FF3A}'), Some("Z"));
        assert_eq!(lookup('\u{FF01}'), Some("!"));
        assert_eq!(lookup('\u{FF5B}'), Some("{"));
    }

    #[test]
    fn test_small_capitals() {
        assert_eq!(lookup('\u{1D00}'), Some("A"));
        assert_eq!(lookup('\u{0262}'), Some("G"));
        assert_eq!(lookup('\u{1D22}'), Some("Z"));
    }

    #[test]
    fn test_whitespace_family() {
        for ch in '\u{2000}'..='\u{200A}' {
            assert_eq!(lookup(ch), Some(" "), "space variant {ch:?}");
        }
        assert_eq!(lookup('\u{00A0}'), Some(" "));
        assert_eq!(lookup('\u{3000}'), Some(" "));
        // Zero-width characters vanish entirely.
        assert_eq!(lookup('\u{200B}'), Some(""));
        assert_eq!(lookup('\u{2060}'), Some(""));
        assert_eq!(lookup('\u{FEFF}'), Some(""));
    }

    #[test]
    fn test_keys_disjoint_from_gsm_alphabet() {
        let (table, _) = &*SUBST_TABLES;
        for ch in table.keys() {
            assert!(!is_gsm_char(*ch), "GSM-safe key must not be remapped: {ch:?}");
        }
    }

    #[test]
    fn test_replacements_are_gsm_safe() {
        let (table, _) = &*SUBST_TABLES;
        for (ch, replacement) in table {
            for out in replacement.chars() {
                assert!(is_gsm_char(out), "replacement for {ch:?} has non-GSM {out:?}");
            }
        }
    }

    #[test]
    fn test_preserve_set_outside_gsm() {
        for ch in default_preserve_set() {
            assert!(!is_gsm_char(*ch));
            assert_eq!(lookup(*ch), None, "preserve candidate must not be remapped: {ch:?}");
        }
    }
}
