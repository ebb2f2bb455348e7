//! Unicode to GSM message conversion.
//!
//! Walks the input one scalar value at a time and rewrites everything the GSM
//! alphabet cannot carry, producing the sanitized text together with a record
//! of every substitution made. GSM-safe characters pass through untouched;
//! preserved characters pass through flagged; everything else goes through the
//! substitution table, then canonical decomposition, then a `?` placeholder.
//!
//! Conversion never fails: exotic input degrades to placeholders and
//! informational records rather than errors.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::charset::is_gsm_char;
use crate::segments::analyze;
use crate::substitution::{default_preserve_set, lookup};

/// Configuration options for message conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Keep preserve-list characters verbatim, at the cost of UCS-2 encoding.
    pub preserve_unicode: bool,
    /// When set, skip conversion entirely if the raw input already fits in
    /// this many segments.
    pub max_segments: Option<usize>,
    /// Deployment override of the built-in preserve list.
    pub preserve_chars: Option<HashSet<char>>,
}

impl ConvertConfig {
    /// Create a config with Unicode preservation enabled.
    pub fn preserving() -> Self {
        Self {
            preserve_unicode: true,
            ..Self::default()
        }
    }
}

/// One substitution performed during conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// The original character (or the `ALL_UNICODE` marker for the synthetic
    /// auto-preserve record).
    pub original: String,
    /// What was written to the output in its place.
    pub replacement: String,
    /// Zero-based position in the input, counted in scalar values. `None`
    /// only for the synthetic auto-preserve record.
    pub position: Option<usize>,
    /// The character was kept verbatim rather than substituted.
    pub preserved: bool,
    /// Optional human-readable context for the substitution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Result of one conversion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The sanitized output text.
    pub converted: String,
    /// Every substitution made, in input order.
    pub replacements: Vec<Replacement>,
    /// Input length in Unicode scalar values.
    pub original_length: usize,
    /// Output length in Unicode scalar values.
    pub converted_length: usize,
    /// Conversion was skipped because the raw input already fit the caller's
    /// segment budget.
    pub auto_preserved: bool,
}

/// Convert a message with default options (no preservation, no budget check).
///
/// # Example
///
/// ```rust
/// use gsm_sanitize::convert;
///
/// let outcome = convert("\u{201C}Hello\u{201D}");
/// assert_eq!(outcome.converted, "\"Hello\"");
/// assert_eq!(outcome.replacements.len(), 2);
/// ```
pub fn convert(text: &str) -> Conversion {
    convert_with_config(text, &ConvertConfig::default())
}

/// Convert a message to GSM-safe text.
///
/// When `max_segments` is set and the unmodified input already fits that
/// budget, substitution is skipped entirely and the input is returned
/// verbatim with a single synthetic record — a caller with a generous limit
/// never pays the readability cost of substitution.
///
/// Otherwise each character is handled in precedence order: GSM-safe
/// characters copy through silently; preserve-list characters (when enabled)
/// copy through with a flagged record; table entries append their
/// replacement; remaining characters fall back to canonical decomposition
/// with combining marks stripped, and finally to a `?` placeholder.
///
/// The output contains only GSM-safe characters unless preservation kept
/// some, which forces UCS-2 encoding downstream.
pub fn convert_with_config(text: &str, config: &ConvertConfig) -> Conversion {
    let original_length = text.chars().count();

    if let Some(max_segments) = config.max_segments {
        let raw = analyze(text);
        if raw.segments <= max_segments {
            debug!(
                segments = raw.segments,
                max_segments,
                "raw text fits the segment budget; skipping substitution"
            );
            return Conversion {
                converted: text.to_string(),
                replacements: vec![Replacement {
                    original: "ALL_UNICODE".to_string(),
                    replacement: "PRESERVED".to_string(),
                    position: None,
                    preserved: true,
                    note: Some(format!(
                        "all Unicode preserved - message fits in {} segment(s) (<= {} limit)",
                        raw.segments, max_segments
                    )),
                }],
                original_length,
                converted_length: original_length,
                auto_preserved: true,
            };
        }
    }

    let preserve_chars = config
        .preserve_chars
        .as_ref()
        .unwrap_or_else(|| default_preserve_set());

    let mut converted = String::with_capacity(text.len());
    let mut replacements = Vec::new();

    for (position, ch) in text.chars().enumerate() {
        if is_gsm_char(ch) {
            converted.push(ch);
        } else if config.preserve_unicode && preserve_chars.contains(&ch) {
            converted.push(ch);
            replacements.push(Replacement {
                original: ch.to_string(),
                replacement: ch.to_string(),
                position: Some(position),
                preserved: true,
                note: Some("preserved Unicode character (forces UCS-2 encoding)".to_string()),
            });
        } else if let Some(replacement) = lookup(ch) {
            converted.push_str(replacement);
            replacements.push(Replacement {
                original: ch.to_string(),
                replacement: replacement.to_string(),
                position: Some(position),
                preserved: false,
                note: None,
            });
        } else if let Some(base) = decompose_to_gsm(ch) {
            converted.push(base);
            replacements.push(Replacement {
                original: ch.to_string(),
                replacement: base.to_string(),
                position: Some(position),
                preserved: false,
                note: Some("canonical decomposition, combining marks stripped".to_string()),
            });
        } else {
            converted.push('?');
            replacements.push(Replacement {
                original: ch.to_string(),
                replacement: "?".to_string(),
                position: Some(position),
                preserved: false,
                note: Some("no GSM mapping available".to_string()),
            });
        }
    }

    let converted_length = converted.chars().count();
    Conversion {
        converted,
        replacements,
        original_length,
        converted_length,
        auto_preserved: false,
    }
}

/// Canonically decompose a character and strip its combining marks. Returns
/// the base character only when it differs from the input and is itself
/// GSM-safe; a decomposition that fails either test is treated the same as no
/// decomposition at all.
fn decompose_to_gsm(ch: char) -> Option<char> {
    let mut stripped = String::new();
    decompose_canonical(ch, |c| {
        if !is_combining_mark(c) {
            stripped.push(c);
        }
    });

    let mut chars = stripped.chars();
    match (chars.next(), chars.next()) {
        (Some(base), None) if base != ch && is_gsm_char(base) => Some(base),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsm_text_passes_through() {
        let text = "Hello World! {extended} €";
        let outcome = convert(text);
        assert_eq!(outcome.converted, text);
        assert!(outcome.replacements.is_empty());
        assert!(!outcome.auto_preserved);
        assert_eq!(outcome.original_length, outcome.converted_length);
    }

    #[test]
    fn test_smart_quotes() {
        let outcome = convert("\u{201C}World\u{201D}");
        assert_eq!(outcome.converted, "\"World\"");
        assert_eq!(outcome.replacements.len(), 2);
        assert_eq!(outcome.replacements[0].original, "\u{201C}");
        assert_eq!(outcome.replacements[0].replacement, "\"");
        assert_eq!(outcome.replacements[0].position, Some(0));
        assert!(!outcome.replacements[0].preserved);
        assert_eq!(outcome.replacements[1].position, Some(6));
    }

    #[test]
    fn test_multi_char_replacement_lengths() {
        let outcome = convert("\u{00BD} off\u{2026}");
        assert_eq!(outcome.converted, "1/2 off...");
        assert_eq!(outcome.original_length, 6);
        assert_eq!(outcome.converted_length, 10);
    }

    #[test]
    fn test_zero_width_removed() {
        let outcome = convert("a\u{200B}b\u{FEFF}c");
        assert_eq!(outcome.converted, "abc");
        assert_eq!(outcome.replacements.len(), 2);
        assert_eq!(outcome.replacements[0].replacement, "");
    }

    #[test]
    fn test_decomposition_fallback() {
        // 'á' is not in the GSM alphabet or the table, but NFD gives 'a'.
        let outcome = convert("á");
        assert_eq!(outcome.converted, "a");
        assert_eq!(outcome.replacements.len(), 1);
        assert!(outcome.replacements[0].note.is_some());
    }

    #[test]
    fn test_unmappable_becomes_placeholder() {
        let outcome = convert("汉");
        assert_eq!(outcome.converted, "?");
        assert_eq!(outcome.replacements[0].replacement, "?");
    }

    #[test]
    fn test_preserve_disabled_by_default() {
        let outcome = convert("Sale 🚀");
        assert_eq!(outcome.converted, "Sale ?");
    }

    #[test]
    fn test_preserve_enabled() {
        let outcome = convert_with_config("Sale 🚀", &ConvertConfig::preserving());
        assert_eq!(outcome.converted, "Sale 🚀");
        let record = &outcome.replacements[0];
        assert!(record.preserved);
        assert_eq!(record.original, record.replacement);
        assert_eq!(record.position, Some(5));
    }

    #[test]
    fn test_preserve_only_listed_chars() {
        // Preservation is an allow-list, not a blanket Unicode pass.
        let outcome = convert_with_config("🚀汉", &ConvertConfig::preserving());
        assert_eq!(outcome.converted, "🚀?");
    }

    #[test]
    fn test_custom_preserve_set() {
        let config = ConvertConfig {
            preserve_unicode: true,
            preserve_chars: Some(['汉'].into_iter().collect()),
            ..ConvertConfig::default()
        };
        let outcome = convert_with_config("🚀汉", &config);
        assert_eq!(outcome.converted, "?汉");
    }

    #[test]
    fn test_auto_preserve_within_budget() {
        let config = ConvertConfig {
            max_segments: Some(1),
            ..ConvertConfig::default()
        };
        let outcome = convert_with_config("Déjà vu \u{201C}quoted\u{201D}", &config);
        assert!(outcome.auto_preserved);
        assert_eq!(outcome.converted, "Déjà vu \u{201C}quoted\u{201D}");
        assert_eq!(outcome.replacements.len(), 1);
        let record = &outcome.replacements[0];
        assert!(record.preserved);
        assert_eq!(record.position, None);
        assert!(record.note.as_deref().unwrap().contains("1 segment(s)"));
    }

    #[test]
    fn test_auto_preserve_over_budget_converts() {
        // 100 Unicode chars need 2 UCS-2 segments, over a limit of 1.
        let text = "á".repeat(100);
        let config = ConvertConfig {
            max_segments: Some(1),
            ..ConvertConfig::default()
        };
        let outcome = convert_with_config(&text, &config);
        assert!(!outcome.auto_preserved);
        assert_eq!(outcome.converted, "a".repeat(100));
    }

    #[test]
    fn test_positions_count_scalar_values() {
        // The astral rocket occupies one input position, not two.
        let outcome = convert("🚀\u{2014}");
        assert_eq!(outcome.replacements[0].position, Some(0));
        assert_eq!(outcome.replacements[1].position, Some(1));
        assert_eq!(outcome.replacements[1].replacement, "-");
    }

    #[test]
    fn test_empty_input() {
        let outcome = convert("");
        assert_eq!(outcome.converted, "");
        assert!(outcome.replacements.is_empty());
        assert_eq!(outcome.original_length, 0);
    }

    #[test]
    fn test_reconversion_is_noop() {
        let first = convert("\u{201C}Hi\u{201D} \u{2014} 汉 ½");
        let second = convert(&first.converted);
        assert_eq!(second.converted, first.converted);
        assert!(second.replacements.is_empty());
    }
}
