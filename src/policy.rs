//! Segment-limit enforcement.
//!
//! When a caller declares a maximum acceptable segment count, the policy
//! decides what happens to text that exceeds it: reject the request, truncate
//! at a safe boundary, or let it through for the caller to warn about. The
//! three outcomes are a closed set of variants; `Rejected` is a designated
//! result the caller must treat as a validation failure, not an error raised
//! by this crate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::segments::{analyze, SegmentAnalysis, GSM7_MULTI, GSM7_SINGLE};

/// What to do when a message exceeds its segment budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentLimitAction {
    /// Refuse the message outright.
    Reject,
    /// Cut the message down to fit, preferring a word boundary.
    Truncate,
    /// Accept the message as-is; the caller surfaces an advisory.
    #[default]
    Warn,
}

/// Error parsing a segment-limit action name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown segment limit action: {input:?} (expected \"reject\", \"truncate\" or \"warn\")")]
pub struct ParseActionError {
    input: String,
}

impl FromStr for SegmentLimitAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "truncate" => Ok(Self::Truncate),
            "warn" => Ok(Self::Warn),
            _ => Err(ParseActionError {
                input: s.to_string(),
            }),
        }
    }
}

/// Outcome of segment-limit enforcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// Within budget, or over budget under [`SegmentLimitAction::Warn`]; the
    /// analysis carries the (possibly over-budget) segment count either way.
    Pass {
        text: String,
        analysis: SegmentAnalysis,
    },
    /// The text was cut down to fit the budget.
    Truncated {
        text: String,
        analysis: SegmentAnalysis,
        /// Length of the text before truncation, in scalar values.
        original_length: usize,
    },
    /// The text exceeds the budget and the caller asked for rejection.
    Rejected { analysis: SegmentAnalysis },
}

/// Apply a segment budget to converted text.
///
/// Runs segment analysis and passes text through when it fits. Over-budget
/// text is rejected, truncated (with a second analysis pass on the result),
/// or passed through unchanged for the caller to warn about, depending on
/// `action`.
///
/// # Example
///
/// ```rust
/// use gsm_sanitize::{enforce, PolicyOutcome, SegmentLimitAction};
///
/// let long = "word ".repeat(80);
/// match enforce(&long, 2, SegmentLimitAction::Truncate) {
///     PolicyOutcome::Truncated { text, original_length, .. } => {
///         assert!(text.ends_with("..."));
///         assert_eq!(original_length, 400);
///     }
///     outcome => panic!("expected truncation, got {outcome:?}"),
/// }
/// ```
pub fn enforce(text: &str, max_segments: usize, action: SegmentLimitAction) -> PolicyOutcome {
    let analysis = analyze(text);
    if analysis.segments <= max_segments {
        return PolicyOutcome::Pass {
            text: text.to_string(),
            analysis,
        };
    }

    match action {
        SegmentLimitAction::Reject => {
            info!(
                segments = analysis.segments,
                max_segments,
                encoding = %analysis.encoding,
                "message rejected: segment limit exceeded"
            );
            PolicyOutcome::Rejected { analysis }
        }
        SegmentLimitAction::Truncate => {
            let truncated = truncate_to_segments(text, max_segments);
            let new_analysis = analyze(&truncated);
            info!(
                from_length = text.chars().count(),
                to_length = truncated.chars().count(),
                segments = new_analysis.segments,
                "message truncated to fit segment limit"
            );
            PolicyOutcome::Truncated {
                original_length: text.chars().count(),
                text: truncated,
                analysis: new_analysis,
            }
        }
        SegmentLimitAction::Warn => {
            debug!(
                segments = analysis.segments,
                max_segments,
                "message exceeds segment preference; passing through"
            );
            PolicyOutcome::Pass {
                text: text.to_string(),
                analysis,
            }
        }
    }
}

/// Truncate a message to fit a segment budget, preferring a word boundary.
///
/// The character budget mirrors the GSM-7 segmenting arithmetic: 160 for a
/// single segment, then 153 per additional segment. The budget is applied in
/// characters even when the text would be UCS-2 encoded, which under-estimates
/// how aggressively Unicode-heavy text must be cut; kept for compatibility
/// with existing deployments.
///
/// Text already within the budget is returned unchanged. Otherwise the text
/// is cut three characters short of the budget to leave room for the `"..."`
/// suffix, backing up to the last space when that space falls within the
/// final 20% of the budget.
pub fn truncate_to_segments(text: &str, max_segments: usize) -> String {
    // Callers validate their limits; clamp so a zero cannot underflow here.
    let max_segments = max_segments.max(1);
    let max_chars = if max_segments == 1 {
        GSM7_SINGLE
    } else {
        GSM7_SINGLE + (max_segments - 1) * GSM7_MULTI
    };

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }

    // Leave room for the ellipsis.
    let mut cut = max_chars - 3;
    if let Some(last_space) = chars[..cut].iter().rposition(|&ch| ch == ' ') {
        if last_space as f64 > max_chars as f64 * 0.8 {
            cut = last_space;
        }
    }

    let mut truncated: String = chars[..cut].iter().collect();
    truncated.push_str("...");
    truncated
}
