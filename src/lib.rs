//! Unicode to GSM 03.38 sanitization with SMS segment accounting.
//!
//! SMS networks only guarantee delivery of the 7-bit GSM 03.38 repertoire;
//! anything else forces the whole message into UCS-2, which cuts the
//! per-segment capacity from 160 to 70 characters. This crate prepares text
//! for that reality: it classifies every character against the GSM alphabet,
//! folds Unicode look-alikes to GSM-safe replacements (smart quotes, dashes,
//! fullwidth forms, symbol expansions like `(C)` and `<=`), optionally keeps
//! a curated allow-list of marketing symbols despite the encoding cost,
//! computes the resulting segment count, and enforces a caller-declared
//! segment budget by passing, truncating, or rejecting the message.
//!
//! All operations are pure, synchronous functions over immutable input and
//! static lookup tables; the crate is freely callable from multiple threads.
//! It estimates segment counts only — it does not build packed 7-bit octets
//! or concatenation (UDH) headers, and it never performs network calls.
//!
//! # Example
//!
//! ```rust
//! use gsm_sanitize::{convert, enforce, PolicyOutcome, SegmentLimitAction};
//!
//! let outcome = convert("\u{201C}Sale\u{201D} \u{2014} 50% off\u{2026}");
//! assert_eq!(outcome.converted, "\"Sale\" - 50% off...");
//!
//! match enforce(&outcome.converted, 1, SegmentLimitAction::Reject) {
//!     PolicyOutcome::Pass { analysis, .. } => assert_eq!(analysis.segments, 1),
//!     outcome => panic!("unexpected {outcome:?}"),
//! }
//! ```
//!
//! A known quirk, kept for compatibility with existing deployments: encoding
//! detection tests the raw code-point range (ASCII) rather than true GSM
//! membership, so text containing only GSM-safe non-ASCII characters such as
//! `Δ` or `€` is counted under the tighter UCS-2 thresholds. Converting
//! first avoids the penalty.

pub mod charset;
pub mod convert;
pub mod policy;
pub mod segments;
pub mod substitution;

pub use charset::{classify, is_gsm_char, GsmClass};
pub use convert::{convert, convert_with_config, Conversion, ConvertConfig, Replacement};
pub use policy::{
    enforce, truncate_to_segments, ParseActionError, PolicyOutcome, SegmentLimitAction,
};
pub use segments::{analyze, Encoding, SegmentAnalysis};
pub use substitution::{default_preserve_set, lookup};
