//! # Error Types — Check-Digit Failure Taxonomy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Configuration errors are fatal to the construction attempt; there is
//!   no half-built provider to recover.
//! - Input errors always surface to the caller. The library never converts
//!   a malformed value into a `false` or empty result; that coercion is
//!   caller-side policy.
//! - Illegal characters carry their zero-based position for diagnostics.

use thiserror::Error;

/// Top-level error type for ISO 7064 check-digit operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Iso7064Error {
    /// Provider construction rejected: modulus or radix is zero, or the
    /// character set is empty or whitespace-only.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which parameter was rejected and why.
        reason: String,
    },

    /// Operation input rejected before computation: blank, or not longer
    /// than the number of check-digit positions.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Which constraint the value violated.
        reason: String,
    },

    /// A character of the (uppercased) input is absent from the configured
    /// character set.
    #[error("illegal character {character:?} at position {position}")]
    IllegalCharacter {
        /// The offending character, after uppercasing.
        character: char,
        /// Zero-based position in the uppercased input.
        position: usize,
    },

    /// The computed checksum indexes past the end of the character set.
    /// This blames the modulus/radix/alphabet combination, not the input:
    /// a pure system is only well-formed when every reachable checksum
    /// value maps to a character.
    #[error("check digit index {index} exceeds character set length {set_len}")]
    CheckDigitOutOfRange {
        /// The out-of-range character index.
        index: usize,
        /// Length of the configured character set.
        set_len: usize,
    },
}
