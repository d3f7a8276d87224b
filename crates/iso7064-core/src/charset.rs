//! # Character Set — Ordered Alphabet of Digit Values
//!
//! Defines `CharacterSet`, the ordered alphabet a pure system computes
//! over. A character's zero-based position in the set is its numeric digit
//! value, and the computed checksum indexes back into the same set to
//! produce the check characters.
//!
//! ## Invariant
//!
//! The inner storage is private and the validating [`CharacterSet::new`]
//! constructor is the only public construction path, so every
//! `CharacterSet` in the program is non-empty and not whitespace-only.
//! Character order is preserved verbatim — never sorted, never
//! deduplicated. The Mod 1271 Radix 36 standard set ends `...UVWXZY`
//! (Z before Y), and reordering it would change every computed check digit.

use serde::{Deserialize, Serialize};

use crate::error::Iso7064Error;

/// The ordered alphabet of an ISO 7064 pure system.
///
/// Positions are zero-based: in `"0123456789X"`, `'0'` has value 0 and
/// `'X'` has value 10. Duplicate characters are not rejected; lookup
/// returns the first occurrence, matching the reference behavior.
///
/// Serializes as its plain string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterSet(Vec<char>);

impl CharacterSet {
    /// Construct a character set from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`Iso7064Error::InvalidConfiguration`] when `chars` is empty
    /// or consists only of whitespace.
    pub fn new(chars: &str) -> Result<Self, Iso7064Error> {
        if chars.trim().is_empty() {
            return Err(Iso7064Error::InvalidConfiguration {
                reason: "character set cannot be empty or whitespace".to_string(),
            });
        }
        Ok(Self(chars.chars().collect()))
    }

    /// Crate-internal constructor for statically known-good alphabets.
    ///
    /// Callers must guarantee `chars` is non-blank; the standard system
    /// table is the only user.
    pub(crate) fn from_static(chars: &str) -> Self {
        Self(chars.chars().collect())
    }

    /// Zero-based position of `character` in the set, i.e. its digit value.
    /// Returns the first occurrence.
    pub fn index_of(&self, character: char) -> Option<usize> {
        self.0.iter().position(|&c| c == character)
    }

    /// The character at digit value `index`, the inverse of [`index_of`].
    ///
    /// [`index_of`]: CharacterSet::index_of
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the constructor rejects empty sets. Present for API
    /// symmetry with `len()`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The characters in set order.
    pub fn as_chars(&self) -> &[char] {
        &self.0
    }
}

impl std::fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for CharacterSet {
    type Error = Iso7064Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CharacterSet> for String {
    fn from(value: CharacterSet) -> Self {
        value.0.into_iter().collect()
    }
}
