//! # Pure System Provider — Checksum Computation and Validation
//!
//! Defines `PureSystemProvider`, the single parameterized implementation of
//! the ISO 7064 pure-system algorithm. The five standard systems in
//! [`crate::system`] are parameter sets for this one type; custom systems
//! construct through [`PureSystemProvider::new`] with the same validation.
//!
//! ## Algorithm
//!
//! Values are uppercased, then walked left to right accumulating
//! `acc = (acc + digit_value) * radix mod modulus`, where a character's
//! digit value is its position in the character set. Double-check-digit
//! systems apply one extra `acc = acc * radix mod modulus` pass after the
//! walk. The checksum is `(modulus - acc + 1) mod modulus` and indexes back
//! into the character set — directly for a single check character, or as
//! `first * radix + second` for two.
//!
//! ## Invariant
//!
//! A provider is immutable after construction and holds no interior
//! mutability, so one instance may be shared across any number of threads.
//! Every operation is a pure function of the provider's parameters and the
//! input string. Accumulation runs in `u64`: with `modulus` and `radix`
//! bounded by `u32`, `(modulus - 1 + set_len) * radix` cannot overflow.

use serde::{Deserialize, Serialize};

use crate::charset::CharacterSet;
use crate::error::Iso7064Error;

/// An ISO 7064 pure-system check-digit provider.
///
/// Stores its four parameters verbatim and exposes the three value
/// operations: [`compute_check_digit`], [`compute`], and [`is_valid`].
/// Malformed input is always reported as an error, never silently folded
/// into a `false` or empty result — callers that want a boolean-only
/// answer must apply that coercion themselves at their own boundary.
///
/// [`compute_check_digit`]: PureSystemProvider::compute_check_digit
/// [`compute`]: PureSystemProvider::compute
/// [`is_valid`]: PureSystemProvider::is_valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PureSystemProvider {
    modulus: u32,
    radix: u32,
    double_check_digit: bool,
    character_set: CharacterSet,
}

impl PureSystemProvider {
    /// Construct a provider from raw parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Iso7064Error::InvalidConfiguration`] when `modulus` or
    /// `radix` is zero, or when `character_set` is empty or
    /// whitespace-only.
    pub fn new(
        modulus: u32,
        radix: u32,
        double_check_digit: bool,
        character_set: &str,
    ) -> Result<Self, Iso7064Error> {
        Self::from_parts(
            modulus,
            radix,
            double_check_digit,
            CharacterSet::new(character_set)?,
        )
    }

    /// Construct a provider from an already-built [`CharacterSet`].
    ///
    /// # Errors
    ///
    /// Returns [`Iso7064Error::InvalidConfiguration`] when `modulus` or
    /// `radix` is zero.
    pub fn from_parts(
        modulus: u32,
        radix: u32,
        double_check_digit: bool,
        character_set: CharacterSet,
    ) -> Result<Self, Iso7064Error> {
        if modulus == 0 {
            return Err(Iso7064Error::InvalidConfiguration {
                reason: "modulus must be greater than zero".to_string(),
            });
        }
        if radix == 0 {
            return Err(Iso7064Error::InvalidConfiguration {
                reason: "radix must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            modulus,
            radix,
            double_check_digit,
            character_set,
        })
    }

    /// Crate-internal constructor for the standard system table, whose
    /// parameters are statically known to satisfy the construction rules.
    pub(crate) fn from_validated(
        modulus: u32,
        radix: u32,
        double_check_digit: bool,
        character_set: CharacterSet,
    ) -> Self {
        Self {
            modulus,
            radix,
            double_check_digit,
            character_set,
        }
    }

    /// The pure system modulus.
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// The pure system radix.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Whether the check digit occupies two trailing characters.
    pub fn is_double_check_digit(&self) -> bool {
        self.double_check_digit
    }

    /// The configured character set.
    pub fn character_set(&self) -> &CharacterSet {
        &self.character_set
    }

    /// Number of check-digit positions: 2 for double systems, else 1.
    pub fn check_digit_len(&self) -> usize {
        if self.double_check_digit {
            2
        } else {
            1
        }
    }

    /// Compute the check digit(s) of `value`.
    ///
    /// The checksum runs over the entire given value, uppercased. The
    /// returned string has length 1 (single systems) or 2 (double systems)
    /// and is uppercase.
    ///
    /// # Errors
    ///
    /// [`Iso7064Error::InvalidInput`] when `value` is blank or not longer
    /// than the number of check-digit positions;
    /// [`Iso7064Error::IllegalCharacter`] when an uppercased character is
    /// absent from the character set;
    /// [`Iso7064Error::CheckDigitOutOfRange`] when the checksum indexes
    /// past the character set (a modulus/radix/alphabet mismatch).
    pub fn compute_check_digit(&self, value: &str) -> Result<String, Iso7064Error> {
        let upper = self.validate_input(value)?;
        self.check_digits(&upper)
    }

    /// Compute the check digit(s) of `value` and append them.
    ///
    /// Returns `uppercase(value)` followed by its check digit(s).
    ///
    /// # Errors
    ///
    /// Same conditions as [`PureSystemProvider::compute_check_digit`].
    pub fn compute(&self, value: &str) -> Result<String, Iso7064Error> {
        let upper = self.validate_input(value)?;
        let digits = self.check_digits(&upper)?;
        Ok(format!("{upper}{digits}"))
    }

    /// Check whether the trailing characters of `value` are its correct
    /// check digit(s).
    ///
    /// The value is uppercased and split into a payload and the presented
    /// trailing check characters; the check digits are recomputed over the
    /// payload and compared. Returns `Ok(false)` only for well-formed but
    /// arithmetically mismatched values.
    ///
    /// # Errors
    ///
    /// [`Iso7064Error::InvalidInput`] when `value` is blank or not longer
    /// than the number of check-digit positions — validating a too-short
    /// value is a usage error, not a `false` result. An
    /// [`Iso7064Error::IllegalCharacter`] in the payload propagates as an
    /// error rather than returning `Ok(false)`.
    pub fn is_valid(&self, value: &str) -> Result<bool, Iso7064Error> {
        let upper = self.validate_input(value)?;
        let chars: Vec<char> = upper.chars().collect();
        let (payload, presented) = chars.split_at(chars.len() - self.check_digit_len());
        let payload: String = payload.iter().collect();
        let expected = self.check_digits(&payload)?;
        Ok(presented.iter().collect::<String>() == expected)
    }

    /// Reject blank and too-short values, returning the uppercased input.
    fn validate_input(&self, value: &str) -> Result<String, Iso7064Error> {
        if value.trim().is_empty() {
            return Err(Iso7064Error::InvalidInput {
                reason: "value cannot be empty or whitespace".to_string(),
            });
        }
        let required = self.check_digit_len();
        if value.chars().count() <= required {
            return Err(Iso7064Error::InvalidInput {
                reason: format!("value length should be greater than {required}"),
            });
        }
        Ok(value.to_uppercase())
    }

    /// The checksum walk. `value` must already be uppercased; length is
    /// not gated here because [`PureSystemProvider::is_valid`] recomputes
    /// over a payload that may be shorter than the public minimum.
    fn check_digits(&self, value: &str) -> Result<String, Iso7064Error> {
        if value.trim().is_empty() {
            return Err(Iso7064Error::InvalidInput {
                reason: "value cannot be empty or whitespace".to_string(),
            });
        }

        let modulus = u64::from(self.modulus);
        let radix = u64::from(self.radix);

        let mut acc: u64 = 0;
        for (position, character) in value.chars().enumerate() {
            let index = self.character_set.index_of(character).ok_or(
                Iso7064Error::IllegalCharacter {
                    character,
                    position,
                },
            )?;
            acc = (acc + index as u64) * radix % modulus;
        }
        if self.double_check_digit {
            acc = acc * radix % modulus;
        }
        let checksum = (modulus - acc + 1) % modulus;

        // checksum < modulus <= u32::MAX, so the usize casts are lossless.
        if self.double_check_digit {
            let second = checksum % radix;
            let first = (checksum - second) / radix;
            let first = self.char_for(first as usize)?;
            let second = self.char_for(second as usize)?;
            Ok(format!("{first}{second}"))
        } else {
            Ok(self.char_for(checksum as usize)?.to_string())
        }
    }

    fn char_for(&self, index: usize) -> Result<char, Iso7064Error> {
        self.character_set
            .char_at(index)
            .ok_or(Iso7064Error::CheckDigitOutOfRange {
                index,
                set_len: self.character_set.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mod11() -> PureSystemProvider {
        PureSystemProvider::new(11, 2, false, "0123456789X").unwrap()
    }

    fn mod97() -> PureSystemProvider {
        PureSystemProvider::new(97, 10, true, "0123456789").unwrap()
    }

    #[test]
    fn test_new_stores_parameters_verbatim() {
        let provider = PureSystemProvider::new(1271, 36, true, "0123456789ABCDEFGHIJKLMNOPQRSTUVWXZY")
            .expect("standard parameters should construct");
        assert_eq!(provider.modulus(), 1271);
        assert_eq!(provider.radix(), 36);
        assert!(provider.is_double_check_digit());
        assert_eq!(
            provider.character_set().to_string(),
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXZY"
        );
    }

    #[test]
    fn test_new_rejects_zero_modulus() {
        assert!(matches!(
            PureSystemProvider::new(0, 2, false, "0123456789X"),
            Err(Iso7064Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_new_rejects_zero_radix() {
        assert!(matches!(
            PureSystemProvider::new(11, 0, false, "0123456789X"),
            Err(Iso7064Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_new_rejects_blank_character_set() {
        assert!(PureSystemProvider::new(11, 2, false, "").is_err());
        assert!(PureSystemProvider::new(11, 2, false, "     ").is_err());
    }

    #[test]
    fn test_compute_check_digit_single() {
        assert_eq!(
            mod11().compute_check_digit("101100002683118740").unwrap(),
            "7"
        );
    }

    #[test]
    fn test_compute_check_digit_double() {
        assert_eq!(
            mod97().compute_check_digit("99991234567890121414").unwrap(),
            "90"
        );
    }

    #[test]
    fn test_compute_appends_to_uppercased_value() {
        let provider =
            PureSystemProvider::new(1271, 36, true, "0123456789ABCDEFGHIJKLMNOPQRSTUVWXZY")
                .unwrap();
        assert_eq!(provider.compute("iso79").unwrap(), "ISO793W");
        assert_eq!(provider.compute("ISO79").unwrap(), "ISO793W");
    }

    #[test]
    fn test_is_valid_true_and_false() {
        let provider = mod11();
        assert!(provider.is_valid("1011000026831187407").unwrap());
        assert!(!provider.is_valid("1011000026831187401").unwrap());
    }

    #[test]
    fn test_is_valid_case_insensitive() {
        let provider =
            PureSystemProvider::new(1271, 36, true, "0123456789ABCDEFGHIJKLMNOPQRSTUVWXZY")
                .unwrap();
        assert!(provider.is_valid("iso793w").unwrap());
    }

    #[test]
    fn test_blank_input_rejected_by_every_operation() {
        let provider = mod11();
        for value in ["", "   "] {
            assert!(matches!(
                provider.compute_check_digit(value),
                Err(Iso7064Error::InvalidInput { .. })
            ));
            assert!(matches!(
                provider.compute(value),
                Err(Iso7064Error::InvalidInput { .. })
            ));
            assert!(matches!(
                provider.is_valid(value),
                Err(Iso7064Error::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_too_short_input_rejected() {
        // Single system: length must exceed 1; double: must exceed 2.
        assert!(matches!(
            mod11().is_valid("7"),
            Err(Iso7064Error::InvalidInput { .. })
        ));
        assert!(matches!(
            mod97().is_valid("90"),
            Err(Iso7064Error::InvalidInput { .. })
        ));
        assert!(matches!(
            mod97().compute("90"),
            Err(Iso7064Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_minimal_length_double_payload_is_legal() {
        // A 3-character value under a double system validates a 1-character
        // payload; the payload walk has no length gate.
        let provider = mod97();
        let computed = provider.compute("123").unwrap();
        assert!(provider.is_valid(&computed).unwrap());
    }

    #[test]
    fn test_whitespace_payload_propagates_invalid_input() {
        // "  7" passes the outer blank/length gates but its payload is all
        // whitespace, which the recomputation rejects.
        assert!(matches!(
            mod11().is_valid("  7"),
            Err(Iso7064Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_illegal_character_reports_position() {
        let err = mod11().compute_check_digit("2011ABCD28343021301").unwrap_err();
        assert_eq!(
            err,
            Iso7064Error::IllegalCharacter {
                character: 'A',
                position: 4
            }
        );
    }

    #[test]
    fn test_illegal_character_propagates_out_of_is_valid() {
        // Never coerced to Ok(false) inside the library.
        assert!(matches!(
            mod11().is_valid("2011ABCD28343021301"),
            Err(Iso7064Error::IllegalCharacter { .. })
        ));
    }

    #[test]
    fn test_illegal_character_detected_after_uppercasing() {
        // Lowercase input normalizes into the set before lookup, so only
        // genuinely foreign characters are illegal.
        let provider =
            PureSystemProvider::new(37, 2, false, "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*")
                .unwrap();
        assert_eq!(
            provider.compute("g123489654321").unwrap(),
            "G123489654321Y"
        );
        assert!(matches!(
            provider.compute("123ABCD<>!X"),
            Err(Iso7064Error::IllegalCharacter { character: '<', position: 7 })
        ));
    }

    #[test]
    fn test_check_digit_out_of_range_blames_configuration() {
        // Modulus 12 over an 11-character set: "01" accumulates to 2, so
        // the checksum is (12 - 2 + 1) % 12 = 11, one past the set.
        let provider = PureSystemProvider::new(12, 2, false, "0123456789X").unwrap();
        assert_eq!(
            provider.compute_check_digit("01").unwrap_err(),
            Iso7064Error::CheckDigitOutOfRange {
                index: 11,
                set_len: 11
            }
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let provider = mod97();
        let json = serde_json::to_string(&provider).unwrap();
        let parsed: PureSystemProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, provider);
    }

    #[test]
    fn test_provider_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PureSystemProvider>();
    }
}
