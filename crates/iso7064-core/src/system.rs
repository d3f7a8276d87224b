//! # Standard Pure Systems — Single Source of Truth
//!
//! Defines the `PureSystem` enum with the five check-digit systems named
//! by ISO 7064. This is the one parameter table used across the workspace;
//! every `match` on `PureSystem` must be exhaustive, so adding a system
//! forces every consumer to handle it at compile time.
//!
//! ## Parameter fidelity
//!
//! The parameters reproduce the published systems exactly, including the
//! Mod 1271 Radix 36 alphabet ending `...UVWXZY` (Z before Y). That
//! ordering is a compatibility constraint: values checked by existing
//! deployments of these systems depend on it, and "fixing" it would change
//! every computed check digit.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::charset::CharacterSet;
use crate::error::Iso7064Error;
use crate::provider::PureSystemProvider;

/// The five standard ISO 7064 pure systems.
///
/// Each variant is a fixed parameter set for [`PureSystemProvider`]; call
/// [`PureSystem::provider`] for a ready-to-use instance. All standard
/// systems are case-insensitive — input is uppercased before computation.
///
/// | Variant | Modulus | Radix | Check chars | Character set |
/// |---|---|---|---|---|
/// | Mod11Radix2 | 11 | 2 | 1 | `0123456789X` |
/// | Mod37Radix2 | 37 | 2 | 1 | `0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*` |
/// | Mod97Radix10 | 97 | 10 | 2 | `0123456789` |
/// | Mod661Radix26 | 661 | 26 | 2 | `ABCDEFGHIJKLMNOPQRSTUVWXYZ` |
/// | Mod1271Radix36 | 1271 | 36 | 2 | `0123456789ABCDEFGHIJKLMNOPQRSTUVWXZY` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PureSystem {
    /// Mod 11, Radix 2 — numeric values with `X` as the supplementary
    /// check character (the ISBN-10 family).
    Mod11Radix2,
    /// Mod 37, Radix 2 — alphanumeric values with `*` as the
    /// supplementary check character.
    Mod37Radix2,
    /// Mod 97, Radix 10 — numeric values, two check digits (the IBAN
    /// family).
    Mod97Radix10,
    /// Mod 661, Radix 26 — alphabetic values, two check characters.
    Mod661Radix26,
    /// Mod 1271, Radix 36 — alphanumeric values, two check characters.
    Mod1271Radix36,
}

/// Total number of standard pure systems. Used for compile-time assertions.
pub const PURE_SYSTEM_COUNT: usize = 5;

impl PureSystem {
    /// Returns all five standard systems in canonical order.
    pub fn all_systems() -> &'static [PureSystem] {
        &[
            Self::Mod11Radix2,
            Self::Mod37Radix2,
            Self::Mod97Radix10,
            Self::Mod661Radix26,
            Self::Mod1271Radix36,
        ]
    }

    /// Returns the snake_case string identifier for this system.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mod11Radix2 => "mod11_radix2",
            Self::Mod37Radix2 => "mod37_radix2",
            Self::Mod97Radix10 => "mod97_radix10",
            Self::Mod661Radix26 => "mod661_radix26",
            Self::Mod1271Radix36 => "mod1271_radix36",
        }
    }

    /// The system modulus.
    pub fn modulus(&self) -> u32 {
        match self {
            Self::Mod11Radix2 => 11,
            Self::Mod37Radix2 => 37,
            Self::Mod97Radix10 => 97,
            Self::Mod661Radix26 => 661,
            Self::Mod1271Radix36 => 1271,
        }
    }

    /// The system radix.
    pub fn radix(&self) -> u32 {
        match self {
            Self::Mod11Radix2 => 2,
            Self::Mod37Radix2 => 2,
            Self::Mod97Radix10 => 10,
            Self::Mod661Radix26 => 26,
            Self::Mod1271Radix36 => 36,
        }
    }

    /// Whether the system emits two check characters.
    pub fn is_double_check_digit(&self) -> bool {
        match self {
            Self::Mod11Radix2 | Self::Mod37Radix2 => false,
            Self::Mod97Radix10 | Self::Mod661Radix26 | Self::Mod1271Radix36 => true,
        }
    }

    /// The system character set, in digit-value order.
    pub fn character_set(&self) -> &'static str {
        match self {
            Self::Mod11Radix2 => "0123456789X",
            Self::Mod37Radix2 => "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*",
            Self::Mod97Radix10 => "0123456789",
            Self::Mod661Radix26 => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Mod1271Radix36 => "0123456789ABCDEFGHIJKLMNOPQRSTUVWXZY",
        }
    }

    /// Build a provider configured for this system.
    ///
    /// Construction is cheap (the character set is copied once) and the
    /// parameters are statically known to satisfy the construction rules,
    /// so this accessor is infallible. Providers are immutable; build one
    /// and share it, or build on demand — both are correct.
    pub fn provider(&self) -> PureSystemProvider {
        PureSystemProvider::from_validated(
            self.modulus(),
            self.radix(),
            self.is_double_check_digit(),
            CharacterSet::from_static(self.character_set()),
        )
    }
}

impl std::fmt::Display for PureSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PureSystem {
    type Err = Iso7064Error;

    /// Parse a system from its snake_case identifier.
    ///
    /// Accepts the same identifiers produced by [`PureSystem::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mod11_radix2" => Ok(Self::Mod11Radix2),
            "mod37_radix2" => Ok(Self::Mod37Radix2),
            "mod97_radix10" => Ok(Self::Mod97Radix10),
            "mod661_radix26" => Ok(Self::Mod661Radix26),
            "mod1271_radix36" => Ok(Self::Mod1271Radix36),
            other => Err(Iso7064Error::InvalidConfiguration {
                reason: format!("unknown pure system: {other:?}"),
            }),
        }
    }
}
