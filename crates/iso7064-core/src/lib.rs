//! # iso7064-core — ISO 7064 Pure System Check Digits
//!
//! Computes and validates ISO 7064 "pure system" check digits: one or two
//! trailing characters derived from a value by positional modular
//! arithmetic over a fixed, ordered character set. The five standard
//! systems (Mod 11/2, Mod 37/2, Mod 97/10, Mod 661/26, Mod 1271/36) ship
//! as a parameter table; custom systems construct through the same
//! validated provider type.
//!
//! ## Key Design Principles
//!
//! 1. **One parameterized provider, not a type per system.**
//!    [`PureSystemProvider`] carries modulus, radix, the double-digit flag,
//!    and the character set; [`PureSystem`] is the enum of standard
//!    parameter sets. No trait object, no subclass hierarchy.
//!
//! 2. **Validated constructors.** `CharacterSet::new()` and
//!    `PureSystemProvider::new()` reject bad parameters at construction;
//!    a provider that exists is usable.
//!
//! 3. **Errors are never folded into results.** Malformed input surfaces
//!    as [`Iso7064Error`] out of every operation, including `is_valid` —
//!    a blank or illegal-character value is a usage error, not `false`.
//!    Boolean-only coercion belongs to callers.
//!
//! 4. **Providers are immutable and freely shared.** Every operation is a
//!    pure function of the parameters and the input string; there is no
//!    interior mutability to synchronize.
//!
//! ## Crate Policy
//!
//! - No internal dependencies (leaf crate of the workspace).
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.
//!
//! ## Example
//!
//! ```
//! use iso7064_core::PureSystem;
//!
//! let provider = PureSystem::Mod11Radix2.provider();
//! assert_eq!(provider.compute("101100002683118740")?, "1011000026831187407");
//! assert!(provider.is_valid("1011000026831187407")?);
//! assert!(!provider.is_valid("1011000026831187401")?);
//! # Ok::<(), iso7064_core::Iso7064Error>(())
//! ```

pub mod charset;
pub mod error;
pub mod provider;
pub mod system;

// Re-export primary types for ergonomic imports.
pub use charset::CharacterSet;
pub use error::Iso7064Error;
pub use provider::PureSystemProvider;
pub use system::{PureSystem, PURE_SYSTEM_COUNT};
