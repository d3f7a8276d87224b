//! # Validate Subcommand
//!
//! True/false for one value under one standard system. Unlike the `check`
//! table, malformed input is an error here, matching the library: asking
//! whether a blank or foreign-alphabet value "has a valid check digit" is
//! a usage mistake, not a no.

use anyhow::Context;
use clap::Args;
use iso7064_core::PureSystem;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Standard system identifier (e.g. mod97_radix10).
    #[arg(long)]
    pub system: PureSystem,

    /// The value whose trailing check digits are verified.
    pub value: String,
}

/// Returns whether the value validated; the caller turns `false` into a
/// non-zero exit status.
pub fn run(args: ValidateArgs) -> anyhow::Result<bool> {
    let provider = args.system.provider();
    let valid = provider
        .is_valid(&args.value)
        .with_context(|| format!("validating under {}", args.system))?;
    println!("{valid}");
    Ok(valid)
}
