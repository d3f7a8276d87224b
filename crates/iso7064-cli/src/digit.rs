//! # Digit Subcommand
//!
//! Prints just the check digits of a value, without the value itself.

use anyhow::Context;
use clap::Args;
use iso7064_core::PureSystem;

/// Arguments for the digit subcommand.
#[derive(Args, Debug)]
pub struct DigitArgs {
    /// Standard system identifier (e.g. mod97_radix10).
    #[arg(long)]
    pub system: PureSystem,

    /// The value to compute check digits for.
    pub value: String,
}

pub fn run(args: DigitArgs) -> anyhow::Result<()> {
    let provider = args.system.provider();
    let digits = provider
        .compute_check_digit(&args.value)
        .with_context(|| format!("computing check digits under {}", args.system))?;
    println!("{digits}");
    Ok(())
}
