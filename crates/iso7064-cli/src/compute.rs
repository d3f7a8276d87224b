//! # Compute Subcommand
//!
//! Appends check digits to a value under one standard system.

use anyhow::Context;
use clap::Args;
use iso7064_core::PureSystem;

/// Arguments for the compute subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Standard system identifier (e.g. mod97_radix10).
    #[arg(long)]
    pub system: PureSystem,

    /// The value to compute check digits for.
    pub value: String,
}

pub fn run(args: ComputeArgs) -> anyhow::Result<()> {
    let provider = args.system.provider();
    let computed = provider
        .compute(&args.value)
        .with_context(|| format!("computing check digits under {}", args.system))?;
    tracing::debug!(system = %args.system, value = %args.value, %computed, "computed");
    println!("{computed}");
    Ok(())
}
