//! # iso7064 CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// ISO 7064 pure-system check-digit toolchain.
///
/// Computes and validates check digits under the five standard pure
/// systems (Mod 11/2, Mod 37/2, Mod 97/10, Mod 661/26, Mod 1271/36).
#[derive(Parser, Debug)]
#[command(name = "iso7064", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print a validity table of values against all five standard systems.
    Check(iso7064_cli::check::CheckArgs),
    /// Compute a value's check digits and append them.
    Compute(iso7064_cli::compute::ComputeArgs),
    /// Print just the check digits of a value.
    Digit(iso7064_cli::digit::DigitArgs),
    /// Validate the trailing check digits of a value.
    Validate(iso7064_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => iso7064_cli::check::run(args),
        Commands::Compute(args) => iso7064_cli::compute::run(args),
        Commands::Digit(args) => iso7064_cli::digit::run(args),
        Commands::Validate(args) => {
            let valid = iso7064_cli::validate::run(args)?;
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
