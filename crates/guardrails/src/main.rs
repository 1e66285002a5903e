//! Guardrails - Entry Point
//!
//! Binary entry point for the guardrails CLI. Lives in the `guardrails`
//! facade crate next to the library it drives.

// Force-link guardrails-providers to ensure linkme registrations are included
extern crate guardrails_providers;

use clap::Parser;
use guardrails::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let report = run(&cli)?;
    println!("{report}");
    Ok(())
}
