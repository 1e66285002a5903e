//! Command line interface
//!
//! `guardrails check` evaluates one value against the configured thresholds
//! the same way a guarded operation would; `guardrails providers` lists the
//! registered configuration providers.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use guardrails_application::GuardrailsService;
use guardrails_application::ports::registry::list_config_providers;
use guardrails_domain::value_objects::{ClientState, GuardedResource};
use guardrails_infrastructure::bootstrap::install_config_provider;
use guardrails_infrastructure::config::ConfigLoader;
use guardrails_infrastructure::logging::init_logging;
use tracing::debug;

/// Command line interface for Guardrails
#[derive(Parser, Debug)]
#[command(name = "guardrails")]
#[command(about = "Guardrails - Runtime warn/abort thresholds")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Configuration provider to install, overriding the configuration file
    #[arg(short, long, global = true)]
    pub provider: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Guardrails subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a value against a guardrail
    Check(CheckArgs),
    /// List registered configuration providers
    Providers,
}

/// Arguments for `guardrails check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Guarded resource (e.g. tables, page_size)
    #[arg(short, long, value_parser = parse_resource)]
    pub resource: GuardedResource,

    /// Measured value
    #[arg(short, long)]
    pub value: u64,

    /// Operation label used in the diagnostic
    #[arg(short, long, default_value = "check")]
    pub label: String,

    /// User issuing the operation
    #[arg(long)]
    pub user: Option<String>,

    /// Keyspace the session is bound to
    #[arg(long)]
    pub keyspace: Option<String>,

    /// Evaluate as a superuser session
    #[arg(long)]
    pub super_user: bool,

    /// Evaluate as an internal operation
    #[arg(long)]
    pub internal: bool,
}

impl CheckArgs {
    /// Client state described by the arguments
    pub fn client_state(&self) -> ClientState {
        ClientState {
            user: self.user.clone(),
            keyspace: self.keyspace.clone(),
            is_internal: self.internal,
            is_super_user: self.super_user,
        }
    }
}

fn parse_resource(value: &str) -> Result<GuardedResource, String> {
    value.parse().map_err(|e: guardrails_domain::Error| e.to_string())
}

/// Run the command described by `cli` and return the report to print
///
/// Loads configuration, initializes logging and installs the configuration
/// provider before dispatching. An aborting check is returned as an error.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let Command::Check(args) = &cli.command else {
        return Ok(providers_report());
    };

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load().context("Failed to load configuration")?;
    if let Some(provider) = &cli.provider {
        config.guardrails.provider = provider.clone();
    }

    init_logging(&config.logging)?;
    let provider = install_config_provider(&config.guardrails)?;
    check(&GuardrailsService::new(provider), args)
}

/// Evaluate `args` with `service`
///
/// Returns the report for valid and warning outcomes; an abort is an error
/// carrying the guardrail message.
pub fn check(service: &GuardrailsService, args: &CheckArgs) -> anyhow::Result<String> {
    let state = args.client_state();
    debug!(resource = %args.resource, value = args.value, ?state, "Evaluating guardrail");

    // `enforce` returns aborts as errors, so only a warning carries a message here
    let outcome = service.enforce(args.resource, args.value, &args.label, &state)?;
    Ok(match outcome.message() {
        Some(message) => format!("WARN: {}", message),
        None => format!("OK: {} {} is within limits", args.resource, args.value),
    })
}

/// One line per registered provider
pub fn providers_report() -> String {
    list_config_providers()
        .into_iter()
        .map(|(name, description)| format!("{:<24} {}", name, description))
        .collect::<Vec<_>>()
        .join("\n")
}
