//! CLI entry point for terraform-validator.
//!
//! This module is intentionally thin: it sets up logging, prints early-exit output, and maps
//! errors to exit codes. Context generation lives in the `tfvalidator-app` crate.

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use std::process::ExitCode;
use tfvalidator_app::{EarlyExit, GlobalContext, Startup, generate_global_context};
use tfvalidator_types::ids;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Usage description. Arguments themselves are resolved by `tfvalidator_app`, which only looks
/// at the first one and ignores the rest.
fn cli() -> Command {
    Command::new(ids::TOOL_NAME)
        .about("Validate the structure of a Terraform folder against a policy")
        .disable_version_flag(true)
        .disable_help_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print the version and exit"),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Print this help and exit"),
        )
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .default_value(ids::DEFAULT_WORKING_DIRECTORY)
                .help("Terraform folder to validate"),
        )
        .after_help(format!(
            "Place a {} file in DIRECTORY to override the default policy.",
            ids::OVERRIDE_FILE_NAME
        ))
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for version/help output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} error: {err:#}", ids::TOOL_NAME);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let startup =
        generate_global_context(env!("CARGO_PKG_VERSION")).context("resolve configuration")?;

    match startup {
        Startup::Exit(EarlyExit::Version(version)) => println!("{version}"),
        Startup::Exit(EarlyExit::Help) => print!("{}", cli().render_help()),
        Startup::Ready(ctx) => report_ready(&ctx),
    }
    Ok(())
}

fn report_ready(ctx: &GlobalContext) {
    let policy = ctx.policy();
    let mandatory: Vec<&str> = policy.mandatory_categories().collect();
    tracing::info!(
        dir = %ctx.working_directory().path(),
        terraform_files = ctx.working_directory().terraform_files().count(),
        ensure_terraform_version = policy.ensure_terraform_version_declared,
        ensure_providers_version = policy.ensure_providers_version_pinned,
        ensure_readme_updated = policy.ensure_readme_updated,
        block_pattern_name = %policy.block_pattern_name,
        mandatory_categories = ?mandatory,
        "configuration resolved"
    );
}
