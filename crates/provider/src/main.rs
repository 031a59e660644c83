//! anypoint-bg
//!
//! Drives the business group resource handlers from a resource file.
//!
//! # Usage
//!
//! ```bash
//! anypoint-bg schema
//! anypoint-bg create team-a.json --in-place
//! anypoint-bg read team-a.json
//! anypoint-bg delete team-a.json --in-place
//! ```
//!
//! A resource file holds the state the host would keep:
//! `{ "id": "...", "attributes": { "name": "Team A", "parent_path": "RootOrg" } }`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use anypoint_domain::{AnypointError, ProviderConfig};
use anypoint_infra::config::{self, ENV_PASSWORD, ENV_URL, ENV_USERNAME};
use anypoint_provider::{error_label, exit_code, init_tracing, LogFormat, Provider, ResourceData};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(name = "anypoint-bg")]
#[command(version)]
#[command(about = "Manage Anypoint business groups", long_about = None)]
struct Cli {
    /// Platform base URL
    #[arg(long, env = ENV_URL)]
    url: Option<String>,

    /// Operator username
    #[arg(long, env = ENV_USERNAME)]
    username: Option<String>,

    /// Operator password
    #[arg(long, env = ENV_PASSWORD, hide_env_values = true)]
    password: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long)]
    insecure: bool,

    /// Log every request and response (secrets redacted)
    #[arg(long)]
    wire_log: bool,

    /// Read connection settings from this file instead of the environment
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resource schema
    Schema,
    /// Create the business group, or update one with the same name
    Create(ResourceArgs),
    /// Refresh the resource from the platform
    Read(ResourceArgs),
    /// Update in place (not supported by the platform adapter)
    Update(ResourceArgs),
    /// Delete the business group the resource points at
    Delete(ResourceArgs),
    /// Check whether the stored id still resolves
    Exists(ResourceArgs),
}

#[derive(Args)]
struct ResourceArgs {
    /// Resource state file (JSON)
    file: PathBuf,

    /// Write the resulting state back to the file
    #[arg(long)]
    in_place: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.log_format, cli.wire_log) {
        eprintln!("failed to initialise logging: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<AnypointError>() {
                Some(cause) => {
                    error!(error_kind = error_label(cause), "command failed");
                    exit_code(cause)
                }
                None => 1,
            };
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (file, in_place) = match &cli.command {
        Commands::Schema => return print_json(&anypoint_provider::schema()),
        Commands::Create(args)
        | Commands::Read(args)
        | Commands::Update(args)
        | Commands::Delete(args)
        | Commands::Exists(args) => (args.file.clone(), args.in_place),
    };

    let mut data = read_resource(&file)?;
    let config = resolve_config(&cli)?;
    let provider = Provider::configure(&config).await.context("configuring provider")?;

    match cli.command {
        Commands::Schema => {}
        Commands::Create(_) => {
            let action = provider.create(&mut data).await.context("create failed")?;
            info!(id = ?data.id(), %action, "create finished");
        }
        Commands::Read(_) => provider.read(&mut data).await.context("read failed")?,
        Commands::Update(_) => provider.update(&mut data).await.context("update failed")?,
        Commands::Delete(_) => provider.delete(&mut data).await.context("delete failed")?,
        Commands::Exists(_) => {
            let exists = provider.exists(&data).await.context("exists check failed")?;
            return print_json(&serde_json::json!({ "exists": exists }));
        }
    }

    if in_place {
        write_resource(&file, &data)?;
    }
    print_json(&data)
}

/// Explicit `--config` wins; otherwise CLI/env values, then a probed file.
fn resolve_config(cli: &Cli) -> anyhow::Result<ProviderConfig> {
    let mut config = match &cli.config {
        Some(path) => config::load_from_file(Some(path.clone()))?,
        None => {
            let from_cli = |key: &str| match key {
                ENV_URL => cli.url.clone(),
                ENV_USERNAME => cli.username.clone(),
                ENV_PASSWORD => cli.password.clone(),
                other => std::env::var(other).ok(),
            };
            match config::load_from_env_with(from_cli) {
                Ok(config) => config,
                Err(err) => {
                    debug!(error = %err, "no credentials from flags or environment, probing files");
                    config::load_from_file(None)
                        .context("no credentials given and no config file found")?
                }
            }
        }
    };

    config.insecure_tls |= cli.insecure;
    config.http_wire_log |= cli.wire_log;
    Ok(config)
}

fn read_resource(path: &Path) -> anyhow::Result<ResourceData> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading resource file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing resource file {}", path.display()))
}

fn write_resource(path: &Path, data: &ResourceData) -> anyhow::Result<()> {
    let contents = serde_json::to_string_pretty(data)?;
    std::fs::write(path, contents + "\n")
        .with_context(|| format!("writing resource file {}", path.display()))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
