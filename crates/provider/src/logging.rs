//! Tracing setup for the `anypoint-bg` binary

use anypoint_domain::constants::WIRE_LOG_TARGET;
use anypoint_domain::AnypointError;
use clap::ValueEnum;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of log lines on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install the global subscriber.
///
/// `RUST_LOG` sets the filter (default `info`). With `wire_log` the wire
/// target is raised to `debug` on top of it. Logs go to stderr so stdout
/// stays clean for resource state.
pub fn init_tracing(format: LogFormat, wire_log: bool) -> anyhow::Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if wire_log {
        let directive: Directive = format!("{WIRE_LOG_TARGET}=debug").parse()?;
        filter = filter.add_directive(directive);
    }

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => {
            registry.with(fmt::layer().with_target(true).with_writer(std::io::stderr)).try_init()?;
        }
        LogFormat::Json => {
            registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()?;
        }
    }
    Ok(())
}

/// Stable label of an error, for the `error_kind` field of failure logs.
#[inline]
pub fn error_label(error: &AnypointError) -> &'static str {
    error.label()
}

/// Process exit code for a failed command.
pub fn exit_code(error: &AnypointError) -> u8 {
    match error {
        AnypointError::InvalidInput(_) | AnypointError::Config(_) => 2,
        AnypointError::Auth(_) | AnypointError::AuthExpired(_) => 3,
        AnypointError::NotFound(_) => 4,
        _ => 1,
    }
}
