//! Structured logging setup for embedding hosts

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging.
///
/// `verbose` raises the default level to debug; an explicit
/// `log_level` wins over both. `log_json` switches the output to
/// newline-delimited JSON on stderr.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "template_usage=debug",
        (false, None) => "template_usage=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // TEMPLATE_USAGE_LOG environment variable overrides the computed level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("TEMPLATE_USAGE_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("template_usage={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
