use std::io;
use tracing_subscriber::{fmt, EnvFilter};

use configs::LoggingConfig;

/// Initialize tracing subscriber with compact output on stdout.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,service=debug`
pub fn init_logging_default() {
    init_compact("info,service=debug");
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, defaults to `info`
pub fn init_logging_json() {
    init_json("info");
}

/// Initialize logging from the `[logging]` config section.
/// `RUST_LOG` still wins over `cfg.filter`.
pub fn init_from_config(cfg: &LoggingConfig) {
    if cfg.is_json() {
        init_json(&cfg.filter);
    } else {
        init_compact(&cfg.filter);
    }
}

fn env_filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn init_compact(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter_or(fallback))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

fn init_json(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter_or(fallback))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging_default();
        init_logging_json();
        init_from_config(&LoggingConfig::default());
        tracing::info!("still logging");
    }
}
