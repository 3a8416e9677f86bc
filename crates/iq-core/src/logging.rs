//! Logging setup for the `iq` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is
//! left to the program. Logs always go to stderr so stdout carries
//! nothing but rendered commands.
//!
//! Supports configuration via:
//! - Environment variables (IQ_LOG, RUST_LOG, IQ_LOG_FORMAT)
//! - CLI flags (--log-level, --log-format)

use clap::ValueEnum;
use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines go is fixed (stderr); this picks their shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Human,
    /// One JSON object per line.
    #[value(alias = "json")]
    Jsonl,
}

/// Verbosity threshold. `iq` is quiet unless something goes wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

fn parse_env<T: ValueEnum>(value: &str) -> Option<T> {
    T::from_str(value.trim(), true).ok()
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl LogConfig {
    /// Create config from the environment with CLI overrides on top.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        Self::from_lookup(cli_level, cli_format, |key| std::env::var(key).ok())
    }

    /// Same as [`LogConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup<F>(
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LogConfig::default();

        // IQ_LOG takes precedence over RUST_LOG
        if let Some(level) = lookup("IQ_LOG").and_then(|v| parse_env(&v)) {
            config.level = level;
        } else if let Some(level) = lookup("RUST_LOG").and_then(|v| parse_env(&v)) {
            config.level = level;
        }
        if let Some(format) = lookup("IQ_LOG_FORMAT").and_then(|v| parse_env(&v)) {
            config.format = format;
        }

        if let Some(level) = cli_level {
            config.level = level;
        }
        if let Some(format) = cli_format {
            config.format = format;
        }
        config
    }
}

/// Install a global subscriber writing to stderr.
///
/// A second call is a no-op: the first subscriber stays installed.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::new(config.level.directive());

    let installed = match config.format {
        LogFormat::Human => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal());
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(
        vars: &[(&str, &str)],
        level: Option<LogLevel>,
        format: Option<LogFormat>,
    ) -> LogConfig {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        LogConfig::from_lookup(level, format, |k| map.get(k).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[], None, None);
        assert_eq!(cfg.level, LogLevel::Warn);
        assert_eq!(cfg.format, LogFormat::Human);
    }

    #[test]
    fn test_iq_log_beats_rust_log() {
        let cfg = config(&[("IQ_LOG", "debug"), ("RUST_LOG", "trace")], None, None);
        assert_eq!(cfg.level, LogLevel::Debug);
    }

    #[test]
    fn test_rust_log_used_when_plain_level() {
        let cfg = config(&[("RUST_LOG", "info")], None, None);
        assert_eq!(cfg.level, LogLevel::Info);
        let cfg = config(&[("RUST_LOG", "iq_core=trace")], None, None);
        assert_eq!(cfg.level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_overrides_env() {
        let cfg = config(
            &[("IQ_LOG", "debug"), ("IQ_LOG_FORMAT", "human")],
            Some(LogLevel::Error),
            Some(LogFormat::Jsonl),
        );
        assert_eq!(cfg.level, LogLevel::Error);
        assert_eq!(cfg.format, LogFormat::Jsonl);
    }

    #[test]
    fn test_env_values_ignore_case() {
        let cfg = config(&[("IQ_LOG", "DEBUG"), ("IQ_LOG_FORMAT", "json")], None, None);
        assert_eq!(cfg.level, LogLevel::Debug);
        assert_eq!(cfg.format, LogFormat::Jsonl);
    }

    #[test]
    fn test_unknown_env_value_keeps_default() {
        let cfg = config(&[("IQ_LOG", "loud")], None, None);
        assert_eq!(cfg.level, LogLevel::Warn);
    }
}
