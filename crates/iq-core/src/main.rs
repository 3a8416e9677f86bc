//! inspectareq CLI
//!
//! Renders an HTTP request as equivalent curl and/or HTTPie command lines,
//! redacting sensitive headers, so it can be replayed by hand.

use clap::Parser;
use iq_core::cli::{run, Cli};
use iq_core::exit_codes::ExitCode;
use iq_core::logging::{init_logging, LogConfig};

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env(cli.global.log_level, cli.global.log_format);
    init_logging(&log_config);

    let code = match run(&cli, std::io::stdout()) {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("iq: {}", err);
            err.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}
