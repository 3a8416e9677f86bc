//! Environment-activated request printing.
//!
//! ```text
//! DEBUG_CURL=1 cargo run -p iq-core --example enable_env
//! DEBUG_CURL=1 DEBUG_HTTPIE=1 NO_REDACT=1 cargo run -p iq-core --example enable_env
//! ```

use iq_core::logging::{init_logging, LogConfig};
use iq_core::{Request, CURL_ENV, HTTPIE_ENV};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging(&LogConfig::from_env(None, None));
    println!(
        "Use {} to enable curl printing, and {} to enable httpie printing",
        CURL_ENV, HTTPIE_ENV
    );

    let mut req = Request::post(
        "https://pie.dev/anything",
        r#"{"username": "alice", "password": "secret"}"#,
    )
    .with_header("Content-Type", "application/json")
    .with_header("X-Debug", "true")
    .with_header("Authorization", "Bearer my-token");

    tracing::info!(enabled = iq_core::is_enabled(), "debugging status");

    if let Err(err) = iq_core::print(&mut req) {
        eprintln!("error printing request: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
