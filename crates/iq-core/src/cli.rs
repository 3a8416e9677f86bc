//! Command-line interface for `iq`.
//!
//! Kept in the library so the argument handling can be tested without
//! spawning the binary.

use crate::config::{EnvConfig, CURL_ENV, HTTPIE_ENV, NO_REDACT_ENV};
use crate::error::PrintError;
use crate::exit_codes::ExitCode;
use crate::logging::{LogFormat, LogLevel};
use crate::render::Tool;
use crate::runner::Runner;
use clap::{Args, Parser, Subcommand};
use iq_common::{Body, Request, RequestSpec};
use iq_redact::{RedactionError, RedactionPolicy};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// inspectareq - render HTTP requests as shell commands for debugging
#[derive(Parser, Debug)]
#[command(name = "iq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Log format (human, jsonl)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a request as curl/httpie commands on stdout
    Render(RenderArgs),

    /// Show which activation variables are switched on
    Env(EnvArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Request URL, used verbatim
    #[arg(required_unless_present = "request")]
    pub url: Option<String>,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(short = 'd', long)]
    pub data: Option<String>,

    /// Load the request from a JSON file instead of URL and flags
    #[arg(long, conflicts_with_all = ["url", "headers", "data"])]
    pub request: Option<PathBuf>,

    /// Tool dialect to render (repeatable, default curl)
    #[arg(short = 't', long = "tool")]
    pub tools: Vec<Tool>,

    /// Activate tools from DEBUG_CURL / DEBUG_HTTPIE / NO_REDACT
    #[arg(long)]
    pub from_env: bool,

    /// Load the redaction policy from a JSON file
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Header name to redact, exact match (repeatable)
    #[arg(long = "redact-header")]
    pub redact_headers: Vec<String>,

    /// Replacement text for redacted values
    #[arg(long)]
    pub redact_with: Option<String>,

    /// Print header values as they are
    #[arg(long)]
    pub no_redact: bool,
}

#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Emit JSON instead of one line per variable
    #[arg(long)]
    pub json: bool,
}

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid header {0:?}: expected \"Name: value\"")]
    InvalidHeader(String),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("failed to load request: {0}")]
    Request(#[from] iq_common::Error),

    #[error("failed to load redaction policy: {0}")]
    Policy(#[from] RedactionError),

    #[error("failed to print request: {0}")]
    Print(#[from] PrintError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::InvalidHeader(_) | CliError::InvalidArgs(_) => ExitCode::ArgsError,
            CliError::Request(_) | CliError::Policy(_) => ExitCode::ConfigError,
            CliError::Print(_) | CliError::Io(_) => ExitCode::IoError,
            CliError::Json(_) => ExitCode::InternalError,
        }
    }
}

/// Execute a parsed command line, writing command output to `out`.
pub fn run<W>(cli: &Cli, out: W) -> Result<(), CliError>
where
    W: Write + Send + 'static,
{
    match &cli.command {
        Commands::Render(args) => render(args, out),
        Commands::Env(args) => show_env(args, out),
    }
}

fn render<W>(args: &RenderArgs, out: W) -> Result<(), CliError>
where
    W: Write + Send + 'static,
{
    let mut request = build_request(args)?;
    let runner = build_runner(args, out)?;
    if !runner.is_enabled() {
        warn!(
            "no tool enabled; set {} or {}, or pass --tool",
            CURL_ENV, HTTPIE_ENV
        );
    }
    runner.print(&mut request)?;
    Ok(())
}

/// Build the request described by `args`.
pub fn build_request(args: &RenderArgs) -> Result<Request, CliError> {
    if let Some(path) = &args.request {
        return Ok(Request::from(RequestSpec::load(path)?));
    }

    let url = args
        .url
        .clone()
        .ok_or_else(|| CliError::InvalidArgs("a URL or --request is required".to_string()))?;
    let mut request = Request::new(args.method.clone(), url);
    for raw in &args.headers {
        let (name, value) = parse_header(raw)?;
        request.headers_mut().add(name, value);
    }
    if let Some(data) = &args.data {
        request.set_body(Some(Body::from(data.as_str())));
    }
    Ok(request)
}

/// Build the runner described by `args`, writing to `out`.
///
/// Explicit `--tool` flags always enable the runner. Without them, curl
/// is used unless `--from-env` hands the choice to the environment.
pub fn build_runner<W>(args: &RenderArgs, out: W) -> Result<Runner, CliError>
where
    W: Write + Send + 'static,
{
    let mut builder = Runner::builder().with_writer(out);

    if let Some(path) = &args.policy {
        builder = builder.with_policy(RedactionPolicy::load(path)?);
    }
    if args.from_env {
        builder = builder.with_environment();
    }
    for tool in &args.tools {
        builder = builder.with_tool(*tool);
    }
    if !args.tools.is_empty() {
        builder = builder.enabled(true);
    } else if !args.from_env {
        builder = builder.with_curl();
    }
    for name in &args.redact_headers {
        builder = builder.redact_header(name.clone());
    }
    if let Some(text) = &args.redact_with {
        builder = builder.redact_with(text.clone());
    }
    if args.no_redact {
        builder = builder.without_redact();
    }

    let runner = builder.build();
    debug!(runner = ?runner, "built runner from arguments");
    Ok(runner)
}

/// Split `Name: value` at the first colon.
pub fn parse_header(raw: &str) -> Result<(String, String), CliError> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| CliError::InvalidHeader(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidHeader(raw.to_string()));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn show_env<W: Write>(args: &EnvArgs, mut out: W) -> Result<(), CliError> {
    let env = EnvConfig::from_env();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &env)?;
        writeln!(out)?;
        return Ok(());
    }

    let state = |on: bool| if on { "on" } else { "off" };
    writeln!(out, "{:<14}{}", CURL_ENV, state(env.curl))?;
    writeln!(out, "{:<14}{}", HTTPIE_ENV, state(env.httpie))?;
    writeln!(out, "{:<14}{}", NO_REDACT_ENV, state(env.no_redact))?;
    Ok(())
}
