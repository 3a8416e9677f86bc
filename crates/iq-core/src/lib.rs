//! inspectareq core library
//!
//! Turns an in-flight HTTP request into shell commands that reproduce it:
//! - `escape`: POSIX single-quote shell escaping
//! - `capture`: reads a body without consuming it for later readers
//! - `headers`: sorted, redacted header projection
//! - `render`: curl and HTTPie dialects behind the `Renderer` trait
//! - `runner`: enabled state, renderer list, redaction policy and sink
//! - `global`: the environment-configured process-wide runner
//!
//! # Example
//!
//! ```
//! use iq_core::{Request, Runner, SharedBuffer};
//!
//! let out = SharedBuffer::new();
//! let runner = Runner::builder().with_curl().with_writer(out.clone()).build();
//!
//! let mut req = Request::get("http://www.example.com")
//!     .with_header("Authorization", "Bearer my-token");
//! runner.print(&mut req).unwrap();
//!
//! assert_eq!(
//!     out.contents(),
//!     "curl -X GET -H 'Authorization: REDACTED' 'http://www.example.com'\n"
//! );
//! ```
//!
//! The binary entry point is in `main.rs`.

pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod escape;
pub mod exit_codes;
pub mod global;
pub mod headers;
pub mod logging;
pub mod render;
pub mod runner;
pub mod sink;

pub use capture::{capture, capture_request};
pub use config::{EnvConfig, CURL_ENV, HTTPIE_ENV, NO_REDACT_ENV};
pub use error::PrintError;
pub use escape::escape;
pub use global::{
    disable, enable, get as default_runner, is_enabled, print, set as set_default_runner,
};
pub use headers::project;
pub use render::{Curl, Httpie, Renderer, Tool};
pub use runner::{Runner, RunnerBuilder};
pub use sink::SharedBuffer;

pub use iq_common::{Body, HeaderMap, Request};
pub use iq_redact::RedactionPolicy;
