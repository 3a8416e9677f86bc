//! Header redaction policy for inspectareq.
//!
//! Rendered commands are meant to be pasted into a terminal or a bug
//! report, so credentials carried in headers are replaced with a fixed
//! placeholder before they are printed.
//!
//! # Matching
//!
//! Header names are matched exactly, case included. A policy holding
//! `Authorization` does not touch a header spelled `authorization`;
//! register every spelling you expect to see.
//!
//! # Example
//!
//! ```
//! use iq_redact::RedactionPolicy;
//!
//! let policy = RedactionPolicy::default();
//! assert_eq!(policy.redact_header("Authorization", "Bearer t"), "REDACTED");
//! assert_eq!(policy.redact_header("Accept", "*/*"), "*/*");
//! ```

pub mod error;
pub mod policy;

pub use error::{RedactionError, Result};
pub use policy::{
    RedactionPolicy, DEFAULT_REDACTED_HEADER, DEFAULT_REPLACEMENT, POLICY_SCHEMA_VERSION,
};
