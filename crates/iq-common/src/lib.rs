//! Request model shared by the inspectareq crates.
//!
//! This crate provides the types the rendering engine consumes:
//! - `Request`: method, URL, header multimap and optional body
//! - `HeaderMap`: multi-valued headers with verbatim names
//! - `Body`: a boxed byte stream that can be swapped out after reading
//! - `RequestSpec`: a JSON description of a request

pub mod body;
pub mod error;
pub mod headers;
pub mod request;

pub use body::Body;
pub use error::{Error, Result};
pub use headers::HeaderMap;
pub use request::{Request, RequestSpec};
