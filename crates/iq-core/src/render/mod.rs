//! Command renderers.
//!
//! A renderer turns a request into one newline-terminated shell command
//! for a particular command-line HTTP client. Renderers hold no state;
//! the redaction policy is handed in by the runner on every call.

pub mod curl;
pub mod httpie;

pub use curl::Curl;
pub use httpie::Httpie;

use crate::config::{CURL_ENV, HTTPIE_ENV};
use iq_common::Request;
use iq_redact::RedactionPolicy;
use serde::{Deserialize, Serialize};
use std::io;

/// Formats a request as a command line for one tool.
pub trait Renderer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Render `request`, reading its body (if any) non-destructively.
    ///
    /// A body read failure is returned unchanged and nothing is produced.
    fn render(&self, request: &mut Request, policy: &RedactionPolicy) -> io::Result<String>;
}

/// Built-in renderers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// `curl -X METHOD -H '...' 'URL' -d '...'`
    Curl,
    /// `http METHOD 'URL' 'Name:value' data='...'`
    Httpie,
}

impl Tool {
    /// All tools, in the order environment activation appends them.
    pub const ALL: [Tool; 2] = [Tool::Curl, Tool::Httpie];

    /// Environment variable that switches this tool on.
    pub fn env_var(self) -> &'static str {
        match self {
            Tool::Curl => CURL_ENV,
            Tool::Httpie => HTTPIE_ENV,
        }
    }

    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Tool::Curl => Box::new(Curl),
            Tool::Httpie => Box::new(Httpie),
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "curl" => Some(Tool::Curl),
            "httpie" | "http" => Some(Tool::Httpie),
            _ => None,
        }
    }
}

impl std::str::FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::parse_str(s).ok_or_else(|| format!("unknown tool: {}", s))
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tool::Curl => write!(f, "curl"),
            Tool::Httpie => write!(f, "httpie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_parsing() {
        assert_eq!("curl".parse::<Tool>(), Ok(Tool::Curl));
        assert_eq!("HTTPie".parse::<Tool>(), Ok(Tool::Httpie));
        assert_eq!("http".parse::<Tool>(), Ok(Tool::Httpie));
        assert!("wget".parse::<Tool>().is_err());
    }

    #[test]
    fn test_tool_display_roundtrip() {
        for tool in Tool::ALL {
            assert_eq!(tool.to_string().parse::<Tool>(), Ok(tool));
        }
    }

    #[test]
    fn test_env_vars() {
        assert_eq!(Tool::Curl.env_var(), "DEBUG_CURL");
        assert_eq!(Tool::Httpie.env_var(), "DEBUG_HTTPIE");
    }

    #[test]
    fn test_renderer_names() {
        assert_eq!(Tool::Curl.renderer().name(), "curl");
        assert_eq!(Tool::Httpie.renderer().name(), "httpie");
    }
}
