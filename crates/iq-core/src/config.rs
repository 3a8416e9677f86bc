//! Environment-driven activation.
//!
//! Rendering is opt-in from the environment: a program built with the
//! process-wide default runner prints nothing until one of the tool
//! variables is set. Variables are read once, when the configuration is
//! built; later changes to the environment have no effect on a runner.

use crate::render::Tool;
use serde::Serialize;

/// Enables curl output.
pub const CURL_ENV: &str = "DEBUG_CURL";

/// Enables HTTPie output.
pub const HTTPIE_ENV: &str = "DEBUG_HTTPIE";

/// Disables header redaction.
pub const NO_REDACT_ENV: &str = "NO_REDACT";

/// Snapshot of the recognised environment variables.
///
/// A variable counts as on when it is set to a non-empty value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnvConfig {
    pub curl: bool,
    pub httpie: bool,
    pub no_redact: bool,
}

impl EnvConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let on = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());
        Self {
            curl: on(CURL_ENV),
            httpie: on(HTTPIE_ENV),
            no_redact: on(NO_REDACT_ENV),
        }
    }

    /// Tools switched on, curl first regardless of how the variables
    /// were set.
    pub fn tools(&self) -> Vec<Tool> {
        Tool::ALL
            .into_iter()
            .filter(|tool| match tool {
                Tool::Curl => self.curl,
                Tool::Httpie => self.httpie,
            })
            .collect()
    }

    /// Whether any tool variable is on.
    pub fn any_tool(&self) -> bool {
        self.curl || self.httpie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> EnvConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_nothing_set() {
        let cfg = lookup(&[]);
        assert_eq!(cfg, EnvConfig::default());
        assert!(!cfg.any_tool());
        assert!(cfg.tools().is_empty());
    }

    #[test]
    fn test_empty_value_is_off() {
        let cfg = lookup(&[(CURL_ENV, ""), (NO_REDACT_ENV, "")]);
        assert!(!cfg.curl);
        assert!(!cfg.no_redact);
    }

    #[test]
    fn test_any_value_is_on() {
        let cfg = lookup(&[(HTTPIE_ENV, "0"), (NO_REDACT_ENV, "yes")]);
        assert!(cfg.httpie);
        assert!(cfg.no_redact);
        assert_eq!(cfg.tools(), vec![Tool::Httpie]);
    }

    #[test]
    fn test_curl_precedes_httpie() {
        let cfg = lookup(&[(HTTPIE_ENV, "1"), (CURL_ENV, "1")]);
        assert_eq!(cfg.tools(), vec![Tool::Curl, Tool::Httpie]);
    }
}
