//! Redaction policy configuration.
//!
//! Defines which header values are hidden in rendered commands and what
//! they are replaced with.

use crate::RedactionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Schema version for the policy file.
pub const POLICY_SCHEMA_VERSION: &str = "1.0.0";

/// Placeholder written in place of a redacted value.
pub const DEFAULT_REPLACEMENT: &str = "REDACTED";

/// Header redacted when nothing else is configured.
pub const DEFAULT_REDACTED_HEADER: &str = "Authorization";

/// Redaction policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionPolicy {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Master switch. When false every value passes through.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Text substituted for a redacted value.
    #[serde(default = "default_replacement")]
    pub replacement: String,

    /// Header names to redact, matched exactly.
    #[serde(default = "default_headers")]
    pub headers: BTreeSet<String>,
}

fn default_schema_version() -> String {
    POLICY_SCHEMA_VERSION.to_string()
}

fn default_true() -> bool {
    true
}

fn default_replacement() -> String {
    DEFAULT_REPLACEMENT.to_string()
}

fn default_headers() -> BTreeSet<String> {
    BTreeSet::from([DEFAULT_REDACTED_HEADER.to_string()])
}

impl RedactionPolicy {
    /// Create a new policy with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy that never redacts.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Parse a policy from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let policy: RedactionPolicy = serde_json::from_str(text)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load policy from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save policy to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject header names no request could carry.
    pub fn validate(&self) -> crate::Result<()> {
        if self.headers.iter().any(|h| h.is_empty()) {
            return Err(RedactionError::PolicyError(
                "redacted header name is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Add a header name to the redaction set.
    pub fn add_header(&mut self, name: impl Into<String>) {
        self.headers.insert(name.into());
    }

    /// Remove a header name from the redaction set.
    pub fn remove_header(&mut self, name: &str) -> bool {
        self.headers.remove(name)
    }

    /// Whether values of `name` are replaced under this policy.
    pub fn is_redacted(&self, name: &str) -> bool {
        self.enabled && self.headers.contains(name)
    }

    /// Value to print for header `name`: the replacement text when the
    /// policy is on and `name` is in the set, otherwise `value` itself.
    pub fn redact_header<'a>(&'a self, name: &str, value: &'a str) -> &'a str {
        if self.is_redacted(name) {
            &self.replacement
        } else {
            value
        }
    }
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self {
            schema_version: POLICY_SCHEMA_VERSION.to_string(),
            enabled: true,
            replacement: DEFAULT_REPLACEMENT.to_string(),
            headers: default_headers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RedactionPolicy::default();
        assert_eq!(policy.schema_version, POLICY_SCHEMA_VERSION);
        assert!(policy.enabled);
        assert_eq!(policy.replacement, "REDACTED");
        assert!(policy.headers.contains("Authorization"));
        assert_eq!(policy.headers.len(), 1);
    }

    #[test]
    fn test_redact_listed_header() {
        let policy = RedactionPolicy::default();
        assert_eq!(
            policy.redact_header("Authorization", "Bearer secret-value"),
            "REDACTED"
        );
    }

    #[test]
    fn test_unlisted_header_passes() {
        let policy = RedactionPolicy::default();
        assert_eq!(policy.redact_header("Accept", "text/plain"), "text/plain");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let policy = RedactionPolicy::default();
        assert_eq!(
            policy.redact_header("authorization", "Bearer my-token"),
            "Bearer my-token"
        );
        assert!(!policy.is_redacted("AUTHORIZATION"));
    }

    #[test]
    fn test_disabled_policy_passes_everything() {
        let policy = RedactionPolicy::disabled();
        assert_eq!(
            policy.redact_header("Authorization", "Bearer secret-value"),
            "Bearer secret-value"
        );
    }

    #[test]
    fn test_custom_replacement_and_headers() {
        let mut policy = RedactionPolicy::default();
        policy.replacement = "***".to_string();
        policy.add_header("X-Api-Key");
        assert_eq!(policy.redact_header("X-Api-Key", "abc"), "***");
        assert!(policy.remove_header("Authorization"));
        assert_eq!(policy.redact_header("Authorization", "t"), "t");
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let policy = RedactionPolicy::from_json(r#"{"replacement": "<hidden>"}"#).unwrap();
        assert!(policy.enabled);
        assert_eq!(policy.replacement, "<hidden>");
        assert!(policy.headers.contains("Authorization"));
    }

    #[test]
    fn test_empty_header_name_rejected() {
        let err = RedactionPolicy::from_json(r#"{"headers": [""]}"#).unwrap_err();
        assert!(matches!(err, RedactionError::PolicyError(_)));
    }

    #[test]
    fn test_policy_serialization() {
        let policy = RedactionPolicy::default();
        let json = serde_json::to_string_pretty(&policy).unwrap();

        let parsed: RedactionPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, policy);
    }
}
