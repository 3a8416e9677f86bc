//! Outbound request model.

use crate::{Body, Error, HeaderMap, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// An in-flight outbound HTTP request, as seen by the renderers.
///
/// The URL is kept as given; nothing here parses or validates it.
#[derive(Debug)]
pub struct Request {
    method: String,
    url: String,
    headers: HeaderMap,
    body: Option<Body>,
}

impl Request {
    /// Create a request with no headers and no body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn post(url: impl Into<String>, body: impl Into<Body>) -> Self {
        Self::new("POST", url).with_body(body)
    }

    /// Builder-style header append.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Builder-style body assignment.
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Whether a body is attached. A present but empty body counts.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn body_mut(&mut self) -> Option<&mut Body> {
        self.body.as_mut()
    }

    pub fn set_body(&mut self, body: Option<Body>) {
        self.body = body;
    }

    /// Detach the body, leaving the request without one.
    pub fn take_body(&mut self) -> Option<Body> {
        self.body.take()
    }
}

fn default_method() -> String {
    "GET".to_string()
}

/// JSON description of a request.
///
/// ```json
/// {
///   "method": "POST",
///   "url": "https://pie.dev/anything",
///   "headers": { "Content-Type": ["application/json"] },
///   "body": "{\"username\": \"alice\"}"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method (default GET).
    #[serde(default = "default_method")]
    pub method: String,

    /// Target URL, used verbatim.
    pub url: String,

    /// Header values by name.
    #[serde(default)]
    pub headers: BTreeMap<String, Vec<String>>,

    /// Body text; absent means no body at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RequestSpec {
    /// Parse a request description from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let spec: RequestSpec = serde_json::from_str(text)?;
        spec.check()?;
        Ok(spec)
    }

    /// Load a request description from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn check(&self) -> Result<()> {
        if self.method.trim().is_empty() {
            return Err(Error::InvalidRequest("method is empty".to_string()));
        }
        if self.headers.keys().any(|k| k.is_empty()) {
            return Err(Error::InvalidRequest("header name is empty".to_string()));
        }
        Ok(())
    }
}

impl From<RequestSpec> for Request {
    fn from(spec: RequestSpec) -> Self {
        let mut req = Request::new(spec.method, spec.url);
        for (name, values) in spec.headers {
            for value in values {
                req.headers_mut().add(name.clone(), value);
            }
        }
        if let Some(body) = spec.body {
            req.set_body(Some(Body::from(body)));
        }
        req
    }
}
