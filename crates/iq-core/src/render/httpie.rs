//! HTTPie dialect.

use super::Renderer;
use crate::capture::capture_request;
use crate::escape::escape;
use crate::headers::project;
use iq_common::Request;
use iq_redact::RedactionPolicy;
use std::io;

/// Renders `http <METHOD> '<url>' ['<name>:<value>']... [data='<body>']`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Httpie;

impl Renderer for Httpie {
    fn name(&self) -> &str {
        "httpie"
    }

    fn render(&self, request: &mut Request, policy: &RedactionPolicy) -> io::Result<String> {
        let mut cmd = vec![
            "http".to_string(),
            request.method().to_string(),
            escape(request.url()),
        ];

        for (name, value) in project(request.headers(), policy) {
            cmd.push(escape(&format!("{}:{}", name, value)));
        }

        if let Some(body) = capture_request(request)? {
            cmd.push(format!("data={}", escape(&body)));
        }

        Ok(cmd.join(" ") + "\n")
    }
}
