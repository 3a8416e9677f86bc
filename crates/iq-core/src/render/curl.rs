//! curl dialect.

use super::Renderer;
use crate::capture::capture_request;
use crate::escape::escape;
use crate::headers::project;
use iq_common::Request;
use iq_redact::RedactionPolicy;
use std::io;

/// Renders `curl -X <METHOD> [-H '<name>: <value>']... '<url>' [-d '<body>']`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Curl;

impl Renderer for Curl {
    fn name(&self) -> &str {
        "curl"
    }

    fn render(&self, request: &mut Request, policy: &RedactionPolicy) -> io::Result<String> {
        let mut cmd = vec![
            "curl".to_string(),
            "-X".to_string(),
            request.method().to_string(),
        ];

        for (name, value) in project(request.headers(), policy) {
            cmd.push("-H".to_string());
            cmd.push(escape(&format!("{}: {}", name, value)));
        }

        cmd.push(escape(request.url()));

        if let Some(body) = capture_request(request)? {
            cmd.push("-d".to_string());
            cmd.push(escape(&body));
        }

        Ok(cmd.join(" ") + "\n")
    }
}
