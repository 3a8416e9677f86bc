//! Non-destructive body capture.
//!
//! Renderers need the body text, but the request still has to go out on
//! the wire afterwards. Capture drains the stream once, then installs an
//! in-memory replacement holding the same bytes.

use iq_common::{Body, Request};
use std::io::{self, Read};

/// Read `body` to the end and put an identical, unread body in its place.
///
/// The bytes are returned as text, with invalid UTF-8 sequences replaced
/// by U+FFFD; the replacement body keeps the original bytes. A read error
/// is returned as is and leaves whatever the stream had not yet yielded.
pub fn capture(body: &mut Body) -> io::Result<String> {
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)?;
    let text = String::from_utf8_lossy(&buf).into_owned();
    *body = Body::from_bytes(buf);
    Ok(text)
}

/// Capture the request's body, or `None` when it has no body.
pub fn capture_request(request: &mut Request) -> io::Result<Option<String>> {
    match request.body_mut() {
        Some(body) => capture(body).map(Some),
        None => Ok(None),
    }
}
