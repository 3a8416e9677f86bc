//! Deterministic header projection.
//!
//! Header multimaps have no useful iteration order, and a single name can
//! carry values in any order. Rendered commands must be stable across runs
//! so they can be diffed, which means sorting names and then each name's
//! values. Redaction happens before the value sort.

use iq_common::HeaderMap;
use iq_redact::RedactionPolicy;

/// Flatten `headers` into sorted `(name, value)` pairs, redacting per
/// `policy`.
///
/// Names sort byte-wise ascending; the values of each name sort byte-wise
/// ascending after redaction. One pair is emitted per value.
pub fn project<'a>(
    headers: &'a HeaderMap,
    policy: &'a RedactionPolicy,
) -> Vec<(&'a str, &'a str)> {
    let mut entries: Vec<(&str, &[String])> = headers.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut out = Vec::new();
    for (name, values) in entries {
        let mut values: Vec<&str> = values
            .iter()
            .map(|v| policy.redact_header(name, v))
            .collect();
        values.sort_unstable();
        out.extend(values.into_iter().map(|v| (name, v)));
    }
    out
}
