//! Process-wide default runner: replacement and environment activation.
//!
//! Tests here share the default runner and the process environment, so
//! each one holds `ENV_LOCK` for its whole body.

use iq_core::{global, Request, Runner, SharedBuffer, CURL_ENV, HTTPIE_ENV, NO_REDACT_ENV};
use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Clear every activation variable, then set the given ones.
    fn with(vars: &[(&'static str, &str)]) -> Self {
        let saved = [CURL_ENV, HTTPIE_ENV, NO_REDACT_ENV]
            .into_iter()
            .map(|k| (k, env::var(k).ok()))
            .collect();
        for k in [CURL_ENV, HTTPIE_ENV, NO_REDACT_ENV] {
            env::remove_var(k);
        }
        for (k, v) in vars {
            env::set_var(k, v);
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

fn print_both_ways(vars: &[(&'static str, &str)], mut make: impl FnMut() -> Request) -> (String, String) {
    let _env = EnvGuard::with(vars);

    // A freshly built runner
    let buf = SharedBuffer::new();
    let runner = Runner::builder()
        .with_writer(buf.clone())
        .with_environment()
        .build();
    runner.print(&mut make()).expect("print custom runner");
    let custom = buf.contents();

    // The same configuration installed as the default
    global::set(Runner::from_env());
    let buf = SharedBuffer::new();
    global::get().set_writer(buf.clone());
    global::print(&mut make()).expect("print default runner");
    let default = buf.contents();

    (custom, default)
}

#[test]
fn test_httpie_from_env() {
    let _lock = lock_env();
    let (custom, default) = print_both_ways(&[(HTTPIE_ENV, "1")], || {
        Request::get("http://www.example.com")
    });
    assert_eq!(custom, "http GET 'http://www.example.com'\n");
    assert_eq!(default, custom);
}

#[test]
fn test_curl_from_env() {
    let _lock = lock_env();
    let (custom, default) = print_both_ways(&[(CURL_ENV, "1")], || {
        Request::get("http://www.example.com")
    });
    assert_eq!(custom, "curl -X GET 'http://www.example.com'\n");
    assert_eq!(default, custom);
}

#[test]
fn test_curl_precedes_httpie_regardless_of_order() {
    let _lock = lock_env();
    let want = "curl -X GET 'http://www.example.com'\nhttp GET 'http://www.example.com'\n";

    let (custom, default) = print_both_ways(&[(HTTPIE_ENV, "1"), (CURL_ENV, "1")], || {
        Request::get("http://www.example.com")
    });
    assert_eq!(custom, want);
    assert_eq!(default, want);

    let (custom, _) = print_both_ways(&[(CURL_ENV, "1"), (HTTPIE_ENV, "1")], || {
        Request::get("http://www.example.com")
    });
    assert_eq!(custom, want);
}

#[test]
fn test_nothing_set_prints_nothing() {
    let _lock = lock_env();
    let (custom, default) = print_both_ways(&[], || Request::get("http://www.example.com"));
    assert_eq!(custom, "");
    assert_eq!(default, "");
    assert!(!global::is_enabled());
}

#[test]
fn test_no_redact_from_env() {
    let _lock = lock_env();
    let (custom, _) = print_both_ways(&[(CURL_ENV, "1"), (NO_REDACT_ENV, "1")], || {
        Request::get("http://x").with_header("Authorization", "Bearer my-token")
    });
    assert_eq!(
        custom,
        "curl -X GET -H 'Authorization: Bearer my-token' 'http://x'\n"
    );
}

#[test]
fn test_env_is_read_once() {
    let _lock = lock_env();
    let runner = {
        let _env = EnvGuard::with(&[(CURL_ENV, "1")]);
        Runner::from_env()
    };
    // The variable is gone now; the runner keeps its configuration.
    let _env = EnvGuard::with(&[]);
    assert!(runner.is_enabled());
    assert_eq!(runner.renderer_names(), vec!["curl"]);
}

#[test]
fn test_global_enable_disable() {
    let _lock = lock_env();
    let buf = SharedBuffer::new();
    global::set(Runner::builder().with_writer(buf.clone()).with_curl().build());

    global::disable();
    assert!(!global::is_enabled());
    global::print(&mut Request::get("http://x")).expect("print");
    assert!(buf.is_empty());

    global::enable();
    assert!(global::is_enabled());
    global::print(&mut Request::get("http://x")).expect("print");
    assert_eq!(buf.contents(), "curl -X GET 'http://x'\n");
}

#[test]
fn test_crate_root_accessors() {
    let _lock = lock_env();
    let buf = SharedBuffer::new();
    iq_core::set_default_runner(Runner::builder().with_writer(buf.clone()).with_httpie().build());
    assert_eq!(iq_core::default_runner().renderer_names(), vec!["httpie"]);

    iq_core::disable();
    assert!(!iq_core::is_enabled());
    iq_core::enable();
    iq_core::print(&mut Request::get("http://x")).expect("print");
    assert_eq!(buf.contents(), "http GET 'http://x'\n");
}
