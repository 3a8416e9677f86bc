//! The runner: enabled state, renderer list, redaction policy and sink.
//!
//! `print` walks the renderers in registration order and writes each line
//! as soon as it is produced. The first failure ends the call; lines
//! already written stay written.
//!
//! # Thread safety
//!
//! `print`, `enable`, `disable` and `set_writer` take `&self` and may be
//! called from any thread. The enabled flag sits behind a read-write lock
//! and the sink behind a mutex, so concurrent prints never interleave
//! within a line. Renderers and policy are fixed once `build` returns.

use crate::config::EnvConfig;
use crate::error::PrintError;
use crate::render::{Curl, Httpie, Renderer, Tool};
use iq_common::Request;
use iq_redact::RedactionPolicy;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, trace};

/// Renders requests through every registered renderer into one sink.
pub struct Runner {
    enabled: RwLock<bool>,
    renderers: Vec<Box<dyn Renderer>>,
    policy: RedactionPolicy,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Runner {
    /// Start configuring a runner. See [`RunnerBuilder`] for defaults.
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::default()
    }

    /// A runner configured purely from the process environment.
    pub fn from_env() -> Self {
        Self::builder().with_environment().build()
    }

    /// Render `request` with each renderer and write the results.
    ///
    /// Does nothing while disabled. The request body, if any, is left
    /// readable from the start when this returns `Ok`.
    pub fn print(&self, request: &mut Request) -> Result<(), PrintError> {
        if !self.is_enabled() {
            trace!(method = request.method(), "runner disabled, skipping print");
            return Ok(());
        }

        for renderer in &self.renderers {
            let line = renderer
                .render(request, &self.policy)
                .map_err(PrintError::Render)?;

            let mut writer = self.lock_writer();
            writer
                .write_all(line.as_bytes())
                .map_err(PrintError::Write)?;
            writer.flush().map_err(PrintError::Write)?;

            debug!(
                renderer = renderer.name(),
                bytes = line.len(),
                "wrote request rendering"
            );
        }
        Ok(())
    }

    pub fn enable(&self) {
        *self.enabled.write().unwrap_or_else(PoisonError::into_inner) = true;
        debug!("runner enabled");
    }

    pub fn disable(&self) {
        *self.enabled.write().unwrap_or_else(PoisonError::into_inner) = false;
        debug!("runner disabled");
    }

    pub fn is_enabled(&self) -> bool {
        *self.enabled.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the output sink.
    pub fn set_writer<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        *self.lock_writer() = Box::new(writer);
    }

    /// Names of the registered renderers, in print order.
    pub fn renderer_names(&self) -> Vec<&str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }

    pub fn policy(&self) -> &RedactionPolicy {
        &self.policy
    }

    fn lock_writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("enabled", &self.is_enabled())
            .field("renderers", &self.renderer_names())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Configuration for a [`Runner`].
///
/// Settings apply in call order. Renderer additions accumulate in that
/// order; every other setting keeps the last value given.
///
/// Defaults: enabled, no renderers, [`RedactionPolicy::default`], writes
/// to stderr.
pub struct RunnerBuilder {
    enabled: bool,
    renderers: Vec<Box<dyn Renderer>>,
    policy: RedactionPolicy,
    writer: Box<dyn Write + Send>,
}

impl Default for RunnerBuilder {
    fn default() -> Self {
        Self {
            enabled: true,
            renderers: Vec::new(),
            policy: RedactionPolicy::default(),
            writer: Box::new(io::stderr()),
        }
    }
}

impl RunnerBuilder {
    /// Append a renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderers.push(renderer);
        self
    }

    pub fn with_tool(self, tool: Tool) -> Self {
        self.with_renderer(tool.renderer())
    }

    pub fn with_curl(self) -> Self {
        self.with_renderer(Box::new(Curl))
    }

    pub fn with_httpie(self) -> Self {
        self.with_renderer(Box::new(Httpie))
    }

    /// Set the output sink.
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.writer = Box::new(writer);
        self
    }

    /// Turn redaction off.
    pub fn without_redact(mut self) -> Self {
        self.policy.enabled = false;
        self
    }

    /// Text that replaces redacted values.
    pub fn redact_with(mut self, replacement: impl Into<String>) -> Self {
        self.policy.replacement = replacement.into();
        self
    }

    /// Add a header name to redact, matched exactly.
    pub fn redact_header(mut self, name: impl Into<String>) -> Self {
        self.policy.add_header(name);
        self
    }

    /// Replace the whole redaction policy.
    pub fn with_policy(mut self, policy: RedactionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Initial enabled state.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Read the process environment now and apply it.
    pub fn with_environment(self) -> Self {
        self.with_env_config(EnvConfig::from_env())
    }

    /// Apply an environment snapshot.
    ///
    /// The runner starts disabled unless a tool variable is on. Enabled
    /// tools are appended curl first, then httpie.
    pub fn with_env_config(mut self, env: EnvConfig) -> Self {
        self.enabled = env.any_tool();
        for tool in env.tools() {
            self.renderers.push(tool.renderer());
        }
        if env.no_redact {
            self.policy.enabled = false;
        }
        debug!(
            curl = env.curl,
            httpie = env.httpie,
            redact = self.policy.enabled,
            "configured runner from environment"
        );
        self
    }

    pub fn build(self) -> Runner {
        Runner {
            enabled: RwLock::new(self.enabled),
            renderers: self.renderers,
            policy: self.policy,
            writer: Mutex::new(self.writer),
        }
    }
}
