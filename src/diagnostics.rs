// Diagnostic sinks for expansion traces
//
// Sinks are write-only: nothing the expander produces depends on them.

use std::fmt;
use std::sync::Mutex;

/// Receives free-form trace messages while a template is expanded.
pub trait DiagnosticSink: Send + Sync {
    fn trace(&self, message: fmt::Arguments<'_>);
}

/// Discards every message. This is the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn trace(&self, _message: fmt::Arguments<'_>) {}
}

/// Forwards messages as `tracing` events at TRACE level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn trace(&self, message: fmt::Arguments<'_>) {
        tracing::trace!(target: "std_uri_template", "{}", message);
    }
}

/// Keeps messages in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn trace(&self, message: fmt::Arguments<'_>) {
        // A poisoned buffer only loses diagnostics
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn trace(&self, message: fmt::Arguments<'_>) {
        (**self).trace(message)
    }
}
