use crate::error::{EmitFailure, FailureKind};
use std::sync::Mutex;

/// Process-local channel for the emitter's own internal failures.
///
/// This is distinct from the log records being shipped: it is where the
/// emitter reports that an emission could not be delivered. Reports are
/// best-effort and must never panic or block for long; the emitter calls
/// `report` from its background task (or, for dispatch failures, from the
/// caller's thread) and moves on.
pub trait DiagnosticSink: Send + Sync {
    /// Report one contained emission failure.
    fn report(&self, failure: &EmitFailure);
}

/// Default diagnostic channel: one line per failure on stderr.
#[derive(Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, failure: &EmitFailure) {
        eprintln!("dev logger error: {}", failure);
    }
}

/// Diagnostic channel that routes reports through `tracing`.
///
/// Useful when the host application already has a subscriber installed
/// and wants emitter failures in the same structured stream.
#[derive(Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, failure: &EmitFailure) {
        tracing::error!(target: "devlogger", kind = ?failure.kind(), "dev logger error: {}", failure);
    }
}

/// A sink that simply drops all reports.
///
/// Useful for measuring the overhead of the emitter itself without any
/// diagnostic output, and for callers that want full silence.
#[derive(Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {
    fn report(&self, _failure: &EmitFailure) {}
}

/// In-memory sink that records every report for later inspection.
///
/// Intended for tests: emissions are fire-and-forget, so asserting on
/// failure behavior means polling this sink rather than awaiting a result.
#[derive(Default)]
pub struct MemoryDiagnostics {
    reports: Mutex<Vec<(FailureKind, String)>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports received so far, in arrival order.
    pub fn reports(&self) -> Vec<(FailureKind, String)> {
        self.reports.lock().expect("diagnostics lock poisoned").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().expect("diagnostics lock poisoned").is_empty()
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn report(&self, failure: &EmitFailure) {
        self.reports
            .lock()
            .expect("diagnostics lock poisoned")
            .push((failure.kind(), failure.to_string()));
    }
}
