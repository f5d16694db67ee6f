use crate::diagnostics::{DiagnosticSink, StderrDiagnostics};
use crate::error::EmitFailure;
use crate::record::LogRecord;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Endpoint used when no configuration is supplied.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/logger";

/// Configuration for [`LogEmitter`].
///
/// **Fields**
/// - `endpoint`: full URL of the dev logging endpoint that receives one
///   POST per emission. Defaults to [`DEFAULT_ENDPOINT`].
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    pub endpoint: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Fire-and-forget client for the dev logging endpoint.
///
/// Every emission is one HTTP POST with a JSON body, dispatched on a
/// spawned Tokio task. The emitting call returns immediately and the
/// outcome of the request is never surfaced to the caller: failures of
/// any kind are contained and reported to the configured
/// [`DiagnosticSink`] instead.
///
/// Emissions are independent. There is no queue, no retry, no ordering
/// guarantee between concurrent calls, and no way to cancel a request
/// once dispatched. Timeouts are whatever the underlying `reqwest`
/// client defaults to.
#[derive(Clone)]
pub struct LogEmitter {
    client: Client,
    config: EmitterConfig,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl LogEmitter {
    /// Construct an emitter with the default endpoint and stderr
    /// diagnostics.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Construct an emitter with an explicit configuration, keeping the
    /// stderr diagnostic channel.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self::with_diagnostics(config, Arc::new(StderrDiagnostics))
    }

    /// Construct an emitter with an explicit configuration and an
    /// injected diagnostic channel.
    ///
    /// **Parameters**
    /// - `config`: [`EmitterConfig`] naming the target endpoint.
    /// - `diagnostics`: [`DiagnosticSink`] that receives every contained
    ///   failure. The sink also serves as an optional failure hook for
    ///   callers that want observability without changing the
    ///   fire-and-forget contract.
    pub fn with_diagnostics(config: EmitterConfig, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        LogEmitter {
            client: Client::new(),
            config,
            diagnostics,
        }
    }

    /// Emit one log event. Returns before the request resolves.
    ///
    /// **Parameters**
    /// - `source`: origin identifier; `None` or `""` becomes `""`.
    /// - `severity`: level label; `None` or `""` becomes `"info"`.
    /// - `message`: message body; `None` or `""` becomes `""`.
    ///
    /// Must be called from within a Tokio runtime; outside one, the
    /// emission is dropped and a runtime failure is reported to the
    /// diagnostic sink. Nothing this method does can panic the caller
    /// or return an error.
    pub fn emit(&self, source: Option<&str>, severity: Option<&str>, message: Option<&str>) {
        self.dispatch(LogRecord::new(source, severity, message));
    }

    /// Emit a pre-built [`LogRecord`] as-is, skipping normalization.
    pub fn emit_record(&self, record: LogRecord) {
        self.dispatch(record);
    }

    /// Emit with severity `"debug"`.
    pub fn debug(&self, source: &str, message: &str) {
        self.emit(Some(source), Some("debug"), Some(message));
    }

    /// Emit with severity `"info"`.
    pub fn info(&self, source: &str, message: &str) {
        self.emit(Some(source), Some("info"), Some(message));
    }

    /// Emit with severity `"warning"`.
    pub fn warn(&self, source: &str, message: &str) {
        self.emit(Some(source), Some("warning"), Some(message));
    }

    /// Emit with severity `"error"`.
    pub fn error(&self, source: &str, message: &str) {
        self.emit(Some(source), Some("error"), Some(message));
    }

    /// Schedule the POST and detach. The only synchronous failure mode
    /// is the absence of a runtime, which is reported instead of panicking.
    fn dispatch(&self, record: LogRecord) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                self.diagnostics.report(&EmitFailure::Runtime);
                return;
            }
        };

        let client = self.client.clone();
        let endpoint = self.config.endpoint.clone();
        let diagnostics = Arc::clone(&self.diagnostics);

        handle.spawn(async move {
            if let Err(failure) = post_record(&client, &endpoint, &record).await {
                diagnostics.report(&failure);
            }
        });
    }
}

impl Default for LogEmitter {
    fn default() -> Self {
        LogEmitter::new()
    }
}

async fn post_record(client: &Client, endpoint: &str, record: &LogRecord) -> Result<(), EmitFailure> {
    let body = serde_json::to_string(record)?;

    let resp = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(EmitFailure::Response { status });
    }

    // The endpoint may answer with a JSON body; its contents are unused
    // and a malformed body is not an error.
    let _ = resp.json::<serde_json::Value>().await;
    Ok(())
}
