use std::sync::Arc;
use tokio::time::{sleep, Duration};

use devlogger::diagnostics::TracingDiagnostics;
use devlogger::emitter::{EmitterConfig, LogEmitter};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Reads DEVLOGGER_ENDPOINT, falling back to http://localhost:5000/logger.
    let config = EmitterConfig::from_env();
    let emitter = LogEmitter::with_diagnostics(config, Arc::new(TracingDiagnostics));

    emitter.info("testApp", "application started");
    emitter.warn("database", "slow connection to database");
    emitter.error("authentication", "login attempt failed for user admin");
    emitter.debug("scheduler", "scheduled task completed");
    emitter.emit(Some("api"), Some("critical"), Some("critical system unreachable"));

    // All-defaults emission: {"message":"","source":"","level":"info"}.
    emitter.emit(None, None, None);

    // Emissions are detached; give them a moment to land before exiting.
    sleep(Duration::from_secs(1)).await;
}
