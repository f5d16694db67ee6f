use reqwest::StatusCode;

/// Everything that can go wrong inside one emission.
///
/// None of these ever reach the caller of [`crate::emitter::LogEmitter::emit`];
/// they exist so diagnostic sinks receive a typed report instead of a
/// preformatted string.
#[derive(thiserror::Error, Debug)]
pub enum EmitFailure {
    #[error("failed to encode log record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to reach logging endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("logging endpoint rejected record with status {status}")]
    Response { status: StatusCode },

    #[error("no async runtime available to dispatch log record")]
    Runtime,
}

/// Coarse classification of an [`EmitFailure`].
///
/// The underlying `serde_json` and `reqwest` errors are not `Clone`, so
/// sinks that want to tally or assert on failures match on this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Serialization,
    Transport,
    Response,
    Runtime,
}

impl EmitFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            EmitFailure::Serialization(_) => FailureKind::Serialization,
            EmitFailure::Transport(_) => FailureKind::Transport,
            EmitFailure::Response { .. } => FailureKind::Response,
            EmitFailure::Runtime => FailureKind::Runtime,
        }
    }
}
