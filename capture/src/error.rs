//! Error types for the capture trigger.
//!
//! ERROR HANDLING
//! ==============
//! `TriggerError` is what a single invocation can fail with. Both kinds take
//! the same failure branch in `RemoteActionTrigger::run`; the split exists
//! for the diagnostic record, not for the user. `ConfigError` is only
//! returned while building a trigger.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
    /// The request never produced a readable reply.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The reply body could not be read as a JSON value with fields.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl TriggerError {
    /// Stable code for the diagnostic record.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::Parse(_) => "E_PARSE",
        }
    }

    /// Short text shown to the user when failures are surfaced.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "No se pudo contactar al servidor.".to_owned(),
            Self::Parse(_) => "Respuesta inválida del servidor.".to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("unknown failure policy '{0}' (expected 'silent' or 'surface')")]
    InvalidFailurePolicy(String),

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}
