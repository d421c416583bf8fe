//! Error types for store access.

use eqs_validate::{DatasetError, UpdateError};
use thiserror::Error;

use crate::access::{AccessRole, Action};

/// Errors raised while reading from or writing to the remote store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    // === Configuration Errors ===
    /// No store endpoint is configured.
    #[error("no store endpoint configured")]
    MissingEndpoint,

    // === Transport Errors ===
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The store answered with a non-success HTTP status.
    #[error("store returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body is not the expected JSON shape.
    #[error("failed to decode store response: {0}")]
    Decode(String),

    /// The store processed the command and refused it.
    #[error("store rejected the command: {0}")]
    Rejected(String),

    // === Local Refusals ===
    /// The single update failed validation; nothing was sent.
    #[error(transparent)]
    InvalidUpdate(#[from] UpdateError),

    /// The candidate dataset failed parsing or validation; nothing was sent.
    #[error(transparent)]
    InvalidDataset(#[from] DatasetError),

    /// The signed-in role may not perform the action.
    #[error("role {role} may not {action}")]
    Forbidden { role: AccessRole, action: Action },
}

impl StoreError {
    /// Message shown to the operator.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingEndpoint => {
                "Endereço da planilha não configurado.".to_string()
            }
            Self::Network(_) | Self::Http { .. } | Self::Decode(_) | Self::Rejected(_) => {
                "Erro de comunicação com a planilha. Tente novamente.".to_string()
            }
            Self::InvalidUpdate(err) => err.to_string(),
            Self::InvalidDataset(err) => err.to_string(),
            Self::Forbidden { .. } => "Acesso não permitido para este usuário.".to_string(),
        }
    }

    /// Whether the same call may succeed if repeated unchanged.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Decode(_) => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
