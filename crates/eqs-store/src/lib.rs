//! Remote equipment store.
//!
//! The store is a spreadsheet behind one HTTP endpoint: `GET` returns every
//! row, `POST` takes an `update_row` or `full_replace` command and answers
//! `{"success": bool, "error": string?}`.
//!
//! - [`StoreTransport`]: the injected transport, with [`HttpStore`] as the
//!   real implementation
//! - [`StatusService`]: validates locally, then sends
//! - [`access`]: the two-role sign-in gate

pub mod access;
mod command;
mod config;
mod error;
mod http;
mod service;
mod transport;

pub use access::{AccessRole, Account, Action, CredentialVerifier, StaticCredentials};
pub use command::{StoreCommand, StoreResponse};
pub use config::{DEFAULT_TIMEOUT_SECS, StoreConfig};
pub use error::{Result, StoreError};
pub use http::HttpStore;
pub use service::{DEFAULT_EDITOR, StatusService};
pub use transport::{StoreTransport, ensure_success};
