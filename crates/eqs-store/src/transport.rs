//! Transport seam between the service and the remote store.

use eqs_model::EquipmentRecord;

use crate::command::{StoreCommand, StoreResponse};
use crate::error::{Result, StoreError};

/// Moves data to and from the remote store.
///
/// Implementations report transport-level failures as errors and return
/// the decoded [`StoreResponse`] otherwise, even when `success` is false.
pub trait StoreTransport {
    /// Fetches the current dataset, in store order.
    fn fetch_all(&self) -> Result<Vec<EquipmentRecord>>;

    /// Sends one write command.
    fn send(&self, command: &StoreCommand) -> Result<StoreResponse>;
}

/// Turns a refused response into [`StoreError::Rejected`].
pub fn ensure_success(response: StoreResponse) -> Result<()> {
    if response.success {
        Ok(())
    } else {
        Err(StoreError::Rejected(
            response
                .error
                .unwrap_or_else(|| "Erro desconhecido".to_string()),
        ))
    }
}

impl<T: StoreTransport + ?Sized> StoreTransport for &T {
    fn fetch_all(&self) -> Result<Vec<EquipmentRecord>> {
        (**self).fetch_all()
    }

    fn send(&self, command: &StoreCommand) -> Result<StoreResponse> {
        (**self).send(command)
    }
}
