//! Error types for order manager operations.

use thiserror::Error;

/// Errors returned by [`OrderManager`](super::OrderManager) operations.
///
/// Operations on missing keys or out-of-range indexes are not errors; they
/// are reported through `None`/`false` return values.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OrderError {
    /// The order hint cannot be compared or stored.
    #[error("Invalid order hint {hint} for item {group_id}/{id}: must be finite")]
    InvalidOrderHint {
        /// Group of the rejected item
        group_id: String,
        /// Id of the rejected item
        id: String,
        /// The rejected hint
        hint: f64,
    },
}

impl OrderError {
    /// Check if this error was caused by invalid caller input.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, OrderError::InvalidOrderHint { .. })
    }
}

// Conversion from OrderError to the main Error type
impl From<OrderError> for crate::Error {
    fn from(err: OrderError) -> Self {
        crate::Error::Order(err)
    }
}
