use shopcmp_client::ClientError;
use shopcmp_core::ProductId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("product {id} is already in the comparison queue")]
    Duplicate { id: ProductId },

    #[error("comparison queue is full (maximum {capacity} products); remove one to add another")]
    Full { capacity: usize },

    #[error("add at least {required} products to compare (queue has {count})")]
    InsufficientItems { count: usize, required: usize },

    #[error("a comparison is already in progress")]
    CompareInFlight,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl QueueError {
    /// `true` for rejections decided locally, before any request was made.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            QueueError::Client(e) => matches!(e, ClientError::Validation(_)),
            _ => true,
        }
    }
}
