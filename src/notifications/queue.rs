use crate::notifications::{NotificationError, ProductCreated};
use tokio::sync::mpsc::{error::TrySendError, Sender};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct NotificationQueue {
    sender: Sender<ProductCreated>,
}

impl NotificationQueue {
    pub fn new(sender: Sender<ProductCreated>) -> Self {
        Self { sender }
    }

    /// Never waits: a full or closed queue is reported to the caller.
    pub fn publish(&self, event: ProductCreated) -> Result<(), NotificationError> {
        let product_id = event.product.id;
        self.sender.try_send(event).map_err(|err| match err {
            TrySendError::Full(_) => NotificationError::QueueFull,
            TrySendError::Closed(_) => NotificationError::QueueClosed,
        })?;
        debug!(product_id, "product created event queued");
        Ok(())
    }
}
