use crate::db::DBError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("notification queue is full")]
    QueueFull,
    #[error("notification queue is closed")]
    QueueClosed,
    #[error("failed to load recipients: {0}")]
    Recipients(#[from] DBError),
    #[error("failed to deliver notification to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}
