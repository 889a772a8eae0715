use crate::db::User;
use crate::notifications::{NotificationError, ProductCreatedNotification};
use async_trait::async_trait;
use tracing::info;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        recipient: &User,
        notification: &ProductCreatedNotification,
    ) -> Result<(), NotificationError>;
}

/// Records deliveries in the log instead of handing them to a mail transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(
        &self,
        recipient: &User,
        notification: &ProductCreatedNotification,
    ) -> Result<(), NotificationError> {
        info!(
            recipient = %recipient.email,
            subject = %notification.subject(),
            body = %notification.body(recipient),
            "notification delivered"
        );
        Ok(())
    }
}
