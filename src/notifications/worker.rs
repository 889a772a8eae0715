use crate::db::Database;
use crate::notifications::{NotificationError, Notifier, ProductCreated, ProductCreatedNotification};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tracing::{error, info, instrument, warn};

pub struct NotificationWorker {
    receiver: Receiver<ProductCreated>,
    db: Arc<Database>,
    notifier: Arc<dyn Notifier>,
}

impl NotificationWorker {
    pub fn new(
        receiver: Receiver<ProductCreated>,
        db: Arc<Database>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            receiver,
            db,
            notifier,
        }
    }

    /// Runs until every [`NotificationQueue`](super::NotificationQueue) is dropped.
    pub async fn run(mut self) {
        info!("notification worker started");
        while let Some(event) = self.receiver.recv().await {
            if let Err(err) = self.handle(&event).await {
                error!(product_id = event.product.id, error = %err, "failed to dispatch notifications");
            }
        }
        info!("notification queue closed, worker stopped");
    }

    /// Notifies every user about the product; a failed recipient does not
    /// stop the others. Returns the number of delivered notifications.
    #[instrument(skip(self, event), fields(product_id = event.product.id))]
    pub async fn handle(&self, event: &ProductCreated) -> Result<usize, NotificationError> {
        let users = self.db.all_users().await?;
        let notification = ProductCreatedNotification::from(&event.product);
        let mut delivered = 0;
        for user in &users {
            match self.notifier.notify(user, &notification).await {
                Ok(()) => delivered += 1,
                Err(err) => warn!(user_id = user.id, error = %err, "notification not delivered"),
            }
        }
        info!(delivered, recipients = users.len(), "product created notifications sent");
        Ok(delivered)
    }
}
