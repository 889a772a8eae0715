//! Outbound notifications for newly created products.
//!
//! [`NotificationQueue`] is the publishing half and is used inside the
//! product creation transaction. [`NotificationWorker`] consumes the queue on
//! its own task and fans every event out to the registered users.

mod errors;
mod notifier;
mod queue;
mod worker;

use crate::db::{Database, Product, User};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;

pub use errors::NotificationError;
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{LogNotifier, Notifier};
pub use queue::NotificationQueue;
pub use worker::NotificationWorker;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ProductCreated {
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ProductCreatedNotification {
    pub product_id: i32,
    pub product_name: String,
}

impl ProductCreatedNotification {
    pub fn subject(&self) -> String {
        format!("New product: {}", self.product_name)
    }

    pub fn body(&self, recipient: &User) -> String {
        format!(
            "Hello {},\n\nA new product \"{}\" (#{}) has been added to the catalog.",
            recipient.name, self.product_name, self.product_id
        )
    }
}

impl From<&Product> for ProductCreatedNotification {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.to_owned(),
        }
    }
}

/// Builds a bounded queue and the worker that drains it.
pub fn channel(
    capacity: usize,
    db: Arc<Database>,
    notifier: Arc<dyn Notifier>,
) -> (NotificationQueue, NotificationWorker) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (
        NotificationQueue::new(sender),
        NotificationWorker::new(receiver, db, notifier),
    )
}
