use crate::db::{DBError, Database, Product, ProductPayload};
use crate::errors::AppErrors;
use crate::notifications::{NotificationQueue, ProductCreated};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// Creates products and announces them on the notification queue within one transaction.
#[derive(Debug, Clone)]
pub struct ProductService {
    db: Arc<Database>,
    notifications: NotificationQueue,
}

impl ProductService {
    pub fn new(db: Arc<Database>, notifications: NotificationQueue) -> Self {
        Self { db, notifications }
    }

    #[instrument(skip(self, payload), fields(product_name = %payload.name))]
    pub async fn create_product(&self, payload: ProductPayload) -> Result<Product, AppErrors> {
        payload.validate()?;
        let product = self
            .db
            .create_product_atomically(&payload, |product| {
                self.notifications
                    .publish(ProductCreated {
                        product: product.clone(),
                    })
                    .map_err(|err| DBError::Aborted(Box::new(err)))
            })
            .await
            .map_err(AppErrors::ProductCreationFailed)?;
        info!(product_id = product.id, "product created");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::in_memory::{FileStructure, InMemoryDB};
    use crate::db::SearchQuery;
    use tokio::sync::mpsc;

    fn create_db() -> Arc<Database> {
        Arc::new(InMemoryDB::from(FileStructure::default()).into())
    }

    #[tokio::test]
    async fn create_product_publishes_event() {
        let db = create_db();
        let (sender, mut receiver) = mpsc::channel(4);
        let service = ProductService::new(db.clone(), NotificationQueue::new(sender));

        let product = service
            .create_product(ProductPayload::new("Apple", Some("A round red fruit")))
            .await
            .expect("Failed to create product");

        let event = receiver.recv().await.expect("No event published");
        assert_eq!(event.product, product);
        assert_eq!(
            db.get_product_by(product.id).await.expect("Failed to find"),
            product
        );
    }

    #[tokio::test]
    async fn invalid_payload_fails() {
        let (sender, _receiver) = mpsc::channel(4);
        let service = ProductService::new(create_db(), NotificationQueue::new(sender));

        let result = service.create_product(ProductPayload::new("", None)).await;
        assert!(matches!(result, Err(AppErrors::ValidationError(_))));
    }

    #[tokio::test]
    async fn failed_notification_rolls_back() {
        let db = create_db();
        let (sender, receiver) = mpsc::channel(4);
        drop(receiver);
        let service = ProductService::new(db.clone(), NotificationQueue::new(sender));

        let result = service
            .create_product(ProductPayload::new("Apple", None))
            .await;
        assert!(matches!(
            result,
            Err(AppErrors::ProductCreationFailed(DBError::Aborted(_)))
        ));

        let products = db
            .search_products(&SearchQuery::new("Apple"))
            .await
            .expect("Failed to search");
        assert!(products.is_empty());
        assert!(db.get_product_by(1).await.is_err());
    }
}
