use crate::db::Database;
use crate::notifications::NotificationQueue;
use crate::service::ProductService;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub products: ProductService,
}

impl AppState {
    pub fn init(db: Arc<Database>, notifications: NotificationQueue) -> Self {
        Self {
            products: ProductService::new(db.clone(), notifications),
            db,
        }
    }
}
