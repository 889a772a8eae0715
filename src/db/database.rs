use crate::configuration::{DatabaseSettings, DatabaseType};
use crate::db::errors::DBError;
use crate::db::in_memory::InMemoryDB;
use crate::db::page::{Page, MAX_PAGE};
use crate::db::product::{Product, ProductPayload, ProductSummary};
use crate::db::relational::RelationalDB;
use crate::db::search_query::SearchQuery;
use crate::db::user::User;
use crate::errors::Error;
use sea_orm::Database as SeaOrmDB;
use tracing::info;

/// Product store handed to the router and the notification worker at startup.
#[derive(Debug)]
pub enum Database {
    InMemory(Box<InMemoryDB>),
    Relational(RelationalDB),
}

impl Database {
    pub async fn try_from(settings: &DatabaseSettings) -> Result<Self, Error> {
        settings.is_valid()?;
        match settings.db_type {
            DatabaseType::InMemory => {
                let file_path = settings.file_path()?;
                let db = InMemoryDB::try_from(file_path)?;
                info!(file_path, "using in-memory product store");
                Ok(Self::InMemory(Box::new(db)))
            }
            DatabaseType::Relational => {
                let connection_settings = settings.relational_connection()?;
                let connection = SeaOrmDB::connect(connection_settings)
                    .await
                    .map_err(DBError::Relational)?;
                let db = RelationalDB::init(connection);
                db.ensure_schema().await?;
                info!("using relational product store");
                Ok(Self::Relational(db))
            }
        }
    }

    pub async fn list_products(&self, page: u64) -> Result<Page<ProductSummary>, DBError> {
        let page = page.clamp(1, MAX_PAGE);
        match self {
            Database::InMemory(db) => db.list_products(page),
            Database::Relational(db) => db.list_products(page).await,
        }
    }

    pub async fn get_product_by(&self, id: i32) -> Result<Product, DBError> {
        match self {
            Database::InMemory(db) => db.get_product_by(id),
            Database::Relational(db) => db.get_product_by(id).await,
        }
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, DBError> {
        match self {
            Database::InMemory(db) => db.create_product(payload),
            Database::Relational(db) => db.create_product(payload).await,
        }
    }

    /// Creates a product and runs `hook` before committing. An error from
    /// `hook` rolls the insert back and is returned as is.
    pub async fn create_product_atomically<F>(
        &self,
        payload: &ProductPayload,
        hook: F,
    ) -> Result<Product, DBError>
    where
        F: FnOnce(&Product) -> Result<(), DBError> + Send,
    {
        match self {
            Database::InMemory(db) => db.create_product_atomically(payload, hook),
            Database::Relational(db) => db.create_product_atomically(payload, hook).await,
        }
    }

    pub async fn update_product(
        &self,
        id: i32,
        payload: &ProductPayload,
    ) -> Result<Product, DBError> {
        match self {
            Database::InMemory(db) => db.update_product(id, payload),
            Database::Relational(db) => db.update_product(id, payload).await,
        }
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), DBError> {
        match self {
            Database::InMemory(db) => db.delete_product(id),
            Database::Relational(db) => db.delete_product(id).await,
        }
    }

    pub async fn search_products(&self, query: &SearchQuery) -> Result<Vec<Product>, DBError> {
        match self {
            Database::InMemory(db) => db.search_products(query),
            Database::Relational(db) => db.search_products(query).await,
        }
    }

    pub async fn all_users(&self) -> Result<Vec<User>, DBError> {
        match self {
            Database::InMemory(db) => db.all_users(),
            Database::Relational(db) => db.all_users().await,
        }
    }
}

impl From<InMemoryDB> for Database {
    fn from(db: InMemoryDB) -> Self {
        Self::InMemory(Box::new(db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::in_memory::FileStructure;

    fn create_db() -> Database {
        InMemoryDB::from(FileStructure::default()).into()
    }

    #[tokio::test]
    async fn apple_scenario_works() {
        let db = create_db();
        let payload = ProductPayload::new("Apple", Some("A round red fruit"));
        db.create_product(&ProductPayload::new("Banana", None))
            .await
            .expect("Failed to create product");
        let apple = db
            .create_product(&payload)
            .await
            .expect("Failed to create product");

        let page = db.list_products(1).await.expect("Failed to list products");
        assert_eq!(page.items.first(), Some(&ProductSummary::from(&apple)));

        let found = db
            .search_products(&SearchQuery::new("app"))
            .await
            .expect("Failed to search");
        assert_eq!(found, vec![apple.clone()]);

        db.delete_product(apple.id)
            .await
            .expect("Failed to delete product");
        let result = db.get_product_by(apple.id).await;
        assert!(result.is_err_and(|err| err.is_not_found()));
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty() {
        let db = create_db();
        db.create_product(&ProductPayload::new("Apple", None))
            .await
            .expect("Failed to create product");

        let page = db
            .list_products(u64::MAX)
            .await
            .expect("Failed to list products");
        assert!(page.items.is_empty());
        assert_eq!(page.page, MAX_PAGE);
        assert_eq!(page.total_items, 1);

        let page = db.list_products(0).await.expect("Failed to list products");
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn invalid_settings_fail() {
        let settings = DatabaseSettings {
            file_path: Some("does/not/exist.json".to_string()),
            ..Default::default()
        };
        assert!(Database::try_from(&settings).await.is_err());
    }
}
