use crate::db::errors::{DBError, InMemoryError};
use crate::db::page::{Page, PER_PAGE};
use crate::db::product::{Product, ProductPayload, ProductSummary};
use crate::db::search_query::SearchQuery;
use crate::db::user::User;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FileStructure {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Default)]
pub struct InMemoryDB {
    pub products: RwLock<BTreeMap<i32, Product>>,
    pub users: RwLock<Vec<User>>,
    pub last_id: AtomicI32,
}

impl From<FileStructure> for InMemoryDB {
    fn from(data: FileStructure) -> Self {
        let last_id = data.products.iter().map(|prod| prod.id).max().unwrap_or(0);
        let products = data
            .products
            .into_iter()
            .map(|prod| (prod.id, prod))
            .collect();
        Self {
            products: RwLock::new(products),
            users: RwLock::new(data.users),
            last_id: AtomicI32::new(last_id),
        }
    }
}

impl TryFrom<&str> for InMemoryDB {
    type Error = DBError;

    fn try_from(file_path: &str) -> Result<Self, Self::Error> {
        let data = fs::read_to_string(file_path).map_err(InMemoryError::IoError)?;
        let db: FileStructure = serde_json::from_str(&data).map_err(InMemoryError::SerdeError)?;
        Ok(db.into())
    }
}

impl InMemoryDB {
    fn read_products(&self) -> Result<RwLockReadGuard<'_, BTreeMap<i32, Product>>, DBError> {
        Ok(self.products.read().map_err(|_| InMemoryError::Poisoned)?)
    }

    fn write_products(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<i32, Product>>, DBError> {
        Ok(self.products.write().map_err(|_| InMemoryError::Poisoned)?)
    }

    pub fn list_products(&self, page: u64) -> Result<Page<ProductSummary>, DBError> {
        let products = self.read_products()?;
        let offset = usize::try_from(Page::<ProductSummary>::offset(page)).unwrap_or(usize::MAX);
        let items = products
            .values()
            .rev()
            .skip(offset)
            .take(PER_PAGE as usize)
            .map(ProductSummary::from)
            .collect();
        Ok(Page::new(items, page, products.len() as u64))
    }

    pub fn get_product_by(&self, id: i32) -> Result<Product, DBError> {
        let products = self.read_products()?;
        products
            .get(&id)
            .cloned()
            .ok_or(DBError::UnknownProduct(id))
    }

    pub fn create_product(&self, payload: &ProductPayload) -> Result<Product, DBError> {
        self.create_product_atomically(payload, |_| Ok(()))
    }

    /// The product only becomes visible once `hook` succeeds.
    pub fn create_product_atomically<F>(
        &self,
        payload: &ProductPayload,
        hook: F,
    ) -> Result<Product, DBError>
    where
        F: FnOnce(&Product) -> Result<(), DBError>,
    {
        let mut products = self.write_products()?;
        let now = Utc::now();
        let product = Product {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: payload.name.to_owned(),
            description: payload.description.to_owned(),
            created_at: now,
            updated_at: now,
        };
        hook(&product)?;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    pub fn update_product(&self, id: i32, payload: &ProductPayload) -> Result<Product, DBError> {
        let mut products = self.write_products()?;
        let product = products.get_mut(&id).ok_or(DBError::UnknownProduct(id))?;
        product.name = payload.name.to_owned();
        product.description = payload.description.to_owned();
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    pub fn delete_product(&self, id: i32) -> Result<(), DBError> {
        let mut products = self.write_products()?;
        products
            .remove(&id)
            .map(|_| ())
            .ok_or(DBError::UnknownProduct(id))
    }

    pub fn search_products(&self, query: &SearchQuery) -> Result<Vec<Product>, DBError> {
        let products = self.read_products()?;
        Ok(products
            .values()
            .filter(|prod| query.matches(&prod.name))
            .cloned()
            .collect())
    }

    pub fn all_users(&self) -> Result<Vec<User>, DBError> {
        let users = self.users.read().map_err(|_| InMemoryError::Poisoned)?;
        Ok(users.clone())
    }
}
