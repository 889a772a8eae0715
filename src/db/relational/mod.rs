pub mod entities;

use chrono::Utc;
use entities::{prelude::*, *};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Schema, TransactionTrait,
};
use tracing::info;

use crate::db::errors::DBError;
use crate::db::page::{Page, PER_PAGE};
use crate::db::product::{Product, ProductPayload, ProductSummary};
use crate::db::search_query::SearchQuery;
use crate::db::user::User;

#[derive(Debug, Default)]
pub struct RelationalDB {
    pub connection: DatabaseConnection,
}

fn new_product(payload: &ProductPayload) -> products::ActiveModel {
    let now = Utc::now();
    products::ActiveModel {
        name: Set(payload.name.to_owned()),
        description: Set(payload.description.to_owned()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

impl RelationalDB {
    pub fn init(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    pub async fn ensure_schema(&self) -> Result<(), DBError> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);
        let statements = [
            schema
                .create_table_from_entity(Products)
                .if_not_exists()
                .to_owned(),
            schema
                .create_table_from_entity(Users)
                .if_not_exists()
                .to_owned(),
        ];
        for statement in statements.iter() {
            self.connection.execute(backend.build(statement)).await?;
        }
        Ok(())
    }

    pub async fn list_products(&self, page: u64) -> Result<Page<ProductSummary>, DBError> {
        let paginator = Products::find()
            .select_only()
            .columns([
                products::Column::Id,
                products::Column::Name,
                products::Column::CreatedAt,
            ])
            .order_by_desc(products::Column::Id)
            .into_model::<ProductSummary>()
            .paginate(&self.connection, PER_PAGE);
        let total_items = paginator.num_items().await?;
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok(Page::new(items, page, total_items))
    }

    pub async fn get_product_by(&self, id: i32) -> Result<Product, DBError> {
        let product = Products::find_by_id(id).one(&self.connection).await?;
        match product {
            None => Err(DBError::UnknownProduct(id)),
            Some(prod) => Ok(prod.into()),
        }
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, DBError> {
        let model = new_product(payload).insert(&self.connection).await?;
        info!(product_id = model.id, "product inserted");
        Ok(model.into())
    }

    /// Inserts inside a transaction that only commits once `hook` succeeds.
    pub async fn create_product_atomically<F>(
        &self,
        payload: &ProductPayload,
        hook: F,
    ) -> Result<Product, DBError>
    where
        F: FnOnce(&Product) -> Result<(), DBError> + Send,
    {
        let txn = self.connection.begin().await?;
        let product: Product = new_product(payload).insert(&txn).await?.into();
        if let Err(err) = hook(&product) {
            txn.rollback().await?;
            return Err(err);
        }
        txn.commit().await?;
        info!(product_id = product.id, "product inserted");
        Ok(product)
    }

    pub async fn update_product(
        &self,
        id: i32,
        payload: &ProductPayload,
    ) -> Result<Product, DBError> {
        let product = Products::find_by_id(id)
            .one(&self.connection)
            .await?
            .ok_or(DBError::UnknownProduct(id))?;
        let mut product: products::ActiveModel = product.into();
        product.name = Set(payload.name.to_owned());
        product.description = Set(payload.description.to_owned());
        product.updated_at = Set(Utc::now());
        let model = product.update(&self.connection).await?;
        Ok(model.into())
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), DBError> {
        let result = Products::delete_by_id(id).exec(&self.connection).await?;
        if result.rows_affected == 0 {
            return Err(DBError::UnknownProduct(id));
        }
        info!(product_id = id, "product deleted");
        Ok(())
    }

    pub async fn search_products(&self, query: &SearchQuery) -> Result<Vec<Product>, DBError> {
        let mut select = Products::find();
        if !query.is_empty() {
            let name = Func::lower(Expr::col(products::Column::Name));
            select = select
                .filter(Expr::expr(name).like(LikeExpr::new(query.pattern()).escape('\\')));
        }
        let products = select
            .order_by_asc(products::Column::Id)
            .all(&self.connection)
            .await?;
        Ok(products.into_iter().map(|prod| prod.into()).collect())
    }

    pub async fn all_users(&self) -> Result<Vec<User>, DBError> {
        let users = Users::find()
            .order_by_asc(users::Column::Id)
            .all(&self.connection)
            .await?;
        Ok(users.into_iter().map(|user| user.into()).collect())
    }
}
