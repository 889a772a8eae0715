use thiserror::Error;

#[derive(Error, Debug)]
pub enum DBError {
    #[error(transparent)]
    Relational(#[from] sea_orm::DbErr),
    #[error(transparent)]
    InMemoryError(#[from] InMemoryError),
    #[error("product {0} not found")]
    UnknownProduct(i32),
    #[error("transaction aborted: {0}")]
    Aborted(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum InMemoryError {
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to read with serde: {0}")]
    SerdeError(#[from] serde_json::error::Error),
    #[error("in-memory store lock is poisoned")]
    Poisoned,
}

impl DBError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DBError::UnknownProduct(_))
    }
}
