use crate::db::DBError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("socket address parsing error: {0}")]
    SocketAddressParsingError(#[from] std::net::AddrParseError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    #[error("database error: {0}")]
    DatabaseError(#[from] DBError),
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("failed to read configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{0} is not a supported environment. Use either `dev` or `prod`.")]
    UnknownEnvironment(String),
    #[error("unknown database type {0}")]
    UnknownDatabaseType(String),
    #[error("data file {0} not found")]
    DataFileNotFound(String),
    #[error("missing database setting `{0}`")]
    MissingDatabaseSettings(&'static str),
}

#[derive(Error, Debug)]
pub enum AppErrors {
    #[error(transparent)]
    DatabaseError(#[from] DBError),
    #[error("invalid product data")]
    ValidationError(#[from] validator::ValidationErrors),
    #[error("error when creating product: {0}")]
    ProductCreationFailed(#[source] DBError),
    #[error("unsupported form method {0}")]
    UnsupportedMethod(String),
}

impl AppErrors {
    pub fn status(&self) -> StatusCode {
        match self {
            AppErrors::DatabaseError(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppErrors::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppErrors::UnsupportedMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppErrors::DatabaseError(_) | AppErrors::ProductCreationFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppErrors {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = match &self {
            AppErrors::ValidationError(errors) => json!({
                "message": self.to_string(),
                "errors": errors,
            }),
            _ => json!({ "message": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryError;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppErrors::DatabaseError(DBError::UnknownProduct(1));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let err = AppErrors::DatabaseError(DBError::InMemoryError(InMemoryError::Poisoned));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn creation_failure_keeps_cause() {
        let err = AppErrors::ProductCreationFailed(DBError::Aborted("queue closed".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "error when creating product: transaction aborted: queue closed"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
