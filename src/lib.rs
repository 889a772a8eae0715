pub mod app_state;
pub mod configuration;
pub mod data_models;
pub mod db;
pub mod errors;
mod extractors;
pub mod notifications;
mod routes;
pub mod service;
mod templates;

use crate::app_state::AppState;
use crate::db::Database;
use crate::errors::Error;
use crate::notifications::NotificationQueue;
use axum::routing::{get, post};
use axum::Router;
use routes::{repositories, services};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_app(
    db: Arc<Database>,
    notifications: NotificationQueue,
) -> Result<(Router, AppState), Error> {
    let app_state = AppState::init(db, notifications);
    let app = Router::new()
        .route("/health_check", get(routes::health_check))
        .route(
            "/repositories/products",
            get(repositories::index).post(repositories::store),
        )
        .route("/repositories/products/search", get(repositories::search))
        .route("/repositories/products/create", get(repositories::create))
        .route(
            "/repositories/products/:id",
            get(repositories::show)
                .put(repositories::update)
                .delete(repositories::destroy)
                .post(repositories::method_override),
        )
        .route("/repositories/products/:id/edit", get(repositories::edit))
        .route("/services/products/store", post(services::store))
        .route("/services/products/create", get(services::create))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state.clone());
    Ok((app, app_state))
}
