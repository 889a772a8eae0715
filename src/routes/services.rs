use crate::app_state::AppState;
use crate::data_models::ProductCreatedResponse;
use crate::db::ProductPayload;
use crate::errors::AppErrors;
use crate::extractors::JsonOrForm;
use crate::templates::{CreateProductTemplate, HtmlTemplate};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Json, Result};

pub const STORE_PATH: &str = "/services/products/store";

pub async fn create() -> HtmlTemplate<CreateProductTemplate> {
    HtmlTemplate(CreateProductTemplate { action: STORE_PATH })
}

pub async fn store(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ProductPayload>,
) -> Result<(StatusCode, Json<ProductCreatedResponse>), AppErrors> {
    let product = state.products.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}
