//! HTML views over the product store, plus the JSON name search.

use crate::app_state::AppState;
use crate::data_models::{FormMethod, ListParams, MethodOverrideForm, SearchParams};
use crate::db::{Page, Product, ProductPayload, SearchQuery};
use crate::errors::AppErrors;
use crate::templates::{
    CreateProductTemplate, EditProductTemplate, HtmlTemplate, ProductsIndexTemplate,
    ShowProductTemplate,
};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Redirect, Response, Result};
use axum::Form;
use tracing::{info, instrument};
use validator::Validate;

pub const INDEX_PATH: &str = "/repositories/products";

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<HtmlTemplate<ProductsIndexTemplate>, AppErrors> {
    let page = state
        .db
        .list_products(Page::<()>::normalize(params.page))
        .await?;
    Ok(HtmlTemplate(ProductsIndexTemplate { page }))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>, AppErrors> {
    let query = SearchQuery::from(params);
    let products = state.db.search_products(&query).await?;
    Ok(Json(products))
}

pub async fn create() -> HtmlTemplate<CreateProductTemplate> {
    HtmlTemplate(CreateProductTemplate {
        action: INDEX_PATH,
    })
}

pub async fn store(
    State(state): State<AppState>,
    Form(payload): Form<ProductPayload>,
) -> Result<HtmlTemplate<ShowProductTemplate>, AppErrors> {
    payload.validate()?;
    let product = state.db.create_product(&payload).await?;
    info!(product_id = product.id, product_name = %product.name, "product stored");
    Ok(HtmlTemplate(ShowProductTemplate { product }))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<HtmlTemplate<ShowProductTemplate>, AppErrors> {
    let product = state.db.get_product_by(id).await?;
    Ok(HtmlTemplate(ShowProductTemplate { product }))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<HtmlTemplate<EditProductTemplate>, AppErrors> {
    let product = state.db.get_product_by(id).await?;
    Ok(HtmlTemplate(EditProductTemplate { product }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(payload): Form<ProductPayload>,
) -> Result<HtmlTemplate<ShowProductTemplate>, AppErrors> {
    update_product(&state, id, payload).await
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppErrors> {
    destroy_product(&state, id).await
}

/// Dispatches `POST /repositories/products/:id` on the form's `_method` field.
pub async fn method_override(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<MethodOverrideForm>,
) -> Result<Response, AppErrors> {
    match form.method() {
        Some(FormMethod::Put) => Ok(update_product(&state, id, form.payload)
            .await?
            .into_response()),
        Some(FormMethod::Delete) => Ok(destroy_product(&state, id).await?.into_response()),
        None => Err(AppErrors::UnsupportedMethod(form.method)),
    }
}

#[instrument(skip(state, payload))]
async fn update_product(
    state: &AppState,
    id: i32,
    payload: ProductPayload,
) -> Result<HtmlTemplate<ShowProductTemplate>, AppErrors> {
    payload.validate()?;
    let product = state.db.update_product(id, &payload).await?;
    info!("product updated");
    Ok(HtmlTemplate(ShowProductTemplate { product }))
}

#[instrument(skip(state))]
async fn destroy_product(state: &AppState, id: i32) -> Result<Redirect, AppErrors> {
    state.db.delete_product(id).await?;
    info!("product deleted");
    Ok(Redirect::to(INDEX_PATH))
}
