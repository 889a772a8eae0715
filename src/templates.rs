use crate::db::{Page, Product, ProductSummary};
use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub page: Page<ProductSummary>,
}

#[derive(Template)]
#[template(path = "products/show.html")]
pub struct ShowProductTemplate {
    pub product: Product,
}

#[derive(Template)]
#[template(path = "products/create.html")]
pub struct CreateProductTemplate {
    pub action: &'static str,
}

#[derive(Template)]
#[template(path = "products/edit.html")]
pub struct EditProductTemplate {
    pub product: Product,
}

pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}
