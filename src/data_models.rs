use crate::db::{Product, ProductPayload, SearchQuery};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListParams {
    pub page: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
}

impl From<SearchParams> for SearchQuery {
    fn from(params: SearchParams) -> Self {
        SearchQuery::new(params.name.trim())
    }
}

/// HTML forms can only POST, so updates and deletes carry the real verb in `_method`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MethodOverrideForm {
    #[serde(rename = "_method", default)]
    pub method: String,
    #[serde(flatten)]
    pub payload: ProductPayload,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FormMethod {
    Put,
    Delete,
}

impl MethodOverrideForm {
    pub fn method(&self) -> Option<FormMethod> {
        match self.method.to_lowercase().as_str() {
            "put" | "patch" => Some(FormMethod::Put),
            "delete" => Some(FormMethod::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedResponse {
    pub product: Product,
    pub message: String,
}

impl From<Product> for ProductCreatedResponse {
    fn from(product: Product) -> Self {
        Self {
            product,
            message: "Product created successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_method_works() {
        let form = |method: &str| MethodOverrideForm {
            method: method.to_string(),
            ..Default::default()
        };
        assert_eq!(form("PUT").method(), Some(FormMethod::Put));
        assert_eq!(form("patch").method(), Some(FormMethod::Put));
        assert_eq!(form("delete").method(), Some(FormMethod::Delete));
        assert_eq!(form("get").method(), None);
    }

    #[test]
    fn search_params_to_query_works() {
        let query = SearchQuery::from(SearchParams {
            name: " App ".to_string(),
        });
        assert_eq!(query.to_string(), "app");

        let query = SearchQuery::from(SearchParams {
            name: "   ".to_string(),
        });
        assert!(query.is_empty());
    }
}
