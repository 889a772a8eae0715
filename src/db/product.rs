use crate::db::relational::entities::products;
use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Row shape of the product listing: everything but the description.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, FromQueryResult)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.to_owned(),
            created_at: product.created_at,
        }
    }
}

/// Writable product attributes, as submitted by a form or a JSON body.
///
/// Strings are trimmed and a blank description is stored as absent.
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate, Eq, PartialEq)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
}

impl ProductPayload {
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|text| text.trim().to_string()).unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_validation_works() {
        let payload = ProductPayload::new("Apple", Some("A round red fruit"));
        assert!(payload.validate().is_ok())
    }

    #[test]
    fn empty_name_validation_fails() {
        let payload = ProductPayload::new("", None);
        assert!(payload.validate().is_err())
    }

    #[test]
    fn long_name_validation_fails() {
        let payload = ProductPayload::new(&"a".repeat(256), None);
        assert!(payload.validate().is_err())
    }

    #[test]
    fn blank_description_is_none() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name": "  Pear ", "description": "   "}"#)
                .expect("Failed to parse payload");
        assert_eq!(payload, ProductPayload::new("Pear", None));
    }

    #[test]
    fn missing_fields_default() {
        let payload: ProductPayload = serde_json::from_str(r#"{"description": null}"#)
            .expect("Failed to parse payload");
        assert_eq!(payload, ProductPayload::default());
        assert!(payload.validate().is_err())
    }
}
