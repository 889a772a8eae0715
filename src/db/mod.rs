mod database;
mod errors;
pub mod in_memory;
mod page;
mod product;
pub mod relational;
mod search_query;
mod user;

pub use database::Database;
pub use errors::{DBError, InMemoryError};
pub use page::{Page, MAX_PAGE, PER_PAGE};
pub use product::{Product, ProductPayload, ProductSummary};
pub use search_query::SearchQuery;
pub use user::User;
