use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Case-insensitive substring match on the product name.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(value: &str) -> Self {
        SearchQuery(value.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.0)
    }

    /// LIKE pattern with `\` as the escape character, so `%` and `_` match literally.
    pub fn pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignores_case() {
        let query = SearchQuery::new("APP");
        assert!(query.matches("Apple"));
        assert!(query.matches("pineapple"));
        assert!(!query.matches("Banana"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = SearchQuery::new("");
        assert!(query.is_empty());
        assert!(query.matches("Banana"));
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let query = SearchQuery::new(" ge");
        assert!(!query.is_empty());
        assert!(!query.matches("Orange"));
        assert!(query.matches("Orange gem"));
        assert_eq!(query.pattern(), "% ge%");
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(SearchQuery::new("App").pattern(), "%app%");
        assert_eq!(SearchQuery::new("50%_off").pattern(), "%50\\%\\_off%");
    }
}
