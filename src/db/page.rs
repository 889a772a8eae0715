use serde::{Deserialize, Serialize};

pub const PER_PAGE: u64 = 10;

/// Highest page whose offset still fits a signed 64-bit SQL `OFFSET`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / PER_PAGE;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u64, total_items: u64) -> Self {
        Self {
            items,
            page,
            per_page: PER_PAGE,
            total_items,
            total_pages: total_items.div_ceil(PER_PAGE),
        }
    }

    /// Pages are 1-based; anything below the first page is the first page
    /// and anything above `MAX_PAGE` is `MAX_PAGE`.
    pub fn normalize(page: Option<u64>) -> u64 {
        page.unwrap_or(1).clamp(1, MAX_PAGE)
    }

    pub fn offset(page: u64) -> u64 {
        page.saturating_sub(1).saturating_mul(PER_PAGE)
    }

    pub fn previous_page(&self) -> Option<u64> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u64> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_page_works() {
        assert_eq!(Page::<()>::normalize(None), 1);
        assert_eq!(Page::<()>::normalize(Some(0)), 1);
        assert_eq!(Page::<()>::normalize(Some(3)), 3);
        assert_eq!(Page::<()>::normalize(Some(u64::MAX)), MAX_PAGE);
    }

    #[test]
    fn offset_does_not_overflow() {
        assert_eq!(Page::<()>::offset(1), 0);
        assert_eq!(Page::<()>::offset(3), 20);
        assert_eq!(Page::<()>::offset(0), 0);
        assert_eq!(Page::<()>::offset(u64::MAX), u64::MAX);
        assert!(Page::<()>::offset(MAX_PAGE) <= i64::MAX as u64);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Page::<u8>::new(vec![], 1, 0).total_pages, 0);
        assert_eq!(Page::<u8>::new(vec![], 1, 10).total_pages, 1);
        assert_eq!(Page::<u8>::new(vec![], 1, 11).total_pages, 2);
    }

    #[test]
    fn neighbour_pages_work() {
        let first = Page::<u8>::new(vec![], 1, 25);
        assert_eq!(first.previous_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let last = Page::<u8>::new(vec![], 3, 25);
        assert_eq!(last.previous_page(), Some(2));
        assert_eq!(last.next_page(), None);
    }
}
