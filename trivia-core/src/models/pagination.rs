//! Fixed-size pagination over ordered question listings

use serde::{Deserialize, Serialize};

use super::{Question, QuestionView};

/// Items per page. Fixed; clients cannot change it.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Requested page (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    /// Create a page request. Page 0 is clamped to 1.
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// Parse a raw `page` query value.
    ///
    /// Absent, non-numeric, zero and negative values all mean page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|p| *p > 0)
            .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
            .unwrap_or(1);
        Self::new(page)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters for paginated routes.
///
/// `page` is kept as a raw string so that `?page=abc` falls back to page 1
/// instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for PageRequest {
    fn from(params: PaginationParams) -> Self {
        Self::from_query(params.page.as_deref())
    }
}

/// One page of a listing plus the size of the whole listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Number of records the underlying query matched
    pub total: usize,
    /// Page number these items belong to
    pub page: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(QUESTIONS_PER_PAGE).max(1)
    }
}

/// Slice `records` down to the requested page and format each question.
///
/// Pages past the end yield an empty page; `total` is always the full
/// record count.
pub fn paginate(records: &[Question], request: PageRequest) -> Page<QuestionView> {
    let items = records
        .iter()
        .skip(request.offset())
        .take(QUESTIONS_PER_PAGE)
        .map(QuestionView::from)
        .collect();

    Page {
        items,
        total: records.len(),
        page: request.page(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: i64) -> Vec<Question> {
        (1..=n)
            .map(|id| Question {
                id,
                question: format!("question {id}"),
                answer: format!("answer {id}"),
                category: 1,
                difficulty: 1,
            })
            .collect()
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(PageRequest::new(1).offset(), 0);
        assert_eq!(PageRequest::new(2).offset(), 10);
        assert_eq!(PageRequest::new(5).offset(), 40);
    }

    #[test]
    fn clamps_page() {
        assert_eq!(PageRequest::new(0).page(), 1);
    }

    #[test]
    fn query_parsing_falls_back_to_first_page() {
        assert_eq!(PageRequest::from_query(None).page(), 1);
        assert_eq!(PageRequest::from_query(Some("abc")).page(), 1);
        assert_eq!(PageRequest::from_query(Some("-3")).page(), 1);
        assert_eq!(PageRequest::from_query(Some("0")).page(), 1);
        assert_eq!(PageRequest::from_query(Some(" 3 ")).page(), 3);
    }

    #[test]
    fn second_page_of_nineteen() {
        let records = questions(19);
        let page = paginate(&records, PageRequest::new(2));
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.items[0].id, 11);
        assert_eq!(page.total, 19);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn past_the_end_is_empty() {
        let records = questions(10);
        let page = paginate(&records, PageRequest::new(2));
        assert!(page.is_empty());
        assert_eq!(page.total, 10);
    }

    #[test]
    fn empty_listing() {
        let page = paginate(&[], PageRequest::default());
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let records = questions(3);
        let page = paginate(&records, PageRequest::from_query(Some("99999999999")));
        assert!(page.is_empty());
    }
}
