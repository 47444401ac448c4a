//! Analytics tab: counts derived from the full list.

use super::requests::{BookOp, BookOutcome, BookRequest, RequestCounter, RequestId};
use crate::models::BookStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsPhase {
    Loading,
    Loaded(BookStats),
    Error(String),
}

#[derive(Debug)]
pub struct AnalyticsPanel {
    pub phase: AnalyticsPhase,
    pending: Option<RequestId>,
}

impl Default for AnalyticsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsPanel {
    pub fn new() -> Self {
        Self {
            phase: AnalyticsPhase::Loading,
            pending: None,
        }
    }

    pub fn mount(&mut self, ids: &mut RequestCounter) -> BookRequest {
        let request = BookRequest::new(ids, BookOp::List);
        self.phase = AnalyticsPhase::Loading;
        self.pending = Some(request.id);
        request
    }

    pub fn reload(&mut self, ids: &mut RequestCounter) -> BookRequest {
        self.mount(ids)
    }

    pub fn stats(&self) -> Option<BookStats> {
        match self.phase {
            AnalyticsPhase::Loaded(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn apply(&mut self, id: RequestId, outcome: BookOutcome) {
        if self.pending != Some(id) {
            return;
        }
        let BookOutcome::Listed(result) = outcome else {
            return;
        };
        self.pending = None;
        self.phase = match result {
            Ok(books) => AnalyticsPhase::Loaded(BookStats::from_books(&books)),
            Err(e) => AnalyticsPhase::Error(e.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Book, CreateBook};

    #[test]
    fn test_mount_then_loaded() {
        let mut ids = RequestCounter::new();
        let mut panel = AnalyticsPanel::new();
        let request = panel.mount(&mut ids);
        assert_eq!(request.op, BookOp::List);

        let books = vec![
            Book::from_create(1, CreateBook::new("Dune", "Frank Herbert")),
            Book::from_create(2, CreateBook::new("Children of Dune", "Frank Herbert")),
        ];
        panel.apply(request.id, BookOutcome::Listed(Ok(books)));

        let stats = panel.stats().unwrap();
        assert_eq!(stats.total_books, 2);
        assert_eq!(stats.unique_authors, 1);
        assert_eq!(stats.with_description, 0);
    }

    #[test]
    fn test_error_shown_inline() {
        let mut ids = RequestCounter::new();
        let mut panel = AnalyticsPanel::new();
        let request = panel.mount(&mut ids);
        panel.apply(
            request.id,
            BookOutcome::Listed(Err(ApiError::Unreachable {
                base_url: "http://localhost:5000".to_string(),
            })),
        );

        assert!(matches!(panel.phase, AnalyticsPhase::Error(ref m) if m.contains("localhost:5000")));
    }

    #[test]
    fn test_reload_drops_older_result() {
        let mut ids = RequestCounter::new();
        let mut panel = AnalyticsPanel::new();
        let old = panel.mount(&mut ids);
        let new = panel.reload(&mut ids);

        panel.apply(old.id, BookOutcome::Listed(Ok(vec![])));
        assert_eq!(panel.phase, AnalyticsPhase::Loading);

        panel.apply(new.id, BookOutcome::Listed(Ok(vec![])));
        assert_eq!(panel.stats(), Some(BookStats::default()));
    }
}
