//! Search use case
//!
//! Runs a search and splits the hits into sessions and speakers, keeping
//! the order the service returned them in.

use crate::ports::conference_api::{ApiResult, ConferenceApi};
use agenda_domain::{SearchResult, Session, Speaker};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Search hits split by entity type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub sessions: Vec<Session>,
    pub speakers: Vec<Speaker>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty() && self.speakers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len() + self.speakers.len()
    }
}

/// Use case for searching sessions and speakers
pub struct SearchUseCase {
    api: Arc<dyn ConferenceApi>,
}

impl SearchUseCase {
    pub fn new(api: Arc<dyn ConferenceApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, query: &str) -> ApiResult<SearchOutcome> {
        let results = self.api.search(query).await?;

        let mut outcome = SearchOutcome {
            query: query.to_string(),
            ..Default::default()
        };
        for result in results {
            match result {
                SearchResult::Session(session) => outcome.sessions.push(session),
                SearchResult::Speaker(speaker) => outcome.speakers.push(speaker),
            }
        }

        info!("Search {:?} returned {} results", query, outcome.len());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::FakeConferenceApi;

    #[tokio::test]
    async fn test_results_partitioned_in_order() {
        let api = FakeConferenceApi::new().with_search_results(vec![
            SearchResult::Speaker(Speaker::new(1, "Ada")),
            SearchResult::Session(Session::new(10, "Engines")),
            SearchResult::Speaker(Speaker::new(2, "Charles")),
        ]);
        let use_case = SearchUseCase::new(Arc::new(api));

        let outcome = use_case.execute("engine").await.unwrap();
        assert_eq!(outcome.query, "engine");
        assert_eq!(outcome.sessions, vec![Session::new(10, "Engines")]);
        let names: Vec<_> = outcome.speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Charles"]);
        assert_eq!(outcome.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_query_still_calls_api() {
        let api = Arc::new(FakeConferenceApi::new());
        let use_case = SearchUseCase::new(api.clone());

        let outcome = use_case.execute("").await.unwrap();
        assert!(outcome.is_empty());
        assert_eq!(api.calls(), vec!["search:".to_string()]);
    }
}
