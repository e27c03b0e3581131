//! In-memory suggestion provider for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::suggestion::SuggestionRequest;
use crate::traits::*;
use crate::types::*;

/// Suggestion provider that answers from a fixed table instead of a remote service
#[derive(Debug, Clone)]
pub struct CannedSuggestionProvider {
    responses: Arc<RwLock<HashMap<String, String>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    requests: Arc<RwLock<Vec<SuggestionRequest>>>,
    fallback: String,
}

impl CannedSuggestionProvider {
    /// Create a provider that answers every request with `fallback`
    pub fn new(fallback: &str) -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(RwLock::new(HashSet::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            fallback: fallback.to_string(),
        }
    }

    /// Answer requests for `result_id` with `text`
    pub fn respond(&self, result_id: &str, text: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(result_id.to_string(), text.to_string());
    }

    /// Fail requests for `result_id`
    pub fn fail(&self, result_id: &str) {
        self.failing.write().unwrap().insert(result_id.to_string());
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<SuggestionRequest> {
        self.requests.read().unwrap().clone()
    }
}

impl Default for CannedSuggestionProvider {
    fn default() -> Self {
        Self::new("Review this item manually")
    }
}

#[async_trait]
impl SuggestionProvider for CannedSuggestionProvider {
    async fn suggest(&self, request: &SuggestionRequest) -> ReconciliationResult<String> {
        self.requests.write().unwrap().push(request.clone());

        if self.failing.read().unwrap().contains(&request.result_id) {
            return Err(ReconciliationError::Suggestion(format!(
                "no answer for {}",
                request.result_id
            )));
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&request.result_id)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}
