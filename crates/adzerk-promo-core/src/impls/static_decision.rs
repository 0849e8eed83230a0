//! StaticDecisionClient - 固定レスポンスを返す DecisionClient
//!
//! レスポンスは生の JSON で保持し、呼び出しごとに decode する。
//! 送られてきた DecisionQuery は記録しておき、テストで検証できるようにする。

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::domain::{DecisionQuery, DecisionResponse, PromoError};
use crate::ports::DecisionClient;

pub struct StaticDecisionClient {
    response: Value,
    queries: Mutex<Vec<DecisionQuery>>,
}

impl StaticDecisionClient {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with an empty `decisions` map.
    pub fn no_decision() -> Self {
        Self::new(json!({ "decisions": {} }))
    }

    pub async fn queries(&self) -> Vec<DecisionQuery> {
        self.queries.lock().await.clone()
    }

    pub async fn last_query(&self) -> Option<DecisionQuery> {
        self.queries.lock().await.last().cloned()
    }
}

#[async_trait]
impl DecisionClient for StaticDecisionClient {
    async fn decide(&self, query: &DecisionQuery) -> Result<DecisionResponse, PromoError> {
        self.queries.lock().await.push(query.clone());
        serde_json::from_value(self.response.clone())
            .map_err(|e| PromoError::decode("decision response", e))
    }
}
