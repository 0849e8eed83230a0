//! InMemoryPromoCatalog - 開発用の PromoFetcher
//!
//! `(link, campaign)` をキーに promo のデータを保持する。
//! fetch のたびに新しい PromoHandle を作って返す。

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::{PromoError, PromoHandle};
use crate::ports::PromoFetcher;

type PromoKey = (String, String);

#[derive(Default)]
pub struct InMemoryPromoCatalog {
    promos: RwLock<HashMap<PromoKey, Map<String, Value>>>,
    fetches: AtomicUsize,
}

impl InMemoryPromoCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for setting up a catalog before sharing it.
    pub fn with_promo(
        mut self,
        link: impl Into<String>,
        campaign: impl Into<String>,
        data: Map<String, Value>,
    ) -> Self {
        self.promos
            .get_mut()
            .insert((link.into(), campaign.into()), data);
        self
    }

    pub async fn insert(
        &self,
        link: impl Into<String>,
        campaign: impl Into<String>,
        data: Map<String, Value>,
    ) {
        self.promos
            .write()
            .await
            .insert((link.into(), campaign.into()), data);
    }

    pub async fn len(&self) -> usize {
        self.promos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.promos.read().await.is_empty()
    }

    /// Number of `fetch_promo` calls served so far, hits and misses alike.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl PromoFetcher for InMemoryPromoCatalog {
    async fn fetch_promo(&self, link: &str, campaign: &str) -> Result<PromoHandle, PromoError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);

        let promos = self.promos.read().await;
        promos
            .get(&(link.to_string(), campaign.to_string()))
            .cloned()
            .map(PromoHandle::from_data)
            .ok_or_else(|| PromoError::PromoUnavailable {
                link: link.to_string(),
                campaign: campaign.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(title: &str) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("title".to_string(), json!(title));
        m
    }

    #[tokio::test]
    async fn fetches_by_link_and_campaign() {
        let catalog = InMemoryPromoCatalog::new()
            .with_promo("t3_a", "t8_a", data("first"))
            .with_promo("t3_a", "t8_b", data("second"));

        let promo = catalog.fetch_promo("t3_a", "t8_b").await.unwrap();
        assert_eq!(promo.get("title"), Some(&json!("second")));
        assert!(!promo.is_decorated());
        assert_eq!(catalog.fetch_count(), 1);
        assert_eq!(catalog.len().await, 2);
    }

    #[tokio::test]
    async fn unknown_pair_is_unavailable() {
        let catalog = InMemoryPromoCatalog::new();
        catalog.insert("t3_a", "t8_a", Map::new()).await;

        let err = catalog.fetch_promo("t3_a", "t8_x").await.unwrap_err();
        assert!(matches!(
            err,
            PromoError::PromoUnavailable { link, campaign } if link == "t3_a" && campaign == "t8_x"
        ));
        assert_eq!(catalog.fetch_count(), 1);
    }
}
