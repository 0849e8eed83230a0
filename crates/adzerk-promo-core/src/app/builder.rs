//! FetcherBuilder - AdDecisionFetcher の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - DecisionClient と PromoFetcher はどちらも必須
//! - 足りなければ build() 時に BuildError を返す（リクエスト時まで遅らせない）

use std::sync::Arc;

use crate::app::fetcher::AdDecisionFetcher;
use crate::config::PromoConfig;
use crate::domain::PromoError;
use crate::impls::HttpDecisionClient;
use crate::ports::{DecisionClient, IdGenerator, PromoFetcher, SystemClock, UlidGenerator};

/// # 使用例
/// ```ignore
/// let fetcher = FetcherBuilder::from_config(config)?
///     .promo_fetcher(Arc::new(catalog))
///     .build()?;
/// ```
pub struct FetcherBuilder {
    config: PromoConfig,
    decisions: Option<Arc<dyn DecisionClient>>,
    promos: Option<Arc<dyn PromoFetcher>>,
    ids: Option<Arc<dyn IdGenerator>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}

impl FetcherBuilder {
    pub fn new(config: PromoConfig) -> Self {
        Self {
            config,
            decisions: None,
            promos: None,
            ids: None,
        }
    }

    /// Builder with an `HttpDecisionClient` for `config.endpoint` already set.
    pub fn from_config(config: PromoConfig) -> Result<Self, PromoError> {
        let client = HttpDecisionClient::from_config(&config)?;
        Ok(Self::new(config).decision_client(Arc::new(client)))
    }

    pub fn decision_client(mut self, client: Arc<dyn DecisionClient>) -> Self {
        self.decisions = Some(client);
        self
    }

    pub fn promo_fetcher(mut self, fetcher: Arc<dyn PromoFetcher>) -> Self {
        self.promos = Some(fetcher);
        self
    }

    /// Defaults to a ULID generator on the system clock.
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn build(self) -> Result<AdDecisionFetcher, BuildError> {
        let decisions = self
            .decisions
            .ok_or(BuildError::MissingCollaborator("decision client"))?;
        let promos = self
            .promos
            .ok_or(BuildError::MissingCollaborator("promo fetcher"))?;
        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(SystemClock)));

        Ok(AdDecisionFetcher::new(self.config, decisions, promos, ids))
    }
}
