//! AdDecisionFetcher - decision を取得して promo を装飾する
//!
//! パイプラインは一本の future:
//! decision を待つ → promo を待つ → 装飾 → 返す。
//! 装飾済みでない promo が呼び出し元に見えることはない。

use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::config::PromoConfig;
use crate::domain::{
    DecisionQuery, PageContext, PlacementRequest, PromoDecision, PromoError, PromoHandle,
    select_keywords,
};
use crate::ports::{DecisionClient, IdGenerator, PromoFetcher};

pub struct AdDecisionFetcher {
    config: PromoConfig,
    decisions: Arc<dyn DecisionClient>,
    promos: Arc<dyn PromoFetcher>,
    ids: Arc<dyn IdGenerator>,
}

impl AdDecisionFetcher {
    pub(crate) fn new(
        config: PromoConfig,
        decisions: Arc<dyn DecisionClient>,
        promos: Arc<dyn PromoFetcher>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            config,
            decisions,
            promos,
            ids,
        }
    }

    pub fn config(&self) -> &PromoConfig {
        &self.config
    }

    /// One placement for the configured div, asking for the configured ad
    /// type only.
    pub fn build_query(&self, page: &PageContext) -> DecisionQuery {
        let placement = PlacementRequest::single(
            self.config.div_name.clone(),
            self.config.network_id.clone(),
            self.config.site_id.clone(),
            self.config.ad_type.clone(),
        );
        let keywords = select_keywords(page.post_site(), &self.config.frontpage_keywords);
        DecisionQuery::new(placement, keywords)
    }

    /// Ask the ad server for a decision and interpret it, without fetching
    /// the promo.
    ///
    /// `Ok(None)` means the ad server had nothing for our div.
    pub async fn request_decision(
        &self,
        page: &PageContext,
    ) -> Result<Option<PromoDecision>, PromoError> {
        let span = self.request_span("request_decision", page);
        let result = self.decide(page).instrument(span.clone()).await;
        if let Err(e) = &result {
            span.in_scope(|| warn!(error = %e, "decision request failed"));
        }
        result
    }

    /// Request a promo from the ad server.
    ///
    /// Returns the promo produced by the [`PromoFetcher`] for the decided
    /// `(link, campaign)`, carrying the decision's impression pixel and click
    /// URL. `Ok(None)` when there is no decision for our div, in which case
    /// the promo fetcher is not called.
    ///
    /// # Errors
    /// Transport failures, undecodable responses or creatives, and promo
    /// fetcher failures are returned as-is. No retry.
    pub async fn request_promo(&self, page: &PageContext) -> Result<Option<PromoHandle>, PromoError> {
        let span = self.request_span("request_promo", page);
        let result = self.fetch_and_decorate(page).instrument(span.clone()).await;
        if let Err(e) = &result {
            span.in_scope(|| warn!(error = %e, "promo request failed"));
        }
        result
    }

    fn request_span(&self, name: &'static str, page: &PageContext) -> tracing::Span {
        let request_id = self.ids.generate_request_id();
        info_span!(
            "adzerk",
            op = name,
            request_id = %request_id,
            div_name = %self.config.div_name,
            post_site = page.post_site().unwrap_or_default(),
        )
    }

    async fn decide(&self, page: &PageContext) -> Result<Option<PromoDecision>, PromoError> {
        let query = self.build_query(page);
        debug!(keywords = ?query.keywords, "sending decision query");

        let response = self.decisions.decide(&query).await?;
        let Some(decision) = response.decision_for(&self.config.div_name)? else {
            info!("no decision");
            return Ok(None);
        };

        let promo = PromoDecision::from_decision(&decision, &self.config.div_name)?;
        info!(link = %promo.link, campaign = %promo.campaign, "decision received");
        Ok(Some(promo))
    }

    async fn fetch_and_decorate(
        &self,
        page: &PageContext,
    ) -> Result<Option<PromoHandle>, PromoError> {
        let Some(decision) = self.decide(page).await? else {
            return Ok(None);
        };

        let mut promo = self
            .promos
            .fetch_promo(&decision.link, &decision.campaign)
            .await?;
        promo.decorate(&decision.tracking);
        debug!("promo decorated");

        Ok(Some(promo))
    }
}
