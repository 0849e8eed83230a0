//! HttpDecisionClient - Adzerk engine API v2 への POST
//!
//! Non-2xx は transport error として扱う。body の decode 失敗は
//! `PromoError::Decode` のまま呼び出し元へ返す。
//! Redirect は最大 10 回まで追う（307/308 は POST body ごと再送）。

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, redirect};
use std::time::Duration;
use tracing::{debug, trace};

use crate::config::PromoConfig;
use crate::domain::{DecisionQuery, DecisionResponse, PromoError};
use crate::ports::DecisionClient;

pub const DEFAULT_ENDPOINT: &str = "http://engine.adzerk.net/api/v2";

const MAX_REDIRECTS: usize = 10;

pub struct HttpDecisionClient {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpDecisionClient {
    /// Build a client for `endpoint`.
    ///
    /// With `timeout = None` the request may wait indefinitely; an expired
    /// timeout surfaces as `PromoError::Transport`.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, PromoError> {
        let mut builder = reqwest::ClientBuilder::new()
            .user_agent(concat!("adzerk-promo/", env!("CARGO_PKG_VERSION")))
            .redirect(redirect::Policy::limited(MAX_REDIRECTS));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// `config.endpoint` and `config.timeout_ms`.
    pub fn from_config(config: &PromoConfig) -> Result<Self, PromoError> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl DecisionClient for HttpDecisionClient {
    async fn decide(&self, query: &DecisionQuery) -> Result<DecisionResponse, PromoError> {
        if tracing::event_enabled!(tracing::Level::TRACE) {
            if let Ok(body) = serde_json::to_string(query) {
                trace!(%body, "decision query");
            }
        }

        let res = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(query)
            .send()
            .await?
            .error_for_status()?;

        debug!(status = res.status().as_u16(), "decision response received");

        let bytes = res.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| PromoError::decode("decision response", e))
    }
}
