//! PromoConfig: ad network identifiers and decision endpoint settings.
//!
//! Loaded from an optional file (YAML / TOML / JSON, by extension) and then
//! from `ADZERK_*` environment variables, which win over the file.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::domain::AdzerkId;
use crate::impls::DEFAULT_ENDPOINT;

pub const DEFAULT_DIV_NAME: &str = "div1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Placement slot the decision is requested for.
    #[serde(default = "default_div_name")]
    pub div_name: String,

    pub network_id: AdzerkId,
    pub site_id: AdzerkId,
    pub ad_type: AdzerkId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertiser_id: Option<AdzerkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<AdzerkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<AdzerkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<AdzerkId>,

    /// Keywords sent when the page has no site of its own.
    #[serde(default)]
    pub frontpage_keywords: Vec<String>,

    /// Transport timeout. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_div_name() -> String {
    DEFAULT_DIV_NAME.to_string()
}

/// The subset of settings page scripts need to build their own requests.
#[derive(Debug, Serialize)]
struct ClientConfig<'a> {
    site_id: &'a AdzerkId,
    #[serde(skip_serializing_if = "Option::is_none")]
    advertiser_id: Option<&'a AdzerkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority_id: Option<&'a AdzerkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_id: Option<&'a AdzerkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher_id: Option<&'a AdzerkId>,
    network_id: &'a AdzerkId,
    ad_type: &'a AdzerkId,
}

impl PromoConfig {
    pub fn new(network_id: AdzerkId, site_id: AdzerkId, ad_type: AdzerkId) -> Self {
        Self {
            endpoint: default_endpoint(),
            div_name: default_div_name(),
            network_id,
            site_id,
            ad_type,
            advertiser_id: None,
            priority_id: None,
            channel_id: None,
            publisher_id: None,
            frontpage_keywords: Vec::new(),
            timeout_ms: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_frontpage_keywords(mut self, keywords: Vec<String>) -> Self {
        self.frontpage_keywords = keywords;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Load from `path` (if given) overlaid with `ADZERK_*` environment
    /// variables. `ADZERK_FRONTPAGE_KEYWORDS` is a comma separated list.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(
                Environment::with_prefix("ADZERK")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("frontpage_keywords"),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse a config document held in memory.
    pub fn parse(source: &str, format: FileFormat) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, format))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// JSON block exposed to page scripts. Unset optional IDs are omitted.
    pub fn client_config(&self) -> serde_json::Value {
        let view = ClientConfig {
            site_id: &self.site_id,
            advertiser_id: self.advertiser_id.as_ref(),
            priority_id: self.priority_id.as_ref(),
            channel_id: self.channel_id.as_ref(),
            publisher_id: self.publisher_id.as_ref(),
            network_id: &self.network_id,
            ad_type: &self.ad_type,
        };
        serde_json::to_value(view).unwrap_or_default()
    }
}
