//! PromoHandle: the promo object produced by a `PromoFetcher`.
//!
//! Its contents belong to whoever fetched it; this crate only adds the two
//! ad server tracking fields, in place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::decision::AdServerTracking;

const IMP_PIXEL_KEY: &str = "adserverImpPixel";
const CLICK_URL_KEY: &str = "adserverClickUrl";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoHandle {
    #[serde(flatten)]
    data: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    adserver_imp_pixel: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    adserver_click_url: Option<String>,
}

impl PromoHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: Map<String, Value>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.data.insert(key.into(), value)
    }

    /// Attach the ad server's impression pixel and click URL.
    ///
    /// Same-named keys already in the data are dropped so the serialized
    /// promo carries each tracking field once.
    pub fn decorate(&mut self, tracking: &AdServerTracking) {
        self.data.remove(IMP_PIXEL_KEY);
        self.data.remove(CLICK_URL_KEY);
        self.adserver_imp_pixel = Some(tracking.impression_url.clone());
        self.adserver_click_url = Some(tracking.click_url.clone());
    }

    pub fn adserver_imp_pixel(&self) -> Option<&str> {
        self.adserver_imp_pixel.as_deref()
    }

    pub fn adserver_click_url(&self) -> Option<&str> {
        self.adserver_click_url.as_deref()
    }

    pub fn is_decorated(&self) -> bool {
        self.adserver_imp_pixel.is_some() && self.adserver_click_url.is_some()
    }
}
