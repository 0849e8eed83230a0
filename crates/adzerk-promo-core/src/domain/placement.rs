//! Decision request body sent to the Adzerk engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Adzerk accepts network / site / ad type identifiers either as numbers or
/// as strings, so both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdzerkId {
    Number(u64),
    Text(String),
}

impl From<u64> for AdzerkId {
    fn from(value: u64) -> Self {
        AdzerkId::Number(value)
    }
}

impl From<&str> for AdzerkId {
    fn from(value: &str) -> Self {
        AdzerkId::Text(value.to_string())
    }
}

impl From<String> for AdzerkId {
    fn from(value: String) -> Self {
        AdzerkId::Text(value)
    }
}

impl fmt::Display for AdzerkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdzerkId::Number(n) => write!(f, "{n}"),
            AdzerkId::Text(s) => f.write_str(s),
        }
    }
}

/// A named ad slot in a decision request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    pub div_name: String,
    pub network_id: AdzerkId,
    pub site_id: AdzerkId,
    pub ad_types: Vec<AdzerkId>,
}

impl PlacementRequest {
    /// Placement asking for exactly one ad type.
    pub fn single(
        div_name: impl Into<String>,
        network_id: AdzerkId,
        site_id: AdzerkId,
        ad_type: AdzerkId,
    ) -> Self {
        Self {
            div_name: div_name.into(),
            network_id,
            site_id,
            ad_types: vec![ad_type],
        }
    }
}

/// Body of `POST /api/v2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionQuery {
    pub placements: Vec<PlacementRequest>,
    pub keywords: Vec<String>,
}

impl DecisionQuery {
    pub fn new(placement: PlacementRequest, keywords: Vec<String>) -> Self {
        Self {
            placements: vec![placement],
            keywords,
        }
    }
}
