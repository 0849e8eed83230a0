//! Decision model: what the Adzerk engine answered for a placement.
//!
//! The engine returns `{ "decisions": { "<divName>": Decision | null } }`.
//! A missing key and an explicit `null` both mean "no ad for this slot".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::PromoError;

/// Entries are kept undecoded; only the div we asked for is parsed, so a bad
/// entry for some other div does not fail the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub decisions: HashMap<String, serde_json::Value>,
}

impl DecisionResponse {
    /// `Ok(None)` when the div is missing or `null`.
    pub fn decision_for(&self, div_name: &str) -> Result<Option<Decision>, PromoError> {
        match self.decisions.get(div_name) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(v) => Decision::deserialize(v)
                .map(Some)
                .map_err(|e| PromoError::decode("decision", e)),
        }
    }
}

/// A single ad decision.
///
/// The numeric IDs are carried through untouched; nothing downstream
/// interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    #[serde(default)]
    pub ad_id: serde_json::Value,
    #[serde(default)]
    pub creative_id: serde_json::Value,
    #[serde(default)]
    pub flight_id: serde_json::Value,
    #[serde(default)]
    pub campaign_id: serde_json::Value,
    pub impression_url: String,
    pub click_url: String,
    #[serde(default)]
    pub contents: Vec<ContentVariant>,
}

impl Decision {
    pub fn tracking(&self) -> AdServerTracking {
        AdServerTracking {
            impression_url: self.impression_url.clone(),
            click_url: self.click_url.clone(),
        }
    }

    /// Parse the creative out of the first content variant.
    ///
    /// Any further variants are ignored.
    pub fn creative(&self, div_name: &str) -> Result<CreativeBody, PromoError> {
        let variant = self
            .contents
            .first()
            .ok_or_else(|| PromoError::MissingContent {
                div_name: div_name.to_string(),
            })?;
        CreativeBody::parse(&variant.body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVariant {
    #[serde(rename = "type")]
    pub kind: String,
    /// JSON document serialized as a string.
    pub body: String,
}

/// The creative payload we store in Adzerk's `ScriptBody`.
///
/// `link` and `campaign` are fullnames of the promoted link and its campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeBody {
    pub link: String,
    pub campaign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl CreativeBody {
    pub fn parse(body: &str) -> Result<Self, PromoError> {
        serde_json::from_str(body).map_err(|e| PromoError::decode("creative body", e))
    }
}

/// Impression pixel and click URL handed out by the ad server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdServerTracking {
    pub impression_url: String,
    pub click_url: String,
}

/// A decision that has been fully interpreted but not yet turned into a promo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoDecision {
    pub link: String,
    pub campaign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub tracking: AdServerTracking,
}

impl PromoDecision {
    pub fn from_decision(decision: &Decision, div_name: &str) -> Result<Self, PromoError> {
        let creative = decision.creative(div_name)?;
        Ok(Self {
            link: creative.link,
            campaign: creative.campaign,
            target: creative.target,
            tracking: decision.tracking(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "decisions": {
                "div1": {
                    "adId": 1, "creativeId": 2, "flightId": 3, "campaignId": 4,
                    "impressionUrl": "http://imp",
                    "clickUrl": "http://click",
                    "contents": [
                        { "type": "html", "body": "{\"link\":\"L\",\"campaign\":\"C\",\"target\":\"pics\"}" },
                        { "type": "html", "body": "not json" }
                    ]
                }
            }
        })
    }

    #[test]
    fn parses_decision_and_first_creative() {
        let resp: DecisionResponse = serde_json::from_value(sample()).unwrap();
        let decision = resp.decision_for("div1").unwrap().unwrap();
        assert_eq!(decision.ad_id, json!(1));

        let promo = PromoDecision::from_decision(&decision, "div1").unwrap();
        assert_eq!(promo.link, "L");
        assert_eq!(promo.campaign, "C");
        assert_eq!(promo.target.as_deref(), Some("pics"));
        assert_eq!(promo.tracking.impression_url, "http://imp");
        assert_eq!(promo.tracking.click_url, "http://click");
    }

    #[test]
    fn null_and_missing_divs_have_no_decision() {
        let resp: DecisionResponse =
            serde_json::from_value(json!({ "decisions": { "div1": null } })).unwrap();
        assert!(resp.decision_for("div1").unwrap().is_none());
        assert!(resp.decision_for("div2").unwrap().is_none());
    }

    #[test]
    fn missing_decisions_key_is_a_decode_failure() {
        let res = serde_json::from_value::<DecisionResponse>(json!({}));
        assert!(res.is_err());
    }

    #[test]
    fn malformed_entry_for_other_div_is_not_decoded() {
        let mut v = sample();
        v["decisions"]["div2"] = json!({ "adId": 9, "contents": "garbage" });
        let resp: DecisionResponse = serde_json::from_value(v).unwrap();

        assert!(resp.decision_for("div1").unwrap().is_some());
        let err = resp.decision_for("div2").unwrap_err();
        assert!(matches!(err, PromoError::Decode { context: "decision", .. }));
    }

    #[test]
    fn empty_contents_is_an_error() {
        let mut v = sample();
        v["decisions"]["div1"]["contents"] = json!([]);
        let resp: DecisionResponse = serde_json::from_value(v).unwrap();
        let err = resp
            .decision_for("div1")
            .unwrap()
            .unwrap()
            .creative("div1")
            .unwrap_err();
        assert!(matches!(err, PromoError::MissingContent { div_name } if div_name == "div1"));
    }

    #[test]
    fn unparsable_body_is_a_decode_error() {
        let err = CreativeBody::parse("{\"link\":\"L\"").unwrap_err();
        assert!(matches!(err, PromoError::Decode { context: "creative body", .. }));

        // campaign is required
        let err = CreativeBody::parse("{\"link\":\"L\"}").unwrap_err();
        assert!(matches!(err, PromoError::Decode { .. }));
    }
}
