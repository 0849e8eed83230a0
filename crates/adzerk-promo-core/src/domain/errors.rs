//! Errors - promo 取得のエラー型
//!
//! "no decision" はエラーではない（`Ok(None)` で返す）。
//! ここにあるのは呼び出し元へそのまま伝播する失敗だけ。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromoError {
    /// Send failure, timeout or non-2xx status from the decision endpoint.
    #[error("decision request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("decision for div={div_name} has no content variants")]
    MissingContent { div_name: String },

    #[error("no promo for link={link} campaign={campaign}")]
    PromoUnavailable { link: String, campaign: String },
}

impl PromoError {
    pub(crate) fn decode(context: &'static str, source: serde_json::Error) -> Self {
        PromoError::Decode { context, source }
    }

    /// True for failures of the outbound call itself, as opposed to a bad
    /// payload or a collaborator failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, PromoError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_its_context() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PromoError::decode("creative body", source);
        assert!(err.to_string().starts_with("failed to decode creative body"));
        assert!(!err.is_transport());
    }
}
