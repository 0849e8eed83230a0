//! DecisionClient port - Adzerk engine への decision リクエスト
//!
//! # 実装
//! - **HttpDecisionClient**: 本番用（reqwest）
//! - **StaticDecisionClient**: テスト・オフライン用（固定レスポンス）

use async_trait::async_trait;

use crate::domain::{DecisionQuery, DecisionResponse, PromoError};

/// DecisionClient は DecisionQuery を送信して DecisionResponse を返す
///
/// 1 回の呼び出しにつき外部呼び出しは 1 回。retry はしない。
#[async_trait]
pub trait DecisionClient: Send + Sync {
    async fn decide(&self, query: &DecisionQuery) -> Result<DecisionResponse, PromoError>;
}
