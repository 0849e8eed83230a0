//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **HttpDecisionClient**: Adzerk engine API v2 への POST（本番用）
//! - **StaticDecisionClient**: 固定レスポンスを返す DecisionClient（テスト・オフライン用）
//! - **InMemoryPromoCatalog**: `(link, campaign)` をキーにした PromoFetcher（開発用）

pub mod http_decision;
pub mod inmem_promo;
pub mod static_decision;

// 主要な型を再エクスポート
pub use self::http_decision::{DEFAULT_ENDPOINT, HttpDecisionClient};
pub use self::inmem_promo::InMemoryPromoCatalog;
pub use self::static_decision::StaticDecisionClient;
