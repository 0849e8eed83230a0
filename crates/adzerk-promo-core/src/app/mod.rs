//! App - アプリケーションロジック
//!
//! - **fetcher**: AdDecisionFetcher（decision → promo → 装飾）
//! - **builder**: FetcherBuilder（起動時検証つきのワイヤリング）

pub mod builder;
pub mod fetcher;

pub use self::builder::{BuildError, FetcherBuilder};
pub use self::fetcher::AdDecisionFetcher;
