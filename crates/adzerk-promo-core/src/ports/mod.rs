//! Ports - 抽象化レイヤー
//!
//! 外部システム（Adzerk engine, promo の取得元）へのインターフェース。
//! 実装の詳細は `impls` に置き、`app` は trait だけを見る。

pub mod clock;
pub mod decision_client;
pub mod id_generator;
pub mod promo_fetcher;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::decision_client::DecisionClient;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::promo_fetcher::PromoFetcher;
