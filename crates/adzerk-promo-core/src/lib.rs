//! adzerk-promo-core
//!
//! Ad decision adapter: asks the Adzerk engine which promo to show and
//! decorates the locally fetched promo with the ad server's tracking URLs.
//!
//! # モジュール構成
//! - **domain**: リクエスト／レスポンスの形（placement, decision, promo, keywords, billing, errors）
//! - **ports**: 抽象化レイヤー（DecisionClient, PromoFetcher, Clock, IdGenerator）
//! - **impls**: 実装（HttpDecisionClient, InMemoryPromoCatalog, StaticDecisionClient）
//! - **app**: アプリケーションロジック（AdDecisionFetcher, FetcherBuilder）
//! - **config**: PromoConfig の読み込み

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use self::app::{AdDecisionFetcher, BuildError, FetcherBuilder};
pub use self::config::PromoConfig;
pub use self::domain::{PageContext, PromoError, PromoHandle};
