//! PromoFetcher port - promo 本体の取得
//!
//! decision が指す `(link, campaign)` から、表示用の promo を組み立てるのは
//! 呼び出し側のアプリケーションの責務。この crate はその結果を装飾するだけ。

use async_trait::async_trait;

use crate::domain::{PromoError, PromoHandle};

#[async_trait]
pub trait PromoFetcher: Send + Sync {
    /// Materialize the promo for a link / campaign pair.
    async fn fetch_promo(&self, link: &str, campaign: &str) -> Result<PromoHandle, PromoError>;
}
