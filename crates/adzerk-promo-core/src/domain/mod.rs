//! Domain model (placements, decisions, promos, ...).
//!
//! All of these are transient request/response shapes; nothing here is
//! persisted.

pub mod billing;
pub mod decision;
pub mod errors;
pub mod ids;
pub mod keywords;
pub mod page;
pub mod placement;
pub mod promo;

pub use billing::{Settlement, billable_amount, refund_amount};
pub use decision::{
    AdServerTracking, ContentVariant, CreativeBody, Decision, DecisionResponse, PromoDecision,
};
pub use errors::PromoError;
pub use ids::RequestId;
pub use keywords::{FRONTPAGE_KEYWORD, keywords_for_sites, select_keywords, srname_to_keyword};
pub use page::PageContext;
pub use placement::{AdzerkId, DecisionQuery, PlacementRequest};
pub use promo::PromoHandle;
