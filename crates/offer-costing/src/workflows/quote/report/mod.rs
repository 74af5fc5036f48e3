mod summary;
pub mod views;

pub use summary::build_summary;
pub use views::{
    CandidateOfferView, EmployerCostView, OfferLineView, QuoteSummaryView, StatutoryBenefitView,
};
