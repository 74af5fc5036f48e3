//! Candidate cost quoting: phase-based intake, a pure pricing engine, and
//! the offer/report views the presentation layer renders.

pub mod catalog;
pub mod domain;
pub mod intake;
pub mod pricing;
pub mod report;
pub mod router;
pub mod sequencer;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{BenefitAvailability, BenefitCategory, BenefitKind};
pub use domain::{
    BenefitSelections, CandidateProfile, CompanyCarModel, CompensationInput, EquipmentPurchase,
    ExperienceBracket, MobilityBudgetCategory, MobilitySelection, Nationality, PositionType,
    QuoteRequest, TargetMargin, WorkModel,
};
pub use intake::{
    BenefitsForm, CompensationForm, FieldIssue, FormField, GuidanceNote, IntakeRejection,
    IntakeValidator, MarginForm, ProfileForm,
};
pub use pricing::{CostBreakdown, EuroAmount, PricingEngine};
pub use report::{build_summary, QuoteSummaryView};
pub use router::quote_router;
pub use sequencer::{QuotePhase, QuoteSequencer, SequenceError};
pub use service::QuoteService;
