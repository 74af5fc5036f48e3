use serde::Serialize;

use super::super::catalog::{BenefitCategory, BenefitKind};

/// One candidate-facing net benefit row with its category badge.
#[derive(Debug, Clone, Serialize)]
pub struct OfferLineView {
    pub kind: BenefitKind,
    pub label: &'static str,
    pub category: BenefitCategory,
    pub category_label: &'static str,
    pub monthly: i64,
}

/// Statutory employer-paid benefits shown separately from the net rows.
#[derive(Debug, Clone, Serialize)]
pub struct StatutoryBenefitView {
    pub label: &'static str,
    pub detail: &'static str,
}

/// Employer-side breakdown for the sales team, display-rounded.
#[derive(Debug, Clone, Serialize)]
pub struct EmployerCostView {
    pub monthly_gross: i64,
    pub double_holiday_pay: i64,
    pub annual_gross_with_holiday: i64,
    pub annual_gross_no_holiday: i64,
    pub total_salary_cost: i64,
    pub benefits_cost: i64,
    pub mobility_cost: i64,
    pub total_annual_cost: i64,
    pub margin_annual: i64,
    pub daily_rate: i64,
}

/// Candidate-facing offer, display-rounded. Optional rows are `None` when
/// they should be withheld rather than shown as zero.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateOfferView {
    pub monthly_gross: i64,
    pub annual_gross: i64,
    pub thirteenth_month: i64,
    pub double_holiday_pay: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_excluding_benefits: Option<i64>,
    pub net_benefits_monthly: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobility_budget_monthly: Option<i64>,
    pub net_including_benefits: i64,
    pub total_net_per_month: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_car: Option<&'static str>,
    pub net_benefit_lines: Vec<OfferLineView>,
    pub statutory_benefits: Vec<StatutoryBenefitView>,
}

/// Everything Phase 5 renders, in one serializable record.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSummaryView {
    pub package: String,
    pub employer: EmployerCostView,
    pub candidate: CandidateOfferView,
}
