use serde::Serialize;

use super::super::catalog::{BenefitCategory, BenefitKind};
use super::super::domain::CompanyCarModel;

/// Monetary value exposing both the unrounded figure (for further math) and
/// the display rounding (nearest euro).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EuroAmount {
    pub precise: f64,
    pub rounded: i64,
}

impl EuroAmount {
    pub fn new(precise: f64) -> Self {
        Self {
            precise,
            rounded: precise.round() as i64,
        }
    }

    pub const fn zero() -> Self {
        Self {
            precise: 0.0,
            rounded: 0,
        }
    }
}

impl From<f64> for EuroAmount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// One active benefit with its monthly value and its annualized employer
/// cost. `counts_toward_net` marks the subset that adds to the candidate's
/// net income; statutory employer-paid items (meal voucher, eco voucher,
/// hospitalization, pension, accident insurance) stay out of that subtotal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitLine {
    pub kind: BenefitKind,
    pub label: &'static str,
    pub category: BenefitCategory,
    pub monthly_value: EuroAmount,
    pub annual_employer_cost: EuroAmount,
    pub counts_toward_net: bool,
}

/// Employer-side totals, all annual unless named otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployerCosts {
    pub double_holiday_pay: EuroAmount,
    pub annual_gross_with_holiday: EuroAmount,
    pub annual_gross_no_holiday: EuroAmount,
    pub social_contribution: EuroAmount,
    pub total_salary_cost: EuroAmount,
    pub benefits_cost: EuroAmount,
    pub mobility_cost: EuroAmount,
    pub total_annual_cost: EuroAmount,
}

/// Candidate-side figures, all monthly unless named otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateOffer {
    pub monthly_gross: EuroAmount,
    pub annual_gross: EuroAmount,
    pub thirteenth_month: EuroAmount,
    pub double_holiday_pay: EuroAmount,
    /// Zero when no manual net salary was supplied; `has_manual_net` lets the
    /// display withhold the row instead of showing €0.
    pub net_excluding_benefits: EuroAmount,
    pub has_manual_net: bool,
    pub net_benefits_monthly: EuroAmount,
    pub mobility_budget_monthly: EuroAmount,
    pub net_including_benefits: EuroAmount,
    pub total_net_per_month: EuroAmount,
    pub commute_monthly: EuroAmount,
    pub company_car: Option<CompanyCarModel>,
}

/// Resolved target margin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginSummary {
    pub package_label: String,
    pub annual_amount: EuroAmount,
}

/// The full calculation output: a pure derived value, recomputed wholesale on
/// every invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub employer: EmployerCosts,
    pub candidate: CandidateOffer,
    pub benefit_lines: Vec<BenefitLine>,
    pub margin: MarginSummary,
    pub daily_rate: EuroAmount,
}
