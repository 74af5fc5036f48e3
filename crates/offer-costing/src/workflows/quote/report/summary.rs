use super::super::catalog::BenefitKind;
use super::super::pricing::CostBreakdown;
use super::views::{
    CandidateOfferView, EmployerCostView, OfferLineView, QuoteSummaryView, StatutoryBenefitView,
};

/// Build the display model from a computed breakdown. No arithmetic happens
/// here; the engine's rounded values are lifted into view rows as-is.
pub fn build_summary(breakdown: &CostBreakdown) -> QuoteSummaryView {
    let employer = EmployerCostView {
        monthly_gross: breakdown.candidate.monthly_gross.rounded,
        double_holiday_pay: breakdown.employer.double_holiday_pay.rounded,
        annual_gross_with_holiday: breakdown.employer.annual_gross_with_holiday.rounded,
        annual_gross_no_holiday: breakdown.employer.annual_gross_no_holiday.rounded,
        total_salary_cost: breakdown.employer.total_salary_cost.rounded,
        benefits_cost: breakdown.employer.benefits_cost.rounded,
        mobility_cost: breakdown.employer.mobility_cost.rounded,
        total_annual_cost: breakdown.employer.total_annual_cost.rounded,
        margin_annual: breakdown.margin.annual_amount.rounded,
        daily_rate: breakdown.daily_rate.rounded,
    };

    let net_benefit_lines = breakdown
        .benefit_lines
        .iter()
        .filter(|line| line.counts_toward_net && line.monthly_value.rounded > 0)
        .map(|line| OfferLineView {
            kind: line.kind,
            label: line.label,
            category: line.category,
            category_label: line.category.label(),
            monthly: line.monthly_value.rounded,
        })
        .collect();

    let statutory_benefits = breakdown
        .benefit_lines
        .iter()
        .filter_map(|line| statutory_detail(line.kind))
        .collect();

    let candidate = CandidateOfferView {
        monthly_gross: breakdown.candidate.monthly_gross.rounded,
        annual_gross: breakdown.candidate.annual_gross.rounded,
        thirteenth_month: breakdown.candidate.thirteenth_month.rounded,
        double_holiday_pay: breakdown.candidate.double_holiday_pay.rounded,
        net_excluding_benefits: breakdown
            .candidate
            .has_manual_net
            .then_some(breakdown.candidate.net_excluding_benefits.rounded),
        net_benefits_monthly: breakdown.candidate.net_benefits_monthly.rounded,
        mobility_budget_monthly: (breakdown.candidate.mobility_budget_monthly.rounded > 0)
            .then_some(breakdown.candidate.mobility_budget_monthly.rounded),
        net_including_benefits: breakdown.candidate.net_including_benefits.rounded,
        total_net_per_month: breakdown.candidate.total_net_per_month.rounded,
        company_car: breakdown.candidate.company_car.map(|model| model.label()),
        net_benefit_lines,
        statutory_benefits,
    };

    QuoteSummaryView {
        package: breakdown.margin.package_label.clone(),
        employer,
        candidate,
    }
}

fn statutory_detail(kind: BenefitKind) -> Option<StatutoryBenefitView> {
    let detail = match kind {
        BenefitKind::MealVoucher => "€8 per working day",
        BenefitKind::EcoVoucher => "€250 per year",
        BenefitKind::Hospitalization => "Premium",
        BenefitKind::AccidentInsurance => "Included",
        _ => return None,
    };
    Some(StatutoryBenefitView {
        label: kind.label(),
        detail,
    })
}
