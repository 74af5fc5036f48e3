mod formulas;
mod result;

pub use result::{
    BenefitLine, CandidateOffer, CostBreakdown, EmployerCosts, EuroAmount, MarginSummary,
};

use super::catalog::{
    BenefitAvailability, BILLABLE_DAYS_PER_YEAR, DOUBLE_HOLIDAY_RATE,
    SALARY_MONTHS_NO_HOLIDAY, SALARY_MONTHS_WITH_HOLIDAY, SOCIAL_CONTRIBUTION_MULTIPLIER,
};
use super::domain::{MobilitySelection, QuoteRequest};

/// The pricing engine: a pure function from a validated [`QuoteRequest`] to a
/// [`CostBreakdown`]. It never fails; amounts that somehow arrive outside
/// their documented range are clamped to the nearest bound.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    availability: BenefitAvailability,
}

impl PricingEngine {
    pub fn new(availability: BenefitAvailability) -> Self {
        Self { availability }
    }

    pub fn calculate(&self, request: &QuoteRequest) -> CostBreakdown {
        let monthly_gross = request.compensation.monthly_gross;

        // Employer salary cost. The statutory burden multiplier applies to
        // the 13-month base; the double holiday supplement is added on top
        // un-multiplied.
        let double_holiday_pay = monthly_gross * DOUBLE_HOLIDAY_RATE;
        let annual_gross_with_holiday = monthly_gross * SALARY_MONTHS_WITH_HOLIDAY;
        let annual_gross_no_holiday = monthly_gross * SALARY_MONTHS_NO_HOLIDAY;
        let social_contribution = annual_gross_no_holiday * SOCIAL_CONTRIBUTION_MULTIPLIER;
        let total_salary_cost = social_contribution + double_holiday_pay;

        let (benefit_lines, totals) =
            formulas::benefit_lines(request, &self.availability, annual_gross_with_holiday);

        let mobility_cost = match &request.compensation.mobility {
            MobilitySelection::CompanyCar { model } => model.annual_cost(),
            MobilitySelection::MobilityBudget { category } => category.monthly_amount() * 12.0,
            // Bicycle is accounted for under benefits, not mobility.
            MobilitySelection::BicycleAllowance { .. } | MobilitySelection::None => 0.0,
        };

        let total_annual_cost = total_salary_cost + totals.annual_employer_cost + mobility_cost;

        let margin_annual = request.margin.annual_amount();
        let daily_rate = (total_annual_cost + margin_annual) / BILLABLE_DAYS_PER_YEAR;

        // Candidate net figures. No estimation from gross: without a manual
        // override the net-excluding-benefits base is zero.
        let net_excluding_benefits = request.compensation.monthly_net_override.unwrap_or(0.0);
        let mobility_budget_monthly = request.compensation.mobility.budget_monthly();
        let net_including_benefits =
            net_excluding_benefits + totals.net_monthly + mobility_budget_monthly;

        CostBreakdown {
            employer: EmployerCosts {
                double_holiday_pay: double_holiday_pay.into(),
                annual_gross_with_holiday: annual_gross_with_holiday.into(),
                annual_gross_no_holiday: annual_gross_no_holiday.into(),
                social_contribution: social_contribution.into(),
                total_salary_cost: total_salary_cost.into(),
                benefits_cost: totals.annual_employer_cost.into(),
                mobility_cost: mobility_cost.into(),
                total_annual_cost: total_annual_cost.into(),
            },
            candidate: CandidateOffer {
                monthly_gross: monthly_gross.into(),
                annual_gross: annual_gross_with_holiday.into(),
                thirteenth_month: monthly_gross.into(),
                double_holiday_pay: double_holiday_pay.into(),
                net_excluding_benefits: net_excluding_benefits.into(),
                has_manual_net: request.compensation.monthly_net_override.is_some(),
                net_benefits_monthly: totals.net_monthly.into(),
                mobility_budget_monthly: mobility_budget_monthly.into(),
                net_including_benefits: net_including_benefits.into(),
                total_net_per_month: net_including_benefits.into(),
                commute_monthly: totals.commute_monthly.into(),
                company_car: request.compensation.mobility.car_model(),
            },
            benefit_lines,
            margin: MarginSummary {
                package_label: request.margin.package_label(),
                annual_amount: margin_annual.into(),
            },
            daily_rate: daily_rate.into(),
        }
    }
}
