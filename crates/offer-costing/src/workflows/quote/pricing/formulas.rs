//! Per-benefit cost formulas. Each active benefit contributes an annualized
//! employer cost and, where relevant, a monthly line on the candidate side.

use super::super::catalog::{
    BenefitAvailability, BenefitKind, ACCIDENT_INSURANCE_MONTHLY_EUR, BICYCLE_ALLOWANCE_PER_KM_EUR,
    CAR_WASH_MAX_MONTHLY_EUR, ECO_VOUCHER_ANNUAL_EUR, HOME_OFFICE_MONTHLY_EUR,
    HOSPITALIZATION_MONTHLY_EUR, INTERNET_MAX_MONTHLY_EUR, MEAL_VOUCHER_PER_DAY_EUR,
    OFFICE_EQUIPMENT_MONTHLY_EUR, OFFICE_EQUIPMENT_ONE_TIME_EUR, PARKING_MONTHLY_EUR,
    PENSION_PERCENT_MAX, PENSION_PERCENT_MIN, PHONE_MAX_MONTHLY_EUR,
    PRINTER_SCANNER_ONE_TIME_EUR, PUBLIC_TRANSPORT_ASSUMED_MONTHLY_EUR,
    REPRESENTATION_MAX_MONTHLY_EUR, TRAINING_BUDGET_ANNUAL_EUR, WORKING_DAYS_PER_YEAR,
    YEAR_END_BONUS_ANNUAL_EUR,
};
use super::super::domain::{EquipmentPurchase, MobilitySelection, QuoteRequest};
use super::result::BenefitLine;

/// Running totals accumulated while walking the benefit catalog.
#[derive(Debug, Default)]
pub(crate) struct BenefitTotals {
    /// Annual employer spend across all active benefits (one-time amounts
    /// included without annualization).
    pub annual_employer_cost: f64,
    /// Monthly subtotal of the benefits that add to candidate net income.
    pub net_monthly: f64,
    /// Monthly commute-related subtotal (public transport, bicycle, parking,
    /// car wash).
    pub commute_monthly: f64,
}

/// Walk every benefit and produce the itemized lines plus totals.
/// Rollout-disabled benefits contribute nothing while their availability
/// flag is off, regardless of the stored toggle.
pub(crate) fn benefit_lines(
    request: &QuoteRequest,
    availability: &BenefitAvailability,
    annual_gross_with_holiday: f64,
) -> (Vec<BenefitLine>, BenefitTotals) {
    let benefits = &request.benefits;
    let mut lines = Lines::default();

    if benefits.meal_voucher {
        let annual = WORKING_DAYS_PER_YEAR * MEAL_VOUCHER_PER_DAY_EUR;
        lines.push(BenefitKind::MealVoucher, annual / 12.0, annual, false, false);
    }

    if benefits.eco_voucher {
        lines.push(
            BenefitKind::EcoVoucher,
            ECO_VOUCHER_ANNUAL_EUR / 12.0,
            ECO_VOUCHER_ANNUAL_EUR,
            false,
            false,
        );
    }

    // Part of every validated package; the flags only keep the engine total
    // over hand-built records.
    if benefits.hospitalization {
        lines.push(
            BenefitKind::Hospitalization,
            HOSPITALIZATION_MONTHLY_EUR,
            HOSPITALIZATION_MONTHLY_EUR * 12.0,
            false,
            false,
        );
    }
    if benefits.accident_insurance {
        lines.push(
            BenefitKind::AccidentInsurance,
            ACCIDENT_INSURANCE_MONTHLY_EUR,
            ACCIDENT_INSURANCE_MONTHLY_EUR * 12.0,
            false,
            false,
        );
    }

    if benefits.pension_percent.is_some() {
        let pct = clamp_pension_percent(benefits.pension_percent);
        let annual = (pct / 100.0) * annual_gross_with_holiday;
        lines.push(BenefitKind::PensionPlan, annual / 12.0, annual, false, false);
    }

    if let Some(amount) = benefits.representation_monthly {
        let monthly = clamp_amount(amount, 0.0, REPRESENTATION_MAX_MONTHLY_EUR, "representation");
        lines.push(
            BenefitKind::Representation,
            monthly,
            monthly * 12.0,
            true,
            false,
        );
    }

    if benefits.home_office_allowance {
        lines.push(
            BenefitKind::HomeOfficeAllowance,
            HOME_OFFICE_MONTHLY_EUR,
            HOME_OFFICE_MONTHLY_EUR * 12.0,
            true,
            false,
        );
    }

    match benefits.office_equipment {
        Some(EquipmentPurchase::OneTime) => {
            // One-time budget: employer cost only, no monthly line.
            lines.totals.annual_employer_cost += OFFICE_EQUIPMENT_ONE_TIME_EUR;
        }
        Some(EquipmentPurchase::Monthly) => {
            lines.push(
                BenefitKind::OfficeEquipment,
                OFFICE_EQUIPMENT_MONTHLY_EUR,
                OFFICE_EQUIPMENT_MONTHLY_EUR * 12.0,
                true,
                false,
            );
        }
        None => {}
    }

    if let Some(amount) = benefits.home_internet_monthly {
        let monthly = clamp_amount(amount, 0.0, INTERNET_MAX_MONTHLY_EUR, "home_internet");
        lines.push(BenefitKind::HomeInternet, monthly, monthly * 12.0, true, false);
    }

    if let Some(amount) = benefits.phone_monthly {
        let monthly = clamp_amount(amount, 0.0, PHONE_MAX_MONTHLY_EUR, "phone_allowance");
        lines.push(BenefitKind::PhoneAllowance, monthly, monthly * 12.0, true, false);
    }

    if benefits.printer_scanner {
        // One-time purchase: employer cost only.
        lines.totals.annual_employer_cost += PRINTER_SCANNER_ONE_TIME_EUR;
    }

    if let MobilitySelection::BicycleAllowance { km_per_month } = request.compensation.mobility {
        // The bicycle allowance is a benefit, not a mobility cost.
        let monthly = km_per_month.max(0.0) * BICYCLE_ALLOWANCE_PER_KM_EUR;
        lines.push(
            BenefitKind::BicycleAllowance,
            monthly,
            monthly * 12.0,
            true,
            true,
        );
    }

    if let Some(amount) = benefits.car_wash_monthly {
        let monthly = clamp_amount(amount, 0.0, CAR_WASH_MAX_MONTHLY_EUR, "car_wash");
        lines.push(BenefitKind::CarWash, monthly, monthly * 12.0, true, true);
    }

    // Rollout-gated benefits below.
    if availability.public_transport {
        if let Some(amount) = benefits.public_transport_monthly {
            // Candidate net uses the entered amount; the employer side bills
            // the fixed assumption.
            let monthly = amount.max(0.0);
            lines.push(
                BenefitKind::PublicTransport,
                monthly,
                PUBLIC_TRANSPORT_ASSUMED_MONTHLY_EUR * 12.0,
                true,
                true,
            );
        }
    }

    if availability.parking_subscription && benefits.parking_subscription {
        lines.push(
            BenefitKind::ParkingSubscription,
            PARKING_MONTHLY_EUR,
            PARKING_MONTHLY_EUR * 12.0,
            true,
            true,
        );
    }

    if availability.year_end_bonus && benefits.year_end_bonus {
        lines.push(
            BenefitKind::YearEndBonus,
            YEAR_END_BONUS_ANNUAL_EUR / 12.0,
            YEAR_END_BONUS_ANNUAL_EUR,
            true,
            false,
        );
    }

    if availability.training_budget && benefits.training_budget {
        // Annual budget: employer cost only.
        lines.totals.annual_employer_cost += TRAINING_BUDGET_ANNUAL_EUR;
    }

    if availability.it_equipment {
        if let Some(cost) = benefits.it_equipment_cost {
            // One-time purchase: employer cost only.
            lines.totals.annual_employer_cost += cost.max(0.0);
        }
    }

    (lines.lines, lines.totals)
}

#[derive(Default)]
struct Lines {
    lines: Vec<BenefitLine>,
    totals: BenefitTotals,
}

impl Lines {
    fn push(
        &mut self,
        kind: BenefitKind,
        monthly: f64,
        annual_cost: f64,
        counts_toward_net: bool,
        commute: bool,
    ) {
        self.totals.annual_employer_cost += annual_cost;
        if counts_toward_net {
            self.totals.net_monthly += monthly;
        }
        if commute {
            self.totals.commute_monthly += monthly;
        }
        self.lines.push(BenefitLine {
            kind,
            label: kind.label(),
            category: kind.category(),
            monthly_value: monthly.into(),
            annual_employer_cost: annual_cost.into(),
            counts_toward_net,
        });
    }
}

/// Clamp an amount into its documented range. Validation should have caught
/// any excursion already; the engine stays total and records the repair.
pub(crate) fn clamp_amount(value: f64, min: f64, max: f64, field: &'static str) -> f64 {
    if value < min || value > max || value.is_nan() {
        let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
        tracing::warn!(field, value, clamped, "amount outside documented range");
        return clamped;
    }
    value
}

/// Pension percent: [1, 4], defaulting to 1 when unparsable while active.
pub(crate) fn clamp_pension_percent(raw: Option<f64>) -> f64 {
    match raw {
        Some(pct) if pct.is_finite() => pct.clamp(PENSION_PERCENT_MIN, PENSION_PERCENT_MAX),
        _ => PENSION_PERCENT_MIN,
    }
}
