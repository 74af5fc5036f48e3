//! Fixed payroll and benefit catalog: every constant the validator and the
//! pricing engine share. Amounts are EUR unless stated otherwise.

use serde::{Deserialize, Serialize};

/// Working days used to annualize meal vouchers. Deliberately distinct from
/// [`BILLABLE_DAYS_PER_YEAR`]; the two must never be conflated.
pub const WORKING_DAYS_PER_YEAR: f64 = 210.0;
/// Billable-day divisor for the daily rate.
pub const BILLABLE_DAYS_PER_YEAR: f64 = 200.0;

pub const SALARY_MONTHS_WITH_HOLIDAY: f64 = 13.92;
pub const SALARY_MONTHS_NO_HOLIDAY: f64 = 13.0;
pub const DOUBLE_HOLIDAY_RATE: f64 = 0.92;
/// Employer-side statutory burden, applied to the 13-month base only.
pub const SOCIAL_CONTRIBUTION_MULTIPLIER: f64 = 1.2553;

pub const STANDARD_MARGIN_ANNUAL_EUR: f64 = 36_000.0;
pub const PAYROLLING_MARGIN_ANNUAL_EUR: f64 = 24_000.0;

pub const SALARY_MIN_BELGIAN_EUR: f64 = 2_029.88;
pub const SALARY_MIN_OTHER_EUR: f64 = 3_703.44;

pub const MEAL_VOUCHER_PER_DAY_EUR: f64 = 8.0;
pub const ECO_VOUCHER_ANNUAL_EUR: f64 = 250.0;
pub const HOSPITALIZATION_MONTHLY_EUR: f64 = 30.0;
pub const ACCIDENT_INSURANCE_MONTHLY_EUR: f64 = 20.0;
pub const HOME_OFFICE_MONTHLY_EUR: f64 = 148.73;
pub const INTERNET_MAX_MONTHLY_EUR: f64 = 20.0;
pub const PHONE_MAX_MONTHLY_EUR: f64 = 30.0;
pub const REPRESENTATION_MAX_MONTHLY_EUR: f64 = 250.0;
pub const BICYCLE_ALLOWANCE_PER_KM_EUR: f64 = 0.27;
pub const CAR_WASH_MAX_MONTHLY_EUR: f64 = 10.0;
pub const PARKING_MONTHLY_EUR: f64 = 150.0;
/// Employer-side assumption when no amount is billable for public transport.
pub const PUBLIC_TRANSPORT_ASSUMED_MONTHLY_EUR: f64 = 50.0;
pub const YEAR_END_BONUS_ANNUAL_EUR: f64 = 3_948.0;
pub const TRAINING_BUDGET_ANNUAL_EUR: f64 = 500.0;
pub const OFFICE_EQUIPMENT_ONE_TIME_EUR: f64 = 500.0;
pub const OFFICE_EQUIPMENT_MONTHLY_EUR: f64 = 20.0;
pub const PRINTER_SCANNER_ONE_TIME_EUR: f64 = 50.0;

pub const PENSION_PERCENT_MIN: f64 = 1.0;
pub const PENSION_PERCENT_MAX: f64 = 4.0;

/// Every benefit the engine knows about, statutory items included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitKind {
    MealVoucher,
    EcoVoucher,
    Hospitalization,
    AccidentInsurance,
    PensionPlan,
    Representation,
    HomeOfficeAllowance,
    OfficeEquipment,
    HomeInternet,
    PhoneAllowance,
    PrinterScanner,
    BicycleAllowance,
    CarWash,
    ParkingSubscription,
    PublicTransport,
    YearEndBonus,
    TrainingBudget,
    ItEquipment,
}

impl BenefitKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MealVoucher => "Meal Voucher",
            Self::EcoVoucher => "Eco Voucher",
            Self::Hospitalization => "Hospitalization",
            Self::AccidentInsurance => "Accident Insurance",
            Self::PensionPlan => "Pension Plan",
            Self::Representation => "Representation Allowance",
            Self::HomeOfficeAllowance => "Home Office Allowance",
            Self::OfficeEquipment => "Office Equipment",
            Self::HomeInternet => "Internet Allowance",
            Self::PhoneAllowance => "Phone Allowance",
            Self::PrinterScanner => "Printer/Scanner",
            Self::BicycleAllowance => "Bicycle Allowance",
            Self::CarWash => "Car Wash",
            Self::ParkingSubscription => "Parking Subscription",
            Self::PublicTransport => "Public Transport",
            Self::YearEndBonus => "Year-End Bonus",
            Self::TrainingBudget => "Training Budget",
            Self::ItEquipment => "IT Equipment",
        }
    }

    pub const fn category(self) -> BenefitCategory {
        match self {
            Self::PublicTransport
            | Self::BicycleAllowance
            | Self::CarWash
            | Self::ParkingSubscription => BenefitCategory::Transport,
            Self::HomeOfficeAllowance
            | Self::HomeInternet
            | Self::OfficeEquipment
            | Self::PrinterScanner
            | Self::ItEquipment => BenefitCategory::Homeworking,
            Self::Hospitalization | Self::PensionPlan | Self::AccidentInsurance => {
                BenefitCategory::Insurance
            }
            Self::MealVoucher
            | Self::EcoVoucher
            | Self::YearEndBonus
            | Self::TrainingBudget
            | Self::PhoneAllowance
            | Self::Representation => BenefitCategory::Other,
        }
    }
}

/// Badge grouping used by the offer display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitCategory {
    Transport,
    Homeworking,
    Insurance,
    Other,
}

impl BenefitCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Homeworking => "Homeworking",
            Self::Insurance => "Insurance",
            Self::Other => "Other",
        }
    }
}

/// Rollout switchboard for benefits whose input surface exists but which are
/// not billable yet. Both the intake validator and the pricing engine consult
/// the same record, so a stale stored toggle can never leak into a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitAvailability {
    pub public_transport: bool,
    pub parking_subscription: bool,
    pub year_end_bonus: bool,
    pub training_budget: bool,
    pub it_equipment: bool,
}

impl Default for BenefitAvailability {
    fn default() -> Self {
        Self {
            public_transport: false,
            parking_subscription: false,
            year_end_bonus: false,
            training_budget: false,
            it_equipment: false,
        }
    }
}

impl BenefitAvailability {
    /// Everything switched on; used by tests exercising the full catalog.
    pub fn all_enabled() -> Self {
        Self {
            public_transport: true,
            parking_subscription: true,
            year_end_bonus: true,
            training_budget: true,
            it_equipment: true,
        }
    }
}
