use serde::{Deserialize, Serialize};

use super::catalog;

/// Experience bracket used by sales to position the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceBracket {
    #[serde(rename = "0-2")]
    Junior,
    #[serde(rename = "3-5")]
    Confirmed,
    #[serde(rename = "6-9")]
    Senior,
    #[serde(rename = "10+")]
    Principal,
}

impl ExperienceBracket {
    pub const fn ordered() -> [Self; 4] {
        [Self::Junior, Self::Confirmed, Self::Senior, Self::Principal]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "0-2 years (Junior)",
            Self::Confirmed => "3-5 years",
            Self::Senior => "6-9 years",
            Self::Principal => "10+ years",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0-2" => Some(Self::Junior),
            "3-5" => Some(Self::Confirmed),
            "6-9" => Some(Self::Senior),
            "10+" => Some(Self::Principal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkModel {
    OnSite,
    Hybrid,
    Remote,
}

impl WorkModel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnSite => "Fully On-site",
            Self::Hybrid => "Hybrid",
            Self::Remote => "Fully Remote",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "On-site" | "on_site" => Some(Self::OnSite),
            "Hybrid" | "hybrid" => Some(Self::Hybrid),
            "Remote" | "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    Technical,
    NonTechnical,
}

impl PositionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::NonTechnical => "Non-technical",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "Technical" | "technical" => Some(Self::Technical),
            "Non-technical" | "non_technical" => Some(Self::NonTechnical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nationality {
    Belgian,
    Other,
}

impl Nationality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Belgian => "Belgian",
            Self::Other => "Other",
        }
    }

    /// Nationality-conditioned minimum monthly gross. Falling below it is
    /// guidance only, never a blocking validation failure.
    pub const fn minimum_monthly_salary(self) -> f64 {
        match self {
            Self::Belgian => catalog::SALARY_MIN_BELGIAN_EUR,
            Self::Other => catalog::SALARY_MIN_OTHER_EUR,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "Belgian" | "belgian" => Some(Self::Belgian),
            "Other" | "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Validated Phase 1 record. Replaced wholesale when the phase is
/// resubmitted, never mutated field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub experience: ExperienceBracket,
    pub work_model: WorkModel,
    /// 1-4 when `work_model` is Hybrid, 0 otherwise.
    pub hybrid_onsite_days: u8,
    pub position: PositionType,
    pub nationality: Nationality,
}

impl CandidateProfile {
    /// Home-office allowance (and everything it gates) is off the table for
    /// fully remote candidates. The validator and presentation layer consult
    /// the same predicate.
    pub fn home_office_eligible(&self) -> bool {
        self.work_model != WorkModel::Remote
    }

    pub fn representation_eligible(&self) -> bool {
        self.work_model != WorkModel::Remote
    }
}

/// Company car catalog, annual lease cost inclusive of the fuel card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyCarModel {
    ToyotaBz4x,
    VolkswagenTaigo,
    NissanJuke,
}

impl CompanyCarModel {
    pub const fn ordered() -> [Self; 3] {
        [Self::ToyotaBz4x, Self::VolkswagenTaigo, Self::NissanJuke]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ToyotaBz4x => "Toyota BZ4X 2023 Electric SUV",
            Self::VolkswagenTaigo => "Volkswagen Taigo Diesel 2023",
            Self::NissanJuke => "Nissan Juke Petrol 2023",
        }
    }

    pub const fn annual_cost(self) -> f64 {
        match self {
            Self::ToyotaBz4x => 11_640.0,
            Self::VolkswagenTaigo => 9_156.0,
            Self::NissanJuke => 8_712.0,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "toyota_bz4x" => Some(Self::ToyotaBz4x),
            "volkswagen_taigo" => Some(Self::VolkswagenTaigo),
            "nissan_juke" => Some(Self::NissanJuke),
            _ => None,
        }
    }
}

/// Cash mobility budget tiers, paid monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilityBudgetCategory {
    Category1,
    Category2,
    Category3,
    Category4,
}

impl MobilityBudgetCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category1 => "Category 1",
            Self::Category2 => "Category 2",
            Self::Category3 => "Category 3",
            Self::Category4 => "Category 4",
        }
    }

    pub const fn monthly_amount(self) -> f64 {
        match self {
            Self::Category1 => 600.0,
            Self::Category2 => 700.0,
            Self::Category3 => 800.0,
            Self::Category4 => 900.0,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "category_1" => Some(Self::Category1),
            "category_2" => Some(Self::Category2),
            "category_3" => Some(Self::Category3),
            "category_4" => Some(Self::Category4),
            _ => None,
        }
    }
}

/// At most one mobility option can be active. Modeling the selection as a
/// single enum makes the exclusion structural instead of a UI convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MobilitySelection {
    None,
    CompanyCar { model: CompanyCarModel },
    MobilityBudget { category: MobilityBudgetCategory },
    BicycleAllowance { km_per_month: f64 },
}

impl MobilitySelection {
    pub fn is_company_car(&self) -> bool {
        matches!(self, Self::CompanyCar { .. })
    }

    /// Monthly cash amount added to candidate net income. Only the mobility
    /// budget pays out in cash; a company car is a non-cash benefit and the
    /// bicycle allowance is accounted for with the other benefits.
    pub fn budget_monthly(&self) -> f64 {
        match self {
            Self::MobilityBudget { category } => category.monthly_amount(),
            _ => 0.0,
        }
    }

    pub fn car_model(&self) -> Option<CompanyCarModel> {
        match self {
            Self::CompanyCar { model } => Some(*model),
            _ => None,
        }
    }
}

impl Default for MobilitySelection {
    fn default() -> Self {
        Self::None
    }
}

/// Validated Phase 2 record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationInput {
    pub monthly_gross: f64,
    /// Manually supplied net salary; no estimation from gross is performed.
    /// `None` means "net excluding benefits" is treated as zero.
    pub monthly_net_override: Option<f64>,
    #[serde(default)]
    pub mobility: MobilitySelection,
}

/// Office equipment purchase option: a one-off budget or a monthly stipend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentPurchase {
    OneTime,
    Monthly,
}

impl EquipmentPurchase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneTime => "One-time €500",
            Self::Monthly => "Monthly €20",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "one_time" => Some(Self::OneTime),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Validated Phase 3 record. Toggles that carry an amount are modeled as
/// `Option`: `None` is "off", `Some(amount)` is "on with this amount".
/// Hospitalization and accident insurance are part of every package; the
/// validator always switches them on, and the flags exist only so the engine
/// stays total over any record it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitSelections {
    pub meal_voucher: bool,
    pub eco_voucher: bool,
    pub hospitalization: bool,
    pub accident_insurance: bool,
    /// 1.0-4.0 percent of the annual gross (13.92 months).
    pub pension_percent: Option<f64>,
    pub representation_monthly: Option<f64>,
    pub home_office_allowance: bool,
    pub office_equipment: Option<EquipmentPurchase>,
    pub home_internet_monthly: Option<f64>,
    pub phone_monthly: Option<f64>,
    pub printer_scanner: bool,
    pub car_wash_monthly: Option<f64>,
    pub public_transport_monthly: Option<f64>,
    pub parking_subscription: bool,
    pub year_end_bonus: bool,
    pub training_budget: bool,
    pub it_equipment_cost: Option<f64>,
}

impl Default for BenefitSelections {
    fn default() -> Self {
        Self {
            meal_voucher: true,
            eco_voucher: true,
            hospitalization: true,
            accident_insurance: true,
            pension_percent: None,
            representation_monthly: None,
            home_office_allowance: false,
            office_equipment: None,
            home_internet_monthly: None,
            phone_monthly: None,
            printer_scanner: false,
            car_wash_monthly: None,
            public_transport_monthly: None,
            parking_subscription: false,
            year_end_bonus: false,
            training_budget: false,
            it_equipment_cost: None,
        }
    }
}

/// Validated Phase 4 record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "package", rename_all = "snake_case")]
pub enum TargetMargin {
    Standard,
    Payrolling,
    /// Free-form yearly margin; zero and negative values are accepted, the
    /// same as the fixed options carrying no floor.
    Manual { annual_amount: f64 },
}

impl TargetMargin {
    pub fn annual_amount(&self) -> f64 {
        match self {
            Self::Standard => catalog::STANDARD_MARGIN_ANNUAL_EUR,
            Self::Payrolling => catalog::PAYROLLING_MARGIN_ANNUAL_EUR,
            Self::Manual { annual_amount } => *annual_amount,
        }
    }

    pub fn package_label(&self) -> String {
        match self {
            Self::Standard => "Standard (€36,000/year)".to_string(),
            Self::Payrolling => "Payrolling (€24,000/year)".to_string(),
            Self::Manual { annual_amount } => {
                format!("Manual (€{}/year)", annual_amount.round() as i64)
            }
        }
    }
}

/// Complete, validated engine input. All fields are normalized by the intake
/// validator; the pricing engine never reads ambient state beyond this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub profile: CandidateProfile,
    pub compensation: CompensationInput,
    #[serde(default)]
    pub benefits: BenefitSelections,
    pub margin: TargetMargin,
}
