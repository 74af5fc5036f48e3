//! Raw, possibly-malformed per-phase form state as the front end submits it:
//! free-text amounts stay strings, selections stay codes, toggles are plain
//! booleans. The validator turns these into the typed domain records.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub experience: String,
    pub work_model: String,
    pub hybrid_onsite_days: String,
    pub position: String,
    pub nationality: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompensationForm {
    pub monthly_salary: String,
    pub monthly_net_salary: String,
    pub company_car: bool,
    pub car_model: String,
    pub mobility_budget: bool,
    pub mobility_category: String,
    pub bicycle_allowance: bool,
    pub bicycle_km: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BenefitsForm {
    pub meal_voucher: bool,
    pub eco_voucher: bool,
    pub pension_plan: bool,
    pub pension_percent: String,
    pub representation: bool,
    pub representation_amount: String,
    pub home_office_allowance: bool,
    pub office_equipment: bool,
    pub equipment_type: String,
    pub home_internet: bool,
    pub home_internet_amount: String,
    pub phone_allowance: bool,
    pub phone_allowance_amount: String,
    pub printer_scanner: bool,
    pub car_wash: bool,
    pub car_wash_amount: String,
    pub public_transport: bool,
    pub public_transport_amount: String,
    pub parking_subscription: bool,
    pub year_end_bonus: bool,
    pub training_budget: bool,
    pub it_equipment: bool,
    pub it_equipment_amount: String,
}

impl Default for BenefitsForm {
    fn default() -> Self {
        Self {
            // Meal and eco vouchers start checked in the form.
            meal_voucher: true,
            eco_voucher: true,
            pension_plan: false,
            pension_percent: String::new(),
            representation: false,
            representation_amount: String::new(),
            home_office_allowance: false,
            office_equipment: false,
            equipment_type: String::new(),
            home_internet: false,
            home_internet_amount: String::new(),
            phone_allowance: false,
            phone_allowance_amount: String::new(),
            printer_scanner: false,
            car_wash: false,
            car_wash_amount: String::new(),
            public_transport: false,
            public_transport_amount: String::new(),
            parking_subscription: false,
            year_end_bonus: false,
            training_budget: false,
            it_equipment: false,
            it_equipment_amount: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarginForm {
    /// "standard", "payrolling" or "manual".
    pub package: String,
    pub manual_amount: String,
}
