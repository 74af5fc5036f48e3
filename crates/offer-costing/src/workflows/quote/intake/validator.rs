use serde::Serialize;

use super::super::catalog::{
    BenefitAvailability, CAR_WASH_MAX_MONTHLY_EUR, INTERNET_MAX_MONTHLY_EUR,
    PENSION_PERCENT_MAX, PENSION_PERCENT_MIN, PHONE_MAX_MONTHLY_EUR,
    REPRESENTATION_MAX_MONTHLY_EUR,
};
use super::super::domain::{
    BenefitSelections, CandidateProfile, CompanyCarModel, CompensationInput, EquipmentPurchase,
    ExperienceBracket, MobilityBudgetCategory, MobilitySelection, Nationality, PositionType,
    TargetMargin, WorkModel,
};
use super::forms::{BenefitsForm, CompensationForm, MarginForm, ProfileForm};
use super::numeric::{parse_flexible_number, parse_or_zero};

/// Field identifiers mirrored by the front-end form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Experience,
    WorkModel,
    HybridOnsiteDays,
    Position,
    Nationality,
    MonthlySalary,
    CarModel,
    MobilityCategory,
    PensionPercent,
    RepresentationAmount,
    EquipmentType,
    HomeInternetAmount,
    PhoneAllowanceAmount,
    CarWashAmount,
    PublicTransportAmount,
    ItEquipmentAmount,
    MarginSelection,
    ManualMarginAmount,
}

impl FormField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::WorkModel => "work_model",
            Self::HybridOnsiteDays => "hybrid_onsite_days",
            Self::Position => "position",
            Self::Nationality => "nationality",
            Self::MonthlySalary => "monthly_salary",
            Self::CarModel => "car_model",
            Self::MobilityCategory => "mobility_category",
            Self::PensionPercent => "pension_percent",
            Self::RepresentationAmount => "representation_amount",
            Self::EquipmentType => "equipment_type",
            Self::HomeInternetAmount => "home_internet_amount",
            Self::PhoneAllowanceAmount => "phone_allowance_amount",
            Self::CarWashAmount => "car_wash_amount",
            Self::PublicTransportAmount => "public_transport_amount",
            Self::ItEquipmentAmount => "it_equipment_amount",
            Self::MarginSelection => "margin_selection",
            Self::ManualMarginAmount => "manual_margin_amount",
        }
    }
}

/// One invalid field. Issues accumulate across a phase so the caller can
/// surface every problem at once instead of the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FormField,
    pub message: String,
}

impl FieldIssue {
    fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Non-blocking advice surfaced next to a field; the phase still passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceNote {
    pub field: FormField,
    pub message: String,
}

/// All field issues of one rejected phase submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("intake validation rejected {} field(s)", .issues.len())]
pub struct IntakeRejection {
    pub issues: Vec<FieldIssue>,
}

/// Phase 2 result: the normalized record plus any guidance notes.
#[derive(Debug, Clone, PartialEq)]
pub struct CompensationReview {
    pub input: CompensationInput,
    pub guidance: Vec<GuidanceNote>,
}

/// Turns raw per-phase form state into normalized domain records, collecting
/// every invalid field and applying the gating rules that the presentation
/// layer mirrors with hidden/disabled controls.
#[derive(Debug, Clone, Default)]
pub struct IntakeValidator {
    availability: BenefitAvailability,
}

impl IntakeValidator {
    pub fn new(availability: BenefitAvailability) -> Self {
        Self { availability }
    }

    pub fn availability(&self) -> BenefitAvailability {
        self.availability
    }

    /// Phase 1: all four selections are required; hybrid candidates must also
    /// pick 1-4 on-site days.
    pub fn validate_profile(&self, form: &ProfileForm) -> Result<CandidateProfile, IntakeRejection> {
        let mut issues = Vec::new();

        let experience = ExperienceBracket::from_code(&form.experience);
        if experience.is_none() {
            issues.push(FieldIssue::new(
                FormField::Experience,
                "select an experience bracket",
            ));
        }

        let work_model = WorkModel::from_code(&form.work_model);
        if work_model.is_none() {
            issues.push(FieldIssue::new(FormField::WorkModel, "select a work model"));
        }

        let position = PositionType::from_code(&form.position);
        if position.is_none() {
            issues.push(FieldIssue::new(FormField::Position, "select a position type"));
        }

        let nationality = Nationality::from_code(&form.nationality);
        if nationality.is_none() {
            issues.push(FieldIssue::new(FormField::Nationality, "select a nationality"));
        }

        let hybrid_onsite_days = match work_model {
            Some(WorkModel::Hybrid) => match form.hybrid_onsite_days.trim().parse::<u8>() {
                Ok(days @ 1..=4) => days,
                _ => {
                    issues.push(FieldIssue::new(
                        FormField::HybridOnsiteDays,
                        "select 1-4 on-site days per week",
                    ));
                    0
                }
            },
            _ => 0,
        };

        match (experience, work_model, position, nationality) {
            (Some(experience), Some(work_model), Some(position), Some(nationality))
                if issues.is_empty() =>
            {
                Ok(CandidateProfile {
                    experience,
                    work_model,
                    hybrid_onsite_days,
                    position,
                    nationality,
                })
            }
            _ => Err(IntakeRejection { issues }),
        }
    }

    /// Phase 2: the gross salary must parse positive; a salary below the
    /// nationality minimum produces guidance, not a failure. When several
    /// mutually-exclusive mobility toggles arrive set, company car wins over
    /// mobility budget wins over bicycle.
    pub fn validate_compensation(
        &self,
        profile: &CandidateProfile,
        form: &CompensationForm,
    ) -> Result<CompensationReview, IntakeRejection> {
        let mut issues = Vec::new();
        let mut guidance = Vec::new();

        let monthly_gross = parse_flexible_number(&form.monthly_salary).unwrap_or(0.0);
        if monthly_gross <= 0.0 {
            issues.push(FieldIssue::new(
                FormField::MonthlySalary,
                "enter a positive monthly gross salary",
            ));
        } else {
            let minimum = profile.nationality.minimum_monthly_salary();
            if monthly_gross < minimum {
                guidance.push(GuidanceNote {
                    field: FormField::MonthlySalary,
                    message: format!(
                        "minimum salary for this category: €{minimum:.2} (no maximum)"
                    ),
                });
            }
        }

        // Manual net salary: kept only when non-empty and strictly positive.
        let monthly_net_override = if form.monthly_net_salary.trim().is_empty() {
            None
        } else {
            parse_flexible_number(&form.monthly_net_salary).filter(|net| *net > 0.0)
        };

        let mobility = if form.company_car {
            match CompanyCarModel::from_code(&form.car_model) {
                Some(model) => MobilitySelection::CompanyCar { model },
                None => {
                    issues.push(FieldIssue::new(FormField::CarModel, "select a car model"));
                    MobilitySelection::None
                }
            }
        } else if form.mobility_budget {
            match MobilityBudgetCategory::from_code(&form.mobility_category) {
                Some(category) => MobilitySelection::MobilityBudget { category },
                None => {
                    issues.push(FieldIssue::new(
                        FormField::MobilityCategory,
                        "select a mobility budget category",
                    ));
                    MobilitySelection::None
                }
            }
        } else if form.bicycle_allowance {
            MobilitySelection::BicycleAllowance {
                km_per_month: parse_or_zero(&form.bicycle_km).max(0.0),
            }
        } else {
            MobilitySelection::None
        };

        if !issues.is_empty() {
            return Err(IntakeRejection { issues });
        }

        Ok(CompensationReview {
            input: CompensationInput {
                monthly_gross,
                monthly_net_override,
                mobility,
            },
            guidance,
        })
    }

    /// Phase 3: every active toggle that needs an amount must carry one
    /// inside its documented range. Toggles whose gating precondition does
    /// not hold (remote work model, no company car, home office off) are
    /// normalized off rather than flagged; their controls are disabled in the
    /// form, so any stored value is stale.
    pub fn validate_benefits(
        &self,
        profile: &CandidateProfile,
        compensation: &CompensationInput,
        form: &BenefitsForm,
    ) -> Result<BenefitSelections, IntakeRejection> {
        let mut issues = Vec::new();

        let pension_percent = if form.pension_plan {
            match parse_flexible_number(&form.pension_percent) {
                Some(pct) if (PENSION_PERCENT_MIN..=PENSION_PERCENT_MAX).contains(&pct) => {
                    Some(pct)
                }
                _ => {
                    issues.push(FieldIssue::new(
                        FormField::PensionPercent,
                        "pension contribution must be between 1% and 4%",
                    ));
                    None
                }
            }
        } else {
            None
        };

        let representation_monthly = if form.representation && profile.representation_eligible() {
            match required_amount_in_range(
                &form.representation_amount,
                0.0,
                REPRESENTATION_MAX_MONTHLY_EUR,
            ) {
                Some(amount) => Some(amount),
                None => {
                    issues.push(FieldIssue::new(
                        FormField::RepresentationAmount,
                        "enter an amount between €0 and €250",
                    ));
                    None
                }
            }
        } else {
            None
        };

        let home_office_allowance = form.home_office_allowance && profile.home_office_eligible();

        let office_equipment = if form.office_equipment && home_office_allowance {
            match EquipmentPurchase::from_code(&form.equipment_type) {
                Some(purchase) => Some(purchase),
                None => {
                    issues.push(FieldIssue::new(
                        FormField::EquipmentType,
                        "select an equipment option",
                    ));
                    None
                }
            }
        } else {
            None
        };

        let home_internet_monthly = if form.home_internet && home_office_allowance {
            match required_amount_in_range(&form.home_internet_amount, 0.0, INTERNET_MAX_MONTHLY_EUR)
            {
                Some(amount) => Some(amount),
                None => {
                    issues.push(FieldIssue::new(
                        FormField::HomeInternetAmount,
                        "enter an amount between €0 and €20",
                    ));
                    None
                }
            }
        } else {
            None
        };

        let phone_monthly = if form.phone_allowance {
            match required_amount_in_range(
                &form.phone_allowance_amount,
                0.0,
                PHONE_MAX_MONTHLY_EUR,
            ) {
                Some(amount) => Some(amount),
                None => {
                    issues.push(FieldIssue::new(
                        FormField::PhoneAllowanceAmount,
                        "enter an amount between €0 and €30",
                    ));
                    None
                }
            }
        } else {
            None
        };

        let printer_scanner = form.printer_scanner && home_office_allowance;

        let car_wash_monthly = if form.car_wash && compensation.mobility.is_company_car() {
            match required_amount_in_range(&form.car_wash_amount, 0.0, CAR_WASH_MAX_MONTHLY_EUR) {
                Some(amount) => Some(amount),
                None => {
                    issues.push(FieldIssue::new(
                        FormField::CarWashAmount,
                        "enter an amount between €0 and €10",
                    ));
                    None
                }
            }
        } else {
            None
        };

        // Rollout-disabled benefits keep their validation so the stored form
        // state stays coherent; the engine zeroes them while unavailable.
        let public_transport_monthly = if form.public_transport {
            match parse_flexible_number(&form.public_transport_amount) {
                Some(amount) if amount > 0.0 => Some(amount),
                _ => {
                    issues.push(FieldIssue::new(
                        FormField::PublicTransportAmount,
                        "enter a positive monthly amount",
                    ));
                    None
                }
            }
        } else {
            None
        };

        let it_equipment_cost = if form.it_equipment {
            match parse_flexible_number(&form.it_equipment_amount) {
                Some(amount) if amount > 0.0 => Some(amount),
                _ => {
                    issues.push(FieldIssue::new(
                        FormField::ItEquipmentAmount,
                        "enter a positive one-time amount",
                    ));
                    None
                }
            }
        } else {
            None
        };

        if !issues.is_empty() {
            return Err(IntakeRejection { issues });
        }

        Ok(BenefitSelections {
            meal_voucher: form.meal_voucher,
            eco_voucher: form.eco_voucher,
            // Part of every package regardless of the submitted form state.
            hospitalization: true,
            accident_insurance: true,
            pension_percent,
            representation_monthly,
            home_office_allowance,
            office_equipment,
            home_internet_monthly,
            phone_monthly,
            printer_scanner,
            car_wash_monthly,
            public_transport_monthly,
            parking_subscription: form.parking_subscription,
            year_end_bonus: form.year_end_bonus,
            training_budget: form.training_budget,
            it_equipment_cost,
        })
    }

    /// Phase 4: exactly one margin option. A manual margin only has to parse;
    /// zero and negative values are accepted.
    pub fn validate_margin(&self, form: &MarginForm) -> Result<TargetMargin, IntakeRejection> {
        match form.package.trim() {
            "standard" => Ok(TargetMargin::Standard),
            "payrolling" => Ok(TargetMargin::Payrolling),
            "manual" => match parse_flexible_number(&form.manual_amount) {
                Some(annual_amount) => Ok(TargetMargin::Manual { annual_amount }),
                None => Err(IntakeRejection {
                    issues: vec![FieldIssue::new(
                        FormField::ManualMarginAmount,
                        "enter a yearly margin amount",
                    )],
                }),
            },
            _ => Err(IntakeRejection {
                issues: vec![FieldIssue::new(
                    FormField::MarginSelection,
                    "select a margin option",
                )],
            }),
        }
    }
}

/// An active toggle's amount field: present, parsable and within [min, max].
fn required_amount_in_range(raw: &str, min: f64, max: f64) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }
    parse_flexible_number(raw).filter(|amount| (min..=max).contains(amount))
}
