use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::quote::catalog::BenefitAvailability;
use crate::workflows::quote::domain::{
    BenefitSelections, CandidateProfile, CompensationInput, ExperienceBracket, MobilitySelection,
    Nationality, PositionType, QuoteRequest, TargetMargin, WorkModel,
};
use crate::workflows::quote::intake::{
    BenefitsForm, CompensationForm, IntakeValidator, MarginForm, ProfileForm,
};
use crate::workflows::quote::pricing::PricingEngine;
use crate::workflows::quote::router::quote_router;
use crate::workflows::quote::service::QuoteService;

pub(super) fn profile() -> CandidateProfile {
    CandidateProfile {
        experience: ExperienceBracket::Confirmed,
        work_model: WorkModel::OnSite,
        hybrid_onsite_days: 0,
        position: PositionType::Technical,
        nationality: Nationality::Belgian,
    }
}

pub(super) fn profile_form() -> ProfileForm {
    ProfileForm {
        experience: "3-5".to_string(),
        work_model: "On-site".to_string(),
        hybrid_onsite_days: String::new(),
        position: "Technical".to_string(),
        nationality: "Belgian".to_string(),
    }
}

pub(super) fn compensation_form(monthly_salary: &str) -> CompensationForm {
    CompensationForm {
        monthly_salary: monthly_salary.to_string(),
        ..CompensationForm::default()
    }
}

pub(super) fn compensation(monthly_gross: f64) -> CompensationInput {
    CompensationInput {
        monthly_gross,
        monthly_net_override: None,
        mobility: MobilitySelection::None,
    }
}

/// Every benefit off, statutory items included; the baseline for the
/// salary-only scenarios.
pub(super) fn no_benefits() -> BenefitSelections {
    BenefitSelections {
        meal_voucher: false,
        eco_voucher: false,
        hospitalization: false,
        accident_insurance: false,
        ..BenefitSelections::default()
    }
}

/// Scenario baseline: Confirmed on-site Belgian technical candidate at
/// €3,000 gross, no benefits, standard margin.
pub(super) fn base_request() -> QuoteRequest {
    QuoteRequest {
        profile: profile(),
        compensation: compensation(3000.0),
        benefits: no_benefits(),
        margin: TargetMargin::Standard,
    }
}

pub(super) fn validator() -> IntakeValidator {
    IntakeValidator::new(BenefitAvailability::default())
}

pub(super) fn engine() -> PricingEngine {
    PricingEngine::new(BenefitAvailability::default())
}

pub(super) fn service() -> QuoteService {
    QuoteService::new(BenefitAvailability::default())
}

pub(super) fn router() -> axum::Router {
    quote_router(Arc::new(service()))
}

pub(super) fn margin_form(package: &str, manual_amount: &str) -> MarginForm {
    MarginForm {
        package: package.to_string(),
        manual_amount: manual_amount.to_string(),
    }
}

pub(super) fn benefits_form() -> BenefitsForm {
    BenefitsForm::default()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Two-decimal money assertions; f64 catalog constants are not exactly
/// representable, so compare with a sub-cent tolerance.
pub(super) fn assert_euro(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected €{expected:.4}, got €{actual:.4}"
    );
}
