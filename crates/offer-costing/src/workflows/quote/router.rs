use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{CandidateProfile, CompensationInput, QuoteRequest};
use super::intake::{
    BenefitsForm, CompensationForm, GuidanceNote, IntakeRejection, IntakeValidator, MarginForm,
    ProfileForm,
};
use super::service::QuoteService;

/// Router builder exposing the calculation endpoint and the per-phase intake
/// endpoints. Intake rejections come back as 422 with the full issue list.
pub fn quote_router(service: Arc<QuoteService>) -> Router {
    Router::new()
        .route("/api/v1/quotes/calculate", post(calculate_handler))
        .route("/api/v1/quotes/intake/profile", post(intake_profile_handler))
        .route(
            "/api/v1/quotes/intake/compensation",
            post(intake_compensation_handler),
        )
        .route(
            "/api/v1/quotes/intake/benefits",
            post(intake_benefits_handler),
        )
        .route("/api/v1/quotes/intake/margin", post(intake_margin_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompensationIntakeRequest {
    pub(crate) profile: CandidateProfile,
    #[serde(default)]
    pub(crate) form: CompensationForm,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BenefitsIntakeRequest {
    pub(crate) profile: CandidateProfile,
    pub(crate) compensation: CompensationInput,
    #[serde(default)]
    pub(crate) form: BenefitsForm,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompensationIntakeResponse {
    pub(crate) input: CompensationInput,
    pub(crate) guidance: Vec<GuidanceNote>,
}

pub(crate) async fn calculate_handler(
    State(service): State<Arc<QuoteService>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response {
    let breakdown = service.quote(&request);
    (StatusCode::OK, axum::Json(breakdown)).into_response()
}

pub(crate) async fn intake_profile_handler(
    State(service): State<Arc<QuoteService>>,
    axum::Json(form): axum::Json<ProfileForm>,
) -> Response {
    let validator = validator_for(&service);
    match validator.validate_profile(&form) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(rejection) => rejection_response(rejection),
    }
}

pub(crate) async fn intake_compensation_handler(
    State(service): State<Arc<QuoteService>>,
    axum::Json(request): axum::Json<CompensationIntakeRequest>,
) -> Response {
    let validator = validator_for(&service);
    match validator.validate_compensation(&request.profile, &request.form) {
        Ok(review) => (
            StatusCode::OK,
            axum::Json(CompensationIntakeResponse {
                input: review.input,
                guidance: review.guidance,
            }),
        )
            .into_response(),
        Err(rejection) => rejection_response(rejection),
    }
}

pub(crate) async fn intake_benefits_handler(
    State(service): State<Arc<QuoteService>>,
    axum::Json(request): axum::Json<BenefitsIntakeRequest>,
) -> Response {
    let validator = validator_for(&service);
    match validator.validate_benefits(&request.profile, &request.compensation, &request.form) {
        Ok(benefits) => (StatusCode::OK, axum::Json(benefits)).into_response(),
        Err(rejection) => rejection_response(rejection),
    }
}

pub(crate) async fn intake_margin_handler(
    State(service): State<Arc<QuoteService>>,
    axum::Json(form): axum::Json<MarginForm>,
) -> Response {
    let validator = validator_for(&service);
    match validator.validate_margin(&form) {
        Ok(margin) => (StatusCode::OK, axum::Json(margin)).into_response(),
        Err(rejection) => rejection_response(rejection),
    }
}

fn validator_for(service: &QuoteService) -> IntakeValidator {
    IntakeValidator::new(service.availability())
}

fn rejection_response(rejection: IntakeRejection) -> Response {
    let payload = json!({ "issues": rejection.issues });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
