//! Integration coverage for the quoting workflow: phase intake through the
//! public sequencer, pricing through the service facade, and the HTTP router,
//! without reaching into private modules.

mod common {
    use std::sync::Arc;

    use offer_costing::workflows::quote::{
        BenefitAvailability, BenefitsForm, CompensationForm, MarginForm, ProfileForm,
        QuoteService,
    };

    pub(super) fn service() -> QuoteService {
        QuoteService::new(BenefitAvailability::default())
    }

    pub(super) fn router() -> axum::Router {
        offer_costing::workflows::quote::quote_router(Arc::new(service()))
    }

    pub(super) fn profile_form() -> ProfileForm {
        ProfileForm {
            experience: "3-5".to_string(),
            work_model: "Hybrid".to_string(),
            hybrid_onsite_days: "2".to_string(),
            position: "Technical".to_string(),
            nationality: "Belgian".to_string(),
        }
    }

    pub(super) fn compensation_form() -> CompensationForm {
        CompensationForm {
            monthly_salary: "3.500,00".to_string(),
            monthly_net_salary: "2300".to_string(),
            mobility_budget: true,
            mobility_category: "category_2".to_string(),
            ..CompensationForm::default()
        }
    }

    pub(super) fn benefits_form() -> BenefitsForm {
        BenefitsForm {
            pension_plan: true,
            pension_percent: "3".to_string(),
            representation: true,
            representation_amount: "150".to_string(),
            home_office_allowance: true,
            home_internet: true,
            home_internet_amount: "15".to_string(),
            phone_allowance: true,
            phone_allowance_amount: "25".to_string(),
            ..BenefitsForm::default()
        }
    }

    pub(super) fn margin_form() -> MarginForm {
        MarginForm {
            package: "standard".to_string(),
            manual_amount: String::new(),
        }
    }

    pub(super) fn assert_euro(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.005,
            "expected €{expected:.4}, got €{actual:.4}"
        );
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;

use common::*;
use offer_costing::workflows::quote::{build_summary, BenefitKind, QuotePhase};

#[test]
fn sequencer_walk_feeds_the_engine_end_to_end() {
    let service = service();
    let mut sequencer = service.sequencer();

    sequencer
        .submit_profile(&profile_form())
        .expect("profile accepted");
    sequencer
        .submit_compensation(&compensation_form())
        .expect("compensation accepted");
    sequencer
        .submit_benefits(&benefits_form())
        .expect("benefits accepted");
    let request = sequencer
        .submit_margin(&margin_form())
        .expect("margin accepted");
    assert_eq!(sequencer.phase(), QuotePhase::Summary);

    let breakdown = service.quote(&request);

    // Salary block for €3,500 gross.
    assert_euro(breakdown.employer.total_salary_cost.precise, 60336.15);
    // Meal 1680 + eco 250 + hospitalization 360 + accident 240 + pension 3%
    // of 48,720 + representation 1,800 + home office 1,784.76 + internet 180
    // + phone 300.
    assert_euro(breakdown.employer.benefits_cost.precise, 8056.36);
    assert_euro(breakdown.employer.mobility_cost.precise, 8400.0);
    assert_euro(breakdown.employer.total_annual_cost.precise, 76792.51);
    assert_euro(breakdown.daily_rate.precise, (76792.51 + 36000.0) / 200.0);

    // Candidate net: manual 2,300 + representation 150 + home office 148.73
    // + internet 15 + phone 25 + mobility budget 700.
    assert!(breakdown.candidate.has_manual_net);
    assert_euro(breakdown.candidate.net_benefits_monthly.precise, 338.73);
    assert_euro(breakdown.candidate.net_including_benefits.precise, 3338.73);

    let summary = build_summary(&breakdown);
    assert_eq!(summary.package, "Standard (€36,000/year)");
    assert_eq!(summary.candidate.net_excluding_benefits, Some(2300));
    assert_eq!(summary.candidate.mobility_budget_monthly, Some(700));
    assert_eq!(summary.candidate.net_benefit_lines.len(), 4);
    assert_eq!(summary.candidate.statutory_benefits.len(), 4);
    assert!(summary
        .candidate
        .net_benefit_lines
        .iter()
        .all(|line| line.kind != BenefitKind::MealVoucher));
}

#[test]
fn recomputing_the_same_request_is_stable() {
    let service = service();
    let mut sequencer = service.sequencer();
    sequencer.submit_profile(&profile_form()).expect("profile");
    sequencer
        .submit_compensation(&compensation_form())
        .expect("compensation");
    sequencer.submit_benefits(&benefits_form()).expect("benefits");
    let request = sequencer.submit_margin(&margin_form()).expect("margin");

    assert_eq!(service.quote(&request), service.quote(&request));
}

#[tokio::test]
async fn calculate_endpoint_round_trips_a_request() {
    let payload = json!({
        "profile": {
            "experience": "6-9",
            "work_model": "remote",
            "hybrid_onsite_days": 0,
            "position": "technical",
            "nationality": "other"
        },
        "compensation": {
            "monthly_gross": 4200.0,
            "monthly_net_override": 2800.0,
            "mobility": { "kind": "none" }
        },
        "benefits": {},
        "margin": { "package": "payrolling" }
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/quotes/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let body: serde_json::Value = serde_json::from_slice(&body).expect("json payload");

    assert_eq!(body["margin"]["annual_amount"]["rounded"], 24000);
    // Default benefits: meal 1680 + eco 250 + hospitalization 360 +
    // accident 240.
    assert_eq!(body["employer"]["benefits_cost"]["rounded"], 2530);
    assert_eq!(body["candidate"]["net_excluding_benefits"]["rounded"], 2800);
}
