use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;

use super::common::*;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn calculate_payload() -> serde_json::Value {
    json!({
        "profile": {
            "experience": "3-5",
            "work_model": "on_site",
            "hybrid_onsite_days": 0,
            "position": "technical",
            "nationality": "belgian"
        },
        "compensation": {
            "monthly_gross": 3000.0,
            "monthly_net_override": null,
            "mobility": { "kind": "none" }
        },
        "benefits": {
            "meal_voucher": true,
            "eco_voucher": true,
            "hospitalization": false,
            "accident_insurance": false
        },
        "margin": { "package": "standard" }
    })
}

#[tokio::test]
async fn calculate_endpoint_returns_the_breakdown() {
    let response = router()
        .oneshot(post_json("/api/v1/quotes/calculate", calculate_payload()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["employer"]["benefits_cost"]["rounded"], 1930);
    assert_eq!(body["employer"]["total_annual_cost"]["rounded"], 53647);
    assert_eq!(body["daily_rate"]["rounded"], 439);
    assert_eq!(body["margin"]["annual_amount"]["rounded"], 36000);
}

#[tokio::test]
async fn profile_intake_lists_every_invalid_field() {
    let response = router()
        .oneshot(post_json("/api/v1/quotes/intake/profile", json!({})))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    let issues = body["issues"].as_array().expect("issue list");
    assert_eq!(issues.len(), 4);
    assert_eq!(issues[0]["field"], "experience");
}

#[tokio::test]
async fn profile_intake_returns_the_normalized_record() {
    let payload = json!({
        "experience": "3-5",
        "work_model": "Hybrid",
        "hybrid_onsite_days": "2",
        "position": "Technical",
        "nationality": "Belgian"
    });

    let response = router()
        .oneshot(post_json("/api/v1/quotes/intake/profile", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["work_model"], "hybrid");
    assert_eq!(body["hybrid_onsite_days"], 2);
}

#[tokio::test]
async fn compensation_intake_carries_guidance_notes() {
    let payload = json!({
        "profile": {
            "experience": "3-5",
            "work_model": "on_site",
            "hybrid_onsite_days": 0,
            "position": "technical",
            "nationality": "other"
        },
        "form": { "monthly_salary": "3000" }
    });

    let response = router()
        .oneshot(post_json("/api/v1/quotes/intake/compensation", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["input"]["monthly_gross"], 3000.0);
    let guidance = body["guidance"].as_array().expect("guidance list");
    assert_eq!(guidance.len(), 1);
    assert_eq!(guidance[0]["field"], "monthly_salary");
}

#[tokio::test]
async fn margin_intake_rejects_a_missing_selection() {
    let response = router()
        .oneshot(post_json("/api/v1/quotes/intake/margin", json!({})))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["issues"][0]["field"], "margin_selection");
}
