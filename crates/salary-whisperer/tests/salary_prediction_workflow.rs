//! Integration tests for the salary prediction workflow.
//!
//! Scenarios go through the public estimator, service, and HTTP router so the
//! pricing tables, intake rules, and response shape are validated together.

mod common {
    use std::sync::Arc;

    use salary_whisperer::estimator::{
        salary_router, PredictionConfig, PredictionService, ProfileSubmission,
    };

    pub(super) fn submission(
        years_experience: f64,
        education: &str,
        job_role: &str,
        location: &str,
        company_size: &str,
    ) -> ProfileSubmission {
        ProfileSubmission {
            years_experience,
            education: education.to_string(),
            job_role: job_role.to_string(),
            location: location.to_string(),
            company_size: company_size.to_string(),
        }
    }

    pub(super) fn router() -> axum::Router {
        salary_router(Arc::new(PredictionService::new(PredictionConfig::default())))
    }

    pub(super) async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

use axum::http::StatusCode;
use salary_whisperer::estimator::{
    estimate, format_currency, ConfidenceLevel, PredictionService, PredictionView, Profile,
};
use serde_json::json;
use tower::ServiceExt;

use common::*;

#[test]
fn estimator_contract_holds_for_published_scenarios() {
    let cases = [
        (submission(0.0, "bachelor", "software-engineer", "denver", "medium"), 95_000, 80),
        (
            submission(10.0, "master", "data-scientist", "san-francisco", "enterprise"),
            340_032,
            95,
        ),
        (submission(30.0, "bachelor", "software-engineer", "denver", "medium"), 237_500, 80),
        (submission(5.0, "", "", "", ""), 91_000, 85),
    ];

    for (submission, avg_salary, confidence) in cases {
        let prediction = estimate(&Profile::from(&submission));
        assert_eq!(prediction.avg_salary, avg_salary, "{submission:?}");
        assert_eq!(prediction.confidence, confidence, "{submission:?}");
        assert!(prediction.min_salary <= prediction.avg_salary);
        assert!(prediction.avg_salary <= prediction.max_salary);
    }
}

#[tokio::test]
async fn service_and_view_agree_with_the_estimator() {
    let service = PredictionService::default();
    let submission = submission(7.0, "phd", "product-manager", "new-york", "large");

    let record = service
        .predict(submission.clone())
        .await
        .expect("prediction succeeds");
    let direct = estimate(&Profile::from(&submission));
    let view = PredictionView::new(&record.profile, &record.prediction);

    assert_eq!(record.prediction, direct);
    assert_eq!(view.estimated_salary, format_currency(direct.avg_salary));
    assert_eq!(view.confidence_level, ConfidenceLevel::High);
    assert_eq!(view.summary.experience, "7 Years Experience");
    assert_eq!(view.summary.location, "New York, NY");
    assert_eq!(view.summary.company, "Large Company");
}

#[tokio::test]
async fn http_prediction_round_trip() {
    let body = json!({
        "years_experience": 10,
        "education": "master",
        "job_role": "data-scientist",
        "location": "san-francisco",
        "company_size": "enterprise"
    });

    let response = router()
        .oneshot(
            axum::http::Request::post("/api/v1/salary/predictions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["prediction"]["min_salary"], json!(289_027));
    assert_eq!(payload["prediction"]["max_salary"], json!(391_037));
    assert_eq!(payload["prediction"]["factors"]["role"], json!(25.0));
    assert_eq!(payload["view"]["salary_range"], json!("$289,027 - $391,037"));
}

#[tokio::test]
async fn http_prediction_rejects_out_of_range_experience() {
    let body = json!({
        "years_experience": -2,
        "education": "master",
        "job_role": "hr",
        "location": "boston",
        "company_size": "small"
    });

    let response = router()
        .oneshot(
            axum::http::Request::post("/api/v1/salary/predictions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
