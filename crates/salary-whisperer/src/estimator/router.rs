use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::catalog::CategoryCatalog;
use super::domain::{Profile, ProfileSubmission};
use super::engine::Prediction;
use super::report::PredictionView;
use super::service::{PredictionError, PredictionService, UNAVAILABLE_NOTICE};

/// Payload returned for a successful prediction request.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub profile: Profile,
    pub prediction: Prediction,
    pub view: PredictionView,
    pub estimated_at: DateTime<Utc>,
}

/// Router builder exposing the estimator over HTTP.
pub fn salary_router(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/api/v1/salary/predictions", post(predict_handler))
        .route("/api/v1/salary/options", get(options_handler))
        .with_state(service)
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<PredictionService>>,
    Json(submission): Json<ProfileSubmission>,
) -> Response {
    match service.predict(submission).await {
        Ok(record) => {
            let body = PredictionResponse {
                view: PredictionView::new(&record.profile, &record.prediction),
                profile: record.profile,
                prediction: record.prediction,
                estimated_at: Utc::now(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(PredictionError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(PredictionError::Unavailable) => {
            let payload = json!({
                "error": UNAVAILABLE_NOTICE,
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn options_handler() -> Json<CategoryCatalog> {
    Json(CategoryCatalog::standard())
}
