use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use salary_whisperer::estimator::{salary_router, PredictionService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_salary_routes(service: Arc<PredictionService>) -> axum::Router {
    salary_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use salary_whisperer::estimator::PredictionConfig;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        };
        let service = Arc::new(PredictionService::new(PredictionConfig::default()));
        with_salary_routes(service).layer(Extension(state))
    }

    async fn status_of(app: axum::Router, method: &str, uri: &str, body: Body) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .expect("request builds");
        app.oneshot(request).await.expect("router responds").status()
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_follows_flag() {
        assert_eq!(
            status_of(app(false), "GET", "/ready", Body::empty()).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(app(true), "GET", "/ready", Body::empty()).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn salary_routes_are_mounted() {
        let payload = json!({
            "years_experience": 5,
            "education": "master",
            "job_role": "product-manager",
            "location": "new-york",
            "company_size": "large",
        });
        assert_eq!(
            status_of(
                app(true),
                "POST",
                "/api/v1/salary/predictions",
                Body::from(payload.to_string())
            )
            .await,
            StatusCode::OK
        );
        assert_eq!(
            status_of(app(true), "GET", "/api/v1/salary/options", Body::empty()).await,
            StatusCode::OK
        );
    }
}
