//! Prometheus request metrics, compiled in with the `metrics` feature.

use std::io;

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Namespace prefixed to every exported metric name.
const NAMESPACE: &str = "engineers";
/// Path serving the Prometheus text exposition.
pub const METRICS_PATH: &str = "/metrics";

/// Build the request metrics middleware serving [`METRICS_PATH`].
///
/// # Errors
///
/// Returns [`io::Error`] when the default collectors cannot be registered.
pub fn build_metrics() -> io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(NAMESPACE)
        .endpoint(METRICS_PATH)
        .build()
        .map_err(|err| io::Error::other(format!("metrics registration failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    #[actix_web::test]
    async fn exposes_request_counters() {
        let metrics = build_metrics().expect("metrics");
        let app = test::init_service(
            App::new()
                .wrap(metrics)
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri(METRICS_PATH).to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let text = std::str::from_utf8(&body).expect("utf8");
        assert!(text.contains("engineers_http_requests_total"));
    }
}
