//! Cross-origin policy for the `/api` scope.
//!
//! Browsers may call `/api/**` only from the configured origin, and only with
//! GET, POST, PUT, or DELETE. Routes outside `/api` carry no CORS headers.

use actix_cors::Cors;
use url::Url;

/// Origin allowed when none is configured.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8078";

/// Seconds browsers may cache a preflight response.
const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Reasons an origin cannot be used in the policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorsPolicyError {
    /// The value is not an absolute URL.
    #[error("allowed origin `{origin}` is not a valid URL: {message}")]
    Unparseable {
        /// Rejected input.
        origin: String,
        /// Parser message.
        message: String,
    },
    /// The URL is not an `http` or `https` origin with a host.
    #[error("allowed origin `{origin}` must be an http(s) origin with a host")]
    NotAnOrigin {
        /// Rejected input.
        origin: String,
    },
}

/// Validated cross-origin policy.
///
/// # Examples
/// ```
/// use engineers::inbound::http::cors::CorsPolicy;
///
/// let policy = CorsPolicy::new("http://localhost:8078/").expect("valid origin");
/// assert_eq!(policy.allowed_origin(), "http://localhost:8078");
/// assert!(CorsPolicy::new("*").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    allowed_origin: String,
}

impl CorsPolicy {
    /// Validate `origin` and normalise it to `scheme://host[:port]`.
    ///
    /// # Errors
    ///
    /// Returns [`CorsPolicyError`] when `origin` is not an absolute http(s)
    /// URL with a host.
    pub fn new(origin: &str) -> Result<Self, CorsPolicyError> {
        let url = Url::parse(origin.trim()).map_err(|err| CorsPolicyError::Unparseable {
            origin: origin.to_owned(),
            message: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(CorsPolicyError::NotAnOrigin {
                origin: origin.to_owned(),
            });
        }
        Ok(Self {
            allowed_origin: url.origin().ascii_serialization(),
        })
    }

    /// The normalised allowed origin.
    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }

    /// Build the actix middleware enforcing this policy.
    pub fn middleware(&self) -> Cors {
        Cors::default()
            .allowed_origin(&self.allowed_origin)
            .allowed_methods(["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .max_age(PREFLIGHT_MAX_AGE_SECS)
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Policy validation and middleware behaviour.
    use super::*;
    use actix_web::http::{Method, StatusCode, header};
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8078", "http://localhost:8078")]
    #[case("http://localhost:8078/", "http://localhost:8078")]
    #[case("https://Example.COM", "https://example.com")]
    #[case("  http://127.0.0.1:3000  ", "http://127.0.0.1:3000")]
    fn accepts_and_normalises_origins(#[case] raw: &str, #[case] expected: &str) {
        let policy = CorsPolicy::new(raw).expect("valid origin");
        assert_eq!(policy.allowed_origin(), expected);
    }

    #[rstest]
    #[case("*")]
    #[case("localhost:8078")]
    #[case("ftp://localhost")]
    #[case("")]
    fn rejects_non_origins(#[case] raw: &str) {
        assert!(CorsPolicy::new(raw).is_err());
    }

    #[rstest]
    fn default_policy_allows_local_frontend() {
        assert_eq!(CorsPolicy::default().allowed_origin(), DEFAULT_ALLOWED_ORIGIN);
    }

    #[actix_web::test]
    async fn preflight_from_allowed_origin_lists_methods() {
        let app = actix_test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(CorsPolicy::default().middleware())
                    .route("/ping", web::post().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        let req = actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/ping")
            .insert_header((header::ORIGIN, DEFAULT_ALLOWED_ORIGIN))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some(DEFAULT_ALLOWED_ORIGIN)
        );
        let methods = res
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        for method in ["GET", "POST", "PUT", "DELETE"] {
            assert!(methods.contains(method), "{method} missing from {methods}");
        }
        assert!(!methods.contains("PATCH"));
    }

    #[actix_web::test]
    async fn foreign_origin_receives_no_allow_header() {
        let app = actix_test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(CorsPolicy::default().middleware())
                    .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/ping")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
