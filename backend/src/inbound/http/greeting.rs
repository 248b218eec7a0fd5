//! Root greeting endpoint.

use actix_web::{HttpResponse, http::header::ContentType};

/// Plain-text body served at `GET /`.
pub const GREETING: &str = "Hello World Spring Boot!";

/// Unauthenticated greeting used as a quick smoke check.
#[utoipa::path(
    get,
    path = "/",
    tags = ["greeting"],
    responses(
        (status = 200, description = "Greeting text", body = String, content_type = "text/plain")
    )
)]
pub async fn greeting() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}
