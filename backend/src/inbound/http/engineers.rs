//! Engineers API handlers.
//!
//! ```text
//! GET    /api/v1/engineers/dummy
//! GET    /api/v1/engineers
//! GET    /api/v1/engineers/{id}
//! POST   /api/v1/engineers {"name":"Ada","techStack":"C"}
//! DELETE /api/v1/engineers/{id}
//! DELETE /api/v1/engineers
//! ```

use actix_web::{HttpResponse, web};

use crate::domain::{Engineer, EngineerDto, EngineerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{
    ErrorResponse, json_error_handler, method_not_allowed, path_error_handler,
};
use crate::inbound::http::state::HttpState;

/// Fixed records served by `GET /dummy`, independent of the store.
fn dummy_engineers() -> Vec<EngineerDto> {
    [
        (1, "James", "Java, Spring"),
        (2, "Jamila", "Python, Java"),
        (3, "Charlie", "JavaScript"),
    ]
    .into_iter()
    .map(|(id, name, tech_stack)| Engineer::new(EngineerId::new(id), name, tech_stack).into())
    .collect()
}

/// Register the engineers route table.
///
/// `/dummy` is registered before `/{id}` so it never parses as an id. Each
/// resource answers unsupported methods with a 405 error envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::resource("/dummy")
                .route(web::get().to(list_dummy_engineers))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("")
                .route(web::get().to(list_engineers))
                .route(web::post().to(create_engineer))
                .route(web::delete().to(delete_all_engineers))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(get_engineer))
                .route(web::delete().to(delete_engineer))
                .default_service(web::to(method_not_allowed)),
        );
}

/// Three hard-coded sample engineers.
#[utoipa::path(
    get,
    path = "/api/v1/engineers/dummy",
    responses((status = 200, description = "Sample engineers", body = [EngineerDto])),
    tags = ["engineers"],
    operation_id = "listDummyEngineers"
)]
pub async fn list_dummy_engineers() -> HttpResponse {
    HttpResponse::Ok().json(dummy_engineers())
}

/// List every stored engineer.
///
/// An empty store is reported as 404 rather than an empty array.
#[utoipa::path(
    get,
    path = "/api/v1/engineers",
    responses(
        (status = 200, description = "Stored engineers", body = [EngineerDto]),
        (status = 404, description = "No engineers stored", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["engineers"],
    operation_id = "listEngineers"
)]
pub async fn list_engineers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let engineers = state.engineers.list_all().await?;
    Ok(HttpResponse::Ok().json(engineers))
}

/// Fetch one engineer.
#[utoipa::path(
    get,
    path = "/api/v1/engineers/{id}",
    params(("id" = i32, Path, description = "Engineer identifier")),
    responses(
        (status = 200, description = "Engineer", body = EngineerDto),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse),
        (status = 404, description = "Unknown engineer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["engineers"],
    operation_id = "getEngineer"
)]
pub async fn get_engineer(
    state: web::Data<HttpState>,
    id: web::Path<EngineerId>,
) -> ApiResult<HttpResponse> {
    let engineer = state.engineers.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(engineer))
}

/// Create an engineer. Any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/v1/engineers",
    request_body = EngineerDto,
    responses(
        (status = 201, description = "Engineer created", body = EngineerDto),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["engineers"],
    operation_id = "createEngineer"
)]
pub async fn create_engineer(
    state: web::Data<HttpState>,
    payload: web::Json<EngineerDto>,
) -> ApiResult<HttpResponse> {
    let created = state
        .engineers_command
        .create(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(created))
}

/// Permanently delete one engineer.
#[utoipa::path(
    delete,
    path = "/api/v1/engineers/{id}",
    params(("id" = i32, Path, description = "Engineer identifier")),
    responses(
        (status = 204, description = "Engineer deleted"),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse),
        (status = 404, description = "Unknown engineer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["engineers"],
    operation_id = "deleteEngineer"
)]
pub async fn delete_engineer(
    state: web::Data<HttpState>,
    id: web::Path<EngineerId>,
) -> ApiResult<HttpResponse> {
    state
        .engineers_command
        .delete_by_id(id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete every engineer. Succeeds on an empty store.
#[utoipa::path(
    delete,
    path = "/api/v1/engineers",
    responses(
        (status = 204, description = "All engineers deleted"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["engineers"],
    operation_id = "deleteAllEngineers"
)]
pub async fn delete_all_engineers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.engineers_command.delete_all().await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "engineers_tests.rs"]
mod tests;
