//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the [`EngineerDto`] and [`ErrorResponse`] schemas. The document is
//! served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::EngineerDto;
use crate::inbound::http::error::ErrorResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Engineers API",
        description = "Create, read, and delete software engineer records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::engineers::list_dummy_engineers,
        crate::inbound::http::engineers::list_engineers,
        crate::inbound::http::engineers::get_engineer,
        crate::inbound::http::engineers::create_engineer,
        crate::inbound::http::engineers::delete_engineer,
        crate::inbound::http::engineers::delete_all_engineers,
        crate::inbound::http::greeting::greeting,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EngineerDto, ErrorResponse)),
    tags(
        (name = "engineers", description = "Software engineer records"),
        (name = "greeting", description = "Root greeting"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
