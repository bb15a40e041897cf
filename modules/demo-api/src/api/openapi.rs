//! OpenAPI document for the REST surface, served at
//! `/api-docs/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::api::rest::dto::{
    EchoRequest, EchoResponse, FactResponse, StatusResponse, VersionInfo,
};
use crate::api::rest::handlers;
use crate::problem::{Problem, ValidationViolation};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevOps Demo API",
        description = "Stateless demo API: status, echo, version, devops facts"
    ),
    paths(
        handlers::status,
        handlers::echo,
        handlers::version_info,
        handlers::devops_fact,
    ),
    components(schemas(
        StatusResponse,
        EchoRequest,
        EchoResponse,
        VersionInfo,
        FactResponse,
        Problem,
        ValidationViolation,
    )),
    tags(
        (name = "status", description = "Liveness and build metadata"),
        (name = "echo", description = "Echo the caller's message"),
        (name = "facts", description = "Random devops facts")
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
