//! Request handlers.
//!
//! Every handler is a pure function of its input plus the wall clock and a
//! random draw; nothing is written anywhere but the response body.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::domain::{facts, version};
use crate::problem::{self, Problem};

use super::dto::{EchoRequest, EchoResponse, FactResponse, StatusResponse, VersionInfo};
use super::error::rejection_to_problem;

/// Shared application state: the version record built once at startup.
#[derive(Clone)]
pub struct AppState {
    version: VersionInfo,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: VersionInfo::current(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn rfc3339_now() -> Result<String, Problem> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| problem::internal_error(format!("failed to format timestamp: {e}")))
}

/// `GET /` — liveness check with the current UTC time.
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses((status = 200, description = "Service is up", body = StatusResponse))
)]
pub async fn status() -> Result<Json<StatusResponse>, Problem> {
    Ok(Json(StatusResponse {
        status: "ok".to_owned(),
        service: version::SERVICE_NAME.to_owned(),
        time: rfc3339_now()?,
    }))
}

/// `POST /echo` — return the caller's message and its character count.
#[utoipa::path(
    post,
    path = "/echo",
    tag = "echo",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "Message echoed back", body = EchoResponse),
        (status = 422, description = "Body missing a string `message` field", body = Problem)
    )
)]
pub async fn echo(
    payload: Result<Json<EchoRequest>, JsonRejection>,
) -> Result<Json<EchoResponse>, Problem> {
    let Json(req) = payload.map_err(|rejection| rejection_to_problem(&rejection, "/echo"))?;
    let length = req.message.chars().count();
    Ok(Json(EchoResponse {
        you_said: req.message,
        length,
    }))
}

/// `GET /version` — the static build record.
#[utoipa::path(
    get,
    path = "/version",
    tag = "status",
    responses((status = 200, description = "Build metadata", body = VersionInfo))
)]
pub async fn version_info(State(state): State<AppState>) -> Json<VersionInfo> {
    Json(state.version.clone())
}

/// `GET /api/devops-fact` — one fact, drawn uniformly with replacement.
#[utoipa::path(
    get,
    path = "/api/devops-fact",
    tag = "facts",
    responses((status = 200, description = "A devops fact", body = FactResponse))
)]
pub async fn devops_fact() -> Result<Json<FactResponse>, Problem> {
    Ok(Json(FactResponse {
        fact: facts::random_fact().to_owned(),
        timestamp: rfc3339_now()?,
        source: facts::FACT_SOURCE.to_owned(),
    }))
}
