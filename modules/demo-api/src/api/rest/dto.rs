//! Request/response DTOs for the REST surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::version;

/// Payload of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Always `"ok"` while the process is serving requests.
    pub status: String,
    pub service: String,
    /// Wall clock at request time, RFC 3339 UTC.
    pub time: String,
}

/// Body of `POST /echo`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EchoRequest {
    pub message: String,
}

/// Payload of `POST /echo`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EchoResponse {
    /// The caller's message, unchanged.
    pub you_said: String,
    /// Number of characters (Unicode scalar values) in the message.
    pub length: usize,
}

/// Payload of `GET /version`. Built once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VersionInfo {
    pub version: String,
    pub build: String,
    pub author: String,
    pub description: String,
    pub github: String,
}

impl VersionInfo {
    /// Assemble the record from the compile-time constants.
    pub fn current() -> Self {
        Self {
            version: version::VERSION.to_owned(),
            build: version::BUILD.to_owned(),
            author: version::AUTHOR.to_owned(),
            description: version::DESCRIPTION.to_owned(),
            github: version::GITHUB.to_owned(),
        }
    }
}

/// Payload of `GET /api/devops-fact`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FactResponse {
    pub fact: String,
    /// Wall clock at request time, RFC 3339 UTC.
    pub timestamp: String,
    pub source: String,
}
