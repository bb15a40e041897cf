//! Demo API Service
//!
//! A small, stateless HTTP API used to demonstrate a CI/CD pipeline: status
//! check, echo, version info, and a random devops-fact endpoint. Handlers
//! hold no mutable state; the only process-wide data is a version record
//! built once at startup.

pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod problem;
pub mod server;
pub mod signals;

pub use config::{AppConfig, CliOverrides};
pub use server::run;
