//! Build metadata surfaced by `GET /version` and the status payload.
//!
//! All values are fixed at compile time; the version record never changes
//! while the process is running.

pub const SERVICE_NAME: &str = "DevOps Demo API";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build identifier, injected by CI via `DEMO_BUILD` at compile time.
pub const BUILD: &str = match option_env!("DEMO_BUILD") {
    Some(build) => build,
    None => "dev",
};

pub const AUTHOR: &str = "DevOps Demo Team";

pub const DESCRIPTION: &str = "Complete DevOps pipeline demo with Rust, Docker & hosted CI";

pub const GITHUB: &str = "https://github.com/devops-demo/devops-demo-api";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_package() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn github_is_a_url() {
        assert!(GITHUB.starts_with("https://"));
    }
}
