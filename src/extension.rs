//! Extension bootstrap for the runtime config endpoint.
//!
//! The host discovers this module through [`extension_points`] and calls its
//! `load` function once during startup, before it accepts connections. The
//! returned [`ExtensionRouter`] carries the registered routes; the host merges
//! them under its own authentication guard.

use anyhow::{bail, Result};
use axum::{routing::get, Router};
use std::path::PathBuf;

use crate::handlers::{runtime_config_handler, ConfigHandler};
use crate::routes;

/// What the host hands to an extension while loading it
#[derive(Debug, Clone)]
pub struct HostContext {
    pub base_url: String,
    pub runtime_config_path: PathBuf,
}

/// Host names a route answers for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPattern {
    /// Every inbound host
    Any,
}

impl HostPattern {
    pub fn as_regex(self) -> &'static str {
        match self {
            HostPattern::Any => ".*$",
        }
    }
}

/// One (host pattern, path pattern, handler) entry added to the host router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRegistration {
    pub host_pattern: HostPattern,
    pub path: String,
    pub module: &'static str,
}

/// Routes produced by loading an extension
pub struct ExtensionRouter {
    pub registrations: Vec<RouteRegistration>,
    pub router: Router,
}

/// Discovery declaration consumed by the host's extension loader
#[derive(Debug, Clone, Copy)]
pub struct ExtensionPoint {
    pub module: &'static str,
    pub load: fn(&HostContext) -> Result<ExtensionRouter>,
}

pub const MODULE_NAME: &str = "api_extension";

static EXTENSION_POINTS: [ExtensionPoint; 1] = [ExtensionPoint {
    module: MODULE_NAME,
    load: load_extension,
}];

pub fn extension_points() -> &'static [ExtensionPoint] {
    &EXTENSION_POINTS
}

/// Register the runtime config handler at `<base_url>api_extension`
pub fn load_extension(host: &HostContext) -> Result<ExtensionRouter> {
    let path = route_path(&host.base_url)?;
    let handler = ConfigHandler::new(host.runtime_config_path.clone());

    let registration = RouteRegistration {
        host_pattern: HostPattern::Any,
        path: path.clone(),
        module: MODULE_NAME,
    };

    let router = Router::new()
        .route(&path, get(runtime_config_handler))
        .with_state(handler);

    Ok(ExtensionRouter {
        registrations: vec![registration],
        router,
    })
}

/// Join the host base URL and the extension segment
///
/// A missing trailing slash on the base URL is added. Base URLs that are not
/// absolute, contain empty segments or whitespace, or use router capture
/// syntax (`{id}`, `*rest`, or the older `:id` form) are rejected.
pub fn route_path(base_url: &str) -> Result<String> {
    if !base_url.starts_with('/') {
        bail!("base URL must start with '/', got '{}'", base_url);
    }
    if base_url.contains("//") {
        bail!("base URL must not contain empty path segments, got '{}'", base_url);
    }
    if base_url
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | '*' | '?' | '#'))
    {
        bail!("base URL contains characters not allowed in a route, got '{}'", base_url);
    }
    if base_url.split('/').any(|segment| segment.starts_with(':')) {
        bail!("base URL segments must not start with ':', got '{}'", base_url);
    }

    let mut path = base_url.to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    path.push_str(routes::API_EXTENSION);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    #[test]
    fn test_route_path_default_base_url() {
        assert_eq!(route_path("/").unwrap(), "/api_extension");
    }

    #[test]
    fn test_route_path_nested_base_url() {
        assert_eq!(
            route_path("/user/alice/").unwrap(),
            "/user/alice/api_extension"
        );
    }

    #[test]
    fn test_route_path_adds_missing_trailing_slash() {
        assert_eq!(route_path("/lab").unwrap(), "/lab/api_extension");
    }

    #[test]
    fn test_route_path_rejects_malformed_base_url() {
        for base_url in [
            "", "lab/", "//", "/a//b/", "/a b/", "/{id}/", "/*rest", "/x?y=1",
            "/:lab/", "/a/:b/",
        ] {
            assert!(route_path(base_url).is_err(), "accepted '{}'", base_url);
        }
    }

    #[test]
    fn test_extension_points_advertise_module() {
        let points = extension_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].module, "api_extension");
    }

    #[test]
    fn test_load_extension_registers_wildcard_host() {
        let host = HostContext {
            base_url: "/user/alice/".to_string(),
            runtime_config_path: PathBuf::from("/tmp/runtime-cfg/runtime-config.json"),
        };

        let loaded = (extension_points()[0].load)(&host).unwrap();

        assert_eq!(
            loaded.registrations,
            vec![RouteRegistration {
                host_pattern: HostPattern::Any,
                path: "/user/alice/api_extension".to_string(),
                module: "api_extension",
            }]
        );
        assert_eq!(loaded.registrations[0].host_pattern.as_regex(), ".*$");
    }

    #[test]
    fn test_load_extension_fails_on_bad_base_url() {
        let host = HostContext {
            base_url: "no-leading-slash/".to_string(),
            runtime_config_path: PathBuf::from("/tmp/runtime-config.json"),
        };

        let result = load_extension(&host);
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("base URL"));
    }

    #[test]
    fn test_load_extension_rejects_colon_segment_without_panicking() {
        for base_url in ["/:lab/", "/user/:name/"] {
            let host = HostContext {
                base_url: base_url.to_string(),
                runtime_config_path: PathBuf::from("/tmp/runtime-config.json"),
            };

            let result = load_extension(&host);
            assert!(result.is_err(), "accepted '{}'", base_url);
            assert!(result.err().unwrap().to_string().contains("':'"));
        }
    }

    #[test]
    fn test_route_path_allows_colon_inside_segment() {
        assert_eq!(route_path("/user/a:b/").unwrap(), "/user/a:b/api_extension");
        assert_eq!(route_path("/user/a.b/").unwrap(), "/user/a.b/api_extension");
    }

    #[tokio::test]
    async fn test_loaded_router_serves_document_for_any_host() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("runtime-config.json");
        std::fs::write(&path, r#"{"PodName": "nb-1"}"#).unwrap();

        let host = HostContext {
            base_url: "/".to_string(),
            runtime_config_path: path,
        };
        let loaded = load_extension(&host).unwrap();

        for host_header in ["localhost:8888", "notebooks.example.com"] {
            let response = loaded
                .router
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/api_extension")
                        .header("host", host_header)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
