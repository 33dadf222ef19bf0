// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Path segment appended to the host base URL for the runtime config endpoint
pub const API_EXTENSION: &str = "api_extension";

/// Documented path of the runtime config endpoint for the default `/` base URL
pub const RUNTIME_CONFIG_DOC: &str = "/api_extension";
