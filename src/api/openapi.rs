//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the filegate REST API
//! using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the filegate REST API
///
/// This struct is used to generate the OpenAPI specification that describes
/// all available endpoints, request/response types, and API behavior.
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
///
/// Note: the download endpoint `GET /files/download/{id}` is documented here
/// even though it is handled by the pre-dispatch interceptor rather than a
/// registered route — to API clients it is indistinguishable from one.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "filegate REST API",
        version = "0.2.0",
        description = "REST API for serving stored files under their original filenames",
        contact(
            name = "filegate",
            url = "https://github.com/jvz-devx/filegate"
        ),
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:6780", description = "Local development server")
    ),
    paths(
        // Files
        crate::api::routes::list_files,
        crate::api::routes::get_file,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::FileId,
        crate::types::FileInfo,

        // Config types from config.rs
        crate::config::Config,
        crate::config::StorageConfig,
        crate::config::PersistenceConfig,
        crate::config::ServerIntegrationConfig,
        crate::config::ApiConfig,
        crate::config::RateLimitConfig,

        // Error types from error.rs
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "files", description = "File records - Browse stored file metadata; downloads go through files/download/{id}"),
        (name = "system", description = "System endpoints - Health checks and OpenAPI spec"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security addon to add API key authentication scheme to OpenAPI spec
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = &mut openapi.components {
            components.add_security_scheme(
                "api_key",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new("X-Api-Key"),
                    ),
                ),
            );
        }
    }
}
