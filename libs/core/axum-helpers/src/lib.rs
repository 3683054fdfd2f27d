//! # Axum Helpers
//!
//! Shared HTTP plumbing for the workspace's axum services.
//!
//! - **[`server`]**: router assembly with OpenAPI UIs, health endpoints,
//!   graceful shutdown, connection cleanup
//! - **[`http`]**: security-header middleware
//! - **[`errors`]**: the `AppError`/`ErrorCode` taxonomy and its JSON body
//! - **[`extractors`]**: integer id path and validated JSON extractors
//!
//! Apps compose their domain routers, hand them to
//! [`server::create_router`], merge health routes and run the result through
//! [`server::create_production_app`]. Domain crates only need the error and
//! extractor types.

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres,
    create_production_app, create_router, health_router, run_health_checks,
};

pub use http::security_headers;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};
