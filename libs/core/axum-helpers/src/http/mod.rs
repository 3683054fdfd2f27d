//! HTTP-level middleware.
//!
//! ```ignore
//! let app = Router::new().layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod security;

pub use security::security_headers;
