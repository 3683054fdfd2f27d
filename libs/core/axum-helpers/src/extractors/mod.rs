//! Custom extractors shared by the domain handlers.
//!
//! Rejections render as the standard [`ErrorResponse`](crate::ErrorResponse)
//! body, so handlers never see malformed ids or invalid payloads.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
