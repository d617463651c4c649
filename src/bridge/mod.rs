// Bridge module - platform ↔ standard auth envelope translation

pub mod request;
pub mod response;

pub use request::{build_auth_request, has_request_body};
pub use response::into_platform_response;
