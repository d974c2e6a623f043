//! picshelf infrastructure: log subscriber setup and shared HTTP middleware.

pub mod middleware;
pub mod telemetry;

pub use middleware::{
    request_id_middleware, security_headers_middleware, RequestId, SecurityHeadersConfig,
};
pub use telemetry::init_telemetry;
