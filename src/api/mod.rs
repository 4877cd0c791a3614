//! API module for the HTTP endpoints
//!
//! REST handlers over the shared [`Store`](crate::store::Store), plus the
//! extractors, error mapping and router that tie them to Axum.

pub mod error;
pub mod extract;
pub mod http;
pub mod rest;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use extract::{JsonBody, QueryParams, RequestOrigin};
pub use http::create_router;
pub use state::AppState;
