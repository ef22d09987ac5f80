//! HTTP API module for the shift scheduler.
//!
//! This module provides the REST endpoints for the `shifts` resource.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ShiftPayload;
pub use response::{CREATE_REJECTED, Envelope, ErrorResponse, UPDATE_REJECTED};
pub use state::AppState;
