//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` confirmation body for operations with no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
