//! Data Transfer Objects for the HTTP API.
//!
//! Request and response bodies are defined next to the logic that builds
//! them in `routes`; they are re-exported here for the handlers.

use serde::{Deserialize, Serialize};

pub use crate::routes::brackets::{SleepChart, SleepChartEntry};
pub use crate::routes::calculate::{CalculateRequest, ScheduleRow, ScheduleView};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
