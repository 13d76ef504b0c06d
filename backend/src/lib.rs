//! # Sleep cycle calculator
//!
//! Suggests bedtimes and wake times that line up with whole sleep cycles.
//!
//! Pick a time, say whether it is when you want to wake up or when you are
//! going to bed, and choose an age bracket. The calculator works out the
//! bracket's target sleep duration and cycle length, then offers three
//! times around the ideal number of cycles.
//!
//! ```
//! use sleepcalc::models::{AgeBracketId, ClockTime, Meridiem, Mode};
//! use sleepcalc::services::compute_schedule;
//!
//! let wake = ClockTime::from_12_hour(7, 0, Meridiem::Am).unwrap();
//! let result = compute_schedule(wake, Mode::WakeAt, AgeBracketId::Years18To25.bracket());
//! assert_eq!(result.ideal().time.to_string(), "11:15 PM");
//! ```
//!
//! ## Architecture
//!
//! - [`models`]: clock time, age-bracket table, calculation result types
//! - [`services`]: the schedule computation and its display text
//! - [`routes`]: request resolution and response DTOs
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: server configuration from TOML and environment

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{CalcError, CalcResult};
pub use models::*;
pub use services::compute_schedule;
