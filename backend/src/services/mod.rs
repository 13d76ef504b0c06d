//! Service layer for the calculation and its presentation text.
//!
//! `calculator` holds the pure schedule computation; `summary` turns a
//! result into the strings shown alongside it.

pub mod calculator;

pub mod summary;


pub use calculator::{compute_schedule, ideal_cycles, target_minutes, FALL_ASLEEP_LATENCY_MINUTES};
