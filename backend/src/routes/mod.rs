pub mod brackets;
pub mod calculate;
