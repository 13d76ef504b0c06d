pub mod bracket;
pub mod schedule;
pub mod time;


pub use bracket::*;
pub use schedule::*;
pub use time::*;
