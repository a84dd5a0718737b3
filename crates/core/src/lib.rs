#![forbid(unsafe_code)]

pub mod attempt;
pub mod model;
pub mod report;
pub mod time;

pub use time::Clock;
