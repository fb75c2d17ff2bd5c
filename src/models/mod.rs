// Core data models for timestring
// Units and the calendar ratios that convert them into seconds

pub mod unit;
pub mod calendar;

pub use unit::*;
pub use calendar::*;
