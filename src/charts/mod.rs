//! Charts module - Usage chart rendering

mod usage;

pub use usage::{UsageChart, UsagePoint};
