//! API module - Device command wire types and HTTP client

mod client;
mod command;

pub use client::{ApiError, CommandClient};
pub use command::{CommandRequest, DeviceCommand};
