//! Device Command Types
//! Wire-format payload for the `/api/command` endpoint.

use serde::{Deserialize, Serialize};

/// Recognized device actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCommand {
    Start,
    Stop,
}

impl DeviceCommand {
    /// Wire spelling of the command.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCommand::Start => "start",
            DeviceCommand::Stop => "stop",
        }
    }
}

impl std::fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body posted to `/api/command`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub device_id: i64,
    pub command: DeviceCommand,
}

impl CommandRequest {
    pub fn new(device_id: i64, command: DeviceCommand) -> Self {
        Self { device_id, command }
    }
}
