//! GUI module - User interface components

mod app;
mod control_panel;

pub use app::BotDeckApp;
pub use control_panel::{ControlPanel, ControlPanelAction, DeviceStatus};
