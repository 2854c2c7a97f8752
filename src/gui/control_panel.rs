//! Control Panel Widget
//! Left side panel with the start/stop controls and the status indicator.

use egui::{Color32, RichText};

use crate::api::DeviceCommand;

/// Success styling (status "Online").
const ONLINE_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
/// Danger styling (status "Offline").
const OFFLINE_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Last-known device state shown by the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceStatus {
    /// No command has succeeded yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl DeviceStatus {
    pub fn text(&self) -> &'static str {
        match self {
            DeviceStatus::Unknown => "Unknown",
            DeviceStatus::Online => "Online",
            DeviceStatus::Offline => "Offline",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            DeviceStatus::Unknown => Color32::GRAY,
            DeviceStatus::Online => ONLINE_COLOR,
            DeviceStatus::Offline => OFFLINE_COLOR,
        }
    }

    /// Status implied by a successfully acknowledged command.
    pub fn after_command(command: DeviceCommand) -> Self {
        match command {
            DeviceCommand::Start => DeviceStatus::Online,
            DeviceCommand::Stop => DeviceStatus::Offline,
        }
    }
}

/// Left side control panel with the bot controls.
pub struct ControlPanel {
    pub device_status: DeviceStatus,
    pub status_line: String,
    /// Disables both buttons while a dispatch is in flight.
    pub controls_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            device_status: DeviceStatus::Unknown,
            status_line: "Ready".to_string(),
            controls_enabled: true,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful command acknowledgement.
    pub fn set_acknowledged(&mut self, command: DeviceCommand) {
        self.device_status = DeviceStatus::after_command(command);
        self.status_line = format!("Command '{}' acknowledged", command);
    }

    /// Record a failed dispatch; the indicator keeps its last-known value.
    pub fn set_failed(&mut self, command: DeviceCommand, error: &str) {
        self.status_line = format!("Error: '{}' failed: {}", command, error);
    }

    /// Set the transient status line.
    pub fn set_status(&mut self, status: &str) {
        self.status_line = status.to_string();
    }

    /// Draw the control panel.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🤖 BotDeck")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Device Control")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Status Section =====
        ui.label(RichText::new("📡 Device Status").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("●")
                            .size(14.0)
                            .color(self.device_status.color()),
                    );
                    ui.label(
                        RichText::new(self.device_status.text())
                            .size(14.0)
                            .strong()
                            .color(self.device_status.color()),
                    );
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.controls_enabled, |ui| {
                let start_button = egui::Button::new(RichText::new("▶ Start Bot").size(16.0))
                    .min_size(egui::vec2(180.0, 35.0));
                if ui.add(start_button).clicked() {
                    action = ControlPanelAction::Start;
                }

                ui.add_space(8.0);

                let stop_button = egui::Button::new(RichText::new("⏹ Stop Bot").size(16.0))
                    .min_size(egui::vec2(180.0, 35.0));
                if ui.add(stop_button).clicked() {
                    action = ControlPanelAction::Stop;
                }
            });

            if !self.controls_enabled {
                ui.add_space(5.0);
                ui.label(
                    RichText::new("Command in flight...")
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Line =====
        let status_color = if self.status_line.contains("Error") {
            OFFLINE_COLOR
        } else if self.status_line.contains("acknowledged") {
            ONLINE_COLOR
        } else {
            Color32::GRAY
        };
        ui.label(
            RichText::new(&self.status_line)
                .size(11.0)
                .color(status_color),
        );

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    Start,
    Stop,
}
