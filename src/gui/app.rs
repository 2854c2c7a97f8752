//! BotDeck Main Application
//! Main window with the control panel and the usage chart.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

use egui::{RichText, SidePanel};
use tracing::{info, warn};

use crate::api::{ApiError, CommandClient, DeviceCommand};
use crate::charts::UsageChart;
use crate::config::Config;
use crate::gui::{ControlPanel, ControlPanelAction};

/// Dispatch outcome reported from the worker thread.
struct DispatchResult {
    command: DeviceCommand,
    outcome: Result<(), ApiError>,
}

/// In-flight command request. Dropping it detaches the worker: the result
/// send fails and the response is discarded.
struct PendingDispatch {
    command: DeviceCommand,
    rx: Receiver<DispatchResult>,
    started: Instant,
}

/// Main application window.
pub struct BotDeckApp {
    config: Config,
    client: Option<CommandClient>,
    control_panel: ControlPanel,
    usage_chart: UsageChart,
    pending: Option<PendingDispatch>,
}

impl BotDeckApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: Config) -> Self {
        let mut control_panel = ControlPanel::new();
        let client = match CommandClient::new(&config.api_base) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("failed to build HTTP client: {e}");
                control_panel.set_status(&format!("Error: HTTP client unavailable: {e}"));
                None
            }
        };

        Self {
            config,
            client,
            control_panel,
            usage_chart: UsageChart::new(),
            pending: None,
        }
    }

    /// Dispatch a command on a background thread. Ignored while another
    /// dispatch is pending (the buttons are disabled then anyway).
    fn dispatch_command(&mut self, command: DeviceCommand) {
        if self.pending.is_some() {
            return;
        }
        let Some(client) = self.client.clone() else {
            self.control_panel.set_status("Error: HTTP client unavailable");
            return;
        };

        let device_id = self.config.device_id;
        let (tx, rx) = channel();
        self.pending = Some(PendingDispatch {
            command,
            rx,
            started: Instant::now(),
        });
        self.control_panel.controls_enabled = false;
        self.control_panel
            .set_status(&format!("Sending '{}'...", command));
        info!(%command, device_id, "dispatching command");

        thread::spawn(move || {
            let outcome = client.send_command(device_id, command);
            let _ = tx.send(DispatchResult { command, outcome });
        });
    }

    /// Apply the pending dispatch result, if the worker has finished.
    fn check_dispatch_result(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending.rx.try_recv() {
            Ok(result) => {
                match result.outcome {
                    Ok(()) => {
                        info!(
                            command = %result.command,
                            elapsed_ms = pending.started.elapsed().as_millis() as u64,
                            "command acknowledged"
                        );
                        self.control_panel.set_acknowledged(result.command);
                    }
                    Err(e) => {
                        warn!(command = %result.command, "command failed: {e}");
                        self.control_panel
                            .set_failed(result.command, &e.to_string());
                    }
                }
                self.control_panel.controls_enabled = true;
            }
            Err(TryRecvError::Empty) => {
                // Still in flight
                self.pending = Some(pending);
            }
            Err(TryRecvError::Disconnected) => {
                warn!(command = %pending.command, "dispatch worker exited without a result");
                self.control_panel
                    .set_failed(pending.command, "worker exited");
                self.control_panel.controls_enabled = true;
            }
        }
    }
}

impl eframe::App for BotDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_dispatch_result();

        // Request repaint while a dispatch is pending
        if self.pending.is_some() {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                match self.control_panel.show(ui) {
                    ControlPanelAction::Start => self.dispatch_command(DeviceCommand::Start),
                    ControlPanelAction::Stop => self.dispatch_command(DeviceCommand::Stop),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Usage Chart
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(RichText::new("📊 Usage Analytics").size(16.0).strong());
            ui.add_space(8.0);
            self.usage_chart.show(ui);
        });
    }
}
