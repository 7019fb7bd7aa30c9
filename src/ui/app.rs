use super::panels::{InputPanel, MainPanel, StatusPanel};
use super::services::{ConfigBridge, SettingsService};
use super::state::AppState;
use crate::config::{AppConfig, ConfigManager};
use crate::engine::{RunOutcome, Simulation, SimulationEvent};
use std::time::Duration;

const REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct SelectionApp {
    state: AppState,
    config: ConfigManager,
    simulation: Simulation,
    input_panel: InputPanel,
    status_panel: StatusPanel,
    main_panel: MainPanel,
}

impl Default for SelectionApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl SelectionApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            state: AppState::from_config(&config),
            config: ConfigManager::with_config(config),
            simulation: Simulation::new(),
            input_panel: InputPanel::new(),
            status_panel: StatusPanel::new(),
            main_panel: MainPanel::new(),
        }
    }

    fn drain_events(&mut self) {
        while let Some(event) = self.simulation.poll_event() {
            self.state.apply_event(event);
        }
    }

    fn handle_requests(&mut self) {
        if std::mem::take(&mut self.state.stop_requested) {
            self.stop_run();
        }
        if std::mem::take(&mut self.state.start_requested) {
            self.start_run();
        }
    }

    fn start_run(&mut self) {
        let evolution = ConfigBridge::to_evolution_config(&mut self.state);

        // Replacing the runner also drops the old run's unread events
        match self.simulation.start(&evolution) {
            Ok(()) => {
                self.state.begin_run();
                if let Err(e) = self.config.update(|c| c.evolution = evolution.clone()) {
                    log::warn!("Run settings not stored: {}", e);
                }
            }
            Err(e) => {
                self.state.end_run(format!("Error: {}", e));
            }
        }
    }

    fn stop_run(&mut self) {
        match self.simulation.stop_and_drain() {
            Ok(Some((outcome, events))) => {
                for event in events {
                    self.state.apply_event(event);
                }
                match outcome {
                    // The run beat the stop request; its Finished event already ended the run
                    RunOutcome::Converged { generations } => {
                        if self.state.completed_after.is_none() {
                            self.state.apply_event(SimulationEvent::Finished {
                                total_generations: generations,
                            });
                        }
                    }
                    RunOutcome::Cancelled { generations } => {
                        self.state.end_run(format!("Stopped after {} generations", generations));
                    }
                }
            }
            Ok(None) => self.state.end_run("Ready"),
            Err(e) => self.state.end_run(format!("Error: {}", e)),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Visual Selection");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save settings...").clicked() {
                    SettingsService::save_with_dialog(&self.config, &mut self.state);
                }
                let load_button = ui.add_enabled(!self.state.is_running, egui::Button::new("Load settings..."));
                if load_button.clicked() {
                    SettingsService::load_with_dialog(&self.config, &mut self.state);
                }
            });
        });
    }

    fn show_completion(&mut self, ctx: &egui::Context) {
        let Some(generations) = self.state.completed_after else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Evolution complete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!(
                    "Target fitness match achieved after {} generations.",
                    generations
                ));
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.state.completed_after = None;
        }
    }
}

impl eframe::App for SelectionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.drain_events();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::TopBottomPanel::top("input_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            self.input_panel.show(ui, &mut self.state);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::top("status_panel").show(ctx, |ui| {
            self.status_panel.show(ui, &self.state);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.weak("Ctrl+Q  Quit");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &self.state);
        });

        self.show_completion(ctx);
        self.handle_requests();

        if self.simulation.is_running() || self.state.is_running {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
    }
}
