use crate::ui::state::AppState;
use crate::ui::widgets::{GenomeDiff, MatchPlot};

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        let log_height = (ui.available_height() - state.display.plot_height - 40.0).max(80.0);

        egui::ScrollArea::vertical()
            .id_salt("snapshot_log")
            .max_height(log_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if state.log.is_empty() {
                    ui.label("Enter a phrase and press Evolve! to start.");
                }
                for line in &state.log {
                    GenomeDiff::show(ui, &line.symbols);
                }
            });

        ui.separator();

        MatchPlot::show(ui, &state.progress, state.display.plot_height);
    }
}
