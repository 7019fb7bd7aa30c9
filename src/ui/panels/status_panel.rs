use crate::ui::state::AppState;
use crate::ui::widgets::GenomeDiff;

pub struct StatusPanel;

impl StatusPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.horizontal(|ui| {
            ui.label("Generations:");
            ui.strong(state.generation.to_string());
            ui.add_space(24.0);
            ui.label("Best:");
            if let Some(line) = state.log.back() {
                GenomeDiff::show(ui, &line.symbols);
            }
        });

        let (matched, total) = state.matched();
        let fraction = if total == 0 { 0.0 } else { matched as f32 / total as f32 };
        ui.add(
            egui::ProgressBar::new(fraction)
                .text(format!("{}/{} positions", matched, total)),
        );

        ui.label(&state.status_message);
    }
}
