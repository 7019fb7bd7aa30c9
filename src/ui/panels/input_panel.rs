use crate::config::{ConfigSection, EvolutionConfig};
use crate::ui::state::AppState;
use crate::ui::widgets::IntInput;

pub struct InputPanel {
    mutations_hint: String,
}

impl InputPanel {
    pub fn new() -> Self {
        let manifest = EvolutionConfig::default().to_manifest();
        let mutations_hint = manifest
            .field("mutations")
            .map(|f| f.description.clone())
            .unwrap_or_default();
        Self { mutations_hint }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            let phrase_width = (ui.available_width() - 300.0).max(200.0);

            ui.vertical(|ui| {
                ui.label("Fitness landscape phrase:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.target_input)
                        .hint_text("Leave blank for the default phrase")
                        .desired_width(phrase_width),
                );
                // Enter in the phrase field starts a run, like the button
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    state.start_requested = true;
                }
            });

            ui.vertical(|ui| {
                ui.label("Mutations/generation:");
                IntInput::show(ui, &mut state.mutations_input, 120.0)
                    .on_hover_text(self.mutations_hint.as_str());
            });

            ui.vertical(|ui| {
                ui.add_space(14.0);
                ui.horizontal(|ui| {
                    if ui.button("Evolve!").clicked() {
                        state.start_requested = true;
                    }
                    let stop_button = ui.add_enabled(state.is_running, egui::Button::new("Stop"));
                    if stop_button.clicked() {
                        state.stop_requested = true;
                    }
                });
            });
        });
    }
}
