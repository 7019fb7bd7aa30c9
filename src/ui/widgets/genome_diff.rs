use crate::engine::Symbol;
use egui::text::LayoutJob;
use egui::{Color32, FontId, TextFormat};

const MATCH_COLOUR: Color32 = Color32::from_rgb(80, 200, 120);
const MISMATCH_COLOUR: Color32 = Color32::from_rgb(230, 80, 80);

/// Colour-coded rendering of a genome against its target.
pub struct GenomeDiff;

impl GenomeDiff {
    pub fn show(ui: &mut egui::Ui, symbols: &[(Symbol, bool)]) -> egui::Response {
        ui.label(Self::layout(symbols, 14.0))
    }

    /// Consecutive symbols of the same kind share one text section.
    pub fn layout(symbols: &[(Symbol, bool)], size: f32) -> LayoutJob {
        let mut job = LayoutJob::default();
        for (text, matched) in Self::runs(symbols) {
            let color = if matched { MATCH_COLOUR } else { MISMATCH_COLOUR };
            job.append(
                &text,
                0.0,
                TextFormat {
                    font_id: FontId::monospace(size),
                    color,
                    ..Default::default()
                },
            );
        }
        job
    }

    pub fn runs(symbols: &[(Symbol, bool)]) -> Vec<(String, bool)> {
        let mut runs: Vec<(String, bool)> = Vec::new();
        for &(symbol, matched) in symbols {
            match runs.last_mut() {
                Some((text, kind)) if *kind == matched => text.push(symbol),
                _ => runs.push((symbol.to_string(), matched)),
            }
        }
        runs
    }
}
