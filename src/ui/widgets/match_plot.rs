use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke};

const LEFT_MARGIN: f32 = 40.0;
const BOTTOM_MARGIN: f32 = 18.0;
const Y_TICKS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// "Percentage match vs generations" line chart drawn with the painter.
pub struct MatchPlot;

impl MatchPlot {
    /// `points` are `[generation, match %]` pairs in generation order.
    pub fn show(ui: &mut egui::Ui, points: &[[f64; 2]], height: f32) {
        ui.label("Percentage match vs generations");

        let size = egui::vec2(ui.available_width(), height);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let frame = response.rect;
        let area = Rect::from_min_max(
            frame.min + egui::vec2(LEFT_MARGIN, 6.0),
            frame.max - egui::vec2(8.0, BOTTOM_MARGIN),
        );

        let text_color = ui.visuals().text_color();
        let grid = Stroke::new(1.0, ui.visuals().weak_text_color());
        let max_generation = Self::max_generation(points);

        for pct in Y_TICKS {
            let y = Self::to_screen([0.0, pct], max_generation, area).y;
            painter.line_segment([egui::pos2(area.left(), y), egui::pos2(area.right(), y)], grid);
            painter.text(
                egui::pos2(area.left() - 4.0, y),
                Align2::RIGHT_CENTER,
                format!("{}%", pct),
                FontId::proportional(10.0),
                text_color,
            );
        }

        painter.text(
            egui::pos2(area.left(), area.bottom() + 2.0),
            Align2::LEFT_TOP,
            "0",
            FontId::proportional(10.0),
            text_color,
        );
        painter.text(
            egui::pos2(area.right(), area.bottom() + 2.0),
            Align2::RIGHT_TOP,
            format!("{} generations", max_generation as u64),
            FontId::proportional(10.0),
            text_color,
        );

        let line: Vec<Pos2> = points
            .iter()
            .map(|&point| Self::to_screen(point, max_generation, area))
            .collect();
        let colour = Color32::from_rgb(90, 160, 240);
        match line.len() {
            0 => {}
            1 => {
                painter.circle_filled(line[0], 2.0, colour);
            }
            _ => {
                painter.add(Shape::line(line, Stroke::new(1.5, colour)));
            }
        }
    }

    fn max_generation(points: &[[f64; 2]]) -> f64 {
        points.last().map_or(1.0, |p| p[0].max(1.0))
    }

    /// Map a `[generation, match %]` point into `area`; y is clamped to 0-100 %.
    pub fn to_screen(point: [f64; 2], max_generation: f64, area: Rect) -> Pos2 {
        let x = (point[0] / max_generation).clamp(0.0, 1.0) as f32;
        let y = (point[1] / 100.0).clamp(0.0, 1.0) as f32;
        egui::pos2(
            area.left() + x * area.width(),
            area.bottom() - y * area.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_corners() {
        let area = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 50.0));
        assert_eq!(MatchPlot::to_screen([0.0, 0.0], 10.0, area), egui::pos2(0.0, 50.0));
        assert_eq!(MatchPlot::to_screen([10.0, 100.0], 10.0, area), egui::pos2(100.0, 0.0));
        assert_eq!(MatchPlot::to_screen([5.0, 50.0], 10.0, area), egui::pos2(50.0, 25.0));
    }

    #[test]
    fn test_max_generation_defaults_to_one() {
        assert_eq!(MatchPlot::max_generation(&[]), 1.0);
        assert_eq!(MatchPlot::max_generation(&[[0.0, 0.0]]), 1.0);
        assert_eq!(MatchPlot::max_generation(&[[0.0, 0.0], [3000.0, 40.0]]), 3000.0);
    }
}
