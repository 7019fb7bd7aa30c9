/// Single-line text field that only accepts integer input.
///
/// An edit that would leave a non-integer value is rolled back to the
/// previous contents. Blank input is allowed.
pub struct IntInput;

impl IntInput {
    pub fn show(ui: &mut egui::Ui, value: &mut String, width: f32) -> egui::Response {
        let previous = value.clone();
        let response = ui.add(egui::TextEdit::singleline(&mut *value).desired_width(width));
        if response.changed() && !Self::is_acceptable(value) {
            *value = previous;
        }
        response
    }

    pub fn is_acceptable(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || trimmed == "-" || trimmed.parse::<i64>().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptable_values() {
        assert!(IntInput::is_acceptable(""));
        assert!(IntInput::is_acceptable("12"));
        assert!(IntInput::is_acceptable(" 3 "));
        assert!(IntInput::is_acceptable("-"));
        assert!(!IntInput::is_acceptable("1.5"));
        assert!(!IntInput::is_acceptable("x"));
    }
}
