use eframe::egui::{vec2, Button, Color32, Margin, Stroke};

pub mod colors;

pub use colors::{ColorOverrides, LanguagePickerColors};

pub const DECISION_BUTTON_HEIGHT: f32 = 60.0;

/// Largest padding a `Margin` can carry.
pub const MAX_PADDING: f32 = i8::MAX as f32;

/// Padding around the picker's bars, rows and buttons, in points.
/// Both values are rounded and kept within `0..=MAX_PADDING`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    horizontal: f32,
    vertical: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            horizontal: 15.0,
            vertical: 10.0,
        }
    }
}

impl Spacing {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        let clamp = |v: f32| {
            if v.is_finite() {
                v.round().clamp(0.0, MAX_PADDING)
            } else {
                0.0
            }
        };
        Self {
            horizontal: clamp(horizontal),
            vertical: clamp(vertical),
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    /// Also the gap between list rows.
    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    pub fn margin(&self) -> Margin {
        Margin::symmetric(self.horizontal as i8, self.vertical as i8)
    }
}

pub trait ButtonExt {
    fn decision_style(self, fill: Color32, width: f32) -> Self;
}

impl ButtonExt for Button<'_> {
    fn decision_style(self, fill: Color32, width: f32) -> Self {
        self.min_size(vec2(width, DECISION_BUTTON_HEIGHT))
            .fill(fill)
            .stroke(Stroke::NONE)
            .corner_radius(4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spacing() {
        let spacing = Spacing::default();
        assert_eq!(spacing.horizontal(), 15.0);
        assert_eq!(spacing.vertical(), 10.0);
        assert_eq!(spacing.margin(), Margin::symmetric(15, 10));
    }

    #[test]
    fn negative_spacing_is_clamped() {
        let spacing = Spacing::new(-4.0, 3.0);
        assert_eq!(spacing.horizontal(), 0.0);
        assert_eq!(spacing.margin(), Margin::symmetric(0, 3));
    }

    #[test]
    fn oversized_spacing_is_clamped_everywhere() {
        let spacing = Spacing::new(500.0, 200.0);
        assert_eq!(spacing.horizontal(), MAX_PADDING);
        assert_eq!(spacing.vertical(), MAX_PADDING);
        assert_eq!(spacing.margin(), Margin::symmetric(i8::MAX, i8::MAX));
    }

    #[test]
    fn fractional_spacing_rounds_the_same_for_gaps_and_margins() {
        let spacing = Spacing::new(7.6, f32::NAN);
        assert_eq!(spacing.horizontal(), 8.0);
        assert_eq!(spacing.vertical(), 0.0);
        assert_eq!(spacing.margin(), Margin::symmetric(8, 0));
    }
}
