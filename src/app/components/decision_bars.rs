use crate::app::style::{ButtonExt, LanguagePickerColors, Spacing};
use eframe::egui::{self, Button, RichText};

/// Footer button texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionLabels {
    pub dismiss: String,
    pub apply: String,
}

impl Default for DecisionLabels {
    fn default() -> Self {
        Self {
            dismiss: "Cancel".to_string(),
            apply: "Apply".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Dismiss,
    Apply,
}

pub fn header(ui: &mut egui::Ui, text: &str, spacing: Spacing, colors: &LanguagePickerColors) {
    egui::Frame::new()
        .fill(colors.bars)
        .inner_margin(spacing.margin())
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text).heading().color(colors.on_bars));
            });
        });
}

/// Two equal-width buttons. Both are always enabled.
pub fn decision_buttons(
    ui: &mut egui::Ui,
    labels: &DecisionLabels,
    spacing: Spacing,
    colors: &LanguagePickerColors,
) -> Option<Decision> {
    let mut decision = None;

    egui::Frame::new().fill(colors.bars).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.columns(2, |columns| {
            let buttons = [
                (Decision::Dismiss, &labels.dismiss, colors.dismiss, colors.on_dismiss),
                (Decision::Apply, &labels.apply, colors.apply, colors.on_apply),
            ];

            for (column, (kind, label, fill, text)) in columns.iter_mut().zip(buttons) {
                egui::Frame::new()
                    .inner_margin(spacing.margin())
                    .show(column, |ui| {
                        let width = ui.available_width();
                        let button =
                            Button::new(RichText::new(label.as_str()).strong().color(text))
                                .decision_style(fill, width);
                        if ui.add(button).clicked() {
                            decision = Some(kind);
                        }
                    });
            }
        });
    });

    decision
}
