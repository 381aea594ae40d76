use crate::app::language_option::LanguageOption;
use crate::app::style::{LanguagePickerColors, Spacing};
use eframe::egui::{self, vec2, Align, CursorIcon, Layout, RichText, Sense};

const ICON_BOX: f32 = 70.0;
const CHECK_SIZE: f32 = 30.0;

/// A full-width selectable row: icon, name, and a check mark when selected.
///
/// The returned response covers the whole row; the caller decides what a
/// click means.
pub fn language_button(
    ui: &mut egui::Ui,
    option: &LanguageOption,
    selected: bool,
    spacing: Spacing,
    colors: &LanguagePickerColors,
) -> egui::Response {
    let text_color = colors.row_text(selected);
    let icon_padding = spacing.vertical();

    let frame = egui::Frame::new()
        .fill(colors.row_fill(selected))
        .inner_margin(egui::Margin::symmetric(spacing.margin().left, 0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                let icon_size = ICON_BOX - 2.0 * icon_padding;
                ui.add_space(icon_padding);
                ui.add(egui::Image::new(option.icon.clone()).fit_to_exact_size(vec2(
                    icon_size.max(1.0),
                    icon_size.max(1.0),
                )));
                ui.add_space(icon_padding);

                ui.label(RichText::new(&option.name).color(text_color));

                if selected {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.add_space(icon_padding);
                        ui.label(RichText::new("✔").size(CHECK_SIZE).color(text_color));
                    });
                }
            });
        });

    let response = frame
        .response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);

    match &option.content_description {
        Some(description) => response.on_hover_text(description.as_str()),
        None => response,
    }
}
