use super::AppComponent;
use crate::app::{t, App};
use eframe::egui::{self, vec2, CursorIcon, Sense};

const FLAG_SIZE: f32 = 96.0;

/// Clickable flag that opens or closes the language picker.
pub struct LanguageSelector;

impl AppComponent for LanguageSelector {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let flag = egui::Image::new(egui::include_image!("../../../assets/flags/flag.svg"))
            .fit_to_exact_size(vec2(FLAG_SIZE, FLAG_SIZE))
            .sense(Sense::click());

        let response = ui
            .add(flag)
            .on_hover_cursor(CursorIcon::PointingHand)
            .on_hover_text(t("change_language"));

        if response.clicked() {
            ctx.toggle_language_picker();
        }
    }
}
