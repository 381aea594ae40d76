use super::language_selector::LanguageSelector;
use super::AppComponent;
use crate::app::{t, App};
use eframe::egui::RichText;

const GREETING_SIZE: f32 = 48.0;

pub struct Greeting;

impl AppComponent for Greeting {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        // Roughly center the column vertically
        let content_height = 96.0 + 30.0 + GREETING_SIZE + 40.0;
        ui.add_space(((ui.available_height() - content_height) / 2.0).max(0.0));

        ui.vertical_centered(|ui| {
            LanguageSelector::add(ctx, ui);
            ui.label(t("language_code"));
            ui.add_space(30.0);
            ui.label(RichText::new(t("hello_world")).size(GREETING_SIZE));
        });
    }
}
