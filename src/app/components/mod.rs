pub mod decision_bars;
pub mod greeting;
pub mod language_button;
pub mod language_picker;
pub mod language_selector;
pub mod menu_bar;

pub trait AppComponent {
    type Context;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui);
}
