use super::AppComponent;
use crate::app::{t, tf, version, App};
use eframe::egui::{self, RichText};

pub struct MenuBar;

impl AppComponent for MenuBar {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button(t("settings"), |ui| {
                let mut dark_mode = ctx.dark_mode;
                if ui.checkbox(&mut dark_mode, t("dark_mode")).changed() {
                    let egui_ctx = ui.ctx().clone();
                    ctx.set_dark_mode(&egui_ctx, dark_mode);
                    ctx.save_state();
                }

                if ui.button(t("change_language")).clicked() {
                    if !ctx.is_picking_language() {
                        ctx.toggle_language_picker();
                    }
                    ui.close_menu();
                }

                ui.separator();
                if ui.button(t("exit")).clicked() {
                    ctx.quit();
                    ui.close_menu();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(tf("version", &[version::VERSION, version::GIT_HASH])).weak(),
                );
            });
        });
    }
}
