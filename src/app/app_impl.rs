use eframe::egui;

use super::App;
use crate::app::components::{greeting::Greeting, menu_bar::MenuBar, AppComponent};

impl eframe::App for App {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!("exiting and saving");
        self.save_state();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::TopBottomPanel::top("Menu Bar").show(ctx, |ui| {
            MenuBar::add(self, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Greeting::add(self, ui);
        });

        let outcome = self
            .language_picker
            .as_mut()
            .and_then(|picker| picker.show(ctx));

        if let Some(outcome) = outcome {
            tracing::debug!("language picker closed with {:?}", outcome);
            if self.handle_picker_outcome(ctx, outcome) {
                self.save_state();
            }
        }
    }
}
