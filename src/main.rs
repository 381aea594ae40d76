use eframe::egui;
use language_picker::app::{set_language, App, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();
    tracing::info!("App booting...");

    let mut app = App::load().unwrap_or_else(|err| {
        tracing::error!("{}, starting with defaults", err);
        let app = App::from_settings(Default::default());
        set_language(app.current_language);
        app
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT])
            .with_min_inner_size([320.0, 400.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Language Picker",
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let dark_mode = app.dark_mode;
            app.set_dark_mode(&cc.egui_ctx, dark_mode);

            Ok(Box::new(app))
        }),
    )
}
