use components::language_picker::{LanguagePicker, PickerOutcome};
use components::decision_bars::DecisionLabels;
use eframe::egui::{self, Color32};
use language_option::LanguageOption;
use serde::{Deserialize, Serialize};
use std::fmt;
use style::{ColorOverrides, Spacing};

pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

const APP_NAME: &str = "language-picker";

mod app_impl;
pub mod components;
pub mod i18n;
pub mod language_option;
pub mod locale;
pub mod style;

pub use i18n::{get_language, set_language, t, tf, Language};

pub mod version {
    include!(concat!(env!("OUT_DIR"), "/version_info.rs"));
}

#[derive(Debug)]
pub enum ConfigError {
    Load(confy::ConfyError),
    Store(confy::ConfyError),
    InvalidColor { role: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Load(err) => write!(f, "couldn't load settings: {}", err),
            ConfigError::Store(err) => write!(f, "couldn't store settings: {}", err),
            ConfigError::InvalidColor { role, value } => {
                write!(f, "invalid {} color '{}'", role, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Picker colors as `#rrggbb` / `#rrggbbaa` strings; unset roles follow the theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub content: Option<String>,
    pub on_content: Option<String>,
    pub selected: Option<String>,
    pub on_selected: Option<String>,
    pub dismiss: Option<String>,
    pub on_dismiss: Option<String>,
    pub apply: Option<String>,
    pub on_apply: Option<String>,
    pub bars: Option<String>,
    pub on_bars: Option<String>,
}

fn parse_color(role: &'static str, value: &Option<String>) -> Result<Option<Color32>, ConfigError> {
    match value {
        None => Ok(None),
        Some(hex) => Color32::from_hex(hex.trim())
            .map(Some)
            .map_err(|_| ConfigError::InvalidColor {
                role,
                value: hex.clone(),
            }),
    }
}

impl ColorSettings {
    pub fn overrides(&self) -> Result<ColorOverrides, ConfigError> {
        Ok(ColorOverrides {
            content: parse_color("content", &self.content)?,
            on_content: parse_color("on_content", &self.on_content)?,
            selected: parse_color("selected", &self.selected)?,
            on_selected: parse_color("on_selected", &self.on_selected)?,
            dismiss: parse_color("dismiss", &self.dismiss)?,
            on_dismiss: parse_color("on_dismiss", &self.on_dismiss)?,
            apply: parse_color("apply", &self.apply)?,
            on_apply: parse_color("on_apply", &self.on_apply)?,
            bars: parse_color("bars", &self.bars)?,
            on_bars: parse_color("on_bars", &self.on_bars)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    pub colors: ColorSettings,
}

impl Default for PickerSettings {
    fn default() -> Self {
        let spacing = Spacing::default();
        Self {
            horizontal_padding: spacing.horizontal(),
            vertical_padding: spacing.vertical(),
            colors: ColorSettings::default(),
        }
    }
}

impl PickerSettings {
    pub fn spacing(&self) -> Spacing {
        Spacing::new(self.horizontal_padding, self.vertical_padding)
    }
}

// Stored with confy
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // None until the user applies a language; the system locale is used meanwhile
    pub current_language: Option<Language>,
    pub dark_mode: bool,
    pub picker: PickerSettings,
}

pub struct App {
    pub current_language: Language,

    pub dark_mode: bool,

    pub picker_settings: PickerSettings,

    pub picker_colors: ColorOverrides,

    // Some while the picker is open
    pub language_picker: Option<LanguagePicker>,

    pub quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            current_language: Language::default(),
            dark_mode: false,
            picker_settings: PickerSettings::default(),
            picker_colors: ColorOverrides::default(),
            language_picker: None,
            quit: false,
        }
    }
}

impl App {
    pub fn load() -> Result<Self, ConfigError> {
        i18n::init();

        let settings =
            confy::load::<AppSettings>(APP_NAME, None).map_err(ConfigError::Load)?;
        let app = Self::from_settings(settings);

        i18n::set_language(app.current_language);
        tracing::info!("settings loaded, language is {}", app.current_language.code());

        Ok(app)
    }

    pub fn from_settings(settings: AppSettings) -> Self {
        let current_language = settings
            .current_language
            .or_else(locale::system_language)
            .unwrap_or_default();

        let picker_colors = match settings.picker.colors.overrides() {
            Ok(colors) => colors,
            Err(err) => {
                tracing::warn!("{}, using theme colors for the picker", err);
                ColorOverrides::default()
            }
        };

        Self {
            current_language,
            dark_mode: settings.dark_mode,
            picker_settings: settings.picker,
            picker_colors,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> AppSettings {
        AppSettings {
            current_language: Some(self.current_language),
            dark_mode: self.dark_mode,
            picker: self.picker_settings.clone(),
        }
    }

    pub fn save_state(&self) {
        match confy::store(APP_NAME, None, self.settings()) {
            Ok(_) => tracing::info!("Settings stored successfully"),
            Err(err) => tracing::error!("{}", ConfigError::Store(err)),
        }
    }

    pub fn language_options() -> Vec<LanguageOption> {
        Language::all()
            .into_iter()
            .map(|lang| {
                let icon = match lang {
                    Language::English => {
                        egui::include_image!("../../assets/flags/great_britain.svg")
                    }
                    Language::Polish => egui::include_image!("../../assets/flags/poland.svg"),
                    Language::German => egui::include_image!("../../assets/flags/germany.svg"),
                };
                LanguageOption::new(icon, lang.name(), lang.code())
            })
            .collect()
    }

    pub fn is_picking_language(&self) -> bool {
        self.language_picker.is_some()
    }

    pub fn toggle_language_picker(&mut self) {
        if self.language_picker.take().is_some() {
            return;
        }

        let picker = LanguagePicker::new(
            t("select_language"),
            Self::language_options(),
            self.current_language.code(),
        )
        .spacing(self.picker_settings.spacing())
        .colors(self.picker_colors)
        .labels(DecisionLabels {
            dismiss: t("cancel"),
            apply: t("apply"),
        });

        self.language_picker = Some(picker);
    }

    /// Closes the picker and, on apply, switches the locale. Returns whether
    /// the settings changed.
    pub fn handle_picker_outcome(&mut self, ctx: &egui::Context, outcome: PickerOutcome) -> bool {
        self.language_picker = None;

        match outcome {
            PickerOutcome::Cancelled => false,
            PickerOutcome::Applied(code) => match locale::apply_locale(ctx, &code) {
                Ok(language) => {
                    let changed = language != self.current_language;
                    self.current_language = language;
                    changed
                }
                Err(err) => {
                    tracing::warn!("{}, keeping {}", err, self.current_language.code());
                    false
                }
            },
        }
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        self.dark_mode = dark_mode;
        ctx.set_visuals(if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_fall_back_to_theme_colors_on_bad_hex() {
        let mut settings = AppSettings::default();
        settings.current_language = Some(Language::German);
        settings.picker.colors.selected = Some("not a color".to_string());

        let app = App::from_settings(settings);

        assert_eq!(app.current_language, Language::German);
        assert_eq!(app.picker_colors, ColorOverrides::default());
    }

    #[test]
    fn hex_colors_become_overrides() {
        let colors = ColorSettings {
            selected: Some("#ff0000".to_string()),
            on_bars: Some("#00000080".to_string()),
            ..Default::default()
        };

        let overrides = colors.overrides().unwrap();
        assert_eq!(overrides.selected, Some(Color32::from_rgb(255, 0, 0)));
        assert!(overrides.on_bars.is_some());
        assert_eq!(overrides.apply, None);
    }

    #[test]
    fn invalid_hex_names_the_role() {
        let colors = ColorSettings {
            apply: Some("#12".to_string()),
            ..Default::default()
        };

        let err = colors.overrides().unwrap_err();
        assert_eq!(err.to_string(), "invalid apply color '#12'");
    }

    #[test]
    fn settings_round_trip_through_app() {
        let mut settings = AppSettings::default();
        settings.current_language = Some(Language::Polish);
        settings.dark_mode = true;
        settings.picker.vertical_padding = 4.0;

        let app = App::from_settings(settings);
        let stored = app.settings();

        assert_eq!(stored.current_language, Some(Language::Polish));
        assert!(stored.dark_mode);
        assert_eq!(stored.picker.spacing(), Spacing::new(15.0, 4.0));
    }

    #[test]
    fn options_cover_every_language() {
        let options = App::language_options();
        let codes: Vec<_> = options.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "pl", "de"]);
        assert_eq!(options[1].name, "Polski");
    }

    #[test]
    fn toggle_opens_and_closes_picker() {
        let mut app = App::default();
        assert!(!app.is_picking_language());

        app.toggle_language_picker();
        assert!(app.is_picking_language());
        assert_eq!(app.language_picker.as_ref().map(|p| p.options().len()), Some(3));

        app.toggle_language_picker();
        assert!(!app.is_picking_language());
    }

    #[test]
    fn picker_starts_from_app_language() {
        for language in Language::all() {
            let mut app = App {
                current_language: language,
                ..Default::default()
            };
            app.toggle_language_picker();

            let staged = app.language_picker.as_ref().map(|p| p.staged().to_string());
            assert_eq!(staged.as_deref(), Some(language.code()));
        }
    }

    #[test]
    fn cancelled_picker_keeps_language() {
        let ctx = egui::Context::default();
        let mut app = App {
            current_language: Language::English,
            ..Default::default()
        };
        app.toggle_language_picker();

        assert!(!app.handle_picker_outcome(&ctx, PickerOutcome::Cancelled));
        assert!(!app.is_picking_language());
        assert_eq!(app.current_language, Language::English);
    }

    #[test]
    fn unsupported_code_keeps_language() {
        let ctx = egui::Context::default();
        let mut app = App {
            current_language: Language::German,
            ..Default::default()
        };
        app.toggle_language_picker();

        let changed = app.handle_picker_outcome(&ctx, PickerOutcome::Applied("fr".to_string()));
        assert!(!changed);
        assert!(!app.is_picking_language());
        assert_eq!(app.current_language, Language::German);
    }

    #[test]
    fn applied_picker_switches_language() {
        let ctx = egui::Context::default();
        let mut app = App {
            current_language: Language::English,
            ..Default::default()
        };
        app.toggle_language_picker();

        let changed = app.handle_picker_outcome(&ctx, PickerOutcome::Applied("pl".to_string()));
        assert!(changed);
        assert!(!app.is_picking_language());
        assert_eq!(app.current_language, Language::Polish);
    }
}
