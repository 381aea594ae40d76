//! A modal, themeable language picker for egui, plus the demo host app.
//!
//! The reusable parts live in [`app::components::language_picker`],
//! [`app::language_option`] and [`app::style`].

pub mod app;

pub use app::components::decision_bars::DecisionLabels;
pub use app::components::language_picker::{
    DismissReason, LanguagePicker, PickerAction, PickerCallbacks, PickerOutcome, PickerState,
};
pub use app::language_option::LanguageOption;
pub use app::style::{ColorOverrides, LanguagePickerColors, Spacing};
