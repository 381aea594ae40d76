use eframe::egui::ImageSource;
use std::fmt;

/// One selectable language in the picker.
///
/// `code` is the selection key. Nothing enforces uniqueness, so two options
/// sharing a code are highlighted together.
#[derive(Clone)]
pub struct LanguageOption {
    pub icon: ImageSource<'static>,
    pub name: String,
    pub content_description: Option<String>,
    pub code: String,
}

impl LanguageOption {
    pub fn new(
        icon: impl Into<ImageSource<'static>>,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
            content_description: None,
            code: code.into(),
        }
    }

    pub fn with_content_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self
    }

    pub fn matches(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Debug for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageOption")
            .field("icon", &self.icon.uri())
            .field("name", &self.name)
            .field("content_description", &self.content_description)
            .field("code", &self.code)
            .finish()
    }
}
