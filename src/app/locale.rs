use super::i18n::{self, Language};
use eframe::egui;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    UnsupportedCode(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LocaleError::UnsupportedCode(code) => {
                write!(f, "no translations for language code '{}'", code)
            }
        }
    }
}

impl std::error::Error for LocaleError {}

pub fn resolve(code: &str) -> Result<Language, LocaleError> {
    Language::from_code(code).ok_or_else(|| LocaleError::UnsupportedCode(code.to_string()))
}

/// Switch the application locale and redraw everything in the new language.
pub fn apply_locale(ctx: &egui::Context, code: &str) -> Result<Language, LocaleError> {
    let language = resolve(code)?;

    if i18n::get_language() != language {
        tracing::info!("switching locale to {}", language.code());
    }
    i18n::set_language(language);
    ctx.request_repaint();

    Ok(language)
}

/// Best guess at the user's language from the POSIX locale variables.
pub fn system_language() -> Option<Language> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
        .and_then(|value| Language::from_code(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes() {
        assert_eq!(resolve("pl"), Ok(Language::Polish));
        assert_eq!(resolve("de-DE"), Ok(Language::German));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            resolve("fr"),
            Err(LocaleError::UnsupportedCode("fr".to_string()))
        );
        assert_eq!(
            resolve("fr").unwrap_err().to_string(),
            "no translations for language code 'fr'"
        );
    }
}
