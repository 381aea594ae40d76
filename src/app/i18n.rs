use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

// Languages the host ships translations for
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Polish,
    German,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Polish => "pl",
            Language::German => "de",
        }
    }

    /// Endonym shown in the picker rows.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Polish => "Polski",
            Language::German => "Deutsch",
        }
    }

    pub fn all() -> Vec<Language> {
        vec![Language::English, Language::Polish, Language::German]
    }

    /// Case-insensitive lookup by language code; region suffixes such as
    /// `pl-PL` or `de_AT` resolve to their base language.
    pub fn from_code(code: &str) -> Option<Language> {
        let base = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        Language::all().into_iter().find(|lang| lang.code() == base)
    }
}

type Translations = HashMap<&'static str, &'static str>;

lazy_static! {
    static ref CURRENT_LANGUAGE: RwLock<Language> = RwLock::new(Language::default());
    static ref TRANSLATIONS: RwLock<HashMap<Language, Translations>> = RwLock::new(HashMap::new());
}

fn table(language: Language) -> Translations {
    let entries: &[(&'static str, &'static str)] = match language {
        Language::English => &[
            ("language_code", "en"),
            ("hello_world", "Hello World!"),
            ("select_language", "Select language"),
            ("cancel", "Cancel"),
            ("apply", "Apply"),
            ("settings", "Settings"),
            ("dark_mode", "Dark mode"),
            ("exit", "Exit"),
            ("change_language", "Change language"),
            ("version", "Version {} ({})"),
        ],
        Language::Polish => &[
            ("language_code", "pl"),
            ("hello_world", "Witaj świecie!"),
            ("select_language", "Wybierz język"),
            ("cancel", "Anuluj"),
            ("apply", "Zastosuj"),
            ("settings", "Ustawienia"),
            ("dark_mode", "Tryb ciemny"),
            ("exit", "Wyjdź"),
            ("change_language", "Zmień język"),
            ("version", "Wersja {} ({})"),
        ],
        Language::German => &[
            ("language_code", "de"),
            ("hello_world", "Hallo Welt!"),
            ("select_language", "Sprache auswählen"),
            ("cancel", "Abbrechen"),
            ("apply", "Übernehmen"),
            ("settings", "Einstellungen"),
            ("dark_mode", "Dunkelmodus"),
            ("exit", "Beenden"),
            ("change_language", "Sprache ändern"),
            ("version", "Version {} ({})"),
        ],
    };

    entries.iter().copied().collect()
}

// Initialize translations
pub fn init() {
    let translations: HashMap<Language, Translations> = Language::all()
        .into_iter()
        .map(|lang| (lang, table(lang)))
        .collect();

    match TRANSLATIONS.write() {
        Ok(mut global) => *global = translations,
        Err(err) => tracing::error!("translation table lock poisoned: {}", err),
    }
}

pub fn set_language(lang: Language) {
    match CURRENT_LANGUAGE.write() {
        Ok(mut current) => *current = lang,
        Err(err) => tracing::error!("current language lock poisoned: {}", err),
    }
}

pub fn get_language() -> Language {
    CURRENT_LANGUAGE
        .read()
        .map(|current| *current)
        .unwrap_or_default()
}

/// Translate `key` into `lang`, falling back to the key itself.
pub fn t_for(lang: Language, key: &str) -> String {
    if let Ok(translations) = TRANSLATIONS.read() {
        if let Some(translation) = translations.get(&lang).and_then(|tr| tr.get(key)) {
            return translation.to_string();
        }
    }

    // Tables may not be installed yet (e.g. before init)
    table(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

// Translate a key to the current language
pub fn t(key: &str) -> String {
    t_for(get_language(), key)
}

// Translate a key with positional {} arguments
pub fn tf(key: &str, args: &[&str]) -> String {
    let mut result = t(key);
    for arg in args {
        if let Some(pos) = result.find("{}") {
            result.replace_range(pos..pos + 2, arg);
        }
    }
    result
}
