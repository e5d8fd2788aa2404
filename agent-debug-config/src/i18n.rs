//! Locale provider for user-facing strings of the debug panels.
//!
//! Lookup order for [`Localizer::t`]: active-locale override, active-locale
//! built-in table, `en-US` built-in table, then the key itself.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ConfigError;

/// Short label of the vision feature.
pub const VISION_NAME: &str = "appDebug.vision.name";

/// Help text shown next to the vision label.
pub const VISION_DESCRIPTION: &str = "appDebug.vision.description";

const EN_US: &[(&str, &str)] = &[
    (VISION_NAME, "Vision"),
    (
        VISION_DESCRIPTION,
        "Enable Vision will allows the model to take in images and answer questions about them.",
    ),
];

const ZH_HANS: &[(&str, &str)] = &[
    (VISION_NAME, "视觉"),
    (
        VISION_DESCRIPTION,
        "开启视觉功能将允许模型输入图片，并根据图像内容的理解回答用户问题",
    ),
];

const JA_JP: &[(&str, &str)] = &[
    (VISION_NAME, "ビジョン"),
    (
        VISION_DESCRIPTION,
        "ビジョンを有効にすると、モデルが画像を受け取り、それに関する質問に答えることができます。",
    ),
];

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-Hans")]
    ZhHans,
    #[serde(rename = "ja-JP")]
    JaJp,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::EnUs, Locale::ZhHans, Locale::JaJp]
    }

    /// BCP 47 tag used in locale file names.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ZhHans => "zh-Hans",
            Locale::JaJp => "ja-JP",
        }
    }

    /// Parse a language tag, accepting the bare language as well.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Some(Locale::EnUs),
            "zh" | "zh-hans" | "zh-cn" => Some(Locale::ZhHans),
            "ja" | "ja-jp" => Some(Locale::JaJp),
            _ => None,
        }
    }

    fn builtin(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::EnUs => EN_US,
            Locale::ZhHans => ZH_HANS,
            Locale::JaJp => JA_JP,
        }
    }
}

fn builtin_lookup(locale: Locale, key: &str) -> Option<&'static str> {
    locale
        .builtin()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

#[derive(Debug, Default)]
struct LocalizerState {
    locale: Locale,
    overrides: HashMap<Locale, HashMap<String, String>>,
}

/// Shared translation provider.
#[derive(Debug, Default)]
pub struct Localizer {
    state: RwLock<LocalizerState>,
    /// Incremented on locale switches and override changes.
    revision: AtomicU64,
}

impl Localizer {
    pub fn new(locale: Locale) -> Self {
        Self {
            state: RwLock::new(LocalizerState {
                locale,
                overrides: HashMap::new(),
            }),
            revision: AtomicU64::new(0),
        }
    }

    pub fn locale(&self) -> Locale {
        self.state.read().locale
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Switch the active locale.
    pub fn set_locale(&self, locale: Locale) {
        let previous = {
            let mut state = self.state.write();
            std::mem::replace(&mut state.locale, locale)
        };
        if previous != locale {
            log::info!("Locale changed: {} -> {}", previous.code(), locale.code());
            self.revision.fetch_add(1, Ordering::AcqRel);
        }
    }

    /// Translate `key` in the active locale.
    pub fn t(&self, key: &str) -> String {
        let state = self.state.read();
        let locale = state.locale;

        if let Some(value) = state.overrides.get(&locale).and_then(|table| table.get(key)) {
            return value.clone();
        }
        if let Some(value) = builtin_lookup(locale, key) {
            return value.to_string();
        }
        if let Some(value) = builtin_lookup(Locale::EnUs, key) {
            log::trace!("Missing {} translation for {}", locale.code(), key);
            return value.to_string();
        }

        log::warn!("No translation for key {}", key);
        key.to_string()
    }

    /// Add or replace one translation for `locale`.
    pub fn insert_override(&self, locale: Locale, key: impl Into<String>, value: impl Into<String>) {
        self.state
            .write()
            .overrides
            .entry(locale)
            .or_default()
            .insert(key.into(), value.into());
        self.revision.fetch_add(1, Ordering::AcqRel);
    }

    /// Load a flat `key: value` YAML map of translations for `locale`.
    ///
    /// Returns the number of entries loaded.
    pub fn load_overrides(&self, locale: Locale, path: &Path) -> Result<usize, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let table: HashMap<String, String> =
            serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        let count = table.len();

        self.state
            .write()
            .overrides
            .entry(locale)
            .or_default()
            .extend(table);
        self.revision.fetch_add(1, Ordering::AcqRel);

        log::info!(
            "Loaded {} {} translations from {:?}",
            count,
            locale.code(),
            path
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_lookup_per_locale() {
        let localizer = Localizer::new(Locale::EnUs);
        assert_eq!(localizer.t(VISION_NAME), "Vision");

        localizer.set_locale(Locale::ZhHans);
        assert_eq!(localizer.t(VISION_NAME), "视觉");

        localizer.set_locale(Locale::JaJp);
        assert_eq!(localizer.t(VISION_NAME), "ビジョン");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let localizer = Localizer::new(Locale::ZhHans);
        assert_eq!(localizer.t("appDebug.unknown"), "appDebug.unknown");
    }

    #[test]
    fn test_set_locale_bumps_revision_only_on_change() {
        let localizer = Localizer::default();
        assert_eq!(localizer.locale(), Locale::EnUs);

        localizer.set_locale(Locale::EnUs);
        assert_eq!(localizer.revision(), 0);

        localizer.set_locale(Locale::JaJp);
        assert_eq!(localizer.revision(), 1);
    }

    #[test]
    fn test_override_wins_over_builtin() {
        let localizer = Localizer::new(Locale::EnUs);
        localizer.insert_override(Locale::EnUs, VISION_NAME, "Image input");
        assert_eq!(localizer.t(VISION_NAME), "Image input");

        localizer.set_locale(Locale::ZhHans);
        assert_eq!(localizer.t(VISION_NAME), "视觉");
    }

    #[test]
    fn test_load_overrides_from_yaml() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("ja-JP.yaml");
        std::fs::write(
            &path,
            "appDebug.vision.name: 画像認識\nappDebug.vision.extra: 追加\n",
        )
        .expect("Failed to write locale file");

        let localizer = Localizer::new(Locale::JaJp);
        let count = localizer
            .load_overrides(Locale::JaJp, &path)
            .expect("Failed to load overrides");
        assert_eq!(count, 2);
        assert_eq!(localizer.t(VISION_NAME), "画像認識");
        assert_eq!(localizer.t("appDebug.vision.extra"), "追加");
    }

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::EnUs));
        assert_eq!(Locale::from_code("zh_CN"), Some(Locale::ZhHans));
        assert_eq!(Locale::from_code("ja-JP"), Some(Locale::JaJp));
        assert_eq!(Locale::from_code("fr"), None);
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(*locale));
        }
    }
}
