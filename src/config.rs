//! Kit configuration supplied by the page.
//!
//! The backend template may embed a JSON object in
//! `<script type="application/json" id="adminkit-config">`. Every field is
//! optional; missing fields keep their defaults.
//!
//! ```json
//! { "locale": "ru", "notification_duration_ms": 8000 }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the script element carrying the JSON config.
pub const CONFIG_ELEMENT_ID: &str = "adminkit-config";

pub const DEFAULT_NOTIFICATION_CONTAINER_ID: &str = "notificationContainer";
pub const DEFAULT_LOADER_ID: &str = "globalLoader";
pub const DEFAULT_NOTIFICATION_DURATION_MS: u32 = 5000;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 1000;
pub const DEFAULT_EXPORT_LOADER_DELAY_MS: u32 = 1000;
pub const DEFAULT_TOOLTIP_ATTRIBUTE: &str = "data-tooltip";
pub const DEFAULT_COUNTER_ATTRIBUTE: &str = "data-counter";

/// Error returned by [`KitConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid kit config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Language of the built-in message catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// User-facing notification texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    pub copied: String,
    pub copy_failed: String,
    pub load_failed: String,
    /// `{format}` is replaced with the upper-cased export format.
    pub export_started: String,
    pub export_failed: String,
}

impl Messages {
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                copied: "Copied to clipboard".to_owned(),
                copy_failed: "Copy failed".to_owned(),
                load_failed: "Failed to load data".to_owned(),
                export_started: "Export {format} started".to_owned(),
                export_failed: "Export failed".to_owned(),
            },
            Locale::Ru => Self {
                copied: "Скопировано в буфер обмена".to_owned(),
                copy_failed: "Ошибка копирования".to_owned(),
                load_failed: "Ошибка загрузки данных".to_owned(),
                export_started: "Экспорт {format} начат".to_owned(),
                export_failed: "Ошибка экспорта".to_owned(),
            },
        }
    }

    #[must_use]
    pub fn export_started_for(&self, format: &str) -> String {
        self.export_started.replace("{format}", &format.to_uppercase())
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Per-message overrides; unset entries fall back to the locale catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct MessageOverrides {
    copied: Option<String>,
    copy_failed: Option<String>,
    load_failed: Option<String>,
    export_started: Option<String>,
    export_failed: Option<String>,
}

impl MessageOverrides {
    fn apply(self, base: Messages) -> Messages {
        Messages {
            copied: self.copied.unwrap_or(base.copied),
            copy_failed: self.copy_failed.unwrap_or(base.copy_failed),
            load_failed: self.load_failed.unwrap_or(base.load_failed),
            export_started: self.export_started.unwrap_or(base.export_started),
            export_failed: self.export_failed.unwrap_or(base.export_failed),
        }
    }
}

/// Wire shape of the page config; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    notification_container_id: Option<String>,
    loader_id: Option<String>,
    notification_duration_ms: Option<u32>,
    counter_duration_ms: Option<u32>,
    export_loader_delay_ms: Option<u32>,
    tooltip_attribute: Option<String>,
    counter_attribute: Option<String>,
    locale: Locale,
    messages: MessageOverrides,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KitConfig {
    pub notification_container_id: String,
    pub loader_id: String,
    pub notification_duration_ms: u32,
    pub counter_duration_ms: u32,
    pub export_loader_delay_ms: u32,
    pub tooltip_attribute: String,
    pub counter_attribute: String,
    pub locale: Locale,
    pub messages: Messages,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            notification_container_id: DEFAULT_NOTIFICATION_CONTAINER_ID.to_owned(),
            loader_id: DEFAULT_LOADER_ID.to_owned(),
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            export_loader_delay_ms: DEFAULT_EXPORT_LOADER_DELAY_MS,
            tooltip_attribute: DEFAULT_TOOLTIP_ATTRIBUTE.to_owned(),
            counter_attribute: DEFAULT_COUNTER_ATTRIBUTE.to_owned(),
            locale: Locale::default(),
            messages: Messages::default(),
        }
    }
}

impl KitConfig {
    /// Parse the page JSON config. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: RawConfig = serde_json::from_str(raw)?;
        let defaults = Self::default();
        Ok(Self {
            notification_container_id: non_empty_or(
                parsed.notification_container_id,
                defaults.notification_container_id,
            ),
            loader_id: non_empty_or(parsed.loader_id, defaults.loader_id),
            notification_duration_ms: parsed
                .notification_duration_ms
                .unwrap_or(defaults.notification_duration_ms),
            counter_duration_ms: parsed.counter_duration_ms.unwrap_or(defaults.counter_duration_ms),
            export_loader_delay_ms: parsed
                .export_loader_delay_ms
                .unwrap_or(defaults.export_loader_delay_ms),
            tooltip_attribute: non_empty_or(parsed.tooltip_attribute, defaults.tooltip_attribute),
            counter_attribute: non_empty_or(parsed.counter_attribute, defaults.counter_attribute),
            locale: parsed.locale,
            messages: parsed.messages.apply(Messages::for_locale(parsed.locale)),
        })
    }
}

fn non_empty_or(value: Option<String>, fallback: String) -> String {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

/// Read the config script element, falling back to defaults when it is
/// missing or malformed.
#[cfg(feature = "csr")]
pub fn load_from_page() -> KitConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return KitConfig::default();
    };
    match KitConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using defaults");
            KitConfig::default()
        }
    }
}
