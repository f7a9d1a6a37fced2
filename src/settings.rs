use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StoreError},
    storage::KeyValueStore,
};

pub const SETTINGS_KEY: &str = "expense_tracker.settings";

/// Overridable at build time, e.g. `EXPENSE_API_BASE_URL=https://api.example.com trunk build`.
pub const DEFAULT_API_BASE_URL: &str = match option_env!("EXPENSE_API_BASE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:5000",
};

pub const CURRENCIES: [(&str, &str); 6] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("PHP", "₱"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Browser storage only, no server needed.
    Local,
    Remote,
}

impl Backend {
    pub fn from_value(value: &str) -> Self {
        match value {
            "remote" => Backend::Remote,
            _ => Backend::Local,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Backend::Local => "local",
            Backend::Remote => "remote",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppSettings {
    pub backend: Backend,
    pub api_base_url: String,
    pub currency_code: String,
    pub currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend: Backend::Local,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

pub fn currency_symbol_for(code: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, symbol)| *symbol)
        .unwrap_or("$")
}

impl AppSettings {
    pub fn with_currency(mut self, code: &str) -> Self {
        self.currency_symbol = currency_symbol_for(code).to_string();
        self.currency_code = code.to_string();
        self
    }

    pub fn load(storage: &impl KeyValueStore) -> Self {
        let Some(raw) = storage.get_item(SETTINGS_KEY) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!("ignoring unreadable settings: {err}");
            Self::default()
        })
    }

    pub fn save(&self, storage: &impl KeyValueStore) -> Result<()> {
        let raw = serde_json::to_string(self)
            .map_err(|err| StoreError::Storage(err.to_string()))?;
        storage.set_item(SETTINGS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn defaults_when_absent_or_corrupt() {
        let storage = MemoryStorage::default();
        assert_eq!(AppSettings::load(&storage), AppSettings::default());

        storage.set_item(SETTINGS_KEY, "[1,2").unwrap();
        assert_eq!(AppSettings::load(&storage), AppSettings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let storage = MemoryStorage::default();
        let settings = AppSettings {
            backend: Backend::Remote,
            api_base_url: "https://expenses.example.com".to_string(),
            ..AppSettings::default()
        }
        .with_currency("EUR");

        settings.save(&storage).unwrap();

        let loaded = AppSettings::load(&storage);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let storage = MemoryStorage::default();
        storage
            .set_item(SETTINGS_KEY, r#"{"backend":"remote"}"#)
            .unwrap();

        let loaded = AppSettings::load(&storage);

        assert_eq!(loaded.backend, Backend::Remote);
        assert_eq!(loaded.currency_code, "USD");
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn unknown_currency_falls_back_to_dollar() {
        assert_eq!(currency_symbol_for("INR"), "₹");
        assert_eq!(currency_symbol_for("XYZ"), "$");
        assert_eq!(Backend::from_value("remote"), Backend::Remote);
        assert_eq!(Backend::from_value("anything"), Backend::Local);
    }
}
