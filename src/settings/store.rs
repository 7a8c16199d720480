use std::collections::HashMap;

use ini::Ini;
use tracing::{debug, info};

use super::{ConfigError, SettingsSource};
use crate::str;

pub const ICON_URLS_SECTION: &str = "iconurls";

pub const ACCOUNT_SECTION: &str = "account";
pub const ACCOUNT_API_KEY_KEY: &str = "apikey";
pub const ACCOUNT_SUBDOMAIN_KEY: &str = "subdomain";

type Section = HashMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    sections: HashMap<String, Section>,
}

impl SettingsStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads every section of `source`. A missing source gives an empty store.
    pub fn load<S: SettingsSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let origin = source.describe();
        if !source.exists() {
            info!(%origin, "Settings source not found, no character icons will resolve");
            return Ok(Self::empty());
        }

        let text = source.read().map_err(|e| ConfigError::Io {
            origin: origin.clone(),
            source: e,
        })?;
        let store = Self::parse(&text, &origin)?;
        info!(
            %origin,
            sections = store.sections.len(),
            icons = store.section(ICON_URLS_SECTION).map_or(0, |s| s.len()),
            "Loaded settings"
        );
        Ok(store)
    }

    /// Parses an INI document. Keys before the first `[section]` header belong to
    /// no section and are not served.
    pub fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text).map_err(|e| ConfigError::Parse {
            origin: str!(origin),
            source: e,
        })?;

        let mut sections = HashMap::new();
        for (section_name, properties) in &ini {
            let Some(section_name) = section_name else {
                debug!(%origin, keys = properties.len(), "Ignoring keys outside a section");
                continue;
            };

            let section: &mut Section = sections.entry(str!(section_name)).or_default();
            for (key, value) in properties.iter() {
                section.insert(str!(key), str!(value));
            }
            debug!(section = %section_name, keys = section.len(), "Parsed settings section");
        }

        Ok(Self { sections })
    }

    /// Case-sensitive on both section and key.
    pub fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(|v| v.as_str())
    }

    /// Icon URL configured for an already lower-cased character identifier.
    pub fn icon_url(&self, character: &str) -> Option<&str> {
        self.lookup(ICON_URLS_SECTION, character)
    }

    pub fn section(&self, name: &str) -> Option<&HashMap<String, String>> {
        self.sections.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
