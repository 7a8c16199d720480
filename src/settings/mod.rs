//! Read-only section/key/value settings, most importantly the character icon URLs.
//!
//! A [`SettingsStore`] is loaded from a [`SettingsSource`] once and then only read.
//! [`LazySettings`] defers that load until the first lookup and guarantees it runs
//! at most once, even when several threads race on the first access.

pub mod error;
pub mod lazy_store;
pub mod source;
pub mod store;

pub use error::ConfigError;
pub use lazy_store::LazySettings;
pub use source::{FileSource, SettingsSource};
pub use store::{
    SettingsStore, ACCOUNT_API_KEY_KEY, ACCOUNT_SECTION, ACCOUNT_SUBDOMAIN_KEY, ICON_URLS_SECTION,
};
