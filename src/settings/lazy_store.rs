use once_cell::sync::OnceCell;
use tracing::debug;

use super::{ConfigError, SettingsSource, SettingsStore};

/// Loads a [`SettingsStore`] from its source on first access, then serves every
/// later access from memory.
///
/// Concurrent first accesses block on a single load, so no caller ever sees a
/// partially loaded store. A failed load is returned to its caller and not cached.
#[derive(Debug)]
pub struct LazySettings<S: SettingsSource> {
    source: S,
    store: OnceCell<SettingsStore>,
}

impl<S: SettingsSource> LazySettings<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Result<&SettingsStore, ConfigError> {
        self.store.get_or_try_init(|| {
            debug!(origin = %self.source.describe(), "First settings access, loading");
            SettingsStore::load(&self.source)
        })
    }

    pub fn lookup(&self, section: &str, key: &str) -> Result<Option<&str>, ConfigError> {
        Ok(self.get()?.lookup(section, key))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::settings::ICON_URLS_SECTION;

    struct CountingSource {
        text: Option<&'static str>,
        reads: AtomicUsize,
    }

    impl CountingSource {
        fn new(text: Option<&'static str>) -> Self {
            Self {
                text,
                reads: AtomicUsize::new(0),
            }
        }

        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl SettingsSource for CountingSource {
        fn exists(&self) -> bool {
            self.text.is_some()
        }

        fn read(&self) -> std::io::Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.unwrap_or_default().to_string())
        }

        fn describe(&self) -> String {
            "counting stub".to_string()
        }
    }

    #[test]
    fn sequential_lookups_load_once() {
        let settings = LazySettings::new(CountingSource::new(Some(
            "[iconurls]\nryu = ryu.png\nken = ken.png\n",
        )));
        assert!(settings.store.get().is_none());

        assert_eq!(settings.lookup(ICON_URLS_SECTION, "ryu").unwrap(), Some("ryu.png"));
        assert_eq!(settings.lookup(ICON_URLS_SECTION, "ken").unwrap(), Some("ken.png"));

        assert!(settings.store.get().is_some());
        assert_eq!(settings.source.reads(), 1);
    }

    #[test]
    fn concurrent_first_access_loads_once() {
        let settings = LazySettings::new(CountingSource::new(Some("[iconurls]\nryu = ryu.png\n")));

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let store = settings.get().unwrap();
                    assert_eq!(store.icon_url("ryu"), Some("ryu.png"));
                });
            }
        });

        assert_eq!(settings.source.reads(), 1);
    }

    #[test]
    fn missing_source_is_an_empty_store() {
        let settings = LazySettings::new(CountingSource::new(None));
        assert_eq!(settings.lookup(ICON_URLS_SECTION, "ryu").unwrap(), None);
        assert_eq!(settings.source.reads(), 0);
        assert!(settings.store.get().is_some());
    }

    #[test]
    fn failed_load_is_not_cached() {
        let settings = LazySettings::new(CountingSource::new(Some("[iconurls\n")));

        assert!(matches!(settings.get(), Err(ConfigError::Parse { .. })));
        assert!(settings.store.get().is_none());
        assert!(settings.get().is_err());
        assert_eq!(settings.source.reads(), 2);
    }
}
