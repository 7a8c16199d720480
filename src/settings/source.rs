use std::fs;
use std::path::PathBuf;

/// Where a [`SettingsStore`](super::SettingsStore) comes from.
///
/// A source that does not exist is not an error: the store is simply empty.
pub trait SettingsSource {
    fn exists(&self) -> bool;

    fn read(&self) -> std::io::Result<String>;

    /// Human readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsSource for FileSource {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> std::io::Result<String> {
        fs::read_to_string(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_not_a_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        assert!(!source.exists());
    }

    #[test]
    fn reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ini");
        fs::write(&path, "[iconurls]\nryu = ryu.png\n").unwrap();

        let source = FileSource::new(&path);
        assert!(source.exists());
        assert_eq!(source.read().unwrap(), "[iconurls]\nryu = ryu.png\n");
        assert_eq!(source.describe(), path.display().to_string());
    }
}
