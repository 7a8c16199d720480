use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

use crate::html::Escaping;
use crate::util::dates;
use crate::Error;

pub const CONFIG_FILE_NAME: &str = "skillkeeper.toml";

#[derive(Debug, Deserialize, Clone)]
struct FileConfig {
    pub settings_path: String,
    pub leaderboard_path: String,
    pub top_players: i64,
    #[serde(default)]
    pub escape_html: bool,
    pub log: FileLogConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct FileLogConfig {
    pub level: String,
    pub path: String,
    pub json_path: String,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    pub path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub settings_path: PathBuf,
    pub leaderboard_path: PathBuf,
    pub top_players: i64,
    pub escaping: Escaping,
    pub log: LogConfig,
}

fn expand_tilde(path: &str) -> Result<PathBuf, Error> {
    if path.starts_with("~/") {
        let home = env::var("HOME")?;
        Ok(PathBuf::from(path.replacen("~", &home, 1)))
    } else {
        Ok(PathBuf::from(path))
    }
}

/// Loads `skillkeeper.toml` from the directory holding the executable.
pub fn load_config() -> Result<AppConfig, Error> {
    let exe_path = env::current_exe()?;
    let config_path = match exe_path.parent() {
        Some(dir) => dir.join(CONFIG_FILE_NAME),
        _ => return Err("failed to determine executable directory".into()),
    };

    load_config_from(&config_path)
}

pub fn load_config_from(config_path: &Path) -> Result<AppConfig, Error> {
    if !config_path.exists() || !config_path.is_file() {
        return Err(format!(
            "Config file does not exist or is not a file: {}",
            config_path.display()
        )
        .into());
    }
    let s = fs::read_to_string(config_path)?;
    let cfg: FileConfig = toml::from_str(&s)?;

    // A missing settings file is allowed: no icons resolve.
    let settings_path = expand_tilde(&cfg.settings_path)?;

    let leaderboard_path = expand_tilde(&cfg.leaderboard_path)?;
    if !leaderboard_path.exists() || !leaderboard_path.is_file() {
        return Err(format!("Leaderboard file does not exist: {}", &cfg.leaderboard_path).into());
    }

    Ok(AppConfig {
        settings_path,
        leaderboard_path,
        top_players: cfg.top_players,
        escaping: if cfg.escape_html {
            Escaping::Html
        } else {
            Escaping::Verbatim
        },
        log: build_log_config(cfg.log)?,
    })
}

fn build_log_config(file_log: FileLogConfig) -> Result<LogConfig, Error> {
    let path = log_file_replacements(&file_log.path)?;
    check_log_path(&path, &file_log.path)?;

    let json_path = log_file_replacements(&file_log.json_path)?;
    check_log_path(&json_path, &file_log.json_path)?;

    Ok(LogConfig {
        level: file_log.level,
        path,
        json_path,
    })
}

fn check_log_path(path: &Path, configured: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(format!("Log file directory does not exist: {}", parent.display()).into());
        }
    }
    if path.exists() && !path.is_file() {
        return Err(format!("Log path exists but is not a file: {}", configured).into());
    }
    Ok(())
}

fn log_file_replacements(cfg_path: &str) -> Result<PathBuf, Error> {
    let date_str = dates::local_date_yyyy_mm_dd();
    let replaced = cfg_path.replace("{DATE}", &date_str);
    expand_tilde(&replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, extra: &str) -> PathBuf {
        fs::write(dir.join("leaderboard.toml"), "").unwrap();
        let config = format!(
            r#"
settings_path = "{dir}/settings.ini"
leaderboard_path = "{dir}/leaderboard.toml"
top_players = 5
{extra}

[log]
level = "info"
path = "{dir}/skillkeeper.{{DATE}}.log"
json_path = "{dir}/skillkeeper.json"
"#,
            dir = dir.display(),
        );
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, config).unwrap();
        path
    }

    #[test]
    fn loads_paths_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&write_config(dir.path(), "")).unwrap();

        assert_eq!(cfg.top_players, 5);
        assert_eq!(cfg.escaping, Escaping::Verbatim);
        assert_eq!(cfg.settings_path, dir.path().join("settings.ini"));
        assert_eq!(cfg.log.level, "info");
        let log_name = cfg.log.path.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(
            log_name,
            format!("skillkeeper.{}.log", dates::local_date_yyyy_mm_dd())
        );
    }

    #[test]
    fn escape_html_selects_html_escaping() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&write_config(dir.path(), "escape_html = true")).unwrap();
        assert_eq!(cfg.escaping, Escaping::Html);
    }

    #[test]
    fn missing_leaderboard_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        fs::remove_file(dir.path().join("leaderboard.toml")).unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Leaderboard file does not exist"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_from(&dir.path().join(CONFIG_FILE_NAME)).is_err());
    }

    #[test]
    fn tilde_expands_to_home() {
        let Ok(home) = env::var("HOME") else {
            return;
        };
        assert_eq!(expand_tilde("~/x.toml").unwrap(), PathBuf::from(format!("{home}/x.toml")));
        assert_eq!(expand_tilde("x.toml").unwrap(), PathBuf::from("x.toml"));
    }
}
