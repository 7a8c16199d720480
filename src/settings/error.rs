use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings from {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("settings from {origin} are malformed: {source}")]
    Parse {
        origin: String,
        #[source]
        source: ini::ParseError,
    },
}
