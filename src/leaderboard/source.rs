use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::LeaderboardEntry;
use crate::str;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read leaderboard from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("leaderboard export is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("player {0} appears more than once on the leaderboard")]
    DuplicatePlayer(String),
}

/// Anything that can hand over a leaderboard already sorted by rank.
pub trait LeaderboardSource {
    fn entries(&self) -> Result<Vec<LeaderboardEntry>, SourceError>;
}

/// Ordered (player, characters) pairs whose characters are already normalised.
impl LeaderboardSource for [(String, Vec<String>)] {
    fn entries(&self) -> Result<Vec<LeaderboardEntry>, SourceError> {
        unique_entries(
            self.iter()
                .map(|(name, characters)| LeaderboardEntry::new(name.as_str(), characters.clone())),
        )
    }
}

impl LeaderboardSource for Vec<(String, Vec<String>)> {
    fn entries(&self) -> Result<Vec<LeaderboardEntry>, SourceError> {
        self.as_slice().entries()
    }
}

/// A leaderboard grid exported as TOML, one `[[rows]]` table per grid row:
///
/// ```toml
/// [[rows]]
/// Name = "Alice"
/// Characters = "Ryu; Ken"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridExport {
    #[serde(default)]
    rows: Vec<GridRow>,
}

#[derive(Debug, Clone, Deserialize)]
struct GridRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Characters", default)]
    characters: String,
}

impl GridExport {
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path).map_err(|e| SourceError::Io {
            path: str!(path.display()),
            source: e,
        })?;
        let grid = Self::parse(&text)?;
        info!(path = %path.display(), rows = grid.rows.len(), "Loaded leaderboard grid");
        Ok(grid)
    }

    pub fn parse(text: &str) -> Result<Self, SourceError> {
        Ok(toml::from_str(text)?)
    }
}

impl LeaderboardSource for GridExport {
    fn entries(&self) -> Result<Vec<LeaderboardEntry>, SourceError> {
        unique_entries(
            self.rows
                .iter()
                .map(|row| LeaderboardEntry::from_cells(&row.name, &row.characters)),
        )
    }
}

fn unique_entries(
    entries: impl Iterator<Item = LeaderboardEntry>,
) -> Result<Vec<LeaderboardEntry>, SourceError> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for entry in entries {
        if !seen.insert(entry.player_name.clone()) {
            return Err(SourceError::DuplicatePlayer(entry.player_name));
        }
        unique.push(entry);
    }
    Ok(unique)
}
