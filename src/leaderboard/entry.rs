pub const CHARACTER_SEPARATOR: char = ';';

/// One ranked player. Rank is the entry's position in its leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub characters: Vec<String>,
}

impl LeaderboardEntry {
    /// `characters` must already be trimmed and lower-cased.
    pub fn new(player_name: impl Into<String>, characters: Vec<String>) -> Self {
        Self {
            player_name: player_name.into(),
            characters,
        }
    }

    /// Builds an entry from a grid's name cell and `;`-separated characters cell.
    pub fn from_cells(name: &str, characters: &str) -> Self {
        Self::new(name, split_characters(characters))
    }
}

pub fn split_characters(cell: &str) -> Vec<String> {
    cell.split(CHARACTER_SEPARATOR)
        .map(|c| c.trim().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_are_trimmed_and_lower_cased() {
        let entry = LeaderboardEntry::from_cells("Alice", " Ryu;KEN ; Chun-Li");
        assert_eq!(entry.player_name, "Alice");
        assert_eq!(entry.characters, vec!["ryu", "ken", "chun-li"]);
    }

    #[test]
    fn player_name_is_kept_verbatim() {
        let entry = LeaderboardEntry::from_cells("  <b>Bob</b> ", "ryu");
        assert_eq!(entry.player_name, "  <b>Bob</b> ");
    }

    #[test]
    fn empty_cell_yields_one_blank_identifier() {
        assert_eq!(split_characters(""), vec![""]);
        assert_eq!(split_characters("ryu;"), vec!["ryu", ""]);
    }
}
