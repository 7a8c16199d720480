use tracing::{debug, trace};

use super::LeaderboardEntry;
use crate::html::{Escaping, Icons, TableBuilder, Text};
use crate::settings::SettingsStore;
use crate::str;

pub const RANKING_HEADER: &str = "Ranking";
pub const PLAYER_HEADER: &str = "Player";
pub const CHARACTER_HEADER: &str = "Character";

/// Renders the top of a leaderboard as an HTML fragment, resolving each
/// character to its icon through the settings store.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardRenderer<'a> {
    settings: &'a SettingsStore,
    escaping: Escaping,
}

impl<'a> LeaderboardRenderer<'a> {
    pub fn new(settings: &'a SettingsStore) -> Self {
        Self {
            settings,
            escaping: Escaping::default(),
        }
    }

    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Shows at most `limit` entries, ranked by their position in `entries`.
    /// A `limit` of zero or less renders the header row alone.
    pub fn render(&self, entries: &[LeaderboardEntry], limit: i64) -> String {
        let shown = &entries[..shown_count(entries.len(), limit)];
        debug!(
            available = entries.len(),
            limit,
            shown = shown.len(),
            "Rendering leaderboard"
        );

        let ranks: Vec<String> = (1..=shown.len()).map(|rank| str!(rank)).collect();
        let players: Vec<String> = shown.iter().map(|e| str!(e.player_name)).collect();
        let icons: Vec<Vec<String>> = shown.iter().map(|e| self.icon_urls(e)).collect();

        TableBuilder::new()
            .with_escaping(self.escaping)
            .add_column(Text::new(RANKING_HEADER, ranks))
            .add_column(Text::new(PLAYER_HEADER, players))
            .add_column(Icons::new(CHARACTER_HEADER, icons))
            .build()
    }

    /// Configured icon URLs in character order. Characters without an icon, or
    /// with a blank one, are left out.
    fn icon_urls(&self, entry: &LeaderboardEntry) -> Vec<String> {
        entry
            .characters
            .iter()
            .filter_map(|character| match self.settings.icon_url(character) {
                Some(url) if !url.trim().is_empty() => Some(str!(url)),
                _ => {
                    trace!(player = %entry.player_name, %character, "No icon for character");
                    None
                }
            })
            .collect()
    }
}

/// Renders with the default verbatim escaping.
pub fn render(entries: &[LeaderboardEntry], limit: i64, settings: &SettingsStore) -> String {
    LeaderboardRenderer::new(settings).render(entries, limit)
}

fn shown_count(available: usize, limit: i64) -> usize {
    if limit <= 0 {
        return 0;
    }
    usize::try_from(limit).map_or(available, |limit| limit.min(available))
}
