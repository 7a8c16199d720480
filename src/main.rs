use std::io::Write;

use skillkeeper::leaderboard::{GridExport, LeaderboardRenderer, LeaderboardSource};
use skillkeeper::settings::{FileSource, LazySettings};
use skillkeeper::{config, logging, Error};
use tracing::info;

fn main() -> Result<(), Error> {
    if std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    let cfg = config::load_config()?;

    logging::init(&cfg.log)?;
    info!("Logging Initialised. Rendering SkillKeeper leaderboard");

    let settings = LazySettings::new(FileSource::new(&cfg.settings_path));
    let entries = GridExport::load(&cfg.leaderboard_path)?.entries()?;

    let html = LeaderboardRenderer::new(settings.get()?)
        .with_escaping(cfg.escaping)
        .render(&entries, cfg.top_players);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;

    info!(players = entries.len(), limit = cfg.top_players, "Leaderboard written");
    Ok(())
}
