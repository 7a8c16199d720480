//! Renders a ranked player leaderboard as a static HTML table, with one icon per
//! character resolved through the `iconurls` section of the settings file.

pub mod config;
pub mod html;
pub mod leaderboard;
pub mod logging;
pub mod settings;
pub mod util;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
