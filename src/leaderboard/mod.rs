pub mod entry;
pub mod renderer;
pub mod source;

pub use entry::LeaderboardEntry;
pub use renderer::{render, LeaderboardRenderer};
pub use source::{GridExport, LeaderboardSource, SourceError};
