//! Stats service
//!
//! Holds the snapshot served to the portfolio site. The presence feed writes
//! through [`StatsStore::update`]; commit activity comes from a
//! [`CommitSource`] polled in the background and cached on disk.

mod commits;
mod github;
mod store;
mod types;


pub use github::{CommitSource, GithubClient};
pub use store::StatsStore;
pub use types::{
    ActivityInfo, BotStatus, CalendarDay, CommitsInfo, DeveloperInfo, GuildStats, ModeratorInfo,
    ModeratorRole, StatsMessage, StatsSnapshot,
};
