//! Snapshot models
//!
//! These types define the default snapshot and the commit cache file format.
//! The live snapshot is held as JSON so that partial updates stay field-driven.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete snapshot served by `/stats` and pushed over WebSocket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub guild: GuildStats,
    pub bots: BTreeMap<String, BotStatus>,
    pub developer: DeveloperInfo,
    pub commits: CommitsInfo,
    pub updated_at: Option<String>,
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        let bots = ["taha", "othman"]
            .into_iter()
            .map(|name| (name.to_string(), BotStatus::default()))
            .collect();

        Self {
            guild: GuildStats::default(),
            bots,
            developer: DeveloperInfo::default(),
            commits: CommitsInfo::default(),
            updated_at: None,
        }
    }
}

/// Community server statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildStats {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub member_count: u64,
    #[serde(default)]
    pub online_count: u64,
    #[serde(default)]
    pub boost_level: u32,
    #[serde(default)]
    pub boost_count: u32,
    #[serde(default)]
    pub total_messages: u64,
    #[serde(default)]
    pub chat_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub moderators: Vec<ModeratorInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeratorInfo {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    pub status: String,
    #[serde(default)]
    pub role_color: Option<String>,
    #[serde(default)]
    pub roles: Vec<ModeratorRole>,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeratorRole {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Companion bot presence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotStatus {
    #[serde(default)]
    pub online: bool,
}

/// Developer presence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperInfo {
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub decoration: Option<String>,
    #[serde(default)]
    pub activities: Vec<ActivityInfo>,
}

impl Default for DeveloperInfo {
    fn default() -> Self {
        Self {
            status: default_status(),
            avatar: None,
            banner: None,
            decoration: None,
            activities: Vec::new(),
        }
    }
}

fn default_status() -> String {
    "offline".to_string()
}

/// One presence activity (game, music, custom status, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityInfo {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// GitHub activity for the current year; also the `commits.json` format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitsInfo {
    #[serde(default)]
    pub this_year: u64,
    #[serde(default)]
    pub year_start: Option<String>,
    #[serde(default)]
    pub last_fetched: Option<String>,
    #[serde(default)]
    pub calendar: Vec<CalendarDay>,
}

/// Contributions on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default = "default_level")]
    pub level: String,
}

pub(crate) fn default_level() -> String {
    "NONE".to_string()
}

/// Envelope for every WebSocket push
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsMessage<T> {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: T,
}

impl<T> StatsMessage<T> {
    pub fn stats(data: T) -> Self {
        Self {
            kind: "stats".to_string(),
            data,
        }
    }
}
