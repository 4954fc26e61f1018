pub mod admin;
pub mod judge;
pub mod leaderboard;
pub mod problems;
pub mod profile;
pub mod show;

use crate::modules::config::ArenaConfig;
use anyhow::Result;
use code_arena_libs::{models::Language, HttpArenaClient, LabelError};

pub fn connect() -> Result<HttpArenaClient> {
    ArenaConfig::from_env()?.connect()
}

/// clap value parser accepting `cpp` as well as `C++`.
pub fn parse_language(value: &str) -> Result<Language, LabelError> {
    Language::parse_lenient(value)
}
