pub mod client;
pub mod draft;
pub mod filter;
pub mod labels;
pub mod models;
pub mod ranking;
pub mod stats;

pub use client::{ArenaApi, ArenaClientError, HttpArenaClient};
pub use filter::{filter_problems, FilterSelection, Selection, StatusFilter};
pub use labels::{LabelError, Labeled};
pub use ranking::{compute_ranks, sort_by_solved_desc};
