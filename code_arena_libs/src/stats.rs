//! Profile statistics over a user's solved problems.

use crate::models::{Difficulty, SolvedProblem};
use chrono::{Days, NaiveDate};
use itertools::Itertools;
use serde::Serialize;

/// Length of the activity calendar shown on the profile.
pub const DEFAULT_ACTIVITY_DAYS: u32 = 60;
/// Longest calendar `activity_by_day` will build.
pub const MAX_ACTIVITY_DAYS: u32 = 366;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyBreakdown {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyBreakdown {
    pub fn count(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Solved problems without a recognised difficulty are not counted.
pub fn difficulty_breakdown(solved: &[SolvedProblem]) -> DifficultyBreakdown {
    solved
        .iter()
        .filter_map(|problem| problem.difficulty)
        .fold(DifficultyBreakdown::default(), |mut breakdown, difficulty| {
            match difficulty {
                Difficulty::Easy => breakdown.easy += 1,
                Difficulty::Medium => breakdown.medium += 1,
                Difficulty::Hard => breakdown.hard += 1,
            }
            breakdown
        })
}

/// Rounded share of `total` that is solved, clamped to 0..=100.
pub fn progress_percent(solved: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (solved as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u32
}

/// Solved count per day for the `days` days ending at `today`, oldest first.
/// `days` is capped at `MAX_ACTIVITY_DAYS`.
pub fn activity_by_day(
    solved: &[SolvedProblem],
    today: NaiveDate,
    days: u32,
) -> Vec<(NaiveDate, usize)> {
    let counts = solved
        .iter()
        .filter_map(|problem| problem.solved_at)
        .map(|solved_at| solved_at.date_naive())
        .counts();

    (0..days.min(MAX_ACTIVITY_DAYS))
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
        .map(|day| (day, counts.get(&day).copied().unwrap_or(0)))
        .collect()
}
