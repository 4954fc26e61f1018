//! Problem list filtering by difficulty, tag and solved status.

use crate::labels::{LabelError, Labeled};
use crate::models::{Difficulty, Identified, Problem, Tag};
use std::{collections::HashSet, fmt, str::FromStr};

const ALL: &str = "all";

/// Either every value (`all`) or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL {
            Ok(Selection::All)
        } else {
            value.parse().map(Selection::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Labeled)]
pub enum StatusFilter {
    #[default]
    All,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub difficulty: Selection<Difficulty>,
    pub tag: Selection<Tag>,
    pub status: StatusFilter,
}

impl FilterSelection {
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    pub fn accepts_difficulty(&self, problem: &Problem) -> bool {
        match self.difficulty {
            Selection::All => true,
            Selection::Only(difficulty) => problem.difficulty == Some(difficulty),
        }
    }

    pub fn accepts_tag(&self, problem: &Problem) -> bool {
        match self.tag {
            Selection::All => true,
            Selection::Only(tag) => problem.tags.contains(&tag),
        }
    }

    pub fn accepts_status(&self, problem: &Problem, solved_ids: &HashSet<&str>) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Solved => solved_ids.contains(problem.id.as_str()),
        }
    }

    pub fn accepts(&self, problem: &Problem, solved_ids: &HashSet<&str>) -> bool {
        self.accepts_difficulty(problem)
            && self.accepts_tag(problem)
            && self.accepts_status(problem, solved_ids)
    }
}

/// Problems matching every active predicate of `selection`, in input order.
///
/// Solved status is decided by identifier equality against `solved`.
pub fn filter_problems<'a, S>(
    problems: &'a [Problem],
    solved: &[S],
    selection: &FilterSelection,
) -> Vec<&'a Problem>
where
    S: Identified,
{
    let solved_ids: HashSet<&str> = solved.iter().map(|problem| problem.id()).collect();
    problems
        .iter()
        .filter(|problem| selection.accepts(problem, &solved_ids))
        .collect()
}
