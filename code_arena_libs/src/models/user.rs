use crate::models::{Difficulty, Identified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError, DefaultOnNull};

/// Entry of a user's `problemSolved` collection.
/// Depending on the endpoint the backend sends bare ids or populated problem documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemRef {
    Id(String),
    Document {
        #[serde(rename = "_id")]
        id: String,
    },
    Unknown(Value),
}

impl ProblemRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            ProblemRef::Id(id) => Some(id),
            ProblemRef::Document { id } => Some(id),
            ProblemRef::Unknown(_) => None,
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub role: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub problem_solved: Vec<ProblemRef>,
}

impl User {
    /// Missing or malformed `problemSolved` collections count as zero.
    pub fn solved_count(&self) -> usize {
        self.problem_solved.len()
    }

    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Anonymous")
    }

    pub fn full_name(&self) -> String {
        match self.last_name.as_deref().filter(|name| !name.is_empty()) {
            Some(last_name) => format!("{} {}", self.display_name(), last_name),
            None => self.display_name().to_string(),
        }
    }

    /// Avatar fallback: first letter of the first name, `A` when there is none.
    pub fn initial(&self) -> char {
        self.first_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('A')
    }
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedUser {
    #[serde(flatten)]
    pub user: User,
    pub rank: u32,
    pub solved_count: usize,
}

/// Problem document returned by the solved-problems endpoint.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedProblem {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub solved_at: Option<DateTime<Utc>>,
}

impl Identified for SolvedProblem {
    fn id(&self) -> &str {
        &self.id
    }
}
