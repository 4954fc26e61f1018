use crate::models::Language;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DefaultOnNull};

/// Judge status id of an accepted test case.
pub const ACCEPTED_STATUS_ID: u32 = 3;

/// Body of both the run and the submit endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRequest<'a> {
    pub code: &'a str,
    pub language: &'static str,
}

impl<'a> CodeRequest<'a> {
    pub fn new(code: &'a str, language: Language) -> Self {
        Self {
            code,
            language: language.editor_id(),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunTestCase {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub stdin: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub expected_output: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub stdout: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub status_id: Option<u32>,
}

impl RunTestCase {
    pub fn passed(&self) -> bool {
        self.status_id == Some(ACCEPTED_STATUS_ID)
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    #[serde(default)]
    pub success: bool,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub runtime: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub test_cases: Vec<RunTestCase>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RunResult {
    pub fn passed_count(&self) -> usize {
        self.test_cases.iter().filter(|case| case.passed()).count()
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResult {
    #[serde(default)]
    pub accepted: bool,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub passed_test_cases: u32,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub total_test_cases: u32,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub runtime: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}
