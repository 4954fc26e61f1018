//! Problem authoring payload for the admin create/update endpoints.

use crate::labels::Labeled;
use crate::models::{
    Difficulty, HiddenTestCase, Language, Problem, ReferenceSolution, StartCode, Tag,
    VisibleTestCase,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("problem {0} has no recognised difficulty")]
    MissingDifficulty(String),
    #[error("problem {0} has no recognised tag")]
    MissingTag(String),
    #[error("invalid problem draft: {0}")]
    Invalid(#[from] ValidationErrors),
}

fn error_with_message(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Every supported language exactly once.
fn validate_language_coverage<I>(languages: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = Language>,
{
    let languages = languages.into_iter().collect_vec();
    let unique = languages.iter().unique().count();
    if unique == languages.len() && languages.len() == Language::variants().len() {
        Ok(())
    } else {
        Err(error_with_message(
            "language_coverage",
            "All three languages required",
        ))
    }
}

/// Index of the first entry failing its own field validation.
fn first_invalid<T: Validate>(entries: &[T]) -> Option<usize> {
    entries.iter().position(|entry| entry.validate().is_err())
}

fn validate_visible_cases(cases: &Vec<VisibleTestCase>) -> Result<(), ValidationError> {
    match first_invalid(cases) {
        Some(index) => Err(error_with_message(
            "visible_test_case",
            format!(
                "visible test case #{} needs input, output and explanation",
                index + 1
            ),
        )),
        None => Ok(()),
    }
}

fn validate_hidden_cases(cases: &Vec<HiddenTestCase>) -> Result<(), ValidationError> {
    match first_invalid(cases) {
        Some(index) => Err(error_with_message(
            "hidden_test_case",
            format!("hidden test case #{} needs input and output", index + 1),
        )),
        None => Ok(()),
    }
}

fn validate_start_code(start_code: &Vec<StartCode>) -> Result<(), ValidationError> {
    validate_language_coverage(start_code.iter().map(|code| code.language))?;
    match first_invalid(start_code) {
        Some(index) => Err(error_with_message(
            "start_code",
            format!(
                "start code for {} needs boilerplate and user code",
                start_code[index].language
            ),
        )),
        None => Ok(()),
    }
}

fn validate_reference_solution(solutions: &Vec<ReferenceSolution>) -> Result<(), ValidationError> {
    validate_language_coverage(solutions.iter().map(|solution| solution.language))?;
    match first_invalid(solutions) {
        Some(index) => Err(error_with_message(
            "reference_solution",
            format!(
                "reference solution for {} needs complete code",
                solutions[index].language
            ),
        )),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub difficulty: Difficulty,
    /// The authoring schema carries exactly one tag.
    pub tags: Tag,
    #[validate(
        length(min = 1, message = "At least one visible test case required"),
        custom = "validate_visible_cases"
    )]
    pub visible_test_cases: Vec<VisibleTestCase>,
    #[validate(
        length(min = 1, message = "At least one hidden test case required"),
        custom = "validate_hidden_cases"
    )]
    pub hidden_test_cases: Vec<HiddenTestCase>,
    #[validate(custom = "validate_start_code")]
    pub start_code: Vec<StartCode>,
    #[validate(custom = "validate_reference_solution")]
    pub reference_solution: Vec<ReferenceSolution>,
}

impl ProblemDraft {
    /// Blank draft with one slot per language, ready to be filled in.
    pub fn template() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            difficulty: Difficulty::Easy,
            tags: Tag::Array,
            visible_test_cases: vec![VisibleTestCase::default()],
            hidden_test_cases: vec![HiddenTestCase::default()],
            start_code: Language::variants()
                .iter()
                .map(|language| StartCode::empty(*language))
                .collect(),
            reference_solution: Language::variants()
                .iter()
                .map(|language| ReferenceSolution::empty(*language))
                .collect(),
        }
    }

    pub fn check(&self) -> Result<(), DraftError> {
        self.validate()?;
        Ok(())
    }
}

impl TryFrom<Problem> for ProblemDraft {
    type Error = DraftError;

    fn try_from(problem: Problem) -> Result<Self, Self::Error> {
        let difficulty = problem
            .difficulty
            .ok_or_else(|| DraftError::MissingDifficulty(problem.id.clone()))?;
        let tag = problem
            .tags
            .first()
            .copied()
            .ok_or_else(|| DraftError::MissingTag(problem.id.clone()))?;

        Ok(Self {
            title: problem.title,
            description: problem.description,
            difficulty,
            tags: tag,
            visible_test_cases: problem.visible_test_cases,
            hidden_test_cases: problem.hidden_test_cases,
            start_code: problem.start_code,
            reference_solution: problem.reference_solution,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn complete_draft() -> ProblemDraft {
        let mut draft = ProblemDraft::template();
        draft.title = String::from("Valid Parentheses");
        draft.description = String::from("Check whether brackets are balanced.");
        draft.difficulty = Difficulty::Easy;
        draft.tags = Tag::Stack;
        draft.visible_test_cases = vec![VisibleTestCase {
            input: String::from("()"),
            output: String::from("true"),
            explanation: String::from("A single matched pair."),
        }];
        draft.hidden_test_cases = vec![HiddenTestCase {
            input: String::from("(]"),
            output: String::from("false"),
        }];
        for code in draft.start_code.iter_mut() {
            code.boiler_code = String::from("// driver");
            code.user_code = String::from("// your code");
        }
        for solution in draft.reference_solution.iter_mut() {
            solution.complete_code = String::from("// solution");
        }
        draft
    }

    fn failing_fields(draft: &ProblemDraft) -> Vec<String> {
        match draft.validate() {
            Ok(_) => vec![],
            Err(errors) => errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .sorted()
                .collect(),
        }
    }

    #[test]
    fn test_template_has_one_slot_per_language() {
        let draft = ProblemDraft::template();
        let languages = draft
            .start_code
            .iter()
            .map(|code| code.language)
            .collect::<Vec<_>>();
        assert_eq!(languages, Language::variants());
        assert_eq!(draft.reference_solution.len(), 3);
    }

    #[test]
    fn test_template_is_not_valid() {
        let draft = ProblemDraft::template();
        assert_eq!(
            failing_fields(&draft),
            vec![
                "description",
                "hidden_test_cases",
                "reference_solution",
                "start_code",
                "title",
                "visible_test_cases",
            ]
        );
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(complete_draft().check().is_ok());
    }

    #[test]
    fn test_duplicate_language_rejected() {
        let mut draft = complete_draft();
        draft.start_code[2].language = Language::Cpp;
        assert_eq!(failing_fields(&draft), vec!["start_code"]);
    }

    #[test]
    fn test_missing_language_rejected() {
        let mut draft = complete_draft();
        draft.reference_solution.pop();
        assert_eq!(failing_fields(&draft), vec!["reference_solution"]);
    }

    #[test]
    fn test_empty_test_cases_rejected() {
        let mut draft = complete_draft();
        draft.visible_test_cases.clear();
        draft.hidden_test_cases[0].output.clear();
        assert_eq!(
            failing_fields(&draft),
            vec!["hidden_test_cases", "visible_test_cases"]
        );
    }

    #[test]
    fn test_serialize_for_backend() {
        let value = serde_json::to_value(complete_draft()).unwrap();
        assert_eq!(value["tags"], json!("stack"));
        assert_eq!(value["difficulty"], json!("easy"));
        assert_eq!(value["startCode"][0]["language"], json!("C++"));
        assert_eq!(value["startCode"][0]["boilerCode"], json!("// driver"));
        assert_eq!(value["referenceSolution"][2]["language"], json!("JavaScript"));
        assert_eq!(value["visibleTestCases"][0]["explanation"], json!("A single matched pair."));
    }

    #[test]
    fn test_from_problem() {
        let problem: Problem = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Two Sum",
            "difficulty": "easy",
            "tags": ["array", "dp"],
            "description": "Find two numbers.",
        }))
        .unwrap();
        let draft = ProblemDraft::try_from(problem).unwrap();
        assert_eq!(draft.title, "Two Sum");
        assert_eq!(draft.tags, Tag::Array);

        let untagged: Problem =
            serde_json::from_value(json!({"_id": "p2", "difficulty": "hard"})).unwrap();
        assert!(matches!(
            ProblemDraft::try_from(untagged),
            Err(DraftError::MissingTag(id)) if id == "p2"
        ));

        let no_difficulty: Problem = serde_json::from_value(json!({"_id": "p3"})).unwrap();
        assert!(matches!(
            ProblemDraft::try_from(no_difficulty),
            Err(DraftError::MissingDifficulty(_))
        ));
    }
}
