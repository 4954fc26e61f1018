use crate::labels::{LabelError, Labeled};
use crate::models::{Identified, SkipInvalid};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_with::{
    serde_as, DefaultOnError, DefaultOnNull, DeserializeAs, DeserializeFromStr, SerializeAs,
    SerializeDisplay,
};
use validator::Validate;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Labeled, SerializeDisplay, DeserializeFromStr,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Labeled, SerializeDisplay, DeserializeFromStr,
)]
pub enum Tag {
    Array,
    LinkedList,
    Graph,
    Dp,
    Stack,
    Queue,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Labeled, SerializeDisplay, DeserializeFromStr,
)]
pub enum Language {
    #[label("C++")]
    Cpp,
    #[label("Java")]
    Java,
    #[label("JavaScript")]
    JavaScript,
}

impl Language {
    /// Identifier the judge endpoints expect in `{code, language}` bodies.
    pub fn editor_id(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::JavaScript => "javascript",
        }
    }

    pub fn from_editor_id(id: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|language| language.editor_id() == id)
    }

    /// Accepts either the label (`C++`) or the editor id (`cpp`).
    pub fn parse_lenient(value: &str) -> Result<Self, LabelError> {
        Self::from_editor_id(value).map_or_else(|| value.parse(), Ok)
    }
}

/// Tag field adapter. The backend stores a single tag per problem but older records and the
/// filter contract allow several, so both `"dp"` and `["dp", "graph"]` are accepted.
/// Unknown values are dropped instead of failing the whole record.
pub struct TagCollection;

impl SerializeAs<Vec<Tag>> for TagCollection {
    fn serialize_as<S>(source: &Vec<Tag>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(source.iter().map(|tag| tag.label()))
    }
}

impl<'de> DeserializeAs<'de, Vec<Tag>> for TagCollection {
    fn deserialize_as<D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = match Value::deserialize(deserializer)? {
            Value::String(tag) => vec![tag],
            Value::Array(values) => values
                .into_iter()
                .filter_map(|value| match value {
                    Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
            _ => vec![],
        };

        Ok(tags
            .iter()
            .filter_map(|tag| tag.parse::<Tag>().ok())
            .collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VisibleTestCase {
    #[validate(length(min = 1, message = "Input is required"))]
    #[serde(default)]
    pub input: String,
    #[validate(length(min = 1, message = "Output is required"))]
    #[serde(default)]
    pub output: String,
    #[validate(length(min = 1, message = "Explanation is required"))]
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HiddenTestCase {
    #[validate(length(min = 1, message = "Input is required"))]
    #[serde(default)]
    pub input: String,
    #[validate(length(min = 1, message = "Output is required"))]
    #[serde(default)]
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartCode {
    pub language: Language,
    #[validate(length(min = 1, message = "Boilerplate code is required"))]
    #[serde(default)]
    pub boiler_code: String,
    #[validate(length(min = 1, message = "User code is required"))]
    #[serde(default)]
    pub user_code: String,
}

impl StartCode {
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            boiler_code: String::new(),
            user_code: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSolution {
    pub language: Language,
    #[validate(length(min = 1, message = "Complete code is required"))]
    #[serde(default)]
    pub complete_code: String,
}

impl ReferenceSolution {
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            complete_code: String::new(),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde_as(as = "TagCollection")]
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnNull<SkipInvalid>")]
    #[serde(default)]
    pub visible_test_cases: Vec<VisibleTestCase>,
    #[serde_as(as = "DefaultOnNull<SkipInvalid>")]
    #[serde(default)]
    pub hidden_test_cases: Vec<HiddenTestCase>,
    #[serde_as(as = "DefaultOnNull<SkipInvalid>")]
    #[serde(default)]
    pub start_code: Vec<StartCode>,
    #[serde_as(as = "DefaultOnNull<SkipInvalid>")]
    #[serde(default)]
    pub reference_solution: Vec<ReferenceSolution>,
}

impl Problem {
    /// The editable stub shown to the user for `language`, empty when the problem has none.
    pub fn starter_code(&self, language: Language) -> &str {
        self.start_code
            .iter()
            .find(|code| code.language == language)
            .map(|code| code.user_code.as_str())
            .unwrap_or("")
    }

    pub fn reference_code(&self, language: Language) -> Option<&str> {
        self.reference_solution
            .iter()
            .find(|solution| solution.language == language)
            .map(|solution| solution.complete_code.as_str())
    }
}

impl Identified for Problem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_ids() {
        assert_eq!(Language::Cpp.label(), "C++");
        assert_eq!(Language::Cpp.editor_id(), "cpp");
        assert_eq!(Language::from_editor_id("javascript"), Some(Language::JavaScript));
        assert_eq!(Language::from_editor_id("C++"), None);
        assert_eq!(Language::parse_lenient("C++"), Ok(Language::Cpp));
        assert_eq!(Language::parse_lenient("java"), Ok(Language::Java));
        assert!(Language::parse_lenient("rust").is_err());
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(Tag::LinkedList.label(), "linkedList");
        assert_eq!("dp".parse::<Tag>(), Ok(Tag::Dp));
        assert!("DP".parse::<Tag>().is_err());
        assert_eq!(Tag::variants().len(), 6);
    }

    #[test]
    fn test_deserialize_problem_list_item() {
        let problem: Problem = serde_json::from_value(json!({
            "_id": "6650a1",
            "title": "Two Sum",
            "difficulty": "easy",
            "tags": "array"
        }))
        .unwrap();

        assert_eq!(problem.id, "6650a1");
        assert_eq!(problem.title, "Two Sum");
        assert_eq!(problem.difficulty, Some(Difficulty::Easy));
        assert_eq!(problem.tags, vec![Tag::Array]);
        assert!(problem.visible_test_cases.is_empty());
    }

    #[test]
    fn test_deserialize_multiple_tags() {
        let problem: Problem = serde_json::from_value(json!({
            "_id": "1",
            "tags": ["graph", "unknownTag", 3, "dp"]
        }))
        .unwrap();

        assert_eq!(problem.tags, vec![Tag::Graph, Tag::Dp]);
    }

    #[test]
    fn test_deserialize_lenient_fields() {
        let problem: Problem = serde_json::from_value(json!({
            "_id": "2",
            "title": "Odd Record",
            "difficulty": "Easy",
            "tags": null,
            "description": null,
            "visibleTestCases": null
        }))
        .unwrap();

        assert_eq!(problem.difficulty, None);
        assert!(problem.tags.is_empty());
        assert_eq!(problem.description, "");
        assert!(problem.visible_test_cases.is_empty());
    }

    #[test]
    fn test_problem_list_with_null_fields() {
        let problems: Vec<Problem> = serde_json::from_value(json!([
            {"_id": "1", "title": "Two Sum", "difficulty": "easy", "tags": "array"},
            {"_id": null, "title": null, "difficulty": "hard", "tags": "graph"}
        ]))
        .unwrap();

        assert_eq!(problems.len(), 2);
        assert_eq!(problems[1].id, "");
        assert_eq!(problems[1].title, "");
        assert_eq!(problems[1].difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn test_problem_list_skips_unreadable_records() {
        let problems: Vec<Problem> = crate::models::skip_invalid(vec![
            json!({"_id": "1", "title": "Two Sum"}),
            json!({"_id": "2", "title": ["not", "a", "title"]}),
            json!(42),
            json!({"_id": "3", "title": "Min Stack"}),
        ]);

        let ids = problems.iter().map(|problem| problem.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_code_language_is_skipped() {
        let problem: Problem = serde_json::from_value(json!({
            "_id": "5",
            "startCode": [
                {"language": "Rust", "boilerCode": "fn main() {}", "userCode": "fn solve() {}"},
                {"language": "Java", "boilerCode": "class Main {}", "userCode": "class Solution {}"}
            ],
            "referenceSolution": [
                {"language": "Go", "completeCode": "func solve() {}"},
                {"language": "Java", "completeCode": "class Solution { }"}
            ],
            "visibleTestCases": [
                {"input": "1", "output": "1", "explanation": "same"},
                {"input": 2}
            ]
        }))
        .unwrap();

        assert_eq!(problem.start_code.len(), 1);
        assert_eq!(problem.starter_code(Language::Java), "class Solution {}");
        assert_eq!(problem.reference_solution.len(), 1);
        assert_eq!(problem.reference_code(Language::Java), Some("class Solution { }"));
        assert_eq!(problem.visible_test_cases.len(), 1);
    }

    #[test]
    fn test_starter_code_lookup() {
        let problem: Problem = serde_json::from_value(json!({
            "_id": "3",
            "startCode": [
                {"language": "C++", "boilerCode": "int main() {}", "userCode": "class Solution {};"},
                {"language": "JavaScript", "boilerCode": "main()", "userCode": "function solve() {}"}
            ],
            "referenceSolution": [
                {"language": "JavaScript", "completeCode": "function solve() { return 1; }"}
            ]
        }))
        .unwrap();

        assert_eq!(problem.starter_code(Language::Cpp), "class Solution {};");
        assert_eq!(problem.starter_code(Language::Java), "");
        assert_eq!(
            problem.reference_code(Language::JavaScript),
            Some("function solve() { return 1; }")
        );
        assert_eq!(problem.reference_code(Language::Cpp), None);
    }

    #[test]
    fn test_serialize_problem() {
        let problem = Problem {
            id: String::from("4"),
            title: String::from("Min Stack"),
            difficulty: Some(Difficulty::Medium),
            tags: vec![Tag::Stack],
            ..Default::default()
        };

        let value = serde_json::to_value(&problem).unwrap();
        assert_eq!(value["_id"], json!("4"));
        assert_eq!(value["difficulty"], json!("medium"));
        assert_eq!(value["tags"], json!(["stack"]));
        assert_eq!(value["visibleTestCases"], json!([]));
    }
}
