use itertools::Itertools;
use thiserror::Error;

pub use code_arena_derive::Labeled;

/// Enum whose variants travel as fixed string labels (`"C++"`, `"linkedList"`, ...).
///
/// Implement with `#[derive(Labeled)]`. The derive also provides `Display` and `FromStr`
/// in terms of the labels, so `LabelError` and this trait must be in scope at the derive site.
pub trait Labeled: Sized + Copy + 'static {
    fn label(&self) -> &'static str;
    fn variants() -> &'static [Self];
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}`, expected one of [{expected}]")]
pub struct LabelError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl LabelError {
    pub fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: String::from(value),
            expected: expected.iter().join(", "),
        }
    }
}
