use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::QuestionDefinition;

/// A typed answer value. The variant is fixed by the question kind when the
/// answer is recorded, so scoring never has to re-inspect raw input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    Empty,
    Text(String),
    Numeric(f64),
    OptionSet(Vec<f64>),
    Boolean(bool),
    Date(jiff::civil::Date),
}

impl AnswerValue {
    /// Whether this value counts as unanswered for required-field checks.
    /// An explicit `false` boolean is an answer; a blank string is not.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Empty => true,
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::OptionSet(values) => values.is_empty(),
            _ => false,
        }
    }
}

/// Immutable snapshot of one answer at submission time, plus its derived
/// scoring contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinalizedAnswer {
    pub question_id: String,
    pub value: AnswerValue,
    /// `Some` only for answered questions of scorable kinds: single-select
    /// carries the selected option's value, rating/numeric scales the raw
    /// number entered.
    pub contribution: Option<f64>,
}

impl FinalizedAnswer {
    /// Freeze a draft value, deriving its scoring contribution once.
    pub fn from_draft(question: &QuestionDefinition, value: AnswerValue) -> Self {
        let contribution = match &value {
            AnswerValue::Numeric(v) if question.kind.is_scorable() => Some(*v),
            _ => None,
        };
        Self {
            question_id: question.id.clone(),
            value,
            contribution,
        }
    }
}

/// The complete, required-complete answer set for one submission, in catalog
/// order. Created once at successful submit and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinalizedAnswerList {
    answers: Vec<FinalizedAnswer>,
}

impl FinalizedAnswerList {
    pub fn new(answers: Vec<FinalizedAnswer>) -> Self {
        Self { answers }
    }

    pub fn answers(&self) -> &[FinalizedAnswer] {
        &self.answers
    }

    pub fn get(&self, question_id: &str) -> Option<&FinalizedAnswer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
