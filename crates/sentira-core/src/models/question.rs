use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kind of value a question collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    FreeText,
    SingleSelect,
    MultiSelect,
    Boolean,
    RatingScale,
    NumericScale,
    Date,
}

impl QuestionKind {
    /// Choice kinds carry an option set.
    pub fn is_choice(self) -> bool {
        matches!(self, QuestionKind::SingleSelect | QuestionKind::MultiSelect)
    }

    /// Kinds whose answers contribute to the numeric score. All other kinds
    /// are retained for records but score 0.
    pub fn is_scorable(self) -> bool {
        matches!(
            self,
            QuestionKind::SingleSelect | QuestionKind::RatingScale | QuestionKind::NumericScale
        )
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: f64,
    pub label: String,
}

/// A single question of a published questionnaire. Immutable once the
/// questionnaire is published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDefinition {
    pub id: String,
    /// Position in catalog order, 0-based.
    pub index: usize,
    pub text: String,
    pub kind: QuestionKind,
    pub required: bool,
    /// Present only for choice kinds.
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    /// Scoring weight, 1.0 when the questionnaire does not specify one.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl QuestionDefinition {
    /// Look up a configured option by its numeric value.
    pub fn option(&self, value: f64) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}
