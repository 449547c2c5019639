use std::collections::HashMap;

use serde::Serialize;

use sentira_core::models::answer::{AnswerValue, FinalizedAnswer, FinalizedAnswerList};
use sentira_core::models::question::{QuestionDefinition, QuestionKind};
use sentira_core::models::response::Respondent;

use crate::error::SessionError;

/// Where a collection session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum SessionState {
    /// Entry state: capturing respondent contact details.
    CollectingIdentity,
    /// Presenting question at this position (catalog order, 0-based).
    AnsweringQuestion(usize),
    /// Past the last question, awaiting submit.
    PendingSubmit,
    /// A submit attempt found unanswered required questions.
    ReviewingRequired,
    /// Terminal success.
    Submitted,
    /// Terminal; the session simply ends, no event is emitted.
    Abandoned,
}

/// Drives one respondent through one questionnaire.
///
/// Owns the answer drafts for the session exclusively. Forward navigation
/// validates the current question; backward navigation is always permitted
/// and never discards other drafts. `submit` re-validates every required
/// question before freezing the drafts.
#[derive(Debug)]
pub struct CollectionSession {
    questions: Vec<QuestionDefinition>,
    drafts: HashMap<String, AnswerValue>,
    state: SessionState,
    respondent: Option<Respondent>,
    /// Positions of required-but-unanswered questions found by the last
    /// failed submit, in catalog order.
    missing: Vec<usize>,
}

impl CollectionSession {
    /// Start a session over a questionnaire's ordered question definitions.
    pub fn new(mut questions: Vec<QuestionDefinition>) -> Self {
        questions.sort_by_key(|q| q.index);
        Self {
            questions,
            drafts: HashMap::new(),
            state: SessionState::CollectingIdentity,
            respondent: None,
            missing: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn respondent(&self) -> Option<&Respondent> {
        self.respondent.as_ref()
    }

    /// The current draft for a question; `Empty` when nothing was recorded.
    pub fn draft(&self, question_id: &str) -> &AnswerValue {
        static EMPTY: AnswerValue = AnswerValue::Empty;
        self.drafts.get(question_id).unwrap_or(&EMPTY)
    }

    /// First required-but-unanswered question position found by the last
    /// failed submit, in catalog order.
    pub fn first_missing(&self) -> Option<usize> {
        self.missing.first().copied()
    }

    /// Capture respondent contact details and move to the first question.
    pub fn identify(&mut self, respondent: Respondent) -> Result<SessionState, SessionError> {
        if self.state != SessionState::CollectingIdentity {
            return Err(self.invalid_transition());
        }
        if respondent.contact.trim().is_empty() {
            return Err(SessionError::MissingIdentity);
        }
        self.respondent = Some(respondent);
        self.state = if self.questions.is_empty() {
            SessionState::PendingSubmit
        } else {
            SessionState::AnsweringQuestion(0)
        };
        Ok(self.state)
    }

    /// Record or overwrite the draft answer for a question. Permitted while
    /// answering, while reviewing the full set before submit, and after a
    /// failed submit. Submit re-validates the whole list, so amendments here
    /// cannot sneak an incomplete set through.
    pub fn set_answer(
        &mut self,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<(), SessionError> {
        match self.state {
            SessionState::AnsweringQuestion(_)
            | SessionState::PendingSubmit
            | SessionState::ReviewingRequired => {}
            _ => return Err(self.invalid_transition()),
        }
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))?;
        let value = check_encoding(question, value)?;
        self.drafts.insert(question.id.clone(), value);
        Ok(())
    }

    /// Validate the current question's required constraint and move forward;
    /// from the last question this moves to `PendingSubmit`.
    pub fn advance(&mut self) -> Result<SessionState, SessionError> {
        let SessionState::AnsweringQuestion(position) = self.state else {
            return Err(self.invalid_transition());
        };
        let question = &self.questions[position];
        if question.required && self.draft(&question.id).is_empty() {
            return Err(SessionError::RequiredUnanswered {
                question_id: question.id.clone(),
                index: position,
            });
        }
        self.state = if position + 1 < self.questions.len() {
            SessionState::AnsweringQuestion(position + 1)
        } else {
            SessionState::PendingSubmit
        };
        Ok(self.state)
    }

    /// Move backward without validation. A no-op on the first question;
    /// from `PendingSubmit` this returns to the last question.
    pub fn retreat(&mut self) -> Result<SessionState, SessionError> {
        self.state = match self.state {
            SessionState::AnsweringQuestion(position) if position > 0 => {
                SessionState::AnsweringQuestion(position - 1)
            }
            state @ SessionState::AnsweringQuestion(_) => state,
            SessionState::PendingSubmit if !self.questions.is_empty() => {
                SessionState::AnsweringQuestion(self.questions.len() - 1)
            }
            _ => return Err(self.invalid_transition()),
        };
        Ok(self.state)
    }

    /// Jump to the first missing required question after a failed submit.
    pub fn review_missing(&mut self) -> Result<SessionState, SessionError> {
        if self.state != SessionState::ReviewingRequired {
            return Err(self.invalid_transition());
        }
        match self.first_missing() {
            Some(position) => {
                self.state = SessionState::AnsweringQuestion(position);
                Ok(self.state)
            }
            None => Err(self.invalid_transition()),
        }
    }

    /// Re-validate every required question in catalog order. On failure the
    /// session moves to `ReviewingRequired` and the error names the first
    /// missing question. On success the drafts are frozen into an immutable
    /// answer list and the session is `Submitted`.
    pub fn submit(&mut self) -> Result<FinalizedAnswerList, SessionError> {
        match self.state {
            SessionState::PendingSubmit | SessionState::ReviewingRequired => {}
            _ => return Err(self.invalid_transition()),
        }
        self.missing = self
            .questions
            .iter()
            .enumerate()
            .filter(|(_, q)| q.required && self.draft(&q.id).is_empty())
            .map(|(position, _)| position)
            .collect();
        if let Some(&first) = self.missing.first() {
            self.state = SessionState::ReviewingRequired;
            let question = &self.questions[first];
            return Err(SessionError::RequiredUnanswered {
                question_id: question.id.clone(),
                index: first,
            });
        }
        let answers = self
            .questions
            .iter()
            .map(|q| FinalizedAnswer::from_draft(q, self.draft(&q.id).clone()))
            .collect();
        self.state = SessionState::Submitted;
        Ok(FinalizedAnswerList::new(answers))
    }

    /// End the session without submitting.
    pub fn abandon(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Submitted | SessionState::Abandoned => Err(self.invalid_transition()),
            _ => {
                self.state = SessionState::Abandoned;
                Ok(())
            }
        }
    }

    fn invalid_transition(&self) -> SessionError {
        SessionError::InvalidTransition {
            state: format!("{:?}", self.state),
        }
    }
}

/// Enforce the per-kind answer encoding and option membership. Multi-select
/// values are normalized to set form (sorted, deduplicated). `Empty` always
/// passes: clearing a draft is how a respondent retracts an answer.
fn check_encoding(
    question: &QuestionDefinition,
    value: AnswerValue,
) -> Result<AnswerValue, SessionError> {
    let mismatch = |reason: &str| SessionError::InvalidValue {
        question_id: question.id.clone(),
        reason: reason.to_string(),
    };
    match (question.kind, value) {
        (_, AnswerValue::Empty) => Ok(AnswerValue::Empty),
        (QuestionKind::FreeText, v @ AnswerValue::Text(_)) => Ok(v),
        (QuestionKind::Boolean, v @ AnswerValue::Boolean(_)) => Ok(v),
        (QuestionKind::Date, v @ AnswerValue::Date(_)) => Ok(v),
        (QuestionKind::RatingScale | QuestionKind::NumericScale, v @ AnswerValue::Numeric(_)) => {
            Ok(v)
        }
        (QuestionKind::SingleSelect, AnswerValue::Numeric(selected)) => {
            if question.option(selected).is_some() {
                Ok(AnswerValue::Numeric(selected))
            } else {
                Err(mismatch("value is not a configured option"))
            }
        }
        (QuestionKind::MultiSelect, AnswerValue::OptionSet(mut values)) => {
            if values.iter().any(|v| question.option(*v).is_none()) {
                return Err(mismatch("selection includes an unconfigured option"));
            }
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            values.dedup();
            Ok(AnswerValue::OptionSet(values))
        }
        _ => Err(mismatch("value variant does not match question kind")),
    }
}
