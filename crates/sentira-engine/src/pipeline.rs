use sentira_core::models::answer::FinalizedAnswerList;
use sentira_core::models::config::ScoringConfig;
use sentira_core::models::question::QuestionDefinition;
use sentira_core::models::response::{Respondent, Response, generate_response_code};
use sentira_core::models::result::ScoringResult;
use sentira_instruments::registry::{ConfigResolver, QuestionCatalog};

use crate::classify::classify;
use crate::error::EngineError;
use crate::events::ScoringEvent;
use crate::review::should_flag;
use crate::score::{CustomRule, score};

/// Persistence collaborator. Implementations may live over a database,
/// file, or service; the engine only sees this contract.
pub trait ResponseStore: Send + Sync {
    fn load(&self, code: &str) -> Result<Response, EngineError>;

    fn save_response(&self, response: &Response) -> Result<(), EngineError>;

    /// Overwrite the scoring result of an already-stored response.
    fn save_result(&self, code: &str, result: &ScoringResult) -> Result<(), EngineError>;
}

/// Notification collaborator: told when a response needs human review.
/// Message formatting and delivery happen entirely on the other side.
pub trait ReviewNotifier: Send + Sync {
    fn review_requested(&self, code: &str, result: &ScoringResult);
}

/// Pure score → classify → flag composition. Identical inputs yield an
/// identical result, so re-running it is always safe.
pub fn evaluate(
    config: &ScoringConfig,
    questions: &[QuestionDefinition],
    answers: &FinalizedAnswerList,
    custom: Option<&dyn CustomRule>,
) -> Result<ScoringResult, EngineError> {
    let (value, breakdown) = score(config, questions, answers, custom)?;
    let range = classify(config, value)?;
    Ok(ScoringResult {
        score: value,
        label: range.label.clone(),
        tag: range.tag,
        breakdown,
        needs_review: should_flag(range.tag),
    })
}

/// Score a fresh submission and hand it to the collaborators. The response
/// is only persisted once the whole evaluation succeeded, so a
/// configuration or classification failure never leaves a wrong or zero
/// score on record.
pub fn process_submission(
    resolver: &dyn ConfigResolver,
    store: &dyn ResponseStore,
    notifier: &dyn ReviewNotifier,
    questionnaire_id: &str,
    respondent: Respondent,
    questions: &[QuestionDefinition],
    answers: FinalizedAnswerList,
) -> Result<Response, EngineError> {
    let config = resolver.resolve(questionnaire_id)?;
    let result = evaluate(&config, questions, &answers, None)?;
    let response = Response {
        code: generate_response_code(),
        questionnaire_id: questionnaire_id.to_string(),
        respondent,
        answers,
        result: Some(result.clone()),
        submitted_at: jiff::Timestamp::now(),
    };
    store.save_response(&response)?;
    ScoringEvent::new(
        "submission_scored",
        response.code.clone(),
        questionnaire_id,
        result.score,
        result.tag,
        result.needs_review,
    )
    .emit();
    if result.needs_review {
        notifier.review_requested(&response.code, &result);
    }
    Ok(response)
}

/// Re-fetch a stored response plus its current question set and
/// configuration, re-run the evaluation, and overwrite the stored result.
/// With unchanged inputs this reproduces the original result exactly.
pub fn recalculate(
    resolver: &dyn ConfigResolver,
    catalog: &dyn QuestionCatalog,
    store: &dyn ResponseStore,
    notifier: &dyn ReviewNotifier,
    code: &str,
) -> Result<ScoringResult, EngineError> {
    let response = store.load(code)?;
    let config = resolver.resolve(&response.questionnaire_id)?;
    let questions = catalog.questions(&response.questionnaire_id)?;
    let result = evaluate(&config, &questions, &response.answers, None)?;
    store.save_result(code, &result)?;
    ScoringEvent::new(
        "response_rescored",
        code,
        response.questionnaire_id.clone(),
        result.score,
        result.tag,
        result.needs_review,
    )
    .emit();
    if result.needs_review {
        notifier.review_requested(code, &result);
    }
    Ok(result)
}
