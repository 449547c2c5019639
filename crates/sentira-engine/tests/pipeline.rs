use std::collections::HashMap;
use std::sync::Mutex;

use sentira_core::models::answer::AnswerValue;
use sentira_core::models::response::{Respondent, Response};
use sentira_core::models::result::ScoringResult;
use sentira_engine::error::EngineError;
use sentira_engine::pipeline::{
    ResponseStore, ReviewNotifier, process_submission, recalculate,
};
use sentira_instruments::registry::{BuiltinRegistry, QuestionCatalog};
use sentira_instruments::{Instrument, get_instrument};
use sentira_session::CollectionSession;

#[derive(Default)]
struct MemoryStore {
    responses: Mutex<HashMap<String, Response>>,
}

impl ResponseStore for MemoryStore {
    fn load(&self, code: &str) -> Result<Response, EngineError> {
        self.responses
            .lock()
            .unwrap()
            .get(code)
            .cloned()
            .ok_or_else(|| EngineError::UnknownResponse(code.to_string()))
    }

    fn save_response(&self, response: &Response) -> Result<(), EngineError> {
        self.responses
            .lock()
            .unwrap()
            .insert(response.code.clone(), response.clone());
        Ok(())
    }

    fn save_result(&self, code: &str, result: &ScoringResult) -> Result<(), EngineError> {
        let mut responses = self.responses.lock().unwrap();
        let response = responses
            .get_mut(code)
            .ok_or_else(|| EngineError::UnknownResponse(code.to_string()))?;
        response.result = Some(result.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    codes: Mutex<Vec<String>>,
}

impl ReviewNotifier for RecordingNotifier {
    fn review_requested(&self, code: &str, _result: &ScoringResult) {
        self.codes.lock().unwrap().push(code.to_string());
    }
}

fn respondent() -> Respondent {
    Respondent {
        name: "J. Okafor".to_string(),
        contact: "j.okafor@example.org".to_string(),
    }
}

/// Collect a complete PHQ-9 session with every item at `value`.
fn collected_phq9(value: f64) -> sentira_core::models::answer::FinalizedAnswerList {
    let questions = get_instrument("phq9").unwrap().questions().to_vec();
    let mut session = CollectionSession::new(questions);
    session.identify(respondent()).unwrap();
    let ids: Vec<String> = session.questions().iter().map(|q| q.id.clone()).collect();
    for id in &ids {
        session.set_answer(id, AnswerValue::Numeric(value)).unwrap();
        session.advance().unwrap();
    }
    session.submit().unwrap()
}

#[test]
fn a_flagged_submission_is_stored_and_notified() {
    let registry = BuiltinRegistry::new();
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let questions = registry.questions("phq9").unwrap();

    let response = process_submission(
        &registry,
        &store,
        &notifier,
        "phq9",
        respondent(),
        &questions,
        collected_phq9(2.0),
    )
    .unwrap();

    let result = response.result.as_ref().unwrap();
    assert_eq!(result.score, 18.0);
    assert!(result.needs_review);

    let stored = store.load(&response.code).unwrap();
    assert_eq!(stored.result, response.result);
    assert_eq!(*notifier.codes.lock().unwrap(), vec![response.code.clone()]);
}

#[test]
fn an_unflagged_submission_does_not_notify() {
    let registry = BuiltinRegistry::new();
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let questions = registry.questions("phq9").unwrap();

    let response = process_submission(
        &registry,
        &store,
        &notifier,
        "phq9",
        respondent(),
        &questions,
        collected_phq9(0.0),
    )
    .unwrap();

    assert!(!response.result.as_ref().unwrap().needs_review);
    assert!(notifier.codes.lock().unwrap().is_empty());
}

#[test]
fn an_unmapped_questionnaire_fails_closed_and_stores_nothing() {
    let registry = BuiltinRegistry::new();
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let questions = registry.questions("phq9").unwrap();

    let err = process_submission(
        &registry,
        &store,
        &notifier,
        "custom_intake",
        respondent(),
        &questions,
        collected_phq9(2.0),
    )
    .unwrap_err();

    assert!(matches!(err, EngineError::Configuration(_)));
    assert!(store.responses.lock().unwrap().is_empty());
    assert!(notifier.codes.lock().unwrap().is_empty());
}

#[test]
fn recalculation_with_unchanged_inputs_reproduces_the_result() {
    let registry = BuiltinRegistry::new();
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let questions = registry.questions("phq9").unwrap();

    let response = process_submission(
        &registry,
        &store,
        &notifier,
        "phq9",
        respondent(),
        &questions,
        collected_phq9(2.0),
    )
    .unwrap();
    let original = response.result.clone().unwrap();

    let first = recalculate(&registry, &registry, &store, &notifier, &response.code).unwrap();
    let second = recalculate(&registry, &registry, &store, &notifier, &response.code).unwrap();

    assert_eq!(first, original);
    assert_eq!(second, original);
    assert_eq!(
        store.load(&response.code).unwrap().result,
        Some(original.clone())
    );
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn recalculating_an_unknown_response_fails() {
    let registry = BuiltinRegistry::new();
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();

    let err = recalculate(&registry, &registry, &store, &notifier, "nope").unwrap_err();
    assert!(matches!(err, EngineError::UnknownResponse(_)));
}
