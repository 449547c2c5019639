//! sentira-instruments
//!
//! Built-in questionnaire instrument definitions. Pure data — no I/O.
//! Each instrument carries its canonical ordered items and the scoring
//! configuration (method, maximum score, risk bands) for that questionnaire.

pub mod error;
pub mod instruments;
pub mod registry;

use sentira_core::models::config::ScoringConfig;
use sentira_core::models::question::QuestionDefinition;

/// Trait implemented by each built-in questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9", "GAD-7").
    fn name(&self) -> &str;

    /// The canonical ordered items of this questionnaire.
    fn questions(&self) -> &[QuestionDefinition];

    /// Scoring method, maximum score, and risk bands.
    fn config(&self) -> &ScoringConfig;
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::who5::Who5),
        Box::new(instruments::pss10::Pss10),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
