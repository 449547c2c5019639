use std::collections::HashMap;

use sentira_core::models::config::ScoringConfig;
use sentira_core::models::question::QuestionDefinition;

use crate::Instrument;
use crate::error::InstrumentError;

/// Resolves a questionnaire identity to its scoring configuration.
///
/// Injected wherever scoring happens so the mapping can come from a
/// database, file, or service without the engine knowing which. An unknown
/// questionnaire must fail loudly; falling back to another questionnaire's
/// configuration would silently misclassify responses.
pub trait ConfigResolver: Send + Sync {
    fn resolve(&self, questionnaire_id: &str) -> Result<ScoringConfig, InstrumentError>;
}

/// Read-only view of a questionnaire's ordered question definitions.
pub trait QuestionCatalog: Send + Sync {
    fn questions(&self, questionnaire_id: &str) -> Result<Vec<QuestionDefinition>, InstrumentError>;
}

/// Registry over the built-in instruments, keyed by an explicit mapping
/// table from questionnaire id to instrument.
pub struct BuiltinRegistry {
    mapping: HashMap<String, Box<dyn Instrument>>,
}

impl BuiltinRegistry {
    /// Registry where each built-in instrument is keyed by its own id.
    pub fn new() -> Self {
        let mapping = crate::all_instruments()
            .into_iter()
            .map(|i| (i.id().to_string(), i))
            .collect();
        Self { mapping }
    }

    /// Map an additional questionnaire id onto a built-in instrument.
    pub fn alias(
        &mut self,
        questionnaire_id: &str,
        instrument_id: &str,
    ) -> Result<(), InstrumentError> {
        let instrument = crate::get_instrument(instrument_id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_id.to_string()))?;
        self.mapping.insert(questionnaire_id.to_string(), instrument);
        Ok(())
    }

    fn lookup(&self, questionnaire_id: &str) -> Result<&dyn Instrument, InstrumentError> {
        self.mapping
            .get(questionnaire_id)
            .map(|i| i.as_ref())
            .ok_or_else(|| InstrumentError::ConfigurationNotFound(questionnaire_id.to_string()))
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver for BuiltinRegistry {
    fn resolve(&self, questionnaire_id: &str) -> Result<ScoringConfig, InstrumentError> {
        Ok(self.lookup(questionnaire_id)?.config().clone())
    }
}

impl QuestionCatalog for BuiltinRegistry {
    fn questions(&self, questionnaire_id: &str) -> Result<Vec<QuestionDefinition>, InstrumentError> {
        Ok(self.lookup(questionnaire_id)?.questions().to_vec())
    }
}
