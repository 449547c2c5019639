use sentira_instruments::error::InstrumentError;
use sentira_instruments::registry::{BuiltinRegistry, ConfigResolver, QuestionCatalog};
use sentira_instruments::{Instrument, all_instruments, get_instrument};

#[test]
fn builtin_instruments_resolve_by_their_own_id() {
    let registry = BuiltinRegistry::new();
    for id in ["phq9", "gad7", "who5", "pss10"] {
        let config = registry.resolve(id).unwrap();
        assert_eq!(config.id, id);
    }
}

#[test]
fn unknown_questionnaire_fails_closed() {
    let registry = BuiltinRegistry::new();
    let err = registry.resolve("custom_intake").unwrap_err();
    assert!(matches!(err, InstrumentError::ConfigurationNotFound(id) if id == "custom_intake"));
}

#[test]
fn alias_maps_a_questionnaire_onto_a_builtin() {
    let mut registry = BuiltinRegistry::new();
    registry.alias("clinic_depression_screen", "phq9").unwrap();
    let config = registry.resolve("clinic_depression_screen").unwrap();
    assert_eq!(config.id, "phq9");

    let err = registry.alias("x", "nope").unwrap_err();
    assert!(matches!(err, InstrumentError::UnknownInstrument(_)));
}

#[test]
fn every_builtin_config_satisfies_the_range_invariant() {
    for instrument in all_instruments() {
        instrument
            .config()
            .validate()
            .unwrap_or_else(|e| panic!("{}: {e}", instrument.id()));
    }
}

#[test]
fn builtin_item_counts_and_ordering() {
    for (id, expected) in [("phq9", 9), ("gad7", 7), ("who5", 5), ("pss10", 10)] {
        let instrument = get_instrument(id).unwrap();
        let questions = instrument.questions();
        assert_eq!(questions.len(), expected, "{id}");
        for (pos, q) in questions.iter().enumerate() {
            assert_eq!(q.index, pos, "{id} items must be in catalog order");
            assert!(q.required, "{id} items are all required");
            assert!(!q.options.is_empty(), "{id} items are choice questions");
        }
    }
}

#[test]
fn catalog_returns_the_same_items_as_the_instrument() {
    let registry = BuiltinRegistry::new();
    let questions = registry.questions("gad7").unwrap();
    assert_eq!(questions, get_instrument("gad7").unwrap().questions());
}
