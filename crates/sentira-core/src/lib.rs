//! sentira-core
//!
//! Pure domain types for the questionnaire scoring core. No I/O — this is
//! the shared vocabulary of the sentira system: questions, typed answers,
//! scoring configurations, risk bands, and scoring results.

pub mod error;
pub mod models;
