//! sentira-engine
//!
//! Pure scoring, risk classification, and review flagging over finalized
//! answer lists, plus the submission/recalculation pipeline that hands
//! results to the persistence and notification collaborators. Everything
//! here is synchronous and side-effect-free except the pipeline's calls
//! into the collaborator traits.

pub mod classify;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod review;
pub mod score;
