// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod engine;
pub mod observations;
pub mod recommendation;
pub mod thresholds;

// ---- Re-exports for stable public API ----
// Callers evaluate with `outdoor_advisor::compute_recommendation(&input)`.
pub use crate::engine::{compute_recommendation, ScoringInput};
pub use crate::recommendation::{Recommendation, Status};
pub use crate::thresholds::Thresholds;
