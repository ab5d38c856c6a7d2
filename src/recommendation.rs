//! recommendation.rs — Output value objects for the scoring engine.
//!
//! Goal: a standardized shape for GO/DELAY/SKIP + score + reasons, so the
//! presentation side (API serializer or UI) can render the result verbatim
//! without re-deriving anything.
//!
//! Note: `reasons` is explainability for humans. Order is meaningful
//! (evaluation order: AQI, temperature, wind, precipitation) and must be
//! preserved all the way to display.

use serde::{Deserialize, Serialize};

/// Three-way outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Go,
    Delay,
    Skip,
}

/// Scores strictly below this are SKIP.
pub const SKIP_BELOW: u8 = 40;
/// Scores at or above this are GO; in between is DELAY.
pub const GO_AT: u8 = 70;

impl Status {
    /// Derive the status from a final integer score. Status is a pure
    /// function of the score alone; nothing else feeds into it.
    pub fn from_score(score: u8) -> Self {
        if score < SKIP_BELOW {
            Status::Skip
        } else if score < GO_AT {
            Status::Delay
        } else {
            Status::Go
        }
    }
}

/// Complete recommendation including explainability.
/// This is the shape handed to the presentation collaborator unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub status: Status,
    /// Penalty-accumulated confidence that conditions are favorable, in [0, 100].
    pub score: u8,
    /// Human-readable justification in evaluation order; append-only during
    /// computation, immutable once returned.
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl Recommendation {
    /// Build a recommendation from a final score; status is derived, never set.
    pub fn from_score(score: u8, reasons: Vec<String>) -> Self {
        Self {
            status: Status::from_score(score),
            score,
            reasons,
        }
    }

    /// One-line display form of the reasons, joined the way the UI shows them.
    pub fn summary(&self) -> String {
        self.reasons.join(" • ")
    }
}
