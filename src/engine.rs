//! # Recommendation Scoring Engine
//! Pure, testable logic that maps environmental readings → `Recommendation`.
//! No I/O, no clock, no randomness; suitable for unit tests and offline
//! evaluation, and safe to call concurrently from any number of requests.
//!
//! Policy: start from a base score of 100 and subtract independent penalties
//! per signal (AQI, temperature, wind, precipitation). Each evaluated signal
//! appends one human-readable reason, in that fixed order. A missing AQI or
//! temperature reading costs a flat 10; wind and precipitation are simply
//! skipped when absent. The accumulator is clamped to [0, 100] once at the
//! end, then rounded half away from zero to the final integer score.

use serde::{Deserialize, Serialize};

use crate::recommendation::Recommendation;
use crate::thresholds::Thresholds;

/// Starting confidence before any penalty.
const BASE_SCORE: f64 = 100.0;
/// Flat penalty when AQI or temperature is unavailable.
const MISSING_SIGNAL_PENALTY: f64 = 10.0;
/// Penalty per AQI point above the threshold, and its cap.
const AQI_PENALTY_PER_POINT: f64 = 0.8;
const AQI_PENALTY_CAP: f64 = 60.0;
/// Penalty per °C outside the comfort band.
const TEMP_PENALTY_PER_DEG: f64 = 2.0;
/// Wind above this (m/s) is penalized; below it wind is silent.
const WIND_COMFORT_MAX_MS: f64 = 8.0;
const WIND_PENALTY_PER_MS: f64 = 2.5;
/// Precipitation above this (mm) is penalized; the penalty caps at 25.
const PRECIP_TRACE_MM: f64 = 0.2;
const PRECIP_PENALTY_PER_MM: f64 = 10.0;
const PRECIP_PENALTY_CAP: f64 = 25.0;

/// One evaluation's worth of readings. `None` means "measurement
/// unavailable" — a first-class state, distinct from zero.
///
/// Present values are expected to be finite; the observation boundary
/// coerces non-finite upstream numbers to `None` before they get here
/// (see `observations::sanitize`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringInput {
    /// Air quality index (unitless; higher is worse).
    pub aqi: Option<f64>,
    /// Ambient temperature, °C.
    pub temp_c: Option<f64>,
    /// Wind speed, m/s.
    pub wind_ms: Option<f64>,
    /// Precipitation, mm.
    pub precip_mm: Option<f64>,
    /// Comfort thresholds; callers may override the documented defaults.
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Default for ScoringInput {
    /// All measurements unavailable, default thresholds.
    fn default() -> Self {
        Self {
            aqi: None,
            temp_c: None,
            wind_ms: None,
            precip_mm: None,
            thresholds: Thresholds::default(),
        }
    }
}

/// Compute the go/delay/skip recommendation for one set of readings.
///
/// Total function: every input yields a result, never an error. Missing data
/// is handled as a degraded-input case (reason + fixed penalty), not a
/// failure. Rounding of the final score is half away from zero, so a
/// midpoint accumulator like 69.5 lands on 70.
pub fn compute_recommendation(input: &ScoringInput) -> Recommendation {
    let t = &input.thresholds;
    let mut reasons: Vec<String> = Vec::new();
    let mut acc = BASE_SCORE;

    // 1) Air quality
    match input.aqi {
        None => {
            reasons.push("AQI unavailable (showing weather-only guidance)".to_string());
            acc -= MISSING_SIGNAL_PENALTY;
        }
        Some(aqi) if aqi > t.aqi_max => {
            reasons.push(format!("AQI {} > {}", aqi, t.aqi_max));
            acc -= ((aqi - t.aqi_max) * AQI_PENALTY_PER_POINT).min(AQI_PENALTY_CAP);
        }
        Some(aqi) => {
            reasons.push(format!("AQI {} ≤ {}", aqi, t.aqi_max));
        }
    }

    // 2) Temperature
    match input.temp_c {
        None => {
            reasons.push("Temperature unavailable".to_string());
            acc -= MISSING_SIGNAL_PENALTY;
        }
        Some(temp) if temp < t.temp_min_c => {
            reasons.push(format!("Temp {:.1}°C < {}°C", temp, t.temp_min_c));
            acc -= (t.temp_min_c - temp) * TEMP_PENALTY_PER_DEG;
        }
        Some(temp) if temp > t.temp_max_c => {
            reasons.push(format!("Temp {:.1}°C > {}°C", temp, t.temp_max_c));
            acc -= (temp - t.temp_max_c) * TEMP_PENALTY_PER_DEG;
        }
        Some(_) => {
            reasons.push("Temp within comfort band".to_string());
        }
    }

    // 3) Wind — no reason and no penalty when absent or calm.
    if let Some(wind) = input.wind_ms {
        if wind > WIND_COMFORT_MAX_MS {
            reasons.push(format!("Wind {:.1} m/s is high", wind));
            acc -= (wind - WIND_COMFORT_MAX_MS) * WIND_PENALTY_PER_MS;
        }
    }

    // 4) Precipitation — likewise silent when absent or dry.
    if let Some(precip) = input.precip_mm {
        if precip > PRECIP_TRACE_MM {
            reasons.push("Precipitation expected".to_string());
            acc -= (precip * PRECIP_PENALTY_PER_MM).min(PRECIP_PENALTY_CAP);
        }
    }

    // 5) Clamp first, then round.
    let score = acc.clamp(0.0, 100.0).round() as u8;

    Recommendation::from_score(score, reasons)
}
