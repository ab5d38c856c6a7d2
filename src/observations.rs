//! # Observations
//!
//! Boundary layer between upstream forecast/air-quality payloads and the
//! scoring engine. Fetching lives outside this crate; whatever does the
//! fetching hands the raw hourly block here and gets back clean
//! `HourlyReading` values and a ready-to-score `ScoringInput`.
//!
//! - Converts upstream wind speed (km/h) to m/s.
//! - Approximates AQI from a PM2.5 reading (`round(pm25 * 4)`), display-grade
//!   guidance only.
//! - Coerces missing or non-finite upstream numbers to `None` ("measurement
//!   unavailable"), never to zero. The engine assumes its inputs are finite;
//!   this is where that contract is enforced.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::engine::ScoringInput;
use crate::thresholds::Thresholds;

/// How far ahead the merged series extends, matching the upstream
/// three-day hourly forecast.
pub const MAX_FORECAST_HOURS: usize = 72;

/// The upstream hourly block: parallel arrays keyed by timestamp.
/// Upstream nulls deserialize as `None` and stay that way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyForecast {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default)]
    pub windspeed_10m: Vec<Option<f64>>,
}

/// One merged hour of observations, everything optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyReading {
    pub ts: DateTime<Utc>,
    pub temp_c: Option<f64>,
    pub aqi: Option<f64>,
    pub wind_ms: Option<f64>,
    pub precip_mm: Option<f64>,
}

/// Upstream wind comes in km/h; the engine wants m/s.
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / 3.6
}

/// Rough AQI proxy from a PM2.5 concentration. Not the EPA formula; good
/// enough for go/delay/skip guidance when no real AQI feed is available.
pub fn aqi_from_pm25(pm25: f64) -> f64 {
    (pm25 * 4.0).round()
}

/// Treat non-finite values as "measurement unavailable". Upstream feeds
/// occasionally emit nulls-as-NaN or out-of-band garbage; the engine must
/// never see those.
pub fn sanitize(v: Option<f64>) -> Option<f64> {
    match v {
        Some(x) if x.is_finite() => Some(x),
        Some(x) => {
            debug!(value = ?x, "non-finite observation coerced to unavailable");
            None
        }
        None => None,
    }
}

/// Zip the parallel forecast arrays into merged hourly readings, up to
/// [`MAX_FORECAST_HOURS`]. A single latest AQI reading (one station value)
/// applies to the first hour only. Hours whose timestamp fails to parse are
/// dropped so the series stays aligned.
pub fn merge_hours(forecast: &HourlyForecast, latest_aqi: Option<f64>) -> Vec<HourlyReading> {
    let latest_aqi = sanitize(latest_aqi);
    let mut out = Vec::with_capacity(forecast.time.len().min(MAX_FORECAST_HOURS));

    for (i, raw_ts) in forecast.time.iter().take(MAX_FORECAST_HOURS).enumerate() {
        let Some(ts) = parse_hour_ts(raw_ts) else {
            debug!(ts = %raw_ts, "unparseable hour timestamp dropped");
            continue;
        };
        out.push(HourlyReading {
            ts,
            temp_c: sanitize(forecast.temperature_2m.get(i).copied().flatten()),
            aqi: if out.is_empty() { latest_aqi } else { None },
            wind_ms: sanitize(forecast.windspeed_10m.get(i).copied().flatten()).map(kmh_to_ms),
            precip_mm: sanitize(forecast.precipitation.get(i).copied().flatten()),
        });
    }

    out
}

/// Current-hour scoring input: the first reading of the series, or the
/// all-unavailable input when the series is empty.
pub fn current_input(readings: &[HourlyReading], thresholds: Thresholds) -> ScoringInput {
    match readings.first() {
        Some(now) => ScoringInput {
            aqi: now.aqi,
            temp_c: now.temp_c,
            wind_ms: now.wind_ms,
            precip_mm: now.precip_mm,
            thresholds,
        },
        None => ScoringInput {
            thresholds,
            ..ScoringInput::default()
        },
    }
}

/// Upstream hour stamps come as `2025-08-16T10:00` (UTC, no zone suffix)
/// or full RFC 3339. Accept both.
fn parse_hour_ts(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}
