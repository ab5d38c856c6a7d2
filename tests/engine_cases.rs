// tests/engine_cases.rs
//
// Reference scenarios for the scoring engine through the public API:
// the degraded, comfortable, polluted, and severe cases, plus the exact
// go/delay/skip boundaries.

use outdoor_advisor::{compute_recommendation, ScoringInput, Status, Thresholds};

fn input(
    aqi: Option<f64>,
    temp_c: Option<f64>,
    wind_ms: Option<f64>,
    precip_mm: Option<f64>,
) -> ScoringInput {
    ScoringInput {
        aqi,
        temp_c,
        wind_ms,
        precip_mm,
        thresholds: Thresholds::default(),
    }
}

#[test]
fn all_measurements_unavailable_still_says_go() {
    let r = compute_recommendation(&input(None, None, None, None));
    assert_eq!(r.score, 80);
    assert_eq!(r.status, Status::Go);
    assert_eq!(
        r.reasons,
        vec![
            "AQI unavailable (showing weather-only guidance)",
            "Temperature unavailable"
        ]
    );
}

#[test]
fn comfortable_afternoon_scores_full_marks() {
    let r = compute_recommendation(&input(Some(40.0), Some(20.0), Some(2.0), Some(0.0)));
    assert_eq!(r.score, 100);
    assert_eq!(r.status, Status::Go);
    assert!(r.reasons.contains(&"AQI 40 ≤ 75".to_string()));
    assert!(r.reasons.contains(&"Temp within comfort band".to_string()));
}

#[test]
fn polluted_air_lands_exactly_on_the_delay_boundary() {
    // AQI penalty min(60, (200 - 75) * 0.8 = 100) = 60 → score 40.
    let r = compute_recommendation(&input(Some(200.0), Some(20.0), Some(2.0), Some(0.0)));
    assert_eq!(r.score, 40);
    assert_eq!(r.status, Status::Delay);
}

#[test]
fn severe_conditions_clamp_to_zero_and_skip() {
    let r = compute_recommendation(&input(Some(300.0), Some(-10.0), Some(15.0), Some(5.0)));
    assert_eq!(r.score, 0);
    assert_eq!(r.status, Status::Skip);
    assert_eq!(r.reasons.len(), 4);
}

// Exact status boundaries, driven through the engine by temperature alone
// (every value below is dyadic, so the arithmetic is exact in f64).
#[test]
fn status_boundaries_through_the_engine() {
    let cases = [
        (-25.5, 39, Status::Skip),  // penalty (5 + 25.5) * 2 = 61
        (-25.0, 40, Status::Delay), // penalty 60
        (-10.5, 69, Status::Delay), // penalty 31
        (-10.0, 70, Status::Go),    // penalty 30
    ];
    for (temp, want_score, want_status) in cases {
        let r = compute_recommendation(&input(Some(40.0), Some(temp), None, None));
        assert_eq!(r.score, want_score, "temp {temp}");
        assert_eq!(r.status, want_status, "temp {temp}");
    }
}

#[test]
fn midpoint_accumulator_rounds_toward_go() {
    // Penalty (5 - (-10.25)) * 2 = 30.5 → accumulator exactly 69.5 → 70.
    let r = compute_recommendation(&input(Some(40.0), Some(-10.25), None, None));
    assert_eq!(r.score, 70);
    assert_eq!(r.status, Status::Go);
}

#[test]
fn worse_air_never_scores_higher() {
    let mild = compute_recommendation(&input(Some(100.0), Some(20.0), None, None));
    let bad = compute_recommendation(&input(Some(150.0), Some(20.0), None, None));
    let awful = compute_recommendation(&input(Some(400.0), Some(20.0), None, None));
    assert!(bad.score <= mild.score);
    assert!(awful.score <= bad.score);
}

#[test]
fn colder_below_the_band_never_scores_higher() {
    let chilly = compute_recommendation(&input(Some(40.0), Some(2.0), None, None));
    let cold = compute_recommendation(&input(Some(40.0), Some(-5.0), None, None));
    let frigid = compute_recommendation(&input(Some(40.0), Some(-20.0), None, None));
    assert!(cold.score <= chilly.score);
    assert!(frigid.score <= cold.score);
}
