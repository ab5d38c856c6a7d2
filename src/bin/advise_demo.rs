//! Demo that scores an hourly forecast payload (JSON from a path argument or
//! stdin) and prints the recommendation the way the UI shows it.

use std::io::Read;

use serde::Deserialize;
use tracing::info;

use outdoor_advisor::observations::{self, HourlyForecast};
use outdoor_advisor::{compute_recommendation, Thresholds};

/// Input shape: the upstream `hourly` block plus an optional latest PM2.5
/// station reading used as the AQI proxy.
#[derive(Debug, Default, Deserialize)]
struct Payload {
    #[serde(default)]
    hourly: HourlyForecast,
    #[serde(default)]
    pm25: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let payload: Payload = serde_json::from_str(&raw)?;

    let thresholds = Thresholds::load()?;
    let latest_aqi = payload.pm25.map(observations::aqi_from_pm25);
    let hours = observations::merge_hours(&payload.hourly, latest_aqi);
    info!(hours = hours.len(), "payload parsed");

    let rec = compute_recommendation(&observations::current_input(&hours, thresholds));

    println!(
        "{} • Score {}/100",
        format!("{:?}", rec.status).to_uppercase(),
        rec.score
    );
    println!("Why: {}", rec.summary());

    Ok(())
}
