#![allow(clippy::must_use_candidate)]

//! Mock vehicle telemetry
//!
//! Returns synthetic values until the real telemetry feed exists.
//! Unauthenticated by design; the frontend polls this endpoint before
//! the user signs in.

use axum::{Json, Router, routing::get};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pressure per tire in PSI
#[derive(Debug, Serialize, Deserialize)]
pub struct TirePressure {
    pub front_left: f64,
    pub front_right: f64,
    pub rear_left: f64,
    pub rear_right: f64,
}

/// Snapshot of vehicle telemetry
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleStatus {
    /// Engine temperature in Celsius
    pub engine_temp: f64,
    pub tire_pressure: TirePressure,
    /// Battery charge percentage
    pub battery_level: f64,
}

/// Generate a synthetic telemetry snapshot
///
/// All values are uniform within their plausible ranges and rounded
/// to one decimal place.
pub fn sample_status() -> VehicleStatus {
    let mut rng = rand::rng();

    let tire_pressure = TirePressure {
        front_left: round1(rng.random_range(30.0..=36.0)),
        front_right: round1(rng.random_range(30.0..=36.0)),
        rear_left: round1(rng.random_range(30.0..=36.0)),
        rear_right: round1(rng.random_range(30.0..=36.0)),
    };

    VehicleStatus {
        engine_temp: round1(rng.random_range(75.0..=105.0)),
        tire_pressure,
        battery_level: round1(rng.random_range(20.0..=100.0)),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Create the endpoint router for vehicle status
pub fn endpoint_router() -> Router {
    Router::new().route("/ai/status", get(status))
}

/// Handle vehicle status requests
async fn status() -> Json<VehicleStatus> {
    Json(sample_status())
}
