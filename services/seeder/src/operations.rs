//! Operation history generator: synthetic fuel-loading events over a
//! trailing time window, grounded in the reference ids.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::records::OperationRecord;
use crate::references::{ReferenceData, TripRef};
use crate::sampling::{clamped_normal, round2};

pub const DEFAULT_WINDOW_DAYS: i64 = 180;

const DISTANCE_KM: RangeInclusive<i64> = 50..=500;
const ODOMETER_SEED_KM: RangeInclusive<i64> = 50_000..=200_000;

// Typical heavy-truck figures: ~3.5 km/L, fuel around $1200 CLP/L.
const EFFICIENCY_MEAN: f64 = 3.5;
const EFFICIENCY_STDDEV: f64 = 0.5;
const EFFICIENCY_MIN: f64 = 2.5;
const EFFICIENCY_MAX: f64 = 5.0;
const PRICE_MEAN: f64 = 1200.0;
const PRICE_STDDEV: f64 = 100.0;
const PRICE_MIN: f64 = 1000.0;
const PRICE_MAX: f64 = 1500.0;
const AVG_SPEED_KMH: f64 = 60.0;

const OPERATION_TYPE: &str = "CARGA_COMBUSTIBLE";

const LOAD_LOCATIONS: [&str; 7] = [
    "Santiago",
    "Valparaíso",
    "Concepción",
    "Temuco",
    "Puerto Montt",
    "Iquique",
    "Antofagasta",
];

// Four of six slots empty: most loads go unannotated.
const NOTES: [Option<&'static str>; 6] = [
    None,
    Some("Carga completa"),
    Some("Carga parcial"),
    Some("Revisión técnica realizada"),
    None,
    None,
];

pub struct OperationParams {
    pub count: usize,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl OperationParams {
    /// Default window: the trailing 180 days ending now.
    pub fn trailing_window(count: usize) -> Self {
        let end = Utc::now();
        Self {
            count,
            start: end - Duration::days(DEFAULT_WINDOW_DAYS),
            end,
        }
    }
}

/// Produce `params.count` records in generation order. Each invocation is
/// a fresh independent sample; there is no seeding and no restart.
pub fn generate(params: &OperationParams, refs: &ReferenceData) -> Vec<OperationRecord> {
    let mut rng = rand::thread_rng();
    generate_with(&mut rng, params, refs)
}

fn generate_with<R: Rng>(
    rng: &mut R,
    params: &OperationParams,
    refs: &ReferenceData,
) -> Vec<OperationRecord> {
    let span_secs = (params.end - params.start).num_seconds().max(0);

    // Per-vehicle odometer baseline, advanced in draw order. A record
    // drawn later always reads a higher odometer, even if its sampled
    // timestamp is earlier; see DESIGN.md.
    let mut odometers: HashMap<i64, i64> = HashMap::new();

    let mut records = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let vehicle_id = *refs
            .vehicles
            .choose(rng)
            .expect("reference data has vehicles after fallback substitution");
        let driver_id = refs.drivers.choose(rng).copied();

        let timestamp = params.start + Duration::seconds(rng.gen_range(0..=span_secs));

        let distance = rng.gen_range(DISTANCE_KM);
        let base = odometers
            .entry(vehicle_id)
            .or_insert_with(|| rng.gen_range(ODOMETER_SEED_KM));
        let odometer_before = *base;
        let odometer_after = odometer_before + distance;
        *base = odometer_after;

        let efficiency = clamped_normal(
            rng,
            EFFICIENCY_MEAN,
            EFFICIENCY_STDDEV,
            EFFICIENCY_MIN,
            EFFICIENCY_MAX,
        );
        let liters_loaded = round2(distance as f64 / efficiency);
        let price_per_liter = round2(clamped_normal(
            rng,
            PRICE_MEAN,
            PRICE_STDDEV,
            PRICE_MIN,
            PRICE_MAX,
        ));
        let fuel_cost = (liters_loaded * price_per_liter) as i64;

        let efficiency_km_per_liter =
            (liters_loaded > 0.0).then(|| round2(distance as f64 / liters_loaded));
        let cost_per_km = (distance > 0).then(|| round2(fuel_cost as f64 / distance as f64));
        let trip_hours = round2(distance as f64 / AVG_SPEED_KMH);

        records.push(OperationRecord {
            timestamp,
            vehicle_id,
            driver_id,
            trip_id: nearby_trip(rng, &refs.trips, timestamp),
            odometer_before,
            odometer_after,
            liters_loaded,
            fuel_cost,
            price_per_liter,
            efficiency_km_per_liter,
            cost_per_km,
            trip_hours,
            operation_type: OPERATION_TYPE,
            load_location: LOAD_LOCATIONS[rng.gen_range(0..LOAD_LOCATIONS.len())],
            note: NOTES[rng.gen_range(0..NOTES.len())],
        });
    }

    records
}

/// A record links to a trip only when some trip's date is within ±1 day
/// (inclusive) of the sampled timestamp; ties break uniformly at random.
fn nearby_trip<R: Rng>(rng: &mut R, trips: &[TripRef], timestamp: DateTime<Utc>) -> Option<i64> {
    let nearby: Vec<i64> = trips
        .iter()
        .filter(|t| (t.date - timestamp).num_days().abs() <= 1)
        .map(|t| t.id)
        .collect();
    nearby.choose(rng).copied()
}
