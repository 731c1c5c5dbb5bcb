//! Prediction cache generator: one forecasted consumption value per day
//! across a forward horizon.

use std::ops::RangeInclusive;

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::records::{PredictionFeatures, PredictionRecord};
use crate::references::ReferenceData;
use crate::sampling::round2;

pub const DEFAULT_HORIZON_DAYS: u32 = 30;

const PREDICTION_TYPE: &str = "CONSUMO_COMBUSTIBLE";
const MODEL_VERSION: &str = "v1.0.0";
const MODEL_TYPE: &str = "Deterministic";

const VALUE_KM_PER_L: RangeInclusive<f64> = 2.8..=4.2;
const CONFIDENCE_PCT: RangeInclusive<f64> = 75.0..=95.0;
const ROUTE_KM: RangeInclusive<i64> = 100..=500;
const VEHICLE_AGE_YEARS: RangeInclusive<i64> = 1..=10;

pub struct PredictionParams {
    pub horizon_days: u32,
}

impl Default for PredictionParams {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

/// One record per day, from today through today + horizon - 1.
pub fn generate(params: &PredictionParams, refs: &ReferenceData) -> Vec<PredictionRecord> {
    let mut rng = rand::thread_rng();
    generate_with(&mut rng, params, refs)
}

fn generate_with<R: Rng>(
    rng: &mut R,
    params: &PredictionParams,
    refs: &ReferenceData,
) -> Vec<PredictionRecord> {
    let generated_at = Utc::now();
    let today = generated_at.date_naive();

    (0..params.horizon_days)
        .map(|day| PredictionRecord {
            generated_at,
            applicable_date: today + Duration::days(day as i64),
            prediction_type: PREDICTION_TYPE,
            vehicle_id: *refs
                .vehicles
                .choose(rng)
                .expect("reference data has vehicles after fallback substitution"),
            route_id: *refs
                .routes
                .choose(rng)
                .expect("reference data has routes after fallback substitution"),
            predicted_value: round2(rng.gen_range(VALUE_KM_PER_L)),
            confidence: round2(rng.gen_range(CONFIDENCE_PCT)),
            model_version: MODEL_VERSION,
            model_type: MODEL_TYPE,
            features: PredictionFeatures {
                route_km: rng.gen_range(ROUTE_KM),
                vehicle_age_years: rng.gen_range(VEHICLE_AGE_YEARS),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::references::with_fallbacks;

    fn synthetic_refs() -> ReferenceData {
        with_fallbacks(vec![], vec![], vec![], vec![])
    }

    #[test]
    fn one_record_per_day_across_the_horizon() {
        let params = PredictionParams { horizon_days: 30 };
        let records = generate(&params, &synthetic_refs());
        assert_eq!(records.len(), 30);

        let today = Utc::now().date_naive();
        for (day, r) in records.iter().enumerate() {
            assert_eq!(r.applicable_date, today + Duration::days(day as i64));
        }
    }

    #[test]
    fn sampled_values_stay_in_bounds() {
        let records = generate(&PredictionParams::default(), &synthetic_refs());
        for r in &records {
            assert!((2.8..=4.2).contains(&r.predicted_value));
            assert!((75.0..=95.0).contains(&r.confidence));
            assert!((100..=500).contains(&r.features.route_km));
            assert!((1..=10).contains(&r.features.vehicle_age_years));
            assert_eq!(r.prediction_type, "CONSUMO_COMBUSTIBLE");
            assert_eq!(r.model_version, "v1.0.0");
            assert_eq!(r.model_type, "Deterministic");
        }
    }

    #[test]
    fn ids_come_from_the_reference_collections() {
        let refs = with_fallbacks(vec![10, 20], vec![1], vec![30, 40], vec![]);
        let records = generate(&PredictionParams::default(), &refs);
        for r in &records {
            assert!(refs.vehicles.contains(&r.vehicle_id));
            assert!(refs.routes.contains(&r.route_id));
        }
    }
}
