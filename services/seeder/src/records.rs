//! Record types for the two seeded collections. Field names are English;
//! the `serde` renames carry the store's column names.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One fuel-loading event, destined for `HISTORIAL_OPERACIONES`.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    #[serde(rename = "fecha")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "id_camion")]
    pub vehicle_id: i64,
    #[serde(rename = "id_conductor")]
    pub driver_id: Option<i64>,
    /// Set only when a known trip's date falls within ±1 day of `timestamp`.
    #[serde(rename = "id_viaje")]
    pub trip_id: Option<i64>,
    #[serde(rename = "odometro_anterior")]
    pub odometer_before: i64,
    #[serde(rename = "odometro_actual")]
    pub odometer_after: i64,
    #[serde(rename = "litros_cargados")]
    pub liters_loaded: f64,
    #[serde(rename = "costo_combustible")]
    pub fuel_cost: i64,
    #[serde(rename = "precio_litro")]
    pub price_per_liter: f64,
    /// Re-derived from distance and liters, so it can differ slightly from
    /// the sampled efficiency after rounding.
    #[serde(rename = "rendimiento_km_l")]
    pub efficiency_km_per_liter: Option<f64>,
    #[serde(rename = "costo_por_km")]
    pub cost_per_km: Option<f64>,
    #[serde(rename = "horas_viaje")]
    pub trip_hours: f64,
    #[serde(rename = "tipo_operacion")]
    pub operation_type: &'static str,
    #[serde(rename = "ubicacion_carga")]
    pub load_location: &'static str,
    #[serde(rename = "observaciones")]
    pub note: Option<&'static str>,
}

/// One forecasted consumption value, destined for `PREDICCIONES_CACHE`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRecord {
    #[serde(rename = "fecha_prediccion")]
    pub generated_at: DateTime<Utc>,
    #[serde(rename = "fecha_aplicable")]
    pub applicable_date: NaiveDate,
    #[serde(rename = "tipo_prediccion")]
    pub prediction_type: &'static str,
    #[serde(rename = "id_camion")]
    pub vehicle_id: i64,
    #[serde(rename = "id_ruta")]
    pub route_id: i64,
    #[serde(rename = "valor_predicho")]
    pub predicted_value: f64,
    #[serde(rename = "confianza")]
    pub confidence: f64,
    #[serde(rename = "modelo_version")]
    pub model_version: &'static str,
    #[serde(rename = "modelo_tipo")]
    pub model_type: &'static str,
    /// Descriptive metadata only; nothing downstream consumes it.
    #[serde(rename = "features_usadas")]
    pub features: PredictionFeatures,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionFeatures {
    #[serde(rename = "ruta_km")]
    pub route_km: i64,
    #[serde(rename = "camion_antiguedad")]
    pub vehicle_age_years: i64,
}
