//! Reference data: existing entity ids fetched from the store so generated
//! records point at real foreign keys.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fleetstore::{tables, RecordStore};
use serde_json::Value as JsonValue;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct TripRef {
    pub id: i64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub vehicles: Vec<i64>,
    pub drivers: Vec<i64>,
    pub routes: Vec<i64>,
    pub trips: Vec<TripRef>,
}

pub async fn load(store: &dyn RecordStore) -> Result<ReferenceData> {
    let vehicles = ids(store, tables::VEHICLES, tables::COL_VEHICLE_ID).await?;
    let drivers = ids(store, tables::DRIVERS, tables::COL_DRIVER_ID).await?;
    let routes = ids(store, tables::ROUTES, tables::COL_ROUTE_ID).await?;
    let trips = trips(store).await?;
    Ok(with_fallbacks(vehicles, drivers, routes, trips))
}

/// Empty reference collections get small fixed synthetic id ranges so a
/// blank database can still be seeded. Trips are the exception: a
/// fabricated trip id would be a dangling foreign key, so with no trips
/// the records simply go unlinked.
pub fn with_fallbacks(
    mut vehicles: Vec<i64>,
    mut drivers: Vec<i64>,
    mut routes: Vec<i64>,
    trips: Vec<TripRef>,
) -> ReferenceData {
    if vehicles.is_empty() {
        warn!("no vehicles in the store, substituting synthetic ids 1..=5");
        vehicles = (1..=5).collect();
    }
    if drivers.is_empty() {
        warn!("no drivers in the store, substituting synthetic ids 1..=3");
        drivers = (1..=3).collect();
    }
    if routes.is_empty() {
        warn!("no routes in the store, substituting synthetic ids 1..=3");
        routes = (1..=3).collect();
    }

    ReferenceData {
        vehicles,
        drivers,
        routes,
        trips,
    }
}

async fn ids(store: &dyn RecordStore, table: &str, column: &str) -> Result<Vec<i64>> {
    let rows = store
        .select(table, column)
        .await
        .with_context(|| format!("failed to fetch {table}"))?;
    rows.iter().map(|row| id_field(row, column)).collect()
}

async fn trips(store: &dyn RecordStore) -> Result<Vec<TripRef>> {
    let projection = format!("{},{}", tables::COL_TRIP_ID, tables::COL_TRIP_DATE);
    let rows = store
        .select(tables::TRIPS, &projection)
        .await
        .with_context(|| format!("failed to fetch {}", tables::TRIPS))?;
    rows.iter().map(parse_trip).collect()
}

fn id_field(row: &JsonValue, column: &str) -> Result<i64> {
    row[column]
        .as_i64()
        .with_context(|| format!("reference row missing integer column {column}: {row}"))
}

fn parse_trip(row: &JsonValue) -> Result<TripRef> {
    let id = id_field(row, tables::COL_TRIP_ID)?;
    let raw = row[tables::COL_TRIP_DATE]
        .as_str()
        .with_context(|| format!("trip {id} has no date string"))?;
    let date = parse_trip_date(raw)?;
    Ok(TripRef { id, date })
}

/// Trip dates arrive either as full RFC 3339 timestamps or as bare dates.
/// Anything else is a hard failure: that is bad upstream data, not ours
/// to repair.
pub fn parse_trip_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("unparsable trip date: {raw:?}"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
