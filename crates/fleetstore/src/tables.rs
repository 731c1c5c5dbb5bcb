//! Table and column names of the remote store schema. These are part of
//! the external protocol — do not rename without a matching schema change.

pub const VEHICLES: &str = "CAMIONES";
pub const DRIVERS: &str = "CONDUCTORES";
pub const ROUTES: &str = "RUTAS";
pub const TRIPS: &str = "VIAJES";
pub const OPERATION_HISTORY: &str = "HISTORIAL_OPERACIONES";
pub const PREDICTION_CACHE: &str = "PREDICCIONES_CACHE";

pub const COL_VEHICLE_ID: &str = "id_camion";
pub const COL_DRIVER_ID: &str = "id_conductor";
pub const COL_ROUTE_ID: &str = "id_ruta";
pub const COL_TRIP_ID: &str = "id_viaje";
pub const COL_TRIP_DATE: &str = "fecha";
