//! Spatial reference catalog: the read-only reference-table interface,
//! its PostgreSQL (`spatial_ref_sys`) and in-memory backends, and the
//! resolver that fills [`ows_common::SrsRecord`]s from it.

pub mod memory;
pub mod postgres;
pub mod resolver;
pub mod table;

pub use memory::{MemorySpatialRefTable, SpatialRefEntry};
pub use postgres::PgSpatialRefTable;
pub use resolver::SrsResolver;
pub use table::{AuthorityRow, SpatialRefTable, SridUnitsRow, UNITS_METER_MARKER};
