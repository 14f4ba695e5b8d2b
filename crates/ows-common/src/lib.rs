//! Common types shared across the OGC web service crates.

pub mod error;
pub mod layer;
pub mod srs;

pub use error::{OwsError, OwsResult};
pub use layer::{LayerConfig, LayerRegistry};
pub use srs::{parse_srs_name, ParsedSrsName, SrsRecord, EPSG_AUTHORITY, NATIVE_SRID};
