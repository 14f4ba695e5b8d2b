//! Read-only interface over the spatial reference table.

use async_trait::async_trait;

use ows_common::OwsResult;

/// Marker whose position in a row's proj4 parameter text decides the
/// unit class: offset 0 means meter units, anything else means degrees.
pub const UNITS_METER_MARKER: &str = "+units=m ";

/// Row shape for authority+code lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SridUnitsRow {
    pub srid: i32,
    /// Zero-based offset of [`UNITS_METER_MARKER`] in the proj4 text,
    /// `None` when the marker is absent.
    pub units_offset: Option<usize>,
}

/// Row shape for SRID lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityRow {
    pub auth_name: String,
    pub auth_srid: i32,
    pub units_offset: Option<usize>,
}

/// Capability interface over the spatial reference table.
///
/// Implementations return every matching row; the resolver enforces the
/// exactly-one rule so that all backends fail ambiguous data the same
/// way. Nothing here mutates the table.
#[async_trait]
pub trait SpatialRefTable: Send + Sync {
    /// Rows matching an authority name and authority-specific code.
    async fn find_by_authority(
        &self,
        auth_name: &str,
        auth_srid: i32,
    ) -> OwsResult<Vec<SridUnitsRow>>;

    /// Rows matching an internal numeric identifier.
    async fn find_by_srid(&self, srid: i32) -> OwsResult<Vec<AuthorityRow>>;

    /// Canonical `"authority:code"` strings for an internal identifier.
    async fn find_canonical(&self, srid: i32) -> OwsResult<Vec<String>>;
}

/// Unit class implied by the marker offset: only a marker at the very
/// start of the proj4 text counts as meter units.
pub(crate) fn is_linear_units(units_offset: Option<usize>) -> bool {
    units_offset == Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_offset_rule() {
        assert!(is_linear_units(Some(0)));
        assert!(!is_linear_units(Some(12)));
        assert!(!is_linear_units(None));
    }
}
