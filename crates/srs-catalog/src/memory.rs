//! In-memory spatial reference table, used as a test fixture and for
//! deployments without a database.

use async_trait::async_trait;

use ows_common::OwsResult;

use crate::table::{AuthorityRow, SpatialRefTable, SridUnitsRow, UNITS_METER_MARKER};

/// One spatial reference definition.
#[derive(Debug, Clone)]
pub struct SpatialRefEntry {
    pub srid: i32,
    pub auth_name: String,
    pub auth_srid: i32,
    /// Proj4 parameter text, scanned for [`UNITS_METER_MARKER`].
    pub proj4text: String,
}

impl SpatialRefEntry {
    pub fn new(
        srid: i32,
        auth_name: impl Into<String>,
        auth_srid: i32,
        proj4text: impl Into<String>,
    ) -> Self {
        Self {
            srid,
            auth_name: auth_name.into(),
            auth_srid,
            proj4text: proj4text.into(),
        }
    }

    fn units_offset(&self) -> Option<usize> {
        self.proj4text.find(UNITS_METER_MARKER)
    }
}

/// Spatial reference table held in process memory.
///
/// Duplicate SRIDs are allowed on purpose so tests can exercise the
/// resolver's ambiguous-row handling.
#[derive(Debug, Clone, Default)]
pub struct MemorySpatialRefTable {
    entries: Vec<SpatialRefEntry>,
}

impl MemorySpatialRefTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<SpatialRefEntry>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, entry: SpatialRefEntry) {
        self.entries.push(entry);
    }
}

#[async_trait]
impl SpatialRefTable for MemorySpatialRefTable {
    async fn find_by_authority(
        &self,
        auth_name: &str,
        auth_srid: i32,
    ) -> OwsResult<Vec<SridUnitsRow>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.auth_name == auth_name && e.auth_srid == auth_srid)
            .map(|e| SridUnitsRow {
                srid: e.srid,
                units_offset: e.units_offset(),
            })
            .collect())
    }

    async fn find_by_srid(&self, srid: i32) -> OwsResult<Vec<AuthorityRow>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.srid == srid)
            .map(|e| AuthorityRow {
                auth_name: e.auth_name.clone(),
                auth_srid: e.auth_srid,
                units_offset: e.units_offset(),
            })
            .collect())
    }

    async fn find_canonical(&self, srid: i32) -> OwsResult<Vec<String>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.srid == srid)
            .map(|e| format!("{}:{}", e.auth_name, e.auth_srid))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_authority() {
        let table = MemorySpatialRefTable::with_entries(vec![
            SpatialRefEntry::new(4326, "EPSG", 4326, "+proj=longlat +datum=WGS84 +no_defs"),
            SpatialRefEntry::new(2154, "EPSG", 2154, "+units=m +proj=lcc +lat_1=49"),
        ]);

        let rows = table.find_by_authority("EPSG", 2154).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].srid, 2154);
        assert_eq!(rows[0].units_offset, Some(0));

        assert!(table.find_by_authority("EPSG", 9999).await.unwrap().is_empty());
        assert!(table.find_by_authority("IGNF", 4326).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_srid_units_offset() {
        let table = MemorySpatialRefTable::with_entries(vec![
            SpatialRefEntry::new(4326, "EPSG", 4326, "+proj=longlat +datum=WGS84 +no_defs"),
            SpatialRefEntry::new(3857, "EPSG", 3857, "+proj=merc +a=6378137 +units=m +no_defs"),
        ]);

        let rows = table.find_by_srid(4326).await.unwrap();
        assert_eq!(rows[0].units_offset, None);

        // Marker present but not at the start.
        let rows = table.find_by_srid(3857).await.unwrap();
        assert_eq!(rows[0].units_offset, Some(22));
    }

    #[tokio::test]
    async fn test_find_canonical() {
        let table = MemorySpatialRefTable::with_entries(vec![SpatialRefEntry::new(
            4326,
            "EPSG",
            4326,
            "+proj=longlat +datum=WGS84 +no_defs",
        )]);

        assert_eq!(
            table.find_canonical(4326).await.unwrap(),
            vec!["EPSG:4326".to_string()]
        );
        assert!(table.find_canonical(12345).await.unwrap().is_empty());
    }
}
