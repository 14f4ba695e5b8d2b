//! PostgreSQL backend reading the PostGIS `spatial_ref_sys` table.

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use tracing::instrument;

use ows_common::{OwsError, OwsResult};

use crate::table::{AuthorityRow, SpatialRefTable, SridUnitsRow};

/// Spatial reference table backed by a PostGIS database.
pub struct PgSpatialRefTable {
    pool: PgPool,
}

impl PgSpatialRefTable {
    /// Connect a new pool from a database URL.
    pub async fn connect(database_url: &str) -> OwsResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| OwsError::Database(format!("Connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Reuse an existing pool (the service normally shares one).
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// SQL `position()` is 1-based with 0 meaning "not found"; the table
/// interface wants a zero-based offset.
fn units_offset(position: i32) -> Option<usize> {
    if position > 0 {
        Some(position as usize - 1)
    } else {
        None
    }
}

#[derive(Debug, FromRow)]
struct SridUnitsDbRow {
    srid: i32,
    units_pos: i32,
}

#[derive(Debug, FromRow)]
struct AuthorityDbRow {
    auth_name: String,
    auth_srid: i32,
    units_pos: i32,
}

#[derive(Debug, FromRow)]
struct CanonicalDbRow {
    srs: String,
}

#[async_trait]
impl SpatialRefTable for PgSpatialRefTable {
    #[instrument(skip(self))]
    async fn find_by_authority(
        &self,
        auth_name: &str,
        auth_srid: i32,
    ) -> OwsResult<Vec<SridUnitsRow>> {
        let rows = sqlx::query_as::<_, SridUnitsDbRow>(
            "SELECT srid, COALESCE(position('+units=m ' in proj4text), 0) AS units_pos \
             FROM spatial_ref_sys WHERE auth_name = $1 AND auth_srid = $2",
        )
        .bind(auth_name)
        .bind(auth_srid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OwsError::Database(format!("spatial_ref_sys query failed: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|r| SridUnitsRow {
                srid: r.srid,
                units_offset: units_offset(r.units_pos),
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_srid(&self, srid: i32) -> OwsResult<Vec<AuthorityRow>> {
        let rows = sqlx::query_as::<_, AuthorityDbRow>(
            "SELECT auth_name, auth_srid, \
             COALESCE(position('+units=m ' in proj4text), 0) AS units_pos \
             FROM spatial_ref_sys WHERE srid = $1",
        )
        .bind(srid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OwsError::Database(format!("spatial_ref_sys query failed: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|r| AuthorityRow {
                auth_name: r.auth_name,
                auth_srid: r.auth_srid,
                units_offset: units_offset(r.units_pos),
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_canonical(&self, srid: i32) -> OwsResult<Vec<String>> {
        let rows = sqlx::query_as::<_, CanonicalDbRow>(
            "SELECT auth_name || ':' || auth_srid AS srs \
             FROM spatial_ref_sys WHERE srid = $1",
        )
        .bind(srid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OwsError::Database(format!("spatial_ref_sys query failed: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.srs).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_offset_conversion() {
        // SQL position 1 = marker at the start of the proj4 text.
        assert_eq!(units_offset(1), Some(0));
        assert_eq!(units_offset(15), Some(14));
        assert_eq!(units_offset(0), None);
        assert_eq!(units_offset(-1), None);
    }
}
