//! Resolves SRS identifiers against the spatial reference table.

use std::sync::Arc;

use tracing::{debug, warn};

use ows_common::{parse_srs_name, OwsError, OwsResult, SrsRecord, NATIVE_SRID};

use crate::table::{is_linear_units, SpatialRefTable};

/// Fills [`SrsRecord`]s from a [`SpatialRefTable`] backend.
///
/// Every entry point either commits all derived fields to the record or
/// returns an error with the record byte-for-byte untouched. Lookups
/// requiring exactly one row fail the same way on zero and on multiple
/// matches: the reference data does not handle that identifier.
pub struct SrsResolver {
    table: Arc<dyn SpatialRefTable>,
}

impl SrsResolver {
    pub fn new(table: Arc<dyn SpatialRefTable>) -> Self {
        Self { table }
    }

    /// Resolve from an authority name and authority-specific code.
    pub async fn resolve_authority(
        &self,
        srs: &mut SrsRecord,
        auth_name: &str,
        auth_srid: i32,
    ) -> OwsResult<()> {
        let mut rows = self.table.find_by_authority(auth_name, auth_srid).await?;
        if rows.len() != 1 {
            return Err(OwsError::SrsNotHandled {
                auth_name: auth_name.to_string(),
                auth_srid,
            });
        }
        let row = rows.remove(0);

        srs.srid = row.srid;
        srs.auth_name = auth_name.to_string();
        srs.auth_srid = auth_srid;
        srs.is_linear_units = is_linear_units(row.units_offset);

        debug!(srid = srs.srid, srs = %srs, "resolved srs from authority code");
        Ok(())
    }

    /// Resolve from an internal numeric identifier.
    ///
    /// `NATIVE_SRID` is the reserved "no SRS" sentinel: it always
    /// succeeds and resets the record to its unset state. The axis flag
    /// is otherwise left alone, it belongs to the srsName syntax, not
    /// to the table.
    pub async fn resolve_srid(&self, srs: &mut SrsRecord, srid: i32) -> OwsResult<()> {
        if srid == NATIVE_SRID {
            srs.reset();
            return Ok(());
        }

        let mut rows = self.table.find_by_srid(srid).await?;
        if rows.len() != 1 {
            return Err(OwsError::SridNotHandled(srid));
        }
        let row = rows.remove(0);

        srs.srid = srid;
        srs.auth_name = row.auth_name;
        srs.auth_srid = row.auth_srid;
        srs.is_linear_units = is_linear_units(row.units_offset);

        debug!(srid, srs = %srs, "resolved srs from srid");
        Ok(())
    }

    /// Resolve from a textual srsName (EPSG authority implied).
    ///
    /// Parse failures reject the name before any table query. The axis
    /// flag derived from the syntax is committed only once the SRID
    /// resolve has succeeded, keeping failed resolves side-effect free.
    pub async fn resolve_srs_name(&self, srs: &mut SrsRecord, srs_name: &str) -> OwsResult<()> {
        let parsed = parse_srs_name(srs_name)?;
        self.resolve_srid(srs, parsed.code).await?;
        srs.is_reverse_axis = parsed.reverse_axis;
        Ok(())
    }

    /// Canonical `"authority:code"` string for an SRID, or an empty
    /// string when the table has no unique answer. Best-effort path for
    /// capabilities listings: it never fails loudly.
    pub async fn srs_string(&self, srid: i32) -> String {
        match self.table.find_canonical(srid).await {
            Ok(mut rows) if rows.len() == 1 => rows.remove(0),
            Ok(_) => String::new(),
            Err(e) => {
                warn!(srid, error = %e, "canonical srs lookup degraded to empty");
                String::new()
            }
        }
    }

    /// Canonical strings for an ordered batch of textual SRID tokens.
    /// Each token resolves independently; a non-numeric or unknown one
    /// yields an empty string at its position.
    pub async fn srs_strings(&self, tokens: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token.trim().parse::<i32>() {
                Ok(srid) => out.push(self.srs_string(srid).await),
                Err(_) => out.push(String::new()),
            }
        }
        out
    }
}
