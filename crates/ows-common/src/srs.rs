//! Spatial Reference System records and srsName parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OwsError, OwsResult};

/// Sentinel SRID meaning "native coordinates, no reprojection".
pub const NATIVE_SRID: i32 = -1;

/// The authority assumed for srsName forms that carry only a code.
pub const EPSG_AUTHORITY: &str = "EPSG";

/// A resolved (or unset) spatial reference.
///
/// The unset state is `srid == NATIVE_SRID` with an empty authority name;
/// every other SRID must correspond to exactly one row of the spatial
/// reference table. Resolvers either commit all fields or leave the
/// record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrsRecord {
    /// Internal numeric identifier, `NATIVE_SRID` when unset.
    pub srid: i32,

    /// Naming authority (e.g. "EPSG"), empty when unset.
    pub auth_name: String,

    /// Authority-specific code, meaningful only when `srid` is set.
    pub auth_srid: i32,

    /// True for meter-based projected units, false for angular degrees.
    pub is_linear_units: bool,

    /// True when the srsName syntax mandates authority (lat/lon) axis
    /// order instead of the default x/y order.
    pub is_reverse_axis: bool,
}

impl Default for SrsRecord {
    fn default() -> Self {
        Self {
            srid: NATIVE_SRID,
            auth_name: String::new(),
            auth_srid: 0,
            is_linear_units: true,
            is_reverse_axis: false,
        }
    }
}

impl SrsRecord {
    /// Create a record in the unset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this record has been resolved against the reference table.
    pub fn is_set(&self) -> bool {
        self.srid != NATIVE_SRID
    }

    /// Restore the unset state, discarding any resolved values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SrsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{}:{}", self.auth_name, self.auth_srid)
        } else {
            write!(f, "native")
        }
    }
}

/// Outcome of recognizing a textual srsName.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSrsName {
    /// The trailing numeric code (EPSG authority is implied).
    pub code: i32,
    /// Axis order mandated by the syntactic form.
    pub reverse_axis: bool,
}

/// Recognized srsName prefixes: (prefix, separator, reverse axis).
///
/// The URN and URL forms come from WFS 1.1.0 §9.2, ISO 19142
/// §7.9.2.4.4 and RFC 5165; the bare `EPSG:` form predates them. The
/// bare form is checked last so it can never shadow the longer ones.
const SRS_NAME_FORMS: &[(&str, char, bool)] = &[
    ("urn:ogc:def:crs:EPSG:", ':', true),
    ("urn:x-ogc:def:crs:EPSG:", ':', true),
    ("urn:EPSG:geographicCRS:", ':', true),
    ("http://www.opengis.net/gml/srs/epsg.xml#", '#', false),
    ("http://www.epsg.org/", '/', false),
    ("EPSG:", ':', false),
];

/// Classify a textual srsName and extract its trailing numeric code.
///
/// Splitting on the form's separator and keeping the last non-empty
/// token absorbs optional version segments, so
/// `urn:ogc:def:crs:EPSG:6.6:4326`, `urn:ogc:def:crs:EPSG::4326` and
/// `http://www.epsg.org/6.11.2/4326` all yield 4326. Unrecognized
/// prefixes and non-numeric trailing tokens are rejected before any
/// table lookup can happen.
pub fn parse_srs_name(srs_name: &str) -> OwsResult<ParsedSrsName> {
    let (prefix, sep, reverse_axis) = SRS_NAME_FORMS
        .iter()
        .find(|(prefix, _, _)| srs_name.starts_with(prefix))
        .ok_or_else(|| OwsError::UnrecognizedSrsName(srs_name.to_string()))?;

    let code = srs_name[prefix.len()..]
        .split(*sep)
        .filter(|token| !token.is_empty())
        .next_back()
        .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse::<i32>().ok())
        .ok_or_else(|| OwsError::UnrecognizedSrsName(srs_name.to_string()))?;

    Ok(ParsedSrsName {
        code,
        reverse_axis: *reverse_axis,
    })
}
