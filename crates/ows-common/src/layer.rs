//! Configured layers and the registry used to look up their SRS.

use serde::{Deserialize, Serialize};

use crate::error::{OwsError, OwsResult};
use crate::srs::{SrsRecord, NATIVE_SRID};

/// A configured service layer and its resolved spatial reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Unique layer name (used in requests)
    pub name: String,

    /// Human-readable title for capabilities documents
    pub title: Option<String>,

    /// The layer's storage SRS, unset until resolved
    pub srs: SrsRecord,
}

impl LayerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            srs: SrsRecord::new(),
        }
    }
}

/// Insertion-ordered registry of configured layers.
///
/// Each layer owns its SRS record; the registry only ever hands out
/// shared or exclusive borrows, so resolving one layer can never touch
/// another's record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerRegistry {
    layers: Vec<LayerConfig>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer, replacing any existing layer with the same name.
    pub fn insert(&mut self, layer: LayerConfig) {
        match self.layers.iter_mut().find(|l| l.name == layer.name) {
            Some(existing) => *existing = layer,
            None => self.layers.push(layer),
        }
    }

    pub fn get(&self, name: &str) -> Option<&LayerConfig> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut LayerConfig> {
        self.layers.iter_mut().find(|l| l.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerConfig> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Whether the named layer's storage SRS uses meter units.
    ///
    /// Callers are expected to have validated the layer beforehand:
    /// asking about a layer that is missing or still unresolved is a
    /// contract violation, not an ordinary not-found.
    pub fn is_linear_units(&self, name: &str) -> OwsResult<bool> {
        match self.get(name) {
            Some(layer) if layer.srs.is_set() => Ok(layer.srs.is_linear_units),
            _ => Err(OwsError::LayerSrsContract(name.to_string())),
        }
    }

    /// The named layer's resolved SRID, or `NATIVE_SRID` if the layer
    /// is not configured. Tolerant counterpart of `is_linear_units`.
    pub fn srid(&self, name: &str) -> i32 {
        self.get(name).map(|l| l.srs.srid).unwrap_or(NATIVE_SRID)
    }
}
