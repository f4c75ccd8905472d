//! Map: a fixed-arity incidence relation from one [`Set`] into another.
//!
//! Row `i` holds the `arity` target entities incident to source entity `i`.
//! Values live in a flattened, row-major buffer behind an `Arc`, so several
//! maps that differ only in their declared target set (e.g. element→node and
//! element→vector-node) share one allocation.

use crate::data::set::Set;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use std::sync::Arc;

/// Incidence map `source → target^arity`.
///
/// # Invariants
/// - `values.len() == source.size() * arity`.
/// - Every value is `< target.size()`.
#[derive(Clone, Debug)]
pub struct Map {
    name: String,
    source: Set,
    target: Set,
    arity: usize,
    values: Arc<[usize]>,
}

static_assertions::assert_impl_all!(Map: Send, Sync);

impl Map {
    /// Build a map over a shared, flattened connectivity buffer.
    ///
    /// # Errors
    /// Returns `Err(Internal)` if `arity == 0`, if the buffer length is not
    /// `source.size() * arity`, or if any value is outside the target set.
    pub fn try_new(
        source: Set,
        target: Set,
        arity: usize,
        values: Arc<[usize]>,
        name: impl Into<String>,
    ) -> Result<Self, MeshError> {
        let map = Self {
            name: name.into(),
            source,
            target,
            arity,
            values,
        };
        map.validate_invariants()?;
        Ok(map)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn source(&self) -> &Set {
        &self.source
    }

    #[inline]
    pub fn target(&self) -> &Set {
        &self.target
    }

    /// Targets per source entity.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of rows (equal to `source().size()`).
    #[inline]
    pub fn len(&self) -> usize {
        self.source.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Flattened row-major values.
    #[inline]
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Shared handle to the underlying buffer.
    #[inline]
    pub fn shared_values(&self) -> &Arc<[usize]> {
        &self.values
    }

    /// Targets of source entity `entity`.
    pub fn try_row(&self, entity: usize) -> Result<&[usize], MeshError> {
        if !self.source.contains(entity) {
            return Err(MeshError::Internal(format!(
                "map `{}`: row {entity} out of bounds ({} rows)",
                self.name,
                self.len()
            )));
        }
        let start = entity * self.arity;
        Ok(&self.values[start..start + self.arity])
    }

    /// Rows in source entity order.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, usize> {
        self.values.chunks_exact(self.arity)
    }
}

impl DebugInvariants for Map {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Map");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.arity == 0 {
            return Err(MeshError::Internal(format!(
                "map `{}` declared with zero arity",
                self.name
            )));
        }
        let expected = self
            .source
            .size()
            .checked_mul(self.arity)
            .ok_or_else(|| MeshError::Internal(format!("map `{}` size overflow", self.name)))?;
        if self.values.len() != expected {
            return Err(MeshError::Internal(format!(
                "map `{}` holds {} values, expected {} ({} rows x {})",
                self.name,
                self.values.len(),
                expected,
                self.source.size(),
                self.arity
            )));
        }
        if let Some((pos, &bad)) = self
            .values
            .iter()
            .enumerate()
            .find(|(_, v)| !self.target.contains(**v))
        {
            return Err(MeshError::Internal(format!(
                "map `{}` row {} targets {bad}, outside set `{}` of size {}",
                self.name,
                pos / self.arity,
                self.target.name(),
                self.target.size()
            )));
        }
        Ok(())
    }
}
