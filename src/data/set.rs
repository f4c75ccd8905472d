//! Set: a dense, zero-based index space of mesh entities.
//!
//! A `Set` names a homogeneous collection (nodes, elements, ...) whose
//! entities are exactly `0..size`. The `arity` records how many scalar
//! components each entity carries when the set is used as a data layout
//! (1 for scalar nodes, 2 for 2D vector nodes). An optional layer count tags
//! the set for downstream extrusion; entities are never replicated here.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use std::num::NonZeroUsize;
use std::ops::Range;

/// A dense index space `[0, size)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Set {
    name: String,
    size: usize,
    arity: usize,
    layers: Option<NonZeroUsize>,
}

impl Set {
    /// Declare a set of `size` entities with `arity` components each.
    ///
    /// # Errors
    /// Returns `Err(Internal)` if `arity == 0`.
    pub fn try_new(size: usize, arity: usize, name: impl Into<String>) -> Result<Self, MeshError> {
        let set = Self {
            name: name.into(),
            size,
            arity,
            layers: None,
        };
        set.validate_invariants()?;
        Ok(set)
    }

    /// Tag this set with a layer count for extruded meshes.
    pub fn with_layers(mut self, layers: NonZeroUsize) -> Self {
        self.layers = Some(layers);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entities.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Components per entity (1 = scalar).
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Layer count, if the set belongs to an extruded mesh.
    #[inline]
    pub fn layers(&self) -> Option<NonZeroUsize> {
        self.layers
    }

    #[inline]
    pub fn is_layered(&self) -> bool {
        self.layers.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Entity identifiers in declaration order.
    #[inline]
    pub fn iter(&self) -> Range<usize> {
        0..self.size
    }

    #[inline]
    pub fn contains(&self, entity: usize) -> bool {
        entity < self.size
    }
}

impl DebugInvariants for Set {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Set");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.arity == 0 {
            return Err(MeshError::Internal(format!(
                "set `{}` declared with zero arity",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_are_contiguous() {
        let s = Set::try_new(4, 1, "nodes").unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(s.contains(3));
        assert!(!s.contains(4));
        assert!(!s.is_layered());
    }

    #[test]
    fn zero_arity_rejected() {
        let err = Set::try_new(4, 0, "bad").unwrap_err();
        assert!(matches!(err, MeshError::Internal(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn layers_are_metadata_only() {
        let s = Set::try_new(2, 1, "elements")
            .unwrap()
            .with_layers(NonZeroUsize::new(5).unwrap());
        assert_eq!(s.layers().map(NonZeroUsize::get), Some(5));
        assert_eq!(s.size(), 2);
    }
}
