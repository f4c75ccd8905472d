//! Dat: a dense field with one fixed-shape value per entity of a [`Set`].

use crate::data::set::Set;
use crate::data::storage::{Storage, VecStorage};
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;

/// Per-entity values attached to a set.
///
/// # Invariants
/// - `values.len() == set.size()`.
/// - The buffer is never mutated after construction.
#[derive(Clone, Debug)]
pub struct Dat<V, S: Storage<V> = VecStorage<V>> {
    name: String,
    set: Set,
    values: S,
    _marker: std::marker::PhantomData<V>,
}

/// 2D node coordinates, one `[x, y]` pair per vector node.
pub type CoordinateDat = Dat<[f64; 2]>;

impl<V, S> Dat<V, S>
where
    S: Storage<V>,
{
    /// Attach `values` to `set`.
    ///
    /// # Errors
    /// Returns `Err(Internal)` if the number of values differs from
    /// `set.size()`.
    pub fn try_new(set: Set, values: Vec<V>, name: impl Into<String>) -> Result<Self, MeshError> {
        let dat = Self {
            name: name.into(),
            set,
            values: S::from_vec(values),
            _marker: std::marker::PhantomData,
        };
        dat.validate_invariants()?;
        Ok(dat)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The set this field lives on.
    #[inline]
    pub fn set(&self) -> &Set {
        &self.set
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of entity `entity`.
    #[inline]
    pub fn try_get(&self, entity: usize) -> Result<&V, MeshError> {
        self.values.try_get(entity)
    }

    /// All values in entity order.
    #[inline]
    pub fn values(&self) -> &[V] {
        self.values.as_slice()
    }

    #[inline]
    pub fn storage(&self) -> &S {
        &self.values
    }
}

impl<S> Dat<[f64; 2], S>
where
    S: Storage<[f64; 2]>,
{
    /// Interleaved `x0, y0, x1, y1, ...` view of the coordinates.
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(self.values.as_slice())
    }
}

impl<V, S> DebugInvariants for Dat<V, S>
where
    S: Storage<V>,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Dat");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.values.len() != self.set.size() {
            return Err(MeshError::Internal(format!(
                "dat `{}` holds {} values but set `{}` has {} entities",
                self.name,
                self.values.len(),
                self.set.name(),
                self.set.size()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_must_match_set() {
        let vnodes = Set::try_new(2, 2, "vnodes").unwrap();
        let err = CoordinateDat::try_new(vnodes, vec![[0.0, 0.0]], "coords").unwrap_err();
        assert!(matches!(err, MeshError::Internal(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn flat_view_interleaves_components() {
        let vnodes = Set::try_new(2, 2, "vnodes").unwrap();
        let coords =
            CoordinateDat::try_new(vnodes, vec![[0.0, 1.0], [2.0, 3.0]], "coords").unwrap();
        assert_eq!(coords.as_flat(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(*coords.try_get(1).unwrap(), [2.0, 3.0]);
        assert!(coords.try_get(2).is_err());
    }
}
