//! Pluggable storage for field buffers.
//!
//! [`Dat`](crate::data::dat::Dat) keeps its values behind this trait so a
//! downstream runtime can supply its own host-side buffer type. Fields are
//! immutable once built, so the trait only exposes read access.

use core::fmt::{self, Debug};

use crate::mesh_error::MeshError;

/// Contiguous, read-only storage for `V` with slice access.
pub trait Storage<V>: Debug {
    /// Take ownership of a fully materialized buffer.
    fn from_vec(values: Vec<V>) -> Self;

    /// Current length in elements.
    fn len(&self) -> usize;

    /// Whether the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entire read-only buffer.
    fn as_slice(&self) -> &[V];

    /// Read element `index`, or `Err(Internal)` when out of bounds.
    fn try_get(&self, index: usize) -> Result<&V, MeshError> {
        let len = self.len();
        self.as_slice().get(index).ok_or_else(|| {
            MeshError::Internal(format!("storage index {index} out of bounds (len {len})"))
        })
    }
}

/// `Vec`-backed storage (default).
#[derive(Clone, PartialEq)]
pub struct VecStorage<V>(pub(crate) Vec<V>);

impl<V> Debug for VecStorage<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecStorage")
            .field("len", &self.0.len())
            .finish()
    }
}

impl<V> Storage<V> for VecStorage<V> {
    fn from_vec(values: Vec<V>) -> Self {
        Self(values)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn as_slice(&self) -> &[V] {
        &self.0
    }
}
