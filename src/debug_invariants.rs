//! Self-checks for assembled mesh structures.
//!
//! Constructors call [`DebugInvariants::validate_invariants`] and propagate the
//! error; [`crate::assemble::assemble`] additionally asserts the whole mesh in
//! debug builds or with the `check-invariants` feature.

use crate::mesh_error::MeshError;

/// Structural checks for sets, dats, maps and the meshes built from them.
pub trait DebugInvariants {
    /// Panic on the first violation in debug builds or with `check-invariants`.
    fn debug_assert_invariants(&self);
    /// Return the first violation as [`MeshError::Internal`].
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Panic with `[mesh-triangle] <what>: <error>` if `$expr` is an `Err`,
/// only when invariant checking is compiled in.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($what:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[mesh-triangle] ", $($what)*, " invariant violated: {}"), e);
        }
    };
}
