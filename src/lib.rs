#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-triangle
//!
//! mesh-triangle reads unstructured 2D meshes written in the Triangle
//! two-file text format (`<prefix>.node` and `<prefix>.ele`) into the
//! index-based structures a parallel loop runtime consumes: sets (index
//! spaces), dats (per-entity fields) and maps (fixed-arity incidence).
//!
//! ## Usage
//! ```no_run
//! # fn try_main() -> Result<(), mesh_triangle::mesh_error::MeshError> {
//! use mesh_triangle::read_triangle;
//!
//! let (nodes, vnodes, coords, elements, elem_node, elem_vnode) =
//!     read_triangle("meshes/square", None)?.into_parts();
//! assert_eq!(coords.len(), nodes.size());
//! assert_eq!(elem_node.len(), elements.size());
//! # let _ = (vnodes, elem_vnode);
//! # Ok(())
//! # }
//! ```
//!
//! ## Guarantees
//! - Every set is dense: entities are `0..size` in file-id order.
//! - Every map value lies inside its target set; rows have constant arity.
//! - `elem_node` and `elem_vnode` share one connectivity buffer.
//! - Any malformed input aborts the read with a located [`MeshError`](mesh_error::MeshError).

pub mod assemble;
pub mod data;
pub mod debug_invariants;
pub mod io;
pub mod mesh_error;

pub use assemble::TriangleMesh;
pub use debug_invariants::DebugInvariants;
pub use io::triangle::read_triangle;

/// Crate version, fixed at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::assemble::{TriangleMesh, assemble};
    pub use crate::data::{CoordinateDat, Dat, Map, Set, Storage, VecStorage};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::io::MeshPairReader;
    pub use crate::io::triangle::{TriangleReadOptions, TriangleReader, read_triangle};
    pub use crate::io::{DuplicatePolicy, Tokenizer};
    pub use crate::mesh_error::{ErrorKind, MeshError};
}
