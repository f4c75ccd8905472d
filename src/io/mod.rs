//! Mesh I/O: parsers for the Triangle two-file format.
//!
//! The `.node` and `.ele` parsers produce plain tables; [`crate::assemble`]
//! turns them into sets, dats and maps. [`triangle::read_triangle`] runs the
//! whole pipeline from a path prefix.

pub mod ele;
pub mod node;
pub mod tokenize;
pub mod triangle;

use crate::assemble::TriangleMesh;
use crate::mesh_error::MeshError;
use std::io::Read;

pub use tokenize::{DuplicatePolicy, Tokenizer};

/// Trait for readers that build a mesh from a node source and an element source.
pub trait MeshPairReader {
    /// Parse the node source fully, then the element source, then assemble.
    fn read_pair<N: Read, E: Read>(&self, node: N, ele: E) -> Result<TriangleMesh, MeshError>;
}
