//! Reader for Triangle `.node` + `.ele` mesh pairs.
//!
//! # Supported format
//! - 2D `.node` files; coordinates beyond `x y`, attributes and boundary
//!   markers are ignored.
//! - `.ele` files with a fixed number of nodes per element (3 by default).
//! - Layered reads tag the element set with a layer count and split element
//!   rows on single spaces, as extruded-mesh tooling writes them.
//!
//! # Limitations
//! - `.poly`, `.edge` and `.neigh` files are not read.
//! - Element attributes (regional markers) are dropped.

use crate::assemble::{TriangleMesh, assemble};
use crate::io::MeshPairReader;
use crate::io::ele::ElementParser;
use crate::io::node::NodeParser;
use crate::io::tokenize::{DuplicatePolicy, Tokenizer};
use crate::mesh_error::MeshError;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Optional settings for Triangle import.
#[derive(Debug, Clone, Copy)]
pub struct TriangleReadOptions {
    /// Layer count for extruded meshes; `None` for a plain 2D read.
    pub layers: Option<NonZeroUsize>,
    /// Nodes per element the `.ele` header must declare.
    pub arity: usize,
    /// Handling of ids defined more than once.
    pub duplicates: DuplicatePolicy,
}

impl Default for TriangleReadOptions {
    fn default() -> Self {
        Self {
            layers: None,
            arity: 3,
            duplicates: DuplicatePolicy::Warn,
        }
    }
}

impl TriangleReadOptions {
    /// Options for a layered read.
    ///
    /// # Errors
    /// Returns `Err(InvalidLayerCount)` when `layers == 0`.
    pub fn layered(layers: usize) -> Result<Self, MeshError> {
        let layers = NonZeroUsize::new(layers).ok_or(MeshError::InvalidLayerCount(layers))?;
        Ok(Self {
            layers: Some(layers),
            ..Self::default()
        })
    }
}

/// Triangle mesh reader.
#[derive(Debug, Default, Clone)]
pub struct TriangleReader {
    pub options: TriangleReadOptions,
}

impl TriangleReader {
    pub fn new(options: TriangleReadOptions) -> Self {
        Self { options }
    }

    /// Read `<prefix>.node` then `<prefix>.ele`.
    ///
    /// Each file is closed before the next one is opened, including when
    /// parsing fails.
    pub fn read(&self, prefix: impl AsRef<Path>) -> Result<TriangleMesh, MeshError> {
        let prefix = prefix.as_ref();
        let node_path = with_suffix(prefix, ".node");
        let ele_path = with_suffix(prefix, ".ele");

        let nodes = {
            let file = File::open(&node_path).map_err(|e| MeshError::io_at(&node_path, e))?;
            self.node_parser()
                .parse(BufReader::new(file), &node_path.display().to_string())?
        };
        let elements = {
            let file = File::open(&ele_path).map_err(|e| MeshError::io_at(&ele_path, e))?;
            self.element_parser(nodes.count)
                .parse(BufReader::new(file), &ele_path.display().to_string())?
        };
        log::debug!(
            "read triangle mesh {}: {} nodes, {} elements, layers={:?}",
            prefix.display(),
            nodes.count,
            elements.count,
            self.options.layers
        );
        assemble(nodes, elements, self.options.layers)
    }

    fn node_parser(&self) -> NodeParser {
        // node rows are whitespace-split in both variants
        NodeParser {
            tokenizer: Tokenizer::Whitespace,
            duplicates: self.options.duplicates,
        }
    }

    fn element_parser(&self, node_count: usize) -> ElementParser {
        ElementParser {
            tokenizer: Tokenizer::for_layered(self.options.layers.is_some()),
            arity: self.options.arity,
            node_count,
            duplicates: self.options.duplicates,
        }
    }
}

impl MeshPairReader for TriangleReader {
    fn read_pair<N: Read, E: Read>(&self, node: N, ele: E) -> Result<TriangleMesh, MeshError> {
        let nodes = self.node_parser().parse(node, "<node>")?;
        let elements = self.element_parser(nodes.count).parse(ele, "<ele>")?;
        assemble(nodes, elements, self.options.layers)
    }
}

/// Read the Triangle mesh at `prefix`, optionally tagged with `layers`.
///
/// # Errors
/// - `Io` if either file is missing or unreadable.
/// - `Format`/`ArityMismatch` for malformed headers or rows.
/// - `Index` for ids outside their declared range.
/// - `InvalidLayerCount` for `Some(0)`.
pub fn read_triangle(
    prefix: impl AsRef<Path>,
    layers: Option<usize>,
) -> Result<TriangleMesh, MeshError> {
    let options = match layers {
        Some(n) => TriangleReadOptions::layered(n)?,
        None => TriangleReadOptions::default(),
    };
    TriangleReader::new(options).read(prefix)
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(prefix.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}
