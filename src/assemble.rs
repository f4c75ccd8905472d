//! Assemble parsed node and element tables into sets, dats and maps.
//!
//! The result mirrors what a parallel loop runtime expects from a 2D
//! triangle mesh:
//!
//! | structure    | kind | over / from → to        |
//! |--------------|------|-------------------------|
//! | `nodes`      | Set  | arity 1                 |
//! | `vnodes`     | Set  | arity 2, same size      |
//! | `coords`     | Dat  | over `vnodes`           |
//! | `elements`   | Set  | arity 1, maybe layered  |
//! | `elem_node`  | Map  | `elements` → `nodes`    |
//! | `elem_vnode` | Map  | `elements` → `vnodes`   |
//!
//! Both maps share one connectivity buffer.

use crate::data::{CoordinateDat, DebugInvariants, Map, Set};
use crate::io::ele::ElementTable;
use crate::io::node::NodeTable;
use crate::mesh_error::MeshError;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Everything read from one `.node`/`.ele` pair.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    pub nodes: Set,
    pub vnodes: Set,
    pub coords: CoordinateDat,
    pub elements: Set,
    pub elem_node: Map,
    pub elem_vnode: Map,
}

impl TriangleMesh {
    /// Split into `(nodes, vnodes, coords, elements, elem_node, elem_vnode)`.
    pub fn into_parts(self) -> (Set, Set, CoordinateDat, Set, Map, Map) {
        (
            self.nodes,
            self.vnodes,
            self.coords,
            self.elements,
            self.elem_node,
            self.elem_vnode,
        )
    }
}

impl DebugInvariants for TriangleMesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "TriangleMesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        self.nodes.validate_invariants()?;
        self.vnodes.validate_invariants()?;
        self.coords.validate_invariants()?;
        self.elements.validate_invariants()?;
        self.elem_node.validate_invariants()?;
        self.elem_vnode.validate_invariants()?;
        if self.nodes.size() != self.vnodes.size() {
            return Err(MeshError::Internal(format!(
                "nodes ({}) and vnodes ({}) differ in size",
                self.nodes.size(),
                self.vnodes.size()
            )));
        }
        if !Arc::ptr_eq(self.elem_node.shared_values(), self.elem_vnode.shared_values()) {
            return Err(MeshError::Internal(
                "elem_node and elem_vnode do not share connectivity".into(),
            ));
        }
        Ok(())
    }
}

/// Build the mesh structures from fully parsed tables.
///
/// # Errors
/// Returns `Err(Internal)` when the tables disagree with their declared
/// counts or a connectivity entry falls outside the node set. Parsers that
/// produced the tables already guarantee neither happens.
pub fn assemble(
    nodes: NodeTable,
    elements: ElementTable,
    layers: Option<NonZeroUsize>,
) -> Result<TriangleMesh, MeshError> {
    if nodes.coords.len() != nodes.count {
        return Err(MeshError::Internal(format!(
            "node table declares {} nodes but holds {} coordinates",
            nodes.count,
            nodes.coords.len()
        )));
    }
    if elements.rows.len() != elements.count {
        return Err(MeshError::Internal(format!(
            "element table declares {} elements but holds {} rows",
            elements.count,
            elements.rows.len()
        )));
    }
    if let Some(bad) = elements
        .rows
        .iter()
        .position(|row| row.len() != elements.nodes_per_element)
    {
        return Err(MeshError::Internal(format!(
            "element {bad} has {} nodes, expected {}",
            elements.rows[bad].len(),
            elements.nodes_per_element
        )));
    }

    let node_set = Set::try_new(nodes.count, 1, "nodes")?;
    let vnode_set = Set::try_new(nodes.count, 2, "vnodes")?;
    let coords = CoordinateDat::try_new(vnode_set.clone(), nodes.coords, "coords")?;

    let mut element_set = Set::try_new(elements.count, 1, "elements")?;
    if let Some(layers) = layers {
        element_set = element_set.with_layers(layers);
    }

    let connectivity: Arc<[usize]> = Arc::from(elements.flatten());
    let arity = elements.nodes_per_element;
    let elem_node = Map::try_new(
        element_set.clone(),
        node_set.clone(),
        arity,
        Arc::clone(&connectivity),
        "elem_node",
    )?;
    let elem_vnode = Map::try_new(
        element_set.clone(),
        vnode_set.clone(),
        arity,
        connectivity,
        "elem_vnode",
    )?;

    let mesh = TriangleMesh {
        nodes: node_set,
        vnodes: vnode_set,
        coords,
        elements: element_set,
        elem_node,
        elem_vnode,
    };
    mesh.debug_assert_invariants();
    Ok(mesh)
}
