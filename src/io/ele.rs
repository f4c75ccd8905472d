//! Triangle `.ele` parser.
//!
//! # Format
//! ```text
//! <element count> <nodes per element> <attr count>
//! <id> <n1> ... <nK> [attributes...]
//! ...
//! ```
//! Element and node ids are 1-based in the file and 0-based in the output.

use crate::io::tokenize::{
    DataLine, DataLines, DuplicatePolicy, LineCtx, Occupancy, Tokenizer, ensure_declared,
    try_table,
};
use crate::mesh_error::MeshError;
use itertools::Itertools;
use std::io::Read;
use std::path::Path;

/// Element connectivity indexed by 0-based element position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementTable {
    /// Declared element count `T`.
    pub count: usize,
    /// Nodes per element `K`.
    pub nodes_per_element: usize,
    /// 0-based node ids of element `i` at position `i`; every row has `K` entries.
    pub rows: Vec<Vec<usize>>,
    /// Rows that redefined an already defined id.
    pub duplicates: usize,
}

impl ElementTable {
    /// Row-major connectivity: element 0's nodes first, then element 1's, ...
    pub fn flatten(&self) -> Vec<usize> {
        self.rows.concat()
    }
}

/// Parser for the `.ele` half of a Triangle mesh.
#[derive(Clone, Copy, Debug)]
pub struct ElementParser {
    pub tokenizer: Tokenizer,
    /// Nodes per element the caller requires (3 for triangles).
    pub arity: usize,
    /// Size of the node table the element rows index into.
    pub node_count: usize,
    pub duplicates: DuplicatePolicy,
}

impl ElementParser {
    /// Triangle parser over `node_count` nodes with default settings.
    pub fn triangles(node_count: usize) -> Self {
        Self {
            tokenizer: Tokenizer::Whitespace,
            arity: 3,
            node_count,
            duplicates: DuplicatePolicy::Warn,
        }
    }

    /// Parse a whole `.ele` source. `source` names it in error messages.
    pub fn parse<R: Read>(&self, mut reader: R, source: &str) -> Result<ElementTable, MeshError> {
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|e| MeshError::io_at(Path::new(source), e))?;
        let mut lines = DataLines::new(&contents, self.tokenizer);

        let header = lines
            .next()
            .ok_or_else(|| MeshError::format(source, 0, "missing element header"))?;
        let ctx = LineCtx::new(source, header.line);
        let (raw_count, raw_per_element, raw_attrs) = header
            .tokens
            .iter()
            .copied()
            .collect_tuple()
            .ok_or_else(|| {
                ctx.error(format!(
                    "expected `<elements> <nodes per element> <attributes>`, found {} fields",
                    header.tokens.len()
                ))
            })?;
        let count = ctx.count(raw_count, "element count")?;
        let per_element = ctx.count(raw_per_element, "nodes per element")?;
        // attributes are dropped; the field only has to be an integer
        ctx.int(raw_attrs, "attribute count")?;
        if per_element != self.arity {
            return Err(MeshError::ArityMismatch {
                source_name: source.to_string(),
                expected: self.arity,
                found: per_element,
            });
        }

        let lines: Vec<DataLine<'_>> = lines.collect();
        ensure_declared(ctx, count, lines.len(), "element")?;
        let mut rows = try_table(count, Vec::new(), "element", ctx)?;
        let mut seen = Occupancy::try_new(count, self.duplicates, "element", ctx)?;
        let mut last_line = header.line;
        for row in lines {
            let ctx = LineCtx::new(source, row.line);
            last_line = row.line;
            if row.tokens.len() < per_element + 1 {
                return Err(ctx.error(format!(
                    "expected an element id and {per_element} node ids, found {} tokens",
                    row.tokens.len()
                )));
            }
            let id = ctx.int(row.tokens[0], "element id")?;
            let pos = ctx.position(id, count, "element")?;
            let nodes = row.tokens[1..=per_element]
                .iter()
                .map(|raw| {
                    let node = ctx.int(raw, "node id")?;
                    ctx.position(node, self.node_count, "node")
                })
                .collect::<Result<Vec<_>, _>>()?;
            seen.mark(pos, ctx)?;
            rows[pos] = nodes;
        }
        seen.ensure_dense(source, last_line)?;

        let duplicates = seen.duplicates();
        log::debug!(
            "{source}: read {count} elements with {per_element} nodes each ({duplicates} duplicate definitions)"
        );
        Ok(ElementTable {
            count,
            nodes_per_element: per_element,
            rows,
            duplicates,
        })
    }
}
