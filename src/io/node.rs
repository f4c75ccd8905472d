//! Triangle `.node` parser.
//!
//! # Format
//! ```text
//! <node count> [<dim> <attr count> <boundary marker flag>]
//! <id> <x> <y> [attributes...] [boundary marker]
//! ...
//! ```
//! Ids are 1-based; lines starting with `#` are comments.

use crate::io::tokenize::{
    DataLine, DataLines, DuplicatePolicy, LineCtx, Occupancy, Tokenizer, ensure_declared,
    try_table,
};
use crate::mesh_error::MeshError;
use std::io::Read;
use std::path::Path;

/// Node coordinates indexed by 0-based node position.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeTable {
    /// Declared node count `N`.
    pub count: usize,
    /// `(x, y)` of node `i` at position `i`; `coords.len() == count`.
    pub coords: Vec<[f64; 2]>,
    /// Rows that redefined an already defined id.
    pub duplicates: usize,
}

/// Parser for the `.node` half of a Triangle mesh.
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeParser {
    pub tokenizer: Tokenizer,
    pub duplicates: DuplicatePolicy,
}

impl NodeParser {
    /// Parse a whole `.node` source. `source` names it in error messages.
    pub fn parse<R: Read>(&self, mut reader: R, source: &str) -> Result<NodeTable, MeshError> {
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|e| MeshError::io_at(Path::new(source), e))?;
        let mut lines = DataLines::new(&contents, self.tokenizer);

        let header = lines
            .next()
            .ok_or_else(|| MeshError::format(source, 0, "missing node count header"))?;
        let ctx = LineCtx::new(source, header.line);
        let count = ctx.count(ctx.token(&header.tokens, 0, "node count")?, "node count")?;

        let rows: Vec<DataLine<'_>> = lines.collect();
        ensure_declared(ctx, count, rows.len(), "node")?;
        let mut coords = try_table(count, [0.0_f64; 2], "node", ctx)?;
        let mut seen = Occupancy::try_new(count, self.duplicates, "node", ctx)?;
        let mut last_line = header.line;
        for row in rows {
            let ctx = LineCtx::new(source, row.line);
            last_line = row.line;
            if row.tokens.len() < 3 {
                return Err(ctx.error(format!(
                    "expected `<id> <x> <y>`, found {} tokens",
                    row.tokens.len()
                )));
            }
            let id = ctx.int(row.tokens[0], "node id")?;
            let x = ctx.float(row.tokens[1], "x coordinate")?;
            let y = ctx.float(row.tokens[2], "y coordinate")?;
            let pos = ctx.position(id, count, "node")?;
            seen.mark(pos, ctx)?;
            coords[pos] = [x, y];
        }
        seen.ensure_dense(source, last_line)?;

        let duplicates = seen.duplicates();
        log::debug!("{source}: read {count} nodes ({duplicates} duplicate definitions)");
        Ok(NodeTable {
            count,
            coords,
            duplicates,
        })
    }
}
