#![allow(dead_code)]
use mesh_triangle::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const SCENARIO_A_NODE: &str = "3\n1 0.0 0.0\n2 1.0 0.0\n3 0.0 1.0\n";
pub const SCENARIO_A_ELE: &str = "1 3 0\n1 1 2 3\n";

/// Write `<dir>/<name>.node` and `<dir>/<name>.ele`; returns the prefix.
pub fn write_pair(dir: &Path, name: &str, node: &str, ele: &str) -> PathBuf {
    let prefix = dir.join(name);
    fs::write(dir.join(format!("{name}.node")), node).unwrap();
    fs::write(dir.join(format!("{name}.ele")), ele).unwrap();
    prefix
}

/// Read an in-memory pair with the given options.
pub fn read_str(node: &str, ele: &str, options: TriangleReadOptions) -> Result<TriangleMesh, MeshError> {
    TriangleReader::new(options).read_pair(node.as_bytes(), ele.as_bytes())
}

/// Rows of a map as owned vectors.
pub fn rows(map: &Map) -> Vec<Vec<usize>> {
    map.rows().map(<[usize]>::to_vec).collect()
}
