mod util;
use mesh_triangle::prelude::*;
use proptest::prelude::*;
use util::*;

/// A small random mesh: coordinates plus 0-based triangle rows.
#[derive(Clone, Debug)]
struct RawMesh {
    coords: Vec<(f64, f64)>,
    triangles: Vec<[usize; 3]>,
}

fn raw_mesh() -> impl Strategy<Value = RawMesh> {
    (1usize..24).prop_flat_map(|n| {
        (
            prop::collection::vec((-1.0e3..1.0e3f64, -1.0e3..1.0e3f64), n),
            prop::collection::vec([0..n, 0..n, 0..n], 0..16),
        )
            .prop_map(|(coords, triangles)| RawMesh { coords, triangles })
    })
}

/// Layout knobs for rendering the same mesh differently.
#[derive(Clone, Debug)]
struct Layout {
    sep: usize,
    pad: bool,
    comments: Vec<bool>,
}

fn layout() -> impl Strategy<Value = Layout> {
    (1usize..4, any::<bool>(), prop::collection::vec(any::<bool>(), 48))
        .prop_map(|(sep, pad, comments)| Layout { sep, pad, comments })
}

fn render(mesh: &RawMesh, layout: Option<&Layout>) -> (String, String) {
    let (sep, pad) = match layout {
        Some(l) => (" ".repeat(l.sep), if l.pad { "  " } else { "" }),
        None => (" ".to_string(), ""),
    };
    let comment_after = |i: usize| layout.is_some_and(|l| l.comments[i % l.comments.len()]);
    let line = |fields: Vec<String>| format!("{pad}{}{pad}\n", fields.join(&sep));

    let mut node = line(vec![mesh.coords.len().to_string(), "2".into(), "0".into(), "0".into()]);
    for (i, (x, y)) in mesh.coords.iter().enumerate() {
        if comment_after(i) {
            node.push_str("# node comment\n");
        }
        node.push_str(&line(vec![(i + 1).to_string(), x.to_string(), y.to_string()]));
    }

    let mut ele = line(vec![mesh.triangles.len().to_string(), "3".into(), "0".into()]);
    for (i, tri) in mesh.triangles.iter().enumerate() {
        if comment_after(i + 1) {
            ele.push_str("#\n");
        }
        let mut fields = vec![(i + 1).to_string()];
        fields.extend(tri.iter().map(|n| (n + 1).to_string()));
        ele.push_str(&line(fields));
    }
    (node, ele)
}

proptest! {
    #[test]
    fn cardinality_and_index_range(mesh in raw_mesh()) {
        let (node, ele) = render(&mesh, None);
        let out = read_str(&node, &ele, TriangleReadOptions::default()).unwrap();
        prop_assert_eq!(out.coords.len(), out.nodes.size());
        prop_assert_eq!(out.nodes.size(), mesh.coords.len());
        prop_assert_eq!(out.elem_node.len(), mesh.triangles.len());
        for row in out.elem_node.rows() {
            prop_assert_eq!(row.len(), 3);
            prop_assert!(row.iter().all(|&n| n < out.nodes.size()));
        }
    }

    #[test]
    fn file_ids_map_to_previous_position(mesh in raw_mesh()) {
        let (node, ele) = render(&mesh, None);
        let out = read_str(&node, &ele, TriangleReadOptions::default()).unwrap();
        for (i, (x, y)) in mesh.coords.iter().enumerate() {
            prop_assert_eq!(*out.coords.try_get(i).unwrap(), [*x, *y]);
        }
        for (i, tri) in mesh.triangles.iter().enumerate() {
            prop_assert_eq!(out.elem_node.try_row(i).unwrap(), &tri[..]);
        }
    }

    #[test]
    fn comments_and_spacing_do_not_change_result(mesh in raw_mesh(), l in layout()) {
        let (node, ele) = render(&mesh, None);
        let (node_v, ele_v) = render(&mesh, Some(&l));
        let base = read_str(&node, &ele, TriangleReadOptions::default()).unwrap();
        for options in [TriangleReadOptions::default(), TriangleReadOptions::layered(2).unwrap()] {
            let varied = read_str(&node_v, &ele_v, options).unwrap();
            prop_assert_eq!(varied.coords.values(), base.coords.values());
            prop_assert_eq!(varied.elem_node.values(), base.elem_node.values());
            prop_assert_eq!(varied.elem_vnode.values(), base.elem_vnode.values());
        }
    }
}
