// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based checks of the group axioms and the group action,
//! sampled over the whole group through its normal form.

use dodeca_symmetry::geometry::constants::{EDGES, FACES, FACE_SIZE, NVERTICES};
use dodeca_symmetry::{
    apply_to_edge, apply_to_face, apply_to_vertex, compose, decompose, identity, invert, power,
    tables, Decomposition, Edge, Face, Permutation, Vertex,
};
use proptest::prelude::*;

fn vertex_strategy() -> impl Strategy<Value = Vertex> {
    (0u8..NVERTICES as u8).prop_map(Vertex::new)
}

fn symmetry_strategy() -> impl Strategy<Value = Permutation> {
    (any::<bool>(), vertex_strategy(), 0u8..3).prop_map(|(inverted, vertex, turns)| {
        tables().compose_normal_form(Decomposition::new(inverted, vertex, turns))
    })
}

fn edge_strategy() -> impl Strategy<Value = Edge> {
    (0..EDGES.len(), any::<bool>()).prop_map(|(i, flip)| {
        let [a, b] = EDGES[i];
        let (a, b) = if flip { (b, a) } else { (a, b) };
        Edge::new(Vertex::new(a), Vertex::new(b))
    })
}

fn face_strategy() -> impl Strategy<Value = Face> {
    (0..FACES.len(), 0..FACE_SIZE).prop_map(|(i, start)| {
        let mut labels = FACES[i];
        labels.rotate_left(start);
        Face::new(labels.map(Vertex::new))
    })
}

proptest! {
    #[test]
    fn test_closure(g in symmetry_strategy(), h in symmetry_strategy()) {
        prop_assert!(decompose(&compose(&g, &h)).is_ok());
    }

    #[test]
    fn test_associativity(
        a in symmetry_strategy(),
        b in symmetry_strategy(),
        c in symmetry_strategy()
    ) {
        prop_assert_eq!(compose(&compose(&a, &b), &c), compose(&a, &compose(&b, &c)));
    }

    #[test]
    fn test_identity(g in symmetry_strategy()) {
        prop_assert_eq!(compose(&identity(), &g), g);
        prop_assert_eq!(compose(&g, &identity()), g);
    }

    #[test]
    fn test_inverse(g in symmetry_strategy()) {
        prop_assert_eq!(compose(&g, &invert(&g)), identity());
        prop_assert_eq!(compose(&invert(&g), &g), identity());
    }

    #[test]
    fn test_power_laws(g in symmetry_strategy(), m in -20i64..20, n in -20i64..20) {
        prop_assert_eq!(compose(&power(&g, m), &power(&g, n)), power(&g, m + n));
        prop_assert_eq!(power(&power(&g, m), n), power(&g, m * n));
        prop_assert!(power(&g, g.order() as i64).is_identity());
    }

    #[test]
    fn test_chirality_is_a_homomorphism(g in symmetry_strategy(), h in symmetry_strategy()) {
        let chiral = |x: &Permutation| decompose(x).unwrap().is_chiral();
        prop_assert_eq!(chiral(&compose(&g, &h)), chiral(&g) == chiral(&h));
    }

    #[test]
    fn test_vertex_action(g in symmetry_strategy(), h in symmetry_strategy(), v in vertex_strategy()) {
        prop_assert_eq!(apply_to_vertex(&identity(), v), v);
        prop_assert_eq!(
            apply_to_vertex(&compose(&g, &h), v),
            apply_to_vertex(&g, apply_to_vertex(&h, v))
        );
    }

    #[test]
    fn test_edge_action(g in symmetry_strategy(), h in symmetry_strategy(), e in edge_strategy()) {
        prop_assert_eq!(apply_to_edge(&identity(), e), e.canonical());
        prop_assert_eq!(
            apply_to_edge(&compose(&g, &h), e),
            apply_to_edge(&g, apply_to_edge(&h, e))
        );
        prop_assert!(apply_to_edge(&g, e).is_dodecahedron_edge());
    }

    #[test]
    fn test_face_action(g in symmetry_strategy(), h in symmetry_strategy(), f in face_strategy()) {
        prop_assert_eq!(apply_to_face(&identity(), f), f.canonical());
        prop_assert_eq!(
            apply_to_face(&compose(&g, &h), f),
            apply_to_face(&g, apply_to_face(&h, f))
        );
        let image = apply_to_face(&g, f);
        let chiral = decompose(&g).unwrap().is_chiral();
        prop_assert_eq!(image.is_dodecahedron_face(), chiral);
        prop_assert_eq!(image.reversed().is_dodecahedron_face(), !chiral);
    }
}

#[test]
fn test_action_compatibility_on_vertex_3() {
    let t = tables();
    let g = t.rotation_about_vertex(Vertex::new(12));
    let h = compose(&t.generators.inversion, &t.generators.face_rotation);
    let v = Vertex::new(3);
    assert_eq!(
        apply_to_vertex(&compose(&g, &h), v),
        apply_to_vertex(&g, apply_to_vertex(&h, v))
    );
}
