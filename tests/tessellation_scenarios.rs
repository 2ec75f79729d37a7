//! Concrete tessellation scenarios with pinned expectations.

#![allow(missing_docs)]

use approx::assert_relative_eq;
use voronoi::prelude::*;

fn sites_of(points: &[(f64, f64)]) -> Vec<Site<f64, ()>> {
    points
        .iter()
        .map(|&(x, y)| Site::from_point(Point::new(x, y)))
        .collect()
}

#[test]
fn three_point_triangle() {
    let sites = sites_of(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)]);
    let tessellation: Tessellation<f64, (), ()> = Tessellation::with_triangles(&sites).unwrap();

    assert_eq!(tessellation.number_of_cells(), 3);
    assert_eq!(tessellation.number_of_edges(), 3);
    assert_eq!(tessellation.triangles().len(), 1);

    // The single triangle references all three cells.
    let triangle = &tessellation.triangles()[0];
    let mut referenced: Vec<CellKey> = triangle.cells().to_vec();
    referenced.sort();
    referenced.dedup();
    assert_eq!(referenced.len(), 3);
    for (key, _) in tessellation.cells() {
        assert!(triangle.has_vertex(key));
    }

    assert!(tessellation.is_valid().is_ok());
    assert!(tessellation.validate_empty_circumcircle().is_ok());
}

#[test]
fn four_point_square() {
    let sites = sites_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let tessellation: Tessellation<f64, (), ()> = Tessellation::with_triangles(&sites).unwrap();

    assert_eq!(tessellation.number_of_cells(), 4);
    assert_eq!(tessellation.triangles().len(), 2);

    // All edges touch the unbounded exterior, so every cell is infinite.
    for (key, _) in tessellation.cells() {
        assert!(tessellation.is_cell_infinite(key));
    }

    // The two triangles share a diagonal: together they reference all four
    // cells, and exactly two cells appear in both.
    let [t1, t2] = [&tessellation.triangles()[0], &tessellation.triangles()[1]];
    let shared = t1
        .cells()
        .iter()
        .filter(|&&cell| t2.has_vertex(cell))
        .count();
    assert_eq!(shared, 2);

    assert!(tessellation.is_valid().is_ok());
    assert!(tessellation.validate_empty_circumcircle().is_ok());
}

#[test]
fn five_collinear_points() {
    // Horizontal collinear input: all sites share the maximum y, so the
    // build degenerates to the seeding chain. The pinned behavior: n cells
    // bounded only by parallel vertical bisectors, zero triangles.
    let sites = sites_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
    let tessellation: Tessellation<f64, (), ()> = Tessellation::with_triangles(&sites).unwrap();

    assert_eq!(tessellation.number_of_cells(), 5);
    assert_eq!(tessellation.number_of_edges(), 4);
    assert!(tessellation.triangles().is_empty());

    for (_, edge) in tessellation.edges() {
        let n1 = tessellation.node(edge.node1()).unwrap();
        let n2 = tessellation.node(edge.node2()).unwrap();
        // Vertical: both endpoints share an x, which is the midpoint of the
        // two neighboring sites.
        assert_relative_eq!(n1.position().x(), n2.position().x());
        assert!(n1.is_infinite() && n2.is_infinite());
        assert_eq!(n1.position().x().fract(), 0.5);
    }

    for (key, _) in tessellation.cells() {
        assert!(tessellation.is_cell_infinite(key));
    }
    assert!(tessellation.is_valid().is_ok());
}

#[test]
fn two_points_are_insufficient() {
    let sites = sites_of(&[(0.0, 0.0), (1.0, 1.0)]);
    let result = Tessellation::<f64, (), ()>::new(&sites);
    assert_eq!(
        result.unwrap_err(),
        TessellationConstructionError::InsufficientPoints { found: 2 }
    );
}

#[test]
fn coincident_points_deduplicate_before_the_count_check() {
    // Two coincident points plus one distinct point: only 2 distinct sites
    // remain, which is below the minimum of 3.
    let sites = sites_of(&[(1.0, 1.0), (1.0, 1.0), (5.0, 5.0)]);
    let result = Tessellation::<f64, (), ()>::new(&sites);
    assert_eq!(
        result.unwrap_err(),
        TessellationConstructionError::InsufficientPoints { found: 2 }
    );
}

#[test]
fn duplicates_yield_the_same_cells_as_deduplicated_input() {
    let with_duplicates = sites_of(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 0.0),
        (2.0, 4.0),
        (0.0, 0.0),
    ]);
    let deduplicated = sites_of(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)]);

    let a: Tessellation<f64, (), ()> = Tessellation::with_triangles(&with_duplicates).unwrap();
    let b: Tessellation<f64, (), ()> = Tessellation::with_triangles(&deduplicated).unwrap();

    let points = |t: &Tessellation<f64, (), ()>| {
        let mut ps: Vec<(u64, u64)> = t
            .cells()
            .map(|(_, c)| (c.point().x().to_bits(), c.point().y().to_bits()))
            .collect();
        ps.sort_unstable();
        ps
    };
    assert_eq!(points(&a), points(&b));
    assert_eq!(a.number_of_edges(), b.number_of_edges());
    assert_eq!(a.triangles().len(), b.triangles().len());
}

#[test]
fn bisector_property_on_an_irregular_cloud() {
    let sites = sites_of(&[
        (0.3, 9.1),
        (4.7, 8.2),
        (8.9, 7.6),
        (1.2, 5.0),
        (6.1, 4.4),
        (3.3, 2.2),
        (7.8, 1.0),
        (0.9, 0.4),
    ]);
    let tessellation: Tessellation<f64, (), ()> = Tessellation::with_triangles(&sites).unwrap();
    assert_eq!(tessellation.number_of_cells(), 8);
    assert!(tessellation.is_valid().is_ok());
    assert!(tessellation.validate_empty_circumcircle().is_ok());

    // Spot-check the bisector property directly on every finite node.
    for (_, edge) in tessellation.edges() {
        let c1 = tessellation.cell(edge.cell1()).unwrap().point();
        let c2 = tessellation.cell(edge.cell2()).unwrap().point();
        for node_key in [edge.node1(), edge.node2()] {
            let node = tessellation.node(node_key).unwrap();
            if node.is_infinite() {
                continue;
            }
            let d1 = distance(&node.position(), &c1);
            let d2 = distance(&node.position(), &c2);
            assert_relative_eq!(d1, d2, epsilon = 1e-9);
        }
    }
}

#[test]
fn vertical_strip_of_sites_builds_rays_only() {
    let sites = sites_of(&[(0.0, 0.0), (0.0, 3.0), (0.0, 6.0), (0.0, 9.0)]);
    let tessellation: Tessellation<f64, (), ()> = Tessellation::with_triangles(&sites).unwrap();

    assert_eq!(tessellation.number_of_cells(), 4);
    assert_eq!(tessellation.number_of_edges(), 3);
    assert!(tessellation.triangles().is_empty());
    for (_, node) in tessellation.nodes() {
        assert!(node.is_infinite());
    }
}

#[test]
fn finite_interior_cell_in_a_plus_arrangement() {
    // Four sites around a center: the center cell is bounded.
    let sites = sites_of(&[(0.0, 0.0), (-4.0, 0.0), (4.0, 0.0), (0.0, -4.0), (0.0, 4.0)]);
    let tessellation: Tessellation<f64, (), ()> = Tessellation::with_triangles(&sites).unwrap();

    assert_eq!(tessellation.number_of_cells(), 5);

    let center_key = tessellation
        .cells()
        .find(|(_, c)| c.point() == Point::new(0.0, 0.0))
        .map(|(k, _)| k)
        .unwrap();
    assert!(!tessellation.is_cell_infinite(center_key));

    let outer_infinite = tessellation
        .cells()
        .filter(|&(k, _)| k != center_key)
        .all(|(k, _)| tessellation.is_cell_infinite(k));
    assert!(outer_infinite);

    assert!(tessellation.is_valid().is_ok());
    assert!(tessellation.validate_empty_circumcircle().is_ok());
}

#[test]
fn empty_input_is_insufficient() {
    let result = Tessellation::<f64, (), ()>::new(&[]);
    assert_eq!(
        result.unwrap_err(),
        TessellationConstructionError::InsufficientPoints { found: 0 }
    );
}
