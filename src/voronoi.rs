use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::edge::{Edge, EdgeKey};
use crate::error::{DiagramError, DiagramResult};
use crate::triangle::Triangle;

/// Voronoi edges as the dual of a triangulation: one edge between the
/// circumcenters of every ordered pair of distinct neighbouring triangles.
///
/// Each adjacency therefore shows up twice, once per direction; see
/// [`unique_voronoi_edges`]. Cells on the outer boundary stay open, no rays
/// are produced.
pub fn voronoi_edges(triangles: Option<&[Triangle]>) -> DiagramResult<Vec<Edge>> {
    let triangles = triangles.ok_or(DiagramError::MissingTriangles)?;

    let mut by_edge: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
    for (i, t) in triangles.iter().enumerate() {
        for edge in t.edges() {
            by_edge.entry(edge.key()).or_default().push(i);
        }
    }

    let mut edges = Vec::new();
    for (i, t) in triangles.iter().enumerate() {
        let neighbours = t
            .edges()
            .iter()
            .flat_map(|e| by_edge[&e.key()].iter().copied())
            .filter(|&j| j != i)
            .sorted_unstable()
            .dedup();

        edges.extend(neighbours.map(|j| Edge::new(t.center(), triangles[j].center())));
    }

    debug!(triangles = triangles.len(), edges = edges.len(), "extracted voronoi edges");
    Ok(edges)
}

/// [`voronoi_edges`] with the per-direction duplicates folded together,
/// keeping the first occurrence of each edge.
pub fn unique_voronoi_edges(triangles: Option<&[Triangle]>) -> DiagramResult<Vec<Edge>> {
    Ok(voronoi_edges(triangles)?
        .into_iter()
        .unique_by(Edge::key)
        .collect())
}

// =============================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::point::Point;

    fn square_pair() -> Vec<Triangle> {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(4.0, 2.0);
        let d = Point::new(0.0, 3.0);
        vec![Triangle::new(a, b, c), Triangle::new(a, c, d)]
    }

    #[test]
    fn test_missing_triangles() {
        assert_eq!(voronoi_edges(None), Err(DiagramError::MissingTriangles));
        assert_eq!(unique_voronoi_edges(None), Err(DiagramError::MissingTriangles));
    }

    #[test]
    fn test_lone_triangle_has_no_edges() {
        let t = Triangle::new((0.0, 0.0).into(), (4.0, 0.0).into(), (2.0, 4.0).into());
        assert!(voronoi_edges(Some(&[t][..])).expect("present").is_empty());
        assert!(voronoi_edges(Some(&[][..])).expect("present").is_empty());
    }

    #[test]
    fn test_both_directions_emitted() {
        let triangles = square_pair();
        let edges = voronoi_edges(Some(triangles.as_slice())).expect("present");

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].start, triangles[0].center());
        assert_eq!(edges[0].end, triangles[1].center());
        assert_eq!(edges[1].start, triangles[1].center());
        assert_eq!(edges[1].end, triangles[0].center());
        assert_eq!(edges[0], edges[1]);

        let unique = unique_voronoi_edges(Some(triangles.as_slice())).expect("present");
        assert_eq!(unique, vec![edges[0]]);
    }

    #[test]
    fn test_identical_triangles_in_distinct_slots_pair_up() {
        let t = Triangle::new((0.0, 0.0).into(), (4.0, 0.0).into(), (2.0, 4.0).into());
        let edges = voronoi_edges(Some(&[t, t][..])).expect("present");

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].length(), 0.0);
    }

    #[test]
    fn test_matches_pairwise_neighbour_scan() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(6.0, 0.0);
        let c = Point::new(3.0, 5.0);
        let m = Point::new(3.0, 2.0);
        let triangles = vec![
            Triangle::new(a, b, m),
            Triangle::new(b, c, m),
            Triangle::new(c, a, m),
        ];

        let expected: Vec<Edge> = triangles
            .iter()
            .enumerate()
            .flat_map(|(i, t)| {
                triangles
                    .iter()
                    .enumerate()
                    .filter(move |&(j, o)| i != j && t.is_neighbour(o))
                    .map(move |(_, o)| Edge::new(t.center(), o.center()))
            })
            .collect();

        let edges = voronoi_edges(Some(triangles.as_slice())).expect("present");
        assert_eq!(edges.len(), 6);
        for (e, x) in edges.iter().zip(&expected) {
            assert_eq!(e.start, x.start);
            assert_eq!(e.end, x.end);
        }
    }
}
