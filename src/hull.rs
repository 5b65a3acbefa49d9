use tracing::trace;

use crate::point::{Planar, Point};

/// Convex boundary of a point set, counter-clockwise from the lowest point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvexHull {
    vertices: Vec<Point>,
}

impl ConvexHull {
    /// The boundary, starting at the lowest (then leftmost) input point.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of boundary points, `H`.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// True when `point` is on or inside the boundary.
    ///
    /// A point or segment hull only contains points lying on it.
    pub fn contains(&self, point: Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [only] => *only == point,
            [a, b] => a.area2(*b, point) == 0.0 && point.is_between(*a, *b),
            vertices => vertices
                .iter()
                .zip(vertices.iter().cycle().skip(1))
                .all(|(a, b)| a.area2(*b, point) >= 0.0),
        }
    }

    /// Convexity of the boundary at vertex `i`, judged against its neighbours.
    pub fn is_convex_at(&self, i: usize) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }
        let prev = self.vertices[(i + n - 1) % n];
        let next = self.vertices[(i + 1) % n];
        self.vertices[i % n].is_convex(prev, next)
    }
}

// =============================================================================

/// Gift wrapping (Jarvis march) over a working copy of the points.
struct JarvisMarch {
    points: Vec<Point>,
    hull_len: usize,
}

impl JarvisMarch {
    fn new(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
            hull_len: 0,
        }
    }

    fn index_of_lowest_point(&self) -> usize {
        let mut min = 0;
        for (i, p) in self.points.iter().enumerate().skip(1) {
            let lowest = self.points[min];
            if p.y < lowest.y || p.y == lowest.y && p.x < lowest.x {
                min = i;
            }
        }
        min
    }

    /// Index of the candidate no other candidate is angularly less than, seen
    /// from `pivot`. Index 0 is the start of the hull, so returning it closes
    /// the loop.
    fn index_of_rightmost_point_from(&self, pivot: Point) -> usize {
        let mut best = 0;
        for j in 1..self.points.len() {
            if (self.points[j] - pivot).is_less(self.points[best] - pivot) {
                best = j;
            }
        }
        best
    }

    fn run(mut self) -> ConvexHull {
        let n = self.points.len();
        if n == 0 {
            return ConvexHull::default();
        }

        let mut i = self.index_of_lowest_point();
        loop {
            self.points.swap(self.hull_len, i);
            let pivot = self.points[self.hull_len];
            i = self.index_of_rightmost_point_from(pivot);
            self.hull_len += 1;
            trace!(hull_len = self.hull_len, %pivot, next = i, "gift wrapping step");

            // non-finite input can break the ordering; never wrap more than n times
            if i == 0 || self.hull_len == n {
                break;
            }
        }

        self.points.truncate(self.hull_len);
        ConvexHull {
            vertices: self.points,
        }
    }
}

/// Computes the convex hull of `points` by gift wrapping, in `O(n * H)`.
///
/// Zero, one or two points (and fully collinear inputs) produce an empty,
/// single point, or segment hull respectively. Duplicates never displace an
/// existing boundary point.
pub fn compute_hull(points: &[Point]) -> ConvexHull {
    JarvisMarch::new(points).run()
}

// =============================================================================
