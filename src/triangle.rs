use glam::DVec2;

use crate::edge::Edge;
use crate::point::{Planar, Point};

/// A triangle of the triangulation, with its circumcircle computed up front.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    vertices: [Point; 3],
    center: Point,
    radius: f64,
    degenerate: bool,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let (center, degenerate) = match compute_circumcenter(a, b, c) {
            Some(center) => (center, false),
            None => (Point::ZERO, true),
        };

        Self {
            vertices: [a, b, c],
            center,
            radius: center.distance(a),
            degenerate,
        }
    }

    pub fn a(&self) -> Point {
        self.vertices[0]
    }

    pub fn b(&self) -> Point {
        self.vertices[1]
    }

    pub fn c(&self) -> Point {
        self.vertices[2]
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// `AB`, `BC`, `CA`.
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.vertices;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// The circumcenter, or the origin when the vertices are collinear.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Distance from [`Triangle::center`] to `A`. Only a true circumradius when
    /// the triangle is not degenerate.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True when the vertices are collinear and the center is the origin fallback.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn contains_vertex(&self, point: Point) -> bool {
        self.vertices.contains(&point)
    }

    /// Check if a point is inside the circumcircle of this [`Triangle`],
    /// boundary included.
    pub fn in_circumcircle(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// True when `point` is inside the triangle or on its boundary.
    pub fn contains_point(&self, point: Point) -> bool {
        let [d1, d2, d3] = self.edge_sides(point);
        !self.degenerate
            && (d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0 || d1 <= 0.0 && d2 <= 0.0 && d3 <= 0.0)
    }

    /// True when `point` is inside the triangle and off all three edges.
    pub fn strictly_contains_point(&self, point: Point) -> bool {
        let [d1, d2, d3] = self.edge_sides(point);
        d1 > 0.0 && d2 > 0.0 && d3 > 0.0 || d1 < 0.0 && d2 < 0.0 && d3 < 0.0
    }

    fn edge_sides(&self, point: Point) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        [a.area2(b, point), b.area2(c, point), c.area2(a, point)]
    }

    /// True when the two triangles share an edge, in either direction.
    pub fn is_neighbour(&self, other: &Triangle) -> bool {
        let theirs = other.edges();
        self.edges().iter().any(|e| theirs.contains(e))
    }

    /// Axis aligned box around the circumcircle, padded slightly so the box
    /// never rejects a point the inclusive circumcircle test would accept.
    pub fn bounding_circum_box(&self) -> Aabb {
        let pad = self.radius + 1e-9 * (1.0 + self.radius + self.center.abs().max_element());
        Aabb::new(self.center - pad, self.center + pad)
    }

    /// The points where the circumcircles of two triangles cross.
    ///
    /// `None` when the circles are apart, nested, concentric, or the result
    /// is not a number.
    pub fn circle_intersection(&self, other: &Triangle) -> Option<[Point; 2]> {
        // http://paulbourke.net/geometry/circlesphere/
        let p0 = self.center;
        let p1 = other.center;
        let d = p0.distance(p1);
        let r0 = self.radius;
        let r1 = other.radius;

        if d > r0 + r1 || d < (r0 - r1).abs() || d == 0.0 {
            return None;
        }

        let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
        let h = (r0 * r0 - a * a).sqrt();
        let p2 = p0 + a * (p1 - p0) / d;
        let offset = DVec2::new(-(p1.y - p0.y), p1.x - p0.x) * (h / d);

        let hits = [p2 + offset, p2 - offset];
        hits.iter().all(|p| !p.is_nan()).then_some(hits)
    }
}

/// Vertex order matters: `ABC` and `BCA` are different values.
impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

/// Returns the circumcenter of `(a, b, c)`, or `None` if they are collinear.
fn compute_circumcenter(a: Point, b: Point, c: Point) -> Option<Point> {
    let ab = b - a;
    let ac = c - a;
    let e = ab.x * (a.x + b.x) + ab.y * (a.y + b.y);
    let f = ac.x * (a.x + c.x) + ac.y * (a.y + c.y);
    let g = 2.0 * (ab.x * (c.y - b.y) - ab.y * (c.x - b.x));

    if g == 0.0 {
        return None;
    }

    Some(DVec2::new(
        (ac.y * e - ab.y * f) / g,
        (ab.x * f - ac.x * e) / g,
    ))
}

// =============================================================================

/// Axis aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.min.cmple(point).all() && point.cmple(self.max).all()
    }
}

// =============================================================================

#[cfg(test)]
mod test {
    use rand::Rng;
    use rand_distr::StandardNormal;

    use super::*;

    trait AlmostEqual {
        fn almost_equal(&self, other: Self, epsilon: Self) -> bool;
    }

    impl AlmostEqual for f64 {
        fn almost_equal(&self, other: Self, epsilon: Self) -> bool {
            (self - other).abs() < epsilon
        }
    }

    fn random_circle_point() -> Point {
        let x: f64 = rand::thread_rng().sample(StandardNormal);
        let y: f64 = rand::thread_rng().sample(StandardNormal);

        let mut v = Point::new(x, y);

        if v.length() == 0.0 {
            v += Point::new(0.01, 0.01);
        }

        v.normalize()
    }

    fn random_circle_triangle() -> (Triangle, Point, f64) {
        let center_dist = rand::distributions::Uniform::from(-100.0..100.0);

        let center = Point::new(
            rand::thread_rng().sample(center_dist),
            rand::thread_rng().sample(center_dist),
        );

        let radius = rand::thread_rng().sample(rand::distributions::Uniform::from(1.0..100.0));

        let [a, b, c] = [0, 1, 2].map(|_| random_circle_point() * radius + center);
        (Triangle::new(a, b, c), center, radius)
    }

    #[test]
    fn test_random_circumcircle_passes_through_all_vertices() {
        for _ in 0..50 {
            let (t, true_center, true_radius) = random_circle_triangle();
            if t.is_degenerate() {
                continue;
            }

            // radius is measured to A; B and C must agree with it
            for v in [t.b(), t.c()] {
                let d = t.center().distance(v);
                if !d.almost_equal(t.radius(), 1e-6 * true_radius) {
                    panic!(
                        "Vertex {} at {} from center {}, radius {}",
                        v,
                        d,
                        t.center(),
                        t.radius()
                    )
                }
            }

            assert!(t.in_circumcircle(true_center));
            assert!(!t.in_circumcircle(true_center + Point::X * (true_radius * 1.01)));
        }
    }

    #[test]
    fn test_radius_to_every_vertex() {
        let t = Triangle::new((0.0, 0.0).into(), (4.0, 0.0).into(), (2.0, 4.0).into());

        assert!(t.center().abs_diff_eq(Point::new(2.0, 1.5), 1e-12));
        assert!(t.radius().almost_equal(2.5, 1e-12));
        for v in t.vertices() {
            assert!(t.center().distance(v).almost_equal(t.radius(), 1e-12));
        }
    }

    #[test]
    fn test_in_circumcircle() {
        let t = Triangle::new((0.0, 0.0).into(), (4.0, 0.0).into(), (2.0, 4.0).into());

        assert!(t.in_circumcircle(Point::new(2.0, 1.0)));
        assert!(t.in_circumcircle(Point::new(2.0, 1.5 + 2.5 * 0.99)));
        assert!(!t.in_circumcircle(Point::new(2.0, 1.5 + 2.5 * 1.01)));
        // boundary is inclusive
        assert!(t.in_circumcircle(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_collinear_falls_back_to_origin() {
        let t = Triangle::new((1.0, 1.0).into(), (2.0, 2.0).into(), (3.0, 3.0).into());

        assert!(t.is_degenerate());
        assert_eq!(t.center(), Point::ZERO);
        assert!(t.radius().almost_equal(2f64.sqrt(), 1e-12));
    }

    #[test]
    fn test_neighbours() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(2.0, 4.0);
        let d = Point::new(2.0, -4.0);
        let e = Point::new(9.0, 9.0);

        let t1 = Triangle::new(a, b, c);
        let t2 = Triangle::new(b, a, d);
        let t3 = Triangle::new(c, e, Point::new(9.0, 0.0));

        assert!(t1.is_neighbour(&t2));
        assert!(t2.is_neighbour(&t1));
        // sharing a lone vertex is not enough
        assert!(!t1.is_neighbour(&t3));
    }

    #[test]
    fn test_circle_intersection() {
        // both circumcircles have radius 2.5, centers (2, 1.5) and (2, -1.5)
        let t1 = Triangle::new((0.0, 0.0).into(), (4.0, 0.0).into(), (2.0, 4.0).into());
        let t2 = Triangle::new((0.0, 0.0).into(), (4.0, 0.0).into(), (2.0, -4.0).into());

        let [p, q] = t1.circle_intersection(&t2).expect("circles overlap");
        let mut xs = [p.x, q.x];
        xs.sort_by(f64::total_cmp);
        assert!(xs[0].almost_equal(0.0, 1e-9));
        assert!(xs[1].almost_equal(4.0, 1e-9));
        assert!(p.y.almost_equal(0.0, 1e-9));

        let far = Triangle::new((100.0, 0.0).into(), (101.0, 0.0).into(), (100.0, 1.0).into());
        assert!(t1.circle_intersection(&far).is_none());
        assert!(t1.circle_intersection(&t1).is_none());
    }

    #[test]
    fn test_point_location() {
        let t = Triangle::new((0.0, 0.0).into(), (4.0, 0.0).into(), (2.0, 4.0).into());
        let flipped = Triangle::new((0.0, 0.0).into(), (2.0, 4.0).into(), (4.0, 0.0).into());

        for tri in [t, flipped] {
            assert!(tri.contains_point(Point::new(2.0, 1.0)));
            assert!(tri.strictly_contains_point(Point::new(2.0, 1.0)));

            // on an edge: covered but not strictly inside
            assert!(tri.contains_point(Point::new(2.0, 0.0)));
            assert!(!tri.strictly_contains_point(Point::new(2.0, 0.0)));

            assert!(!tri.contains_point(Point::new(5.0, 1.0)));
            assert!(!tri.strictly_contains_point(Point::new(5.0, 1.0)));
        }

        let flat = Triangle::new((0.0, 0.0).into(), (1.0, 0.0).into(), (2.0, 0.0).into());
        assert!(!flat.contains_point(Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_circum_box_contains_circle() {
        for _ in 0..20 {
            let (t, _, _) = random_circle_triangle();
            let bb = t.bounding_circum_box();
            for v in t.vertices() {
                assert!(bb.contains(v));
            }
        }
    }
}
