use std::collections::HashMap;

use rstar::{
    primitives::{GeomWithData, Rectangle},
    RTree,
};
use tracing::{debug, warn};

use crate::edge::{Edge, EdgeKey};
use crate::error::{DiagramError, DiagramResult};
use crate::point::Point;
use crate::triangle::Triangle;

/// Size of the visualised area; its corners are `(0, 0)` and `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> DiagramResult<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(DiagramError::InvalidBounds {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// `(0, 0)`, `(0, h)`, `(w, 0)`, `(w, h)`.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(0.0, self.height),
            Point::new(self.width, 0.0),
            Point::new(self.width, self.height),
        ]
    }
}

/// Tunables for a full build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationConfig {
    /// Scale of the super-triangle relative to the largest coordinate magnitude.
    pub super_triangle_margin: f64,
    /// Insert the four corners of the bounds after the input points.
    pub include_bounds_corners: bool,
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        Self {
            super_triangle_margin: 10.0,
            include_bounds_corners: true,
        }
    }
}

impl TriangulationConfig {
    pub fn validate(&self) -> DiagramResult<()> {
        // the margin must push the super-triangle past every input point
        if !self.super_triangle_margin.is_finite() || self.super_triangle_margin <= 3.0 {
            return Err(DiagramError::InvalidConfig(
                "super_triangle_margin must be finite and greater than 3",
            ));
        }
        Ok(())
    }
}

// =============================================================================

type TreePoint = [f64; 2];
type TreeRect = Rectangle<TreePoint>;
type IndexRect = GeomWithData<TreeRect, usize>;

fn index_rect(triangle: &Triangle, index: usize) -> IndexRect {
    let bb = triangle.bounding_circum_box();
    IndexRect::new(TreeRect::from_corners(bb.min.into(), bb.max.into()), index)
}

/// A set of triangles that grows one point at a time (Bowyer-Watson).
///
/// Circumcircle candidates are looked up through an R-tree of circumcircle
/// bounding boxes; the inclusive distance test has the final word.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    lookup_accel: RTree<IndexRect>,
    bad_triangles: Vec<usize>,
    polygon: Vec<Edge>,
}

impl Triangulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts an existing triangle set, in its current order.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let rects = triangles
            .iter()
            .enumerate()
            .map(|(i, t)| index_rect(t, i))
            .collect();

        Self {
            triangles,
            lookup_accel: RTree::bulk_load(rects),
            bad_triangles: Vec::new(),
            polygon: Vec::new(),
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lookup_accel = RTree::new();
    }

    /// Keeps only the triangles matching `keep`, rebuilding the lookup tree.
    pub fn retain<F: FnMut(&Triangle) -> bool>(&mut self, keep: F) {
        let mut triangles = std::mem::take(&mut self.triangles);
        triangles.retain(keep);
        *self = Self::from_triangles(triangles);
    }

    pub fn add_points<T: IntoIterator<Item = Point>>(&mut self, from: T) {
        for p in from {
            self.insert(p)
        }
    }

    /// True when `point` lies in one of the triangles, edges included.
    pub fn covers(&self, point: Point) -> bool {
        self.lookup_accel
            .locate_all_at_point(&point.into())
            .any(|rect| self.triangles[rect.data].contains_point(point))
    }

    /// True when `point` lies strictly inside one of the triangles.
    pub fn strictly_encloses(&self, point: Point) -> bool {
        self.lookup_accel
            .locate_all_at_point(&point.into())
            .any(|rect| self.triangles[rect.data].strictly_contains_point(point))
    }

    /// Inserts one point: every triangle whose circumcircle holds `point` is
    /// removed, and the hole is re-triangulated as a fan around `point`.
    ///
    /// The cavity is only star-shaped for points the triangles already cover.
    /// A point outside them yields overlapping triangles; rebuild instead.
    pub fn insert(&mut self, point: Point) {
        if !point.is_finite() {
            warn!(%point, "skipping non-finite point");
            return;
        }
        if !self.triangles.is_empty() && !self.covers(point) {
            warn!(%point, "inserting outside the triangulated area, triangles will overlap");
        }

        self.bad_triangles.clear();
        for rect in self.lookup_accel.locate_all_at_point(&point.into()) {
            if self.triangles[rect.data].in_circumcircle(point) {
                self.bad_triangles.push(rect.data);
            }
        }
        // highest slot first, so swap_remove never moves a triangle still to be removed
        self.bad_triangles.sort_unstable_by(|a, b| b.cmp(a));

        self.find_boundary_polygon();
        self.remove_bad_triangles();
        let created = self.create_new_triangles(point);

        debug!(
            %point,
            removed = self.bad_triangles.len(),
            boundary = self.polygon.len(),
            created,
            total = self.triangles.len(),
            "inserted point"
        );
    }

    /// Collects the edges of the bad triangles and cancels every edge that
    /// occurs twice; what survives is the boundary of the cavity.
    fn find_boundary_polygon(&mut self) {
        self.polygon.clear();

        let mut counts: HashMap<EdgeKey, usize> = HashMap::new();
        let mut order: Vec<Edge> = Vec::with_capacity(self.bad_triangles.len() * 3);

        for &bad in &self.bad_triangles {
            for edge in self.triangles[bad].edges() {
                let count = counts.entry(edge.key()).or_insert(0);
                if *count == 0 {
                    order.push(edge);
                }
                *count += 1;
            }
        }

        self.polygon
            .extend(order.into_iter().filter(|e| counts[&e.key()] % 2 == 1));
    }

    fn remove_bad_triangles(&mut self) {
        for &bad in &self.bad_triangles {
            let last = self.triangles.len() - 1;

            self.lookup_accel
                .remove(&index_rect(&self.triangles[bad], bad));

            if bad != last {
                // the last triangle moves into the freed slot
                self.lookup_accel
                    .remove(&index_rect(&self.triangles[last], last));
                self.lookup_accel
                    .insert(index_rect(&self.triangles[last], bad));
            }

            self.triangles.swap_remove(bad);
        }
    }

    fn create_new_triangles(&mut self, point: Point) -> usize {
        for edge in &self.polygon {
            let triangle = Triangle::new(edge.start, edge.end, point);
            if triangle.is_degenerate() {
                warn!(%edge, %point, "created collinear triangle");
            }

            let spot = self.triangles.len();
            self.lookup_accel.insert(index_rect(&triangle, spot));
            self.triangles.push(triangle);
        }
        self.polygon.len()
    }
}

// =============================================================================

/// A triangle enclosing every point, scaled by the largest coordinate
/// magnitude `m`: `(k m, 0)`, `(0, k m)`, `(-k m, -k m)` for margin `k`.
pub fn super_triangle(points: &[Point], margin: f64) -> Triangle {
    let m = points
        .iter()
        .fold(0.0_f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
    let m = if m > 0.0 { m } else { 1.0 };

    Triangle::new(
        Point::new(margin * m, 0.0),
        Point::new(0.0, margin * m),
        Point::new(-margin * m, -margin * m),
    )
}

fn seed_is_usable(seed: &Triangle) -> bool {
    !seed.is_degenerate() && seed.radius().is_finite() && seed.center().is_finite()
}

/// Full build with the default [`TriangulationConfig`].
pub fn triangulate(points: &[Point], bounds: Bounds) -> DiagramResult<Triangulation> {
    triangulate_with(points, bounds, &TriangulationConfig::default())
}

/// Full build: seeds a super-triangle, inserts `points` followed by the
/// corners of `bounds`, then drops every triangle touching the super-triangle.
pub fn triangulate_with(
    points: &[Point],
    bounds: Bounds,
    config: &TriangulationConfig,
) -> DiagramResult<Triangulation> {
    bounds.validate()?;
    config.validate()?;

    Ok(build(points, bounds, config))
}

/// [`triangulate_with`] on inputs that were already validated.
pub(crate) fn build(points: &[Point], bounds: Bounds, config: &TriangulationConfig) -> Triangulation {
    let mut verts: Vec<Point> = points.iter().copied().filter(|p| p.is_finite()).collect();
    if config.include_bounds_corners {
        verts.extend(bounds.corners());
    }

    let seed = super_triangle(&verts, config.super_triangle_margin);
    if !seed_is_usable(&seed) {
        warn!(
            center = %seed.center(),
            radius = seed.radius(),
            "super-triangle circumcircle overflowed, coordinates are too large"
        );
    }
    let mut triangulation = Triangulation::from_triangles(vec![seed]);
    triangulation.add_points(verts.iter().copied());

    let seed_vertices = seed.vertices();
    triangulation.retain(|t| !t.vertices().iter().any(|v| seed_vertices.contains(v)));

    debug!(
        points = verts.len(),
        triangles = triangulation.len(),
        "built triangulation"
    );
    triangulation
}

/// Adds one point to an existing triangulation without rebuilding it.
pub fn triangulate_insert(point: Point, triangulation: &mut Triangulation) {
    triangulation.insert(point)
}

// =============================================================================
