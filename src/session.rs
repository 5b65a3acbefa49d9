use tracing::{debug, info};

use crate::delaunay::{self, Bounds, Triangulation, TriangulationConfig};
use crate::edge::Edge;
use crate::error::DiagramResult;
use crate::hull::{compute_hull, ConvexHull};
use crate::point::Point;
use crate::triangle::Triangle;
use crate::voronoi;

/// The points and triangulation behind one interactive diagram.
///
/// Owned by a single caller; insertions are order dependent and must not be
/// interleaved from several writers.
#[derive(Debug, Clone)]
pub struct DiagramSession {
    points: Vec<Point>,
    triangulation: Triangulation,
    bounds: Bounds,
    config: TriangulationConfig,
}

impl DiagramSession {
    pub fn new(bounds: Bounds) -> DiagramResult<Self> {
        Self::with_config(bounds, TriangulationConfig::default())
    }

    pub fn with_config(bounds: Bounds, config: TriangulationConfig) -> DiagramResult<Self> {
        bounds.validate()?;
        config.validate()?;

        Ok(Self {
            points: Vec::new(),
            triangulation: Triangulation::new(),
            bounds,
            config,
        })
    }

    /// Records `point`. Points strictly inside the current triangles are
    /// inserted incrementally; anything else (the first point, points on an
    /// edge or outside the bounds) triggers a full build.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);

        if self.triangulation.strictly_encloses(point) {
            self.triangulation.insert(point);
        } else {
            debug!(%point, "point not strictly inside the triangulation, rebuilding");
            self.rebuild();
        }
    }

    /// Changes the bounds and rebuilds everything from the recorded points.
    pub fn resize(&mut self, bounds: Bounds) -> DiagramResult<()> {
        bounds.validate()?;
        self.bounds = bounds;
        self.rebuild();
        Ok(())
    }

    /// Drops all points and triangles; bounds and config are kept.
    pub fn reset(&mut self) {
        self.points.clear();
        self.triangulation.clear();
        debug!("session reset");
    }

    pub fn rebuild(&mut self) {
        self.triangulation = delaunay::build(&self.points, self.bounds, &self.config);
        info!(
            points = self.points.len(),
            triangles = self.triangulation.len(),
            width = self.bounds.width,
            height = self.bounds.height,
            "rebuilt diagram"
        );
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &TriangulationConfig {
        &self.config
    }

    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    pub fn triangles(&self) -> &[Triangle] {
        self.triangulation.triangles()
    }

    /// Convex hull of the recorded points (bounds corners excluded).
    pub fn hull(&self) -> ConvexHull {
        compute_hull(&self.points)
    }

    pub fn voronoi_edges(&self) -> Vec<Edge> {
        // the triangle set is always present here
        voronoi::voronoi_edges(Some(self.triangles())).unwrap_or_default()
    }
}

// =============================================================================
