use thiserror::Error;

/// Errors surfaced by the diagram core.
///
/// Geometric degeneracies (collinear triangles, duplicate points) are never
/// reported here; they are absorbed with a fallback value where they occur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagramError {
    /// No triangle collection was supplied to the Voronoi extraction.
    #[error("triangle collection cannot be absent")]
    MissingTriangles,

    /// The bounding rectangle has a negative or non-finite extent.
    #[error("invalid bounds: {width} x {height}")]
    InvalidBounds { width: f64, height: f64 },

    /// A triangulation tunable is out of range.
    #[error("invalid triangulation config: {0}")]
    InvalidConfig(&'static str),
}

pub type DiagramResult<T> = Result<T, DiagramError>;
