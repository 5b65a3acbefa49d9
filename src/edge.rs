use std::fmt;

use crate::point::Point;

/// A segment between two points. Equality ignores direction.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The same segment traversed the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// A hashable key shared by an edge and its reverse.
    pub fn key(&self) -> EdgeKey {
        let a = point_bits(self.start);
        let b = point_bits(self.end);
        if a <= b {
            EdgeKey([a[0], a[1], b[0], b[1]])
        } else {
            EdgeKey([b[0], b[1], a[0], a[1]])
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

// =============================================================================

/// Canonical, direction independent identity of an [`Edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey([u64; 4]);

fn point_bits(p: Point) -> [u64; 2] {
    // adding zero folds -0.0 into 0.0 so the key agrees with `==`
    [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()]
}

// =============================================================================
