use glam::DVec2;

/// A point (or direction) in the plane.
pub type Point = DVec2;

/// Planar predicates on top of [`DVec2`].
///
/// Every component of the diagram core goes through these; in particular the
/// hull relies on [`Planar::is_less`] being a strict order over directions.
pub trait Planar: Sized {
    /// `cross(u, v) = u.x * v.y - u.y * v.x`, twice the signed area of the
    /// triangle `(0, u, v)`.
    fn cross(&self, other: Self) -> f64;

    /// `|x| + |y|`
    fn manhattan(&self) -> f64;

    /// Twice the signed area of `(self, q, r)`. Positive for a counter-clockwise
    /// turn, negative for clockwise, zero when collinear.
    fn area2(&self, q: Self, r: Self) -> f64;

    /// True when `self` lies on the straight line between `prev` and `next`.
    fn is_between(&self, prev: Self, next: Self) -> bool;

    /// True when the path `prev -> self -> next` turns right, or goes
    /// straight without reversing.
    fn is_convex(&self, prev: Self, next: Self) -> bool;

    /// Angular order of directions seen from a common pivot: `self` sorts
    /// before `other` when it is clockwise of it, or collinear and farther.
    fn is_less(&self, other: Self) -> bool;

    /// Compares Manhattan lengths.
    fn is_further(&self, other: Self) -> bool;

    /// Signed angle between the two vectors, in radians.
    fn signed_angle(&self, other: Self) -> f64;

    /// Reflects `self` off the line with the given unit normal.
    fn reflect_about(&self, normal: Self) -> Self;
}

impl Planar for DVec2 {
    fn cross(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn manhattan(&self) -> f64 {
        self.x.abs() + self.y.abs()
    }

    fn area2(&self, q: Self, r: Self) -> f64 {
        (q - *self).cross(r - *self)
    }

    fn is_between(&self, prev: Self, next: Self) -> bool {
        let u = prev - *self;
        let v = next - *self;
        (u - v).manhattan() >= u.manhattan() + v.manhattan()
    }

    fn is_convex(&self, prev: Self, next: Self) -> bool {
        let f = self.area2(prev, next);
        f < 0.0 || f == 0.0 && !self.is_between(prev, next)
    }

    fn is_less(&self, other: Self) -> bool {
        let f = self.cross(other);
        f > 0.0 || f == 0.0 && self.is_further(other)
    }

    fn is_further(&self, other: Self) -> bool {
        self.manhattan() > other.manhattan()
    }

    fn signed_angle(&self, other: Self) -> f64 {
        self.x.atan2(self.y) - other.x.atan2(other.y)
    }

    fn reflect_about(&self, normal: Self) -> Self {
        *self - 2.0 * self.dot(normal) * normal
    }
}

// =============================================================================
