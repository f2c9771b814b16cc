use crate::{math::Angle, narrow::Aabb, Fp, Vec2, DEFAULT_MASK};

/// The geometry of a `Body`, stored by value. Reassigning the variant leaves no stale fields behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: Fp },
    /// Width and height before rotation. Rotation is taken from the owning `Body`.
    RotatedRect { width: Fp, height: Fp },
}

impl Shape {
    #[inline]
    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle { .. })
    }
    #[inline]
    pub fn is_rotated_rect(&self) -> bool {
        matches!(self, Shape::RotatedRect { .. })
    }
}

/// A single collidable shape with a transform, a layer mask, and an opaque owner.
///
/// `pos`, `rot` and `mask` are meant to be mutated in place every tick. The shape
/// itself is changed through the `init_*` family, which resets everything but the transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Body<O> {
    /// Position of the shape's center.
    pub pos: Vec2,
    /// Rotation about `pos`. Only meaningful for rectangles.
    pub rot: Angle,
    /// Layer bits. Two bodies may only collide when their masks intersect.
    pub mask: u16,
    owner: O,
    shape: Shape,
    disposed: bool,
    is_static: bool,
}

impl<O> Body<O> {
    fn new(owner: O, shape: Shape, is_static: bool) -> Body<O> {
        Body {
            pos: Vec2::ZERO,
            rot: Angle::ZERO,
            mask: DEFAULT_MASK,
            owner,
            shape,
            disposed: false,
            is_static,
        }
    }

    pub fn circle(owner: O, radius: Fp) -> Body<O> {
        Body::new(owner, Shape::Circle { radius }, false)
    }
    pub fn static_circle(owner: O, radius: Fp) -> Body<O> {
        Body::new(owner, Shape::Circle { radius }, true)
    }
    pub fn rotated_rect(owner: O, width: Fp, height: Fp) -> Body<O> {
        Body::new(owner, Shape::RotatedRect { width, height }, false)
    }
    pub fn static_rotated_rect(owner: O, width: Fp, height: Fp) -> Body<O> {
        Body::new(owner, Shape::RotatedRect { width, height }, true)
    }

    #[inline]
    pub fn with_position(mut self, pos: Vec2) -> Body<O> {
        self.pos = pos;
        self
    }
    #[inline]
    pub fn with_rotation(mut self, rot: Angle) -> Body<O> {
        self.rot = rot;
        self
    }
    #[inline]
    pub fn with_mask(mut self, mask: u16) -> Body<O> {
        self.mask = mask;
        self
    }

    // ---------- Re-initialization ---------- //

    fn reinit(&mut self, owner: O, shape: Shape, is_static: bool) {
        // the transform survives, so callers may position before or after init
        self.owner = owner;
        self.shape = shape;
        self.mask = DEFAULT_MASK;
        self.disposed = false;
        self.is_static = is_static;
    }

    pub fn init_circle(&mut self, owner: O, radius: Fp) {
        //! Turns this body into a dynamic circle, keeping its position and rotation.
        self.reinit(owner, Shape::Circle { radius }, false);
    }
    pub fn init_static_circle(&mut self, owner: O, radius: Fp) {
        self.reinit(owner, Shape::Circle { radius }, true);
    }
    pub fn init_rotated_rect(&mut self, owner: O, width: Fp, height: Fp) {
        //! Turns this body into a dynamic rectangle, keeping its position and rotation.
        self.reinit(owner, Shape::RotatedRect { width, height }, false);
    }
    pub fn init_static_rotated_rect(&mut self, owner: O, width: Fp, height: Fp) {
        self.reinit(owner, Shape::RotatedRect { width, height }, true);
    }

    // ---------- Accessors ---------- //

    #[inline]
    pub fn owner(&self) -> &O {
        &self.owner
    }
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }
    #[inline]
    pub fn is_circle(&self) -> bool {
        self.shape.is_circle()
    }
    #[inline]
    pub fn is_rotated_rect(&self) -> bool {
        self.shape.is_rotated_rect()
    }

    pub fn circle_radius(&self) -> Option<Fp> {
        //! Safe alternative to `expect_radius`.
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::RotatedRect { .. } => None,
        }
    }
    pub fn rect_size(&self) -> Option<Vec2> {
        //! Safe alternative to `expect_rect_size`. Returns `(width, height)`.
        match self.shape {
            Shape::RotatedRect { width, height } => Some(Vec2::new(width, height)),
            Shape::Circle { .. } => None,
        }
    }
    #[track_caller]
    pub fn expect_radius(&self) -> Fp {
        //! # Panics
        //! If the body is not a circle.
        match self.circle_radius() {
            Some(radius) => radius,
            None => panic!("expected a circle body, found {:?}", self.shape),
        }
    }
    #[track_caller]
    pub fn expect_rect_size(&self) -> Vec2 {
        //! # Panics
        //! If the body is not a rotated rectangle.
        match self.rect_size() {
            Some(size) => size,
            None => panic!("expected a rotated rectangle body, found {:?}", self.shape),
        }
    }

    // ---------- Lifecycle ---------- //

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
    #[inline]
    pub fn dispose(&mut self) {
        //! Marks the body dead. Engines drop it on their next `recompute_frame`.
        self.disposed = true;
    }
    #[inline]
    pub fn is_static(&self) -> bool {
        self.is_static
    }
    #[inline]
    pub fn set_static(&mut self, is_static: bool) {
        //! Takes effect in an engine at its next `recompute_frame`.
        self.is_static = is_static;
    }

    // ---------- Geometry ---------- //

    pub fn bounds(&self) -> Aabb {
        //! Returns a bounding box for broad rejection. Rectangles get a loose square
        //! of half-extent `max(width, height)`, wide enough for any rotation.
        let half = match self.shape {
            Shape::Circle { radius } => radius,
            Shape::RotatedRect { width, height } => Fp::max(width, height),
        };
        Aabb::from_center(self.pos, Vec2::splat(half))
    }

    #[track_caller]
    pub fn rect_vertices(&self) -> [Vec2; 4] {
        //! Returns the corners as `[upper-left, upper-right, lower-right, lower-left]`, y pointing down.
        //! # Panics
        //! If the body is not a rotated rectangle.
        let half = self.expect_rect_size() * 0.5;
        let (x, y) = (self.rot.rotate(Vec2::new(half.x, 0.0)), self.rot.rotate(Vec2::new(0.0, half.y)));
        [
            self.pos - x - y,
            self.pos + x - y,
            self.pos + x + y,
            self.pos - x + y,
        ]
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        //! Returns whether `point` lies within the shape, boundary included.
        match self.shape {
            Shape::Circle { radius } => (point - self.pos).length_squared() <= radius * radius,
            Shape::RotatedRect { width, height } => {
                let local = self.rot.inverse().rotate(point - self.pos);
                local.x.abs() <= width * 0.5 && local.y.abs() <= height * 0.5
            }
        }
    }
}

impl<O: Clone> Body<O> {
    pub fn translated(&self, offset: Vec2) -> Body<O> {
        //! Returns a copy moved by `offset`, leaving `self` untouched.
        let mut virt = self.clone();
        virt.pos += offset;
        virt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn init_resets_shape_state() {
        let mut b = Body::circle(7u32, 2.0).with_position(Vec2::new(3.0, 4.0)).with_rotation(Angle::from_degrees(30.0)).with_mask(0b110);
        b.dispose();
        assert_eq!(b.is_disposed(), true);

        b.init_static_rotated_rect(8, 4.0, 1.0);
        assert_eq!(b.is_rotated_rect(), true);
        assert_eq!(b.is_static(), true);
        assert_eq!(b.is_disposed(), false);
        assert_eq!(b.mask, DEFAULT_MASK);
        assert_eq!(*b.owner(), 8);
        assert_eq!(b.pos, Vec2::new(3.0, 4.0));
        assert_eq!(b.rot, Angle::from_degrees(30.0));
        assert_eq!(b.circle_radius(), None);
        assert_eq!(b.rect_size(), Some(Vec2::new(4.0, 1.0)));

        b.init_circle(9, 0.5);
        assert_eq!(b.shape(), Shape::Circle { radius: 0.5 });
        assert_eq!(b.is_static(), false);
        assert_eq!(b.expect_radius(), 0.5);
    }

    #[test]
    fn dispose_is_idempotent() {
        let mut b = Body::circle((), 1.0);
        b.dispose();
        b.dispose();
        assert_eq!(b.is_disposed(), true);
    }

    #[test]
    #[should_panic(expected = "expected a circle")]
    fn radius_of_rect_panics() {
        Body::rotated_rect((), 1.0, 1.0).expect_radius();
    }

    #[test]
    #[should_panic(expected = "expected a rotated rectangle")]
    fn vertices_of_circle_panic() {
        Body::circle((), 1.0).rect_vertices();
    }

    #[test]
    fn bounds() {
        let c = Body::circle((), 1.5).with_position(Vec2::new(1.0, -1.0));
        assert_eq!(c.bounds(), Aabb::new(-0.5, -2.5, 2.5, 0.5));

        let r = Body::rotated_rect((), 4.0, 2.0).with_position(Vec2::new(1.0, 1.0)).with_rotation(Angle::from_degrees(45.0));
        assert_eq!(r.bounds(), Aabb::new(-3.0, -3.0, 5.0, 5.0));
        for v in r.rect_vertices().iter() {
            assert_eq!(r.bounds().point_test(*v), true);
        }
    }

    #[test]
    fn vertices_order() {
        let r = Body::rotated_rect((), 4.0, 2.0).with_position(Vec2::new(10.0, 10.0));
        let v = r.rect_vertices();
        assert_abs_diff_eq!(v[0], Vec2::new(8.0, 9.0), epsilon = 1e-5);
        assert_abs_diff_eq!(v[1], Vec2::new(12.0, 9.0), epsilon = 1e-5);
        assert_abs_diff_eq!(v[2], Vec2::new(12.0, 11.0), epsilon = 1e-5);
        assert_abs_diff_eq!(v[3], Vec2::new(8.0, 11.0), epsilon = 1e-5);

        // a quarter turn carries the upper-left corner to the upper-right quadrant
        let r = r.with_rotation(Angle::from_degrees(90.0));
        let v = r.rect_vertices();
        assert_abs_diff_eq!(v[0], Vec2::new(11.0, 8.0), epsilon = 1e-5);
        assert_abs_diff_eq!(v[2], Vec2::new(9.0, 12.0), epsilon = 1e-5);
    }

    #[test]
    fn point_containment() {
        let r = Body::rotated_rect((), 4.0, 0.5).with_rotation(Angle::from_degrees(90.0));
        assert_eq!(r.contains_point(Vec2::new(0.0, 1.9)), true);
        assert_eq!(r.contains_point(Vec2::new(1.9, 0.0)), false);

        let c = Body::circle((), 1.0).with_position(Vec2::new(1.0, 1.0));
        assert_eq!(c.contains_point(Vec2::new(1.5, 1.5)), true);
        assert_eq!(c.contains_point(Vec2::new(2.0, 2.0)), false);
    }

    #[test]
    fn translated_copy() {
        let b = Body::circle(1u8, 1.0).with_position(Vec2::new(1.0, 2.0));
        let t = b.translated(Vec2::new(-1.0, 1.0));
        assert_eq!(t.pos, Vec2::new(0.0, 3.0));
        assert_eq!(b.pos, Vec2::new(1.0, 2.0));
    }
}
