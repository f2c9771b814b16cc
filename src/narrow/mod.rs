//! Narrowphase data and logic module.

pub mod rect;
pub mod sat;

use crate::{body::{Body, Shape}, math::normalize_or, Fp, Vec2};

// ---------- Aabb ---------- //

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}
impl Aabb {
    #[inline]
    pub fn new(minx: Fp, miny: Fp, maxx: Fp, maxy: Fp) -> Aabb {
        debug_assert!(minx <= maxx);
        debug_assert!(miny <= maxy);

        Aabb {
            min: Vec2::new(minx, miny),
            max: Vec2::new(maxx, maxy),
        }
    }
    #[inline]
    pub fn from_center(center: Vec2, half: Vec2) -> Aabb {
        Aabb {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn translate(self, offset: Vec2) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    #[inline]
    pub fn aabb_test(&self, other: &Aabb) -> bool {
        //! Returns whether the boxes overlap. Touching edges count.
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
    #[inline]
    pub fn point_test(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

// ---------- Contact ---------- //

/// Contact information for an overlapping pair.
///
/// Only filled in when a velocity was supplied to the test; discrete tests leave both fields zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contact {
    /// Unit-length contact normal.
    pub normal: Vec2,
    /// Non-negative penetration depth along `normal`.
    pub depth: Fp,
}

// ---------- Shape-Shape intersection tests ---------- //

#[inline]
pub fn bounds_test<O>(a: &Body<O>, b: &Body<O>) -> bool {
    //! The broad rejection test run before every exact test.
    a.bounds().aabb_test(&b.bounds())
}

pub fn circle_circle(pos_a: Vec2, rad_a: Fp, pos_b: Vec2, rad_b: Fp, vel: Option<Vec2>) -> Option<Contact> {
    //! Returns whether the circles overlap. Tangent circles do not.
    //! With `vel`, the normal points from `a` toward `b`.
    let diff = pos_b - pos_a;
    let rad_sum = rad_a + rad_b;
    let dist2 = diff.length_squared();
    if dist2 >= rad_sum * rad_sum {
        return None;
    }

    Some(match vel {
        None => Contact::default(),
        Some(vel) => {
            let dist = dist2.sqrt();
            let normal = if dist > 0.0 {
                diff / dist
            } else {
                // concentric, any direction is as good as another
                normalize_or(vel, Vec2::X)
            };
            Contact { normal, depth: rad_sum - dist }
        }
    })
}

pub(crate) fn narrow_test<O>(a: &Body<O>, b: &Body<O>, vel: Option<Vec2>) -> Option<Contact> {
    match (a.shape(), b.shape()) {
        (Shape::Circle { radius: rad_a }, Shape::Circle { radius: rad_b }) => {
            circle_circle(a.pos, rad_a, b.pos, rad_b, vel)
        }
        (Shape::Circle { radius }, Shape::RotatedRect { width, height }) => {
            rect::circle_rect(a.pos, radius, b.pos, b.rot, Vec2::new(width, height), vel)
        }
        (Shape::RotatedRect { .. }, Shape::Circle { .. }) => narrow_test(b, a, vel),
        (Shape::RotatedRect { .. }, Shape::RotatedRect { .. }) => sat::rect_rect(a, b, vel),
    }
}

pub fn intersect<O>(a: &Body<O>, b: &Body<O>, vel: Option<Vec2>) -> Option<Contact> {
    //! Returns contact information if the bodies overlap, layer masks aside.
    //!
    //! The normal and depth are only computed when `vel` is given. Normal direction per pair:
    //! * circle-circle: from `a`'s center toward `b`'s.
    //! * circle-rect, either order: the rectangle's outward face normal nearest the circle,
    //!   or `-vel` when the circle's center is inside the rectangle.
    //! * rect-rect: the axis of least overlap, oriented from `a` toward `b`.
    if !bounds_test(a, b) {
        return None;
    }
    narrow_test(a, b, vel)
}

#[inline]
pub fn intersects<O>(a: &Body<O>, b: &Body<O>) -> bool {
    intersect(a, b, None).is_some()
}
