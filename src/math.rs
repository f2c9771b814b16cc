//! Angle type and the few vector helpers glam doesn't already provide.

use crate::{consts::{PI, TAU}, Fp, Vec2};
use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Neg, Sub};

/// A signed angle in radians. Positive angles turn +x toward +y.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(Fp);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn from_radians(rad: Fp) -> Angle {
        Angle(rad)
    }
    #[inline]
    pub fn from_degrees(deg: Fp) -> Angle {
        Angle(deg.to_radians())
    }

    #[inline]
    pub fn radians(self) -> Fp {
        self.0
    }
    #[inline]
    pub fn degrees(self) -> Fp {
        self.0.to_degrees()
    }

    #[inline]
    pub fn unit(self) -> Vec2 {
        //! Returns the unit-length direction this angle points in.
        Vec2::new(self.0.cos(), self.0.sin())
    }
    #[inline]
    pub fn rotate(self, v: Vec2) -> Vec2 {
        //! Rotates `v` about the origin.
        self.unit().rotate(v)
    }
    #[inline]
    pub fn inverse(self) -> Angle {
        Angle(-self.0)
    }

    pub fn normalized(self) -> Angle {
        //! Wraps the angle into `(-π, π]`.
        let mut rad = self.0 % TAU;
        if rad > PI {
            rad -= TAU;
        } else if rad <= -PI {
            rad += TAU;
        }
        Angle(rad)
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}
impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        self.inverse()
    }
}

impl AbsDiffEq for Angle {
    type Epsilon = Fp;

    fn default_epsilon() -> Fp {
        Fp::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Angle, epsilon: Fp) -> bool {
        // whole turns apart compare equal
        (*self - *other).normalized().0.abs() <= epsilon
    }
}
impl RelativeEq for Angle {
    fn default_max_relative() -> Fp {
        Fp::default_max_relative()
    }
    fn relative_eq(&self, other: &Angle, epsilon: Fp, max_relative: Fp) -> bool {
        self.abs_diff_eq(other, epsilon)
            || self.normalized().0.relative_eq(&other.normalized().0, epsilon, max_relative)
    }
}

// ---------- Vector helpers ---------- //

#[inline]
pub fn rotate_around(point: Vec2, center: Vec2, angle: Angle) -> Vec2 {
    //! Rotates `point` about `center`.
    center + angle.rotate(point - center)
}

#[inline]
pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    //! Normalizes `v`, returning `fallback` where the result would be NaN or infinite.
    v.try_normalize().unwrap_or(fallback)
}
