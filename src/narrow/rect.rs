//! Circle against rotated rectangle.

use super::Contact;
use crate::{math::{normalize_or, Angle}, Fp, Vec2};

/// Which vertical edge of a rectangle, if any, a point lies beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XSide {
    None = 0,
    Left = 1,
    Right = 2,
}

/// Which horizontal edge of a rectangle, if any, a point lies beyond. Y points down, so upper is -y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YSide {
    None = 0,
    Upper = 1,
    Lower = 2,
}

/// Degrees added to the rectangle's rotation to get the outward normal, indexed `[XSide][YSide]`.
/// Corners use the fixed diagonal rather than the true corner-to-center direction.
const SIDE_DELTAS: [[Option<Fp>; 3]; 3] = [
    //  None          Upper          Lower
    [None,        Some(-90.0),  Some(90.0)],  // XSide::None
    [Some(180.0), Some(-135.0), Some(135.0)], // XSide::Left
    [Some(0.0),   Some(-45.0),  Some(45.0)],  // XSide::Right
];

#[inline]
pub fn side_delta(x: XSide, y: YSide) -> Option<Angle> {
    //! Returns the normal's offset from the rectangle's rotation, or `None` for the interior.
    SIDE_DELTAS[x as usize][y as usize].map(Angle::from_degrees)
}

#[inline]
fn classify(local: Vec2, half: Vec2) -> (XSide, YSide) {
    let x = if local.x < -half.x {
        XSide::Left
    } else if local.x > half.x {
        XSide::Right
    } else {
        XSide::None
    };
    let y = if local.y < -half.y {
        YSide::Upper
    } else if local.y > half.y {
        YSide::Lower
    } else {
        YSide::None
    };
    (x, y)
}

pub fn circle_rect(center: Vec2, rad: Fp, rect_pos: Vec2, rect_rot: Angle, size: Vec2, vel: Option<Vec2>) -> Option<Contact> {
    //! Returns whether the circle overlaps the rectangle of `size` centered at `rect_pos`.
    //!
    //! With `vel`, the normal is the rectangle's outward face normal on the side the circle's
    //! center lies beyond. A center inside the rectangle gets `-vel` instead.
    let half = size * 0.5;
    // work in the rectangle's unrotated frame
    let local = rect_rot.inverse().rotate(center - rect_pos);
    let closest = local.clamp(-half, half);
    let dist2 = (local - closest).length_squared();
    if dist2 >= rad * rad {
        return None;
    }

    let vel = match vel {
        Some(vel) => vel,
        None => return Some(Contact::default()),
    };
    let (x, y) = classify(local, half);
    Some(match side_delta(x, y) {
        Some(delta) => Contact {
            normal: (rect_rot + delta).unit(),
            depth: rad - dist2.sqrt(),
        },
        None => {
            let to_edge = Fp::min(half.x - local.x.abs(), half.y - local.y.abs());
            Contact {
                normal: normalize_or(-vel, rect_rot.unit()),
                depth: rad + to_edge,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SIZE: Vec2 = Vec2::new(4.0, 2.0);
    const VEL: Option<Vec2> = Some(Vec2::new(1.0, 0.0));

    #[test]
    fn side_table() {
        let deg = |x, y| side_delta(x, y).map(Angle::degrees);
        assert_eq!(deg(XSide::None, YSide::None), None);
        assert_abs_diff_eq!(deg(XSide::Right, YSide::None).unwrap(), 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(deg(XSide::Left, YSide::None).unwrap(), 180.0, epsilon = 1e-3);
        assert_abs_diff_eq!(deg(XSide::None, YSide::Upper).unwrap(), -90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(deg(XSide::None, YSide::Lower).unwrap(), 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(deg(XSide::Right, YSide::Upper).unwrap(), -45.0, epsilon = 1e-3);
        assert_abs_diff_eq!(deg(XSide::Right, YSide::Lower).unwrap(), 45.0, epsilon = 1e-3);
        assert_abs_diff_eq!(deg(XSide::Left, YSide::Upper).unwrap(), -135.0, epsilon = 1e-3);
        assert_abs_diff_eq!(deg(XSide::Left, YSide::Lower).unwrap(), 135.0, epsilon = 1e-3);
    }

    #[test]
    fn overlap_and_tangency() {
        assert_eq!(circle_rect(Vec2::new(2.5, 0.0), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, None).is_some(), true);
        assert_eq!(circle_rect(Vec2::new(3.0, 0.0), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, None).is_some(), false);
        assert_eq!(circle_rect(Vec2::new(3.5, 0.0), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, None).is_some(), false);
        // misses the corner even though both extents are in reach
        assert_eq!(circle_rect(Vec2::new(2.8, 1.8), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, None).is_some(), false);
    }

    #[test]
    fn face_normals() {
        let c = circle_rect(Vec2::new(2.5, 0.0), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, VEL).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(c.depth, 0.5, epsilon = 1e-6);

        let c = circle_rect(Vec2::new(-2.25, 0.3), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, VEL).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(-1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(c.depth, 0.75, epsilon = 1e-6);

        let c = circle_rect(Vec2::new(0.0, -1.5), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, VEL).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(0.0, -1.0), epsilon = 1e-6);

        let c = circle_rect(Vec2::new(1.0, 1.25), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, VEL).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn corner_normals() {
        let diag = (0.5 as Fp).sqrt();
        let c = circle_rect(Vec2::new(2.5, 1.5), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, VEL).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(diag, diag), epsilon = 1e-5);
        assert_abs_diff_eq!(c.depth, 1.0 - diag, epsilon = 1e-5);

        // the diagonal is fixed, not aimed at the circle
        let c = circle_rect(Vec2::new(-2.1, -1.6), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, VEL).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(-diag, -diag), epsilon = 1e-5);
    }

    #[test]
    fn rotated_frame() {
        // a quarter turn stands the rectangle up; +x local is +y world
        let rot = Angle::from_degrees(90.0);
        let c = circle_rect(Vec2::new(5.0, 7.5), 1.0, Vec2::new(5.0, 5.0), rot, SIZE, VEL).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(0.0, 1.0), epsilon = 1e-5);
        assert_abs_diff_eq!(c.depth, 0.5, epsilon = 1e-5);

        assert_eq!(circle_rect(Vec2::new(7.5, 5.0), 1.0, Vec2::new(5.0, 5.0), rot, SIZE, VEL).is_some(), false);
    }

    #[test]
    fn center_inside_uses_velocity() {
        let c = circle_rect(Vec2::new(0.5, 0.0), 1.0, Vec2::ZERO, Angle::ZERO, SIZE, Some(Vec2::new(3.0, 0.0))).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(-1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(c.depth, 2.0, epsilon = 1e-6);

        // exactly on an edge counts as inside
        let c = circle_rect(Vec2::new(2.0, 0.0), 0.5, Vec2::ZERO, Angle::ZERO, SIZE, Some(Vec2::new(0.0, -2.0))).unwrap();
        assert_abs_diff_eq!(c.normal, Vec2::new(0.0, 1.0), epsilon = 1e-6);
        assert_abs_diff_eq!(c.depth, 0.5, epsilon = 1e-6);
    }
}
