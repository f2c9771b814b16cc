//! Separating axis test between two rotated rectangles.

use super::Contact;
use crate::{body::Body, Fp, Vec2};

/// The extent of a shape projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: Fp,
    pub max: Fp,
}

impl Projection {
    pub fn project(verts: &[Vec2; 4], axis: Vec2) -> Projection {
        let mut min = axis.dot(verts[0]);
        let mut max = min;
        for v in verts.iter().skip(1) {
            let proj = axis.dot(*v);
            min = Fp::min(min, proj);
            max = Fp::max(max, proj);
        }
        Projection { min, max }
    }

    #[inline]
    pub fn overlap(&self, other: &Projection) -> Fp {
        //! Returns the distance either interval must move to clear the other. Non-positive when apart.
        Fp::min(self.max - other.min, other.max - self.min)
    }
}

pub fn rect_rect<O>(a: &Body<O>, b: &Body<O>, vel: Option<Vec2>) -> Option<Contact> {
    //! Returns whether the rotated rectangles overlap. Touching edges do not.
    //!
    //! With `vel`, also returns the minimum translation: the axis of least overlap, pointing from `a` toward `b`.
    //! # Panics
    //! If either body is not a rotated rectangle.
    let (verts_a, verts_b) = (a.rect_vertices(), b.rect_vertices());
    // opposite edges share an axis, and the axes follow the rotation so zero-area rectangles still have them
    let (ua, ub) = (a.rot.unit(), b.rot.unit());
    let axes = [ua, ua.perp(), ub, ub.perp()];

    let mut depth = Fp::INFINITY;
    let mut normal = Vec2::ZERO;
    for &axis in axes.iter() {
        let overlap = Projection::project(&verts_a, axis).overlap(&Projection::project(&verts_b, axis));
        if overlap <= 0.0 {
            return None; // valid separating axis found
        }
        if overlap < depth {
            depth = overlap;
            normal = axis;
        }
    }

    Some(match vel {
        None => Contact::default(),
        Some(_) => {
            if normal.dot(b.pos - a.pos) < 0.0 {
                normal = -normal;
            }
            Contact { normal, depth }
        }
    })
}
