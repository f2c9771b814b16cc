//! A flat, frame-driven 2D collision engine for circles and rotated rectangles.
//!
//! Bodies live in a caller-owned [`BodySet`] and are registered with a
//! [`CollisionEngine`] by key. Once per tick the host calls
//! [`CollisionEngine::recompute_frame`], then asks
//! [`CollisionEngine::get_collisions`] what each interested body overlaps,
//! optionally at an offset or along a velocity to receive a contact normal and depth.

pub mod math;
pub mod body;
pub mod narrow;
pub mod broad;

pub use body::{Body, Shape};
pub use broad::{
    query::{Collision, QueryConfig},
    set::{BodyKey, BodySet},
    CollisionEngine,
};
pub use math::Angle;
pub use narrow::{Aabb, Contact};

#[cfg(not(feature = "f64"))]
pub type Fp = f32;
#[cfg(not(feature = "f64"))]
pub type Vec2 = glam::Vec2;
#[cfg(not(feature = "f64"))]
pub(crate) use std::f32::consts;

#[cfg(feature = "f64")]
pub type Fp = f64;
#[cfg(feature = "f64")]
pub type Vec2 = glam::DVec2;
#[cfg(feature = "f64")]
pub(crate) use std::f64::consts;

/// Layer mask every freshly initialized body starts with.
pub const DEFAULT_MASK: u16 = 1;
