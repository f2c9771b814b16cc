use super::set::BodyKey;
use crate::{Fp, Vec2};

/// How `CollisionEngine::get_collisions` should probe.
///
/// * discrete overlap: `QueryConfig::new()`
/// * "is anything here": `.with_limit(1)`
/// * "if I were over there": `.with_offset(delta)`
/// * swept movement: `.with_velocity(movement).with_limit(1)`, then correct by `normal * depth`
/// * layer probe: `.with_mask(layers)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QueryConfig {
    /// Added to the query body's position for this call only.
    pub offset: Vec2,
    /// When nonzero, contact normals and depths are computed.
    pub velocity: Vec2,
    /// When nonzero, replaces the query body's own layer mask.
    pub mask: u16,
    /// Stop after this many hits. Zero means unbounded.
    pub limit: usize,
}

impl QueryConfig {
    #[inline]
    pub fn new() -> QueryConfig {
        QueryConfig::default()
    }

    #[inline]
    pub fn with_offset(mut self, offset: Vec2) -> QueryConfig {
        self.offset = offset;
        self
    }
    #[inline]
    pub fn with_velocity(mut self, velocity: Vec2) -> QueryConfig {
        self.velocity = velocity;
        self
    }
    #[inline]
    pub fn with_mask(mut self, mask: u16) -> QueryConfig {
        self.mask = mask;
        self
    }
    #[inline]
    pub fn with_limit(mut self, limit: usize) -> QueryConfig {
        self.limit = limit;
        self
    }

    #[inline]
    pub(crate) fn contact_velocity(&self) -> Option<Vec2> {
        if self.velocity != Vec2::ZERO {
            Some(self.velocity)
        } else {
            None
        }
    }
}

/// A single hit reported by a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision<O> {
    /// The body that was hit.
    pub key: BodyKey,
    /// The hit body's owner.
    pub owner: O,
    /// Layers shared by the query and the hit body.
    pub mask: u16,
    /// Unit contact normal, zero unless the query had a velocity.
    pub normal: Vec2,
    /// Penetration depth, zero unless the query had a velocity.
    pub depth: Fp,
}
