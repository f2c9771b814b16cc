//! Per-frame collision queries over every registered body.
//!
//! There is no spatial index: each query tests its body against every other registered body,
//! rejecting on layer masks and bounding boxes before the exact test.

pub mod query;
pub mod set;

use crate::{narrow, Vec2};
use log::{debug, trace, warn};
use query::{Collision, QueryConfig};
use set::{BodyKey, BodySet};

/// Tracks which bodies of a `BodySet` take part in collision, split into dynamic and static.
///
/// The engine holds keys only. Call `recompute_frame` once per tick, before any queries:
/// queries do not look at disposal, so disposed bodies keep colliding until then.
#[derive(Debug, Clone)]
pub struct CollisionEngine<O> {
    dynamic: Vec<BodyKey>,
    statics: Vec<BodyKey>,
    results: Vec<Collision<O>>,
}

impl<O> Default for CollisionEngine<O> {
    fn default() -> Self {
        CollisionEngine {
            dynamic: Vec::new(),
            statics: Vec::new(),
            results: Vec::new(),
        }
    }
}

impl<O> CollisionEngine<O> {
    pub fn new() -> CollisionEngine<O> {
        CollisionEngine::default()
    }

    #[track_caller]
    pub fn add_body(&mut self, bodies: &BodySet<O>, key: BodyKey) {
        //! Registers a body. Adding the same key twice is not caught and makes it scanned twice.
        //! # Panics
        //! If `key` is not live in `bodies`.
        if bodies[key].is_static() {
            self.statics.push(key);
        } else {
            self.dynamic.push(key);
        }
        trace!("added {:?}, {} registered", key, self.len());
    }

    pub fn recompute_frame(&mut self, bodies: &BodySet<O>) {
        //! Drops disposed and removed bodies, and moves bodies whose static flag changed to the matching list.
        let before = self.len();
        let CollisionEngine { dynamic, statics, .. } = self;

        // Some(is_static) for bodies that stay
        let survives = |key: BodyKey| bodies.get(key).filter(|b| !b.is_disposed()).map(|b| b.is_static());

        dynamic.retain(|&key| match survives(key) {
            Some(false) => true,
            Some(true) => {
                statics.push(key);
                false
            }
            None => false,
        });
        let demote_from = dynamic.len();
        statics.retain(|&key| match survives(key) {
            Some(true) => true,
            Some(false) => {
                dynamic.push(key);
                false
            }
            None => false,
        });

        debug!(
            "recomputed frame: {} dropped, {} became dynamic, {} dynamic, {} static",
            before - self.len(),
            self.dynamic.len() - demote_from,
            self.dynamic.len(),
            self.statics.len(),
        );
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dynamic.len() + self.statics.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dynamic.is_empty() && self.statics.is_empty()
    }
    #[inline]
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }
    #[inline]
    pub fn static_len(&self) -> usize {
        self.statics.len()
    }
    pub fn contains(&self, key: BodyKey) -> bool {
        self.dynamic.contains(&key) || self.statics.contains(&key)
    }

    pub fn clear(&mut self) {
        //! Unregisters every body. The bodies themselves are untouched.
        self.dynamic.clear();
        self.statics.clear();
        self.results.clear();
    }
}

impl<O: Clone> CollisionEngine<O> {
    #[track_caller]
    pub fn get_collisions(&mut self, bodies: &BodySet<O>, key: BodyKey, config: &QueryConfig) -> &[Collision<O>] {
        //! Returns every registered body `key`'s body overlaps under `config`, in registration order
        //! (dynamic bodies, then static), not sorted by distance.
        //!
        //! The slice is the engine's own buffer, cleared at the start of each query. It borrows the
        //! engine, so it must be consumed or cloned before the next query.
        //! # Panics
        //! If `key` is not live in `bodies`. The query body need not be registered.
        self.results.clear();

        let real = &bodies[key];
        let moved;
        let subject = if config.offset != Vec2::ZERO {
            moved = real.translated(config.offset);
            &moved
        } else {
            real
        };
        let mask = if config.mask != 0 { config.mask } else { subject.mask };
        let vel = config.contact_velocity();

        let mut stale = 0;
        for &other_key in self.dynamic.iter().chain(self.statics.iter()) {
            if other_key == key {
                continue;
            }
            let other = match bodies.get(other_key) {
                Some(other) => other,
                None => {
                    stale += 1;
                    continue;
                }
            };
            let shared = mask & other.mask;
            if shared == 0 {
                continue;
            }

            if let Some(contact) = narrow::intersect(subject, other, vel) {
                self.results.push(Collision {
                    key: other_key,
                    owner: other.owner().clone(),
                    mask: shared,
                    normal: contact.normal,
                    depth: contact.depth,
                });
                if config.limit != 0 && self.results.len() >= config.limit {
                    break;
                }
            }
        }

        if stale != 0 {
            warn!("skipped {} removed bodies, recompute_frame was not called after removal", stale);
        }
        trace!("{:?} hit {} bodies", key, self.results.len());
        &self.results
    }

    // ---------- Query flavors ---------- //

    #[inline]
    pub fn overlaps(&mut self, bodies: &BodySet<O>, key: BodyKey) -> &[Collision<O>] {
        //! Everything the body overlaps where it stands.
        self.get_collisions(bodies, key, &QueryConfig::new())
    }
    #[inline]
    pub fn collisions_at(&mut self, bodies: &BodySet<O>, key: BodyKey, offset: Vec2) -> &[Collision<O>] {
        //! Everything the body would overlap if moved by `offset`.
        self.get_collisions(bodies, key, &QueryConfig::new().with_offset(offset))
    }
    pub fn has_collision(&mut self, bodies: &BodySet<O>, key: BodyKey, offset: Vec2, mask: u16) -> bool {
        //! Whether anything overlaps the body at `offset`. A zero `mask` uses the body's own.
        let config = QueryConfig::new().with_offset(offset).with_mask(mask).with_limit(1);
        !self.get_collisions(bodies, key, &config).is_empty()
    }
    pub fn sweep(&mut self, bodies: &BodySet<O>, key: BodyKey, velocity: Vec2) -> Option<Collision<O>> {
        //! Moves the body by `velocity` and returns the first hit with its contact normal and depth.
        //! "First" is registration order, not nearest.
        let config = QueryConfig::new().with_offset(velocity).with_velocity(velocity).with_limit(1);
        self.get_collisions(bodies, key, &config).first().cloned()
    }
}
