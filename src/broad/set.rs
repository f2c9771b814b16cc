use crate::body::Body;
use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Generation-checked handle to a `Body` in a `BodySet`. Outlives the body safely: a key to a
    /// removed body is simply no longer found, even once its slot is reused.
    pub struct BodyKey;
}

/// Arena owning the bodies an engine refers to.
#[derive(Debug, Clone)]
pub struct BodySet<O> {
    bodies: SlotMap<BodyKey, Body<O>>,
}

impl<O> Default for BodySet<O> {
    fn default() -> Self {
        BodySet { bodies: SlotMap::with_key() }
    }
}

impl<O> BodySet<O> {
    pub fn new() -> BodySet<O> {
        BodySet::default()
    }
    pub fn with_capacity(capacity: usize) -> BodySet<O> {
        BodySet { bodies: SlotMap::with_capacity_and_key(capacity) }
    }

    #[inline]
    pub fn insert(&mut self, body: Body<O>) -> BodyKey {
        self.bodies.insert(body)
    }
    #[inline]
    pub fn remove(&mut self, key: BodyKey) -> Option<Body<O>> {
        //! Frees the body's slot. Engines still holding `key` skip it and drop it on their next recompute.
        self.bodies.remove(key)
    }

    #[inline]
    pub fn get(&self, key: BodyKey) -> Option<&Body<O>> {
        self.bodies.get(key)
    }
    #[inline]
    pub fn get_mut(&mut self, key: BodyKey) -> Option<&mut Body<O>> {
        self.bodies.get_mut(key)
    }
    #[inline]
    pub fn contains(&self, key: BodyKey) -> bool {
        self.bodies.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyKey, &Body<O>)> {
        self.bodies.iter()
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyKey, &mut Body<O>)> {
        self.bodies.iter_mut()
    }
}

impl<O> Index<BodyKey> for BodySet<O> {
    type Output = Body<O>;

    #[track_caller]
    fn index(&self, key: BodyKey) -> &Body<O> {
        match self.bodies.get(key) {
            Some(body) => body,
            None => panic!("{:?} does not refer to a live body", key),
        }
    }
}
impl<O> IndexMut<BodyKey> for BodySet<O> {
    #[track_caller]
    fn index_mut(&mut self, key: BodyKey) -> &mut Body<O> {
        match self.bodies.get_mut(key) {
            Some(body) => body,
            None => panic!("{:?} does not refer to a live body", key),
        }
    }
}
