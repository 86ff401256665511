//! Keyed front end for the per-frame collision pass.
//!
//! Callers track entities by their own key. Each key maps to the element
//! handle it currently owns, so moving an entity is a remove and reinsert
//! and the caller never juggles [`ElementIndex`] values itself.

use crate::error::QuadtreeResult;
use crate::quadtree::{Config, ElementIndex, QuadTree};
use common::shapes::Rect;
use fxhash::FxHashMap;
use log::debug;
use std::hash::Hash;

pub struct BroadPhase<K> {
    tree: QuadTree,
    handles: FxHashMap<K, ElementIndex>,
}

impl<K> BroadPhase<K>
where
    K: Copy + Eq + Hash,
{
    pub fn new(bounds: Rect, config: Config) -> QuadtreeResult<Self> {
        let mut handles = FxHashMap::default();
        handles.reserve(config.pool_size);
        Ok(Self {
            tree: QuadTree::new_with_config(bounds, config)?,
            handles,
        })
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, key: K) -> bool {
        self.handles.contains_key(&key)
    }

    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    /// Starts tracking `key`, or moves it if it is already tracked.
    pub fn track(&mut self, key: K, id: i32, rect: Rect) {
        let element = match self.handles.get(&key) {
            Some(&element) => {
                self.tree.remove(element);
                self.tree.insert(id, rect)
            }
            None => self.tree.insert(id, rect),
        };
        self.handles.insert(key, element);
    }

    pub fn untrack(&mut self, key: K) -> bool {
        match self.handles.remove(&key) {
            Some(element) => {
                self.tree.remove(element);
                true
            }
            None => false,
        }
    }

    /// Replaces everything tracked with `items`. Storage is reused.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, i32, Rect)>,
    {
        self.tree.clear();
        self.handles.clear();
        for (key, id, rect) in items {
            let element = self.tree.insert(id, rect);
            if let Some(stale) = self.handles.insert(key, element) {
                // Same key twice in one frame: the later box wins.
                self.tree.remove(stale);
            }
        }
        debug!("broad phase rebuilt with {} entries", self.handles.len());
    }

    pub fn candidates(&self, rect: Rect) -> Vec<i32> {
        self.tree.query(rect)
    }

    pub fn candidates_into(&self, rect: Rect, ids: &mut Vec<i32>) {
        self.tree.query_into(rect, ids);
    }

    /// Candidates for `key`'s own query, leaving out its own box.
    pub fn candidates_excluding(&self, key: K, rect: Rect) -> Vec<i32> {
        match self.handles.get(&key) {
            Some(&element) => self.tree.query_omit(rect, element),
            None => self.tree.query(rect),
        }
    }

    /// Folds empty subtrees. Meant to run once per frame.
    pub fn maintain(&mut self) -> usize {
        self.tree.cleanup()
    }
}
