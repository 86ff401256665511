use super::traverse::FnVisitor;
use super::*;
use crate::error::QuadtreeResult;
use std::cell::RefCell;

/// Loose quadtree answering "which stored rectangles overlap this one?".
///
/// Queries take `&self`; the dedupe scratch they reuse sits behind a
/// `RefCell`. The tree is single threaded and not reentrant: calling back
/// into it from a query or traversal callback panics.
pub struct QuadTree {
    inner: RefCell<QuadTreeInner>,
}

impl QuadTree {
    pub fn new_with_config(bounds: Rect, config: Config) -> QuadtreeResult<Self> {
        Ok(Self {
            inner: RefCell::new(QuadTreeInner::new_with_config(bounds, config)?),
        })
    }

    pub fn new(bounds: Rect) -> QuadtreeResult<Self> {
        Ok(Self {
            inner: RefCell::new(QuadTreeInner::new(bounds)?),
        })
    }

    pub fn bounds(&self) -> Rect {
        self.inner.borrow().bounds()
    }

    pub fn config(&self) -> Config {
        self.inner.borrow().config().clone()
    }

    /// Record slots held by (nodes, element nodes, elements), freed slots included.
    pub fn storage_counts(&self) -> (usize, usize, usize) {
        self.inner.borrow().storage_counts()
    }

    pub fn stats(&self) -> TreeStats {
        self.inner.borrow().stats()
    }

    pub fn insert(&mut self, id: i32, rect: Rect) -> ElementIndex {
        self.inner.get_mut().insert(id, rect)
    }

    pub fn insert_rect_extent(
        &mut self,
        id: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    ) -> ElementIndex {
        self.inner.get_mut().insert(id, Rect::new(x1, y1, x2, y2))
    }

    pub fn remove(&mut self, element: ElementIndex) {
        self.inner.get_mut().remove(element);
    }

    /// The returned handle replaces `element`, which is no longer valid.
    pub fn relocate(&mut self, element: ElementIndex, rect: Rect) -> ElementIndex {
        self.inner.get_mut().relocate(element, rect)
    }

    pub fn element_id(&self, element: ElementIndex) -> i32 {
        self.inner.borrow().element_id(element.index())
    }

    pub fn element_rect(&self, element: ElementIndex) -> Rect {
        self.inner.borrow().element_rect(element.index())
    }

    pub fn cleanup(&mut self) -> usize {
        self.inner.get_mut().cleanup()
    }

    pub fn clear(&mut self) {
        self.inner.get_mut().clear();
    }

    pub fn destroy(self) {
        self.inner.into_inner().destroy();
    }

    pub fn query(&self, rect: Rect) -> Vec<i32> {
        let mut ids = Vec::new();
        self.inner.borrow_mut().query_into(rect, None, &mut ids);
        ids
    }

    pub fn query_rect_extent(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<i32> {
        self.query(Rect::new(x1, y1, x2, y2))
    }

    /// Clears `ids` and fills it with the query result.
    pub fn query_into(&self, rect: Rect, ids: &mut Vec<i32>) {
        self.inner.borrow_mut().query_into(rect, None, ids);
    }

    /// Same as [`query`](Self::query) but never reports `omit`.
    pub fn query_omit(&self, rect: Rect, omit: ElementIndex) -> Vec<i32> {
        let mut ids = Vec::new();
        self.inner.borrow_mut().query_into(rect, Some(omit), &mut ids);
        ids
    }

    pub fn query_with<F>(&self, rect: Rect, f: F)
    where
        F: FnMut(i32),
    {
        self.inner.borrow_mut().query_with(rect, None, f);
    }

    pub fn traverse<V>(&self, visitor: &mut V)
    where
        V: NodeVisitor + ?Sized,
    {
        self.inner.borrow().traverse(visitor);
    }

    pub fn traverse_with<B, L>(&self, branch: B, leaf: L)
    where
        B: FnMut(&NodeInfo),
        L: FnMut(&NodeInfo, usize),
    {
        let mut visitor = FnVisitor { branch, leaf };
        self.inner.borrow().traverse(&mut visitor);
    }
}
