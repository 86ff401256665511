//! Loose quadtree over integer rectangles.
//!
//! Every table lives in a [`RecordArray`]: nodes (branch or leaf), elements
//! (rectangle plus caller ID) and element nodes, the per-leaf singly linked
//! membership lists. An element overlapping several leaves gets one element
//! node in each of them. Node geometry and depth are never stored; they are
//! recomputed from the root extent on every descent.

use crate::record_array::RecordArray;
use common::shapes::Rect;

mod api;
mod config;
mod core;
mod maintenance;
mod query_rect;
mod traverse;
mod types;

pub use api::QuadTree;
pub use config::Config;
pub use traverse::{NodeVisitor, TreeStats};
pub use types::{ElementIndex, NodeInfo};

use types::{child_targets, NODE_INFO_FIELDS};

pub(crate) const NIL: i32 = -1;

// Element node fields.
pub(crate) const ENODE_FIELDS: usize = 2;
pub(crate) const ENODE_NEXT: usize = 0;
pub(crate) const ENODE_ELEMENT: usize = 1;

// Element fields.
pub(crate) const ELT_FIELDS: usize = 5;
pub(crate) const ELT_LEFT: usize = 0;
pub(crate) const ELT_TOP: usize = 1;
pub(crate) const ELT_RIGHT: usize = 2;
pub(crate) const ELT_BOTTOM: usize = 3;
pub(crate) const ELT_ID: usize = 4;

// Node fields. `NODE_FIRST` is the first child of a branch or the head
// element node of a leaf; `NODE_COUNT` is the leaf element count, or
// `BRANCH` for branches.
pub(crate) const NODE_FIELDS: usize = 2;
pub(crate) const NODE_FIRST: usize = 0;
pub(crate) const NODE_COUNT: usize = 1;
pub(crate) const BRANCH: i32 = -1;

pub(crate) struct QuadTreeInner {
    nodes: RecordArray,
    elements: RecordArray,
    element_nodes: RecordArray,
    bounds: Rect,
    root: NodeInfo,
    config: Config,
    // Dedupe markers indexed by element; all false between queries.
    query_marks: Vec<bool>,
    query_hits: RecordArray,
}
