use super::*;
use crate::collision_detection::rectangle_contains_rectangle;
use crate::error::{QuadtreeError, QuadtreeResult};
use log::{debug, trace};

impl QuadTreeInner {
    pub fn new_with_config(bounds: Rect, config: Config) -> QuadtreeResult<Self> {
        if !bounds.is_valid() {
            return Err(QuadtreeError::InvalidRootExtent {
                left: bounds.left,
                top: bounds.top,
                right: bounds.right,
                bottom: bounds.bottom,
            });
        }
        if config.max_elements == 0 {
            return Err(QuadtreeError::InvalidMaxElements {
                max_elements: config.max_elements,
            });
        }
        let mut inner = Self {
            nodes: RecordArray::new(NODE_FIELDS),
            elements: RecordArray::with_capacity(ELT_FIELDS, config.pool_size),
            element_nodes: RecordArray::with_capacity(ENODE_FIELDS, config.pool_size),
            bounds,
            root: NodeInfo::root(&bounds),
            query_marks: Vec::with_capacity(config.pool_size),
            query_hits: RecordArray::new(1),
            config,
        };
        inner.push_root();
        debug!(
            "quadtree created: bounds {:?}, max_elements {}, max_depth {}",
            inner.bounds, inner.config.max_elements, inner.config.max_depth
        );
        Ok(inner)
    }

    pub fn new(bounds: Rect) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    fn push_root(&mut self) {
        let root = self.nodes.insert();
        debug_assert_eq!(root, 0, "root must occupy node 0");
        self.nodes.set(root, NODE_FIRST, NIL);
        self.nodes.set(root, NODE_COUNT, 0);
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drops every element and node, leaving one empty root leaf. Storage is kept.
    pub fn clear(&mut self) {
        let elements = self.elements.len();
        self.nodes.clear();
        self.elements.clear();
        self.element_nodes.clear();
        self.push_root();
        debug!("quadtree cleared ({} element slots kept)", elements);
    }

    /// Releases all storage, the root included. Only the consuming
    /// `QuadTree::destroy` calls this, so the tree is never used afterwards.
    pub(crate) fn destroy(&mut self) {
        self.nodes.destroy();
        self.elements.destroy();
        self.element_nodes.destroy();
        self.query_hits.destroy();
        self.query_marks = Vec::new();
        debug!("quadtree storage released");
    }

    pub fn storage_counts(&self) -> (usize, usize, usize) {
        (
            self.nodes.len(),
            self.element_nodes.len(),
            self.elements.len(),
        )
    }

    pub fn insert(&mut self, id: i32, rect: Rect) -> ElementIndex {
        debug_assert!(rect.is_valid(), "inserting inverted rectangle {:?}", rect);
        if !rectangle_contains_rectangle(&self.bounds, &rect) {
            trace!("element {} at {:?} extends past the root extent", id, rect);
        }
        let element = self.elements.insert();
        self.elements.set(element, ELT_LEFT, rect.left);
        self.elements.set(element, ELT_TOP, rect.top);
        self.elements.set(element, ELT_RIGHT, rect.right);
        self.elements.set(element, ELT_BOTTOM, rect.bottom);
        self.elements.set(element, ELT_ID, id);

        self.node_insert(self.root, element);
        ElementIndex(element)
    }

    #[inline(always)]
    pub(crate) fn element_rect(&self, element: usize) -> Rect {
        Rect::new(
            self.elements.get(element, ELT_LEFT),
            self.elements.get(element, ELT_TOP),
            self.elements.get(element, ELT_RIGHT),
            self.elements.get(element, ELT_BOTTOM),
        )
    }

    #[inline(always)]
    pub(crate) fn element_id(&self, element: usize) -> i32 {
        self.elements.get(element, ELT_ID)
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self, node: usize) -> bool {
        self.nodes.get(node, NODE_COUNT) != BRANCH
    }

    #[inline(always)]
    pub(crate) fn first_child(&self, node: usize) -> usize {
        debug_assert!(!self.is_leaf(node));
        self.nodes.get(node, NODE_FIRST) as usize
    }

    /// Collects every leaf under `start` that `rect` routes to.
    pub(crate) fn find_leaves(&self, out: &mut RecordArray, start: NodeInfo, rect: &Rect) {
        let mut to_process = RecordArray::new(NODE_INFO_FIELDS);
        let mut targets = [0usize; 4];
        start.push_to(&mut to_process);

        while !to_process.is_empty() {
            let node = NodeInfo::pop_from(&mut to_process);
            if self.is_leaf(node.index) {
                node.push_to(out);
                continue;
            }
            let first_child = self.first_child(node.index);
            let targets_len = child_targets(&node, rect, &mut targets);
            for &quadrant in &targets[..targets_len] {
                node.child(first_child, quadrant).push_to(&mut to_process);
            }
        }
    }

    fn node_insert(&mut self, start: NodeInfo, element: usize) {
        let rect = self.element_rect(element);
        let mut leaves = RecordArray::new(NODE_INFO_FIELDS);
        self.find_leaves(&mut leaves, start, &rect);
        for j in 0..leaves.len() {
            let leaf = NodeInfo::read(&leaves, j);
            self.leaf_insert(leaf, element);
        }
    }

    fn leaf_insert(&mut self, leaf: NodeInfo, element: usize) {
        let node = leaf.index;
        let head = self.nodes.get(node, NODE_FIRST);
        let element_node = self.element_nodes.insert();
        self.element_nodes.set(element_node, ENODE_NEXT, head);
        self.element_nodes
            .set(element_node, ENODE_ELEMENT, element as i32);
        self.nodes.set(node, NODE_FIRST, element_node as i32);

        let count = self.nodes.get(node, NODE_COUNT) as usize;
        if count >= self.config.max_elements && leaf.depth < self.config.max_depth {
            self.split(leaf);
        } else {
            self.nodes.set(node, NODE_COUNT, (count + 1) as i32);
        }
    }

    // Turns a full leaf into a branch and pushes its elements, including the
    // one that overflowed it, down into the new children.
    fn split(&mut self, leaf: NodeInfo) {
        let node = leaf.index;
        let mut drained = RecordArray::new(1);
        let mut head = self.nodes.get(node, NODE_FIRST);
        while head != NIL {
            let element_node = head as usize;
            head = self.element_nodes.get(element_node, ENODE_NEXT);
            let element = self.element_nodes.get(element_node, ENODE_ELEMENT);
            self.element_nodes.erase(element_node);
            let slot = drained.push_back();
            drained.set(slot, 0, element);
        }

        let first_child = self.alloc_children();
        self.nodes.set(node, NODE_FIRST, first_child as i32);
        self.nodes.set(node, NODE_COUNT, BRANCH);
        trace!(
            "split node {} at depth {}: {} elements into children {}..={}",
            node,
            leaf.depth,
            drained.len(),
            first_child,
            first_child + 3
        );

        for j in 0..drained.len() {
            self.node_insert(leaf, drained.get(j, 0) as usize);
        }
    }

    // Four empty leaves in one contiguous block. Cleanup frees blocks in
    // descending order, so popping the free chain yields them back in order.
    fn alloc_children(&mut self) -> usize {
        let first_child = self.nodes.insert();
        for offset in 1..4 {
            let child = self.nodes.insert();
            debug_assert_eq!(child, first_child + offset, "child block is not contiguous");
        }
        for child in first_child..first_child + 4 {
            self.nodes.set(child, NODE_FIRST, NIL);
            self.nodes.set(child, NODE_COUNT, 0);
        }
        first_child
    }
}
