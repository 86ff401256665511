use super::*;

/// Callbacks for [`QuadTree::traverse`](super::QuadTree::traverse). Both
/// default to doing nothing.
pub trait NodeVisitor {
    fn branch(&mut self, _node: &NodeInfo) {}
    fn leaf(&mut self, _node: &NodeInfo, _element_count: usize) {}
}

pub(crate) struct FnVisitor<B, L> {
    pub(crate) branch: B,
    pub(crate) leaf: L,
}

impl<B, L> NodeVisitor for FnVisitor<B, L>
where
    B: FnMut(&NodeInfo),
    L: FnMut(&NodeInfo, usize),
{
    fn branch(&mut self, node: &NodeInfo) {
        (self.branch)(node)
    }

    fn leaf(&mut self, node: &NodeInfo, element_count: usize) {
        (self.leaf)(node, element_count)
    }
}

/// Shape of the tree at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub branches: usize,
    pub leaves: usize,
    pub max_depth: u32,
    /// Element nodes across all leaves. Exceeds the element count whenever
    /// an element sits in more than one leaf.
    pub memberships: usize,
    pub max_leaf_elements: usize,
}

impl NodeVisitor for TreeStats {
    fn branch(&mut self, node: &NodeInfo) {
        self.branches += 1;
        self.max_depth = self.max_depth.max(node.depth);
    }

    fn leaf(&mut self, node: &NodeInfo, element_count: usize) {
        self.leaves += 1;
        self.max_depth = self.max_depth.max(node.depth);
        self.memberships += element_count;
        self.max_leaf_elements = self.max_leaf_elements.max(element_count);
    }
}

impl QuadTreeInner {
    /// Depth-first walk over every node. A branch is reported before any of
    /// its children.
    pub fn traverse<V>(&self, visitor: &mut V)
    where
        V: NodeVisitor + ?Sized,
    {
        let mut to_process = RecordArray::new(NODE_INFO_FIELDS);
        self.root.push_to(&mut to_process);

        while !to_process.is_empty() {
            let node = NodeInfo::pop_from(&mut to_process);
            if self.is_leaf(node.index) {
                let count = self.nodes.get(node.index, NODE_COUNT) as usize;
                visitor.leaf(&node, count);
                continue;
            }
            let first_child = self.first_child(node.index);
            for quadrant in 0..4 {
                node.child(first_child, quadrant).push_to(&mut to_process);
            }
            visitor.branch(&node);
        }
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.traverse(&mut stats);
        stats
    }
}
