use super::*;
use log::debug;

impl QuadTreeInner {
    /// Unlinks `element` from every leaf it was routed to, then frees it.
    /// Removing an element twice is a caller bug.
    pub fn remove(&mut self, element: ElementIndex) {
        let element = element.0;
        let rect = self.element_rect(element);
        let mut leaves = RecordArray::new(NODE_INFO_FIELDS);
        self.find_leaves(&mut leaves, self.root, &rect);

        for j in 0..leaves.len() {
            let node = NodeInfo::read(&leaves, j).index;

            let mut prev = NIL;
            let mut current = self.nodes.get(node, NODE_FIRST);
            while current != NIL
                && self.element_nodes.get(current as usize, ENODE_ELEMENT) != element as i32
            {
                prev = current;
                current = self.element_nodes.get(current as usize, ENODE_NEXT);
            }
            debug_assert!(current != NIL, "element {} missing from leaf {}", element, node);
            if current == NIL {
                continue;
            }

            let next = self.element_nodes.get(current as usize, ENODE_NEXT);
            if prev == NIL {
                self.nodes.set(node, NODE_FIRST, next);
            } else {
                self.element_nodes.set(prev as usize, ENODE_NEXT, next);
            }
            self.element_nodes.erase(current as usize);
            let count = self.nodes.get(node, NODE_COUNT);
            self.nodes.set(node, NODE_COUNT, count - 1);
        }

        self.elements.erase(element);
    }

    /// Moves an element by removing and reinserting it under the same ID.
    pub fn relocate(&mut self, element: ElementIndex, rect: Rect) -> ElementIndex {
        let id = self.element_id(element.0);
        self.remove(element);
        self.insert(id, rect)
    }

    /// Collapses every branch whose four children are empty leaves back into
    /// an empty leaf. Branches are processed after all their descendants, so
    /// a fully emptied tree folds up to the root in one call. Returns the
    /// number of branches merged.
    pub fn cleanup(&mut self) -> usize {
        if self.is_leaf(0) {
            return 0;
        }

        let mut to_process = RecordArray::new(1);
        let mut branches = RecordArray::new(1);
        let slot = to_process.push_back();
        to_process.set(slot, 0, 0);

        while !to_process.is_empty() {
            let node = to_process.get(to_process.len() - 1, 0) as usize;
            to_process.pop_back();
            let slot = branches.push_back();
            branches.set(slot, 0, node as i32);

            let first_child = self.first_child(node);
            for child in first_child..first_child + 4 {
                if !self.is_leaf(child) {
                    let slot = to_process.push_back();
                    to_process.set(slot, 0, child as i32);
                }
            }
        }

        // Pre-order reversed: descendants before ancestors.
        let mut merged = 0;
        for j in (0..branches.len()).rev() {
            let node = branches.get(j, 0) as usize;
            let first_child = self.first_child(node);
            let all_empty = (first_child..first_child + 4)
                .all(|child| self.nodes.get(child, NODE_COUNT) == 0);
            if !all_empty {
                continue;
            }

            // Descending, so the next split pops them back as one block.
            for child in (first_child..first_child + 4).rev() {
                self.nodes.erase(child);
            }
            self.nodes.set(node, NODE_FIRST, NIL);
            self.nodes.set(node, NODE_COUNT, 0);
            merged += 1;
        }

        if merged > 0 {
            debug!("cleanup merged {} branches", merged);
        }
        merged
    }
}
