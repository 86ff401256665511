use super::*;
use crate::collision_detection::rectangle_rectangle;

impl QuadTreeInner {
    /// Calls `f` once with the ID of every element whose rectangle intersects
    /// `query`, skipping `omit`. IDs come out in leaf, then list order.
    pub fn query_with<F>(&mut self, query: Rect, omit: Option<ElementIndex>, mut f: F)
    where
        F: FnMut(i32),
    {
        self.collect_hits(&query, omit.map(ElementIndex::index));
        // Marks are reset before `f` runs so a panicking callback cannot
        // leave elements hidden from later queries.
        for j in 0..self.query_hits.len() {
            let element = self.query_hits.get(j, 0) as usize;
            self.query_marks[element] = false;
        }
        for j in 0..self.query_hits.len() {
            let element = self.query_hits.get(j, 0) as usize;
            f(self.element_id(element));
        }
        self.query_hits.clear();
    }

    pub fn query_into(&mut self, query: Rect, omit: Option<ElementIndex>, out: &mut Vec<i32>) {
        out.clear();
        self.query_with(query, omit, |id| out.push(id));
    }

    // Leaf matches are conservative, so every candidate still gets the exact
    // rectangle test. Hits are marked so multi-leaf elements report once.
    fn collect_hits(&mut self, query: &Rect, omit: Option<usize>) {
        let element_slots = self.elements.len();
        if self.query_marks.len() < element_slots {
            self.query_marks.resize(element_slots, false);
        }
        self.query_hits.clear();

        let mut leaves = RecordArray::new(NODE_INFO_FIELDS);
        self.find_leaves(&mut leaves, self.root, query);

        for j in 0..leaves.len() {
            let node = NodeInfo::read(&leaves, j).index;
            let mut current = self.nodes.get(node, NODE_FIRST);
            while current != NIL {
                let element_node = current as usize;
                current = self.element_nodes.get(element_node, ENODE_NEXT);
                let element = self.element_nodes.get(element_node, ENODE_ELEMENT) as usize;
                if self.query_marks[element] || omit == Some(element) {
                    continue;
                }
                if rectangle_rectangle(query, &self.element_rect(element)) {
                    self.query_marks[element] = true;
                    let slot = self.query_hits.push_back();
                    self.query_hits.set(slot, 0, element as i32);
                }
            }
        }
    }
}
