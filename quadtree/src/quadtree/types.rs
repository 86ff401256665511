use crate::record_array::RecordArray;
use common::shapes::Rect;

// Field layout of node geometry records on traversal stacks.
pub(crate) const NODE_INFO_FIELDS: usize = 6;
const NI_CENTER_X: usize = 0;
const NI_CENTER_Y: usize = 1;
const NI_HALF_WIDTH: usize = 2;
const NI_HALF_HEIGHT: usize = 3;
const NI_INDEX: usize = 4;
const NI_DEPTH: usize = 5;

/// Handle to an element stored in a [`QuadTree`](super::QuadTree).
///
/// Valid until the element is removed; after that the slot is recycled by the
/// next insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementIndex(pub(crate) usize);

impl ElementIndex {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Node geometry recomputed on the way down from the root. Nothing here is
/// stored per node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    pub index: usize,
    pub depth: u32,
    pub center_x: i32,
    pub center_y: i32,
    pub half_width: i32,
    pub half_height: i32,
}

impl NodeInfo {
    // Extents are taken in i64: a valid root may span the whole i32 range,
    // while its half extents and centre always fit back into i32.
    pub(crate) fn root(bounds: &Rect) -> Self {
        let half_width = (i64::from(bounds.right) - i64::from(bounds.left)) >> 1;
        let half_height = (i64::from(bounds.bottom) - i64::from(bounds.top)) >> 1;
        Self {
            index: 0,
            depth: 0,
            center_x: (i64::from(bounds.left) + half_width) as i32,
            center_y: (i64::from(bounds.top) + half_height) as i32,
            half_width: half_width as i32,
            half_height: half_height as i32,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.center_x - self.half_width,
            self.center_y - self.half_height,
            self.center_x + self.half_width,
            self.center_y + self.half_height,
        )
    }

    /// Quadrants are numbered top-left, top-right, bottom-left, bottom-right.
    #[inline(always)]
    pub(crate) fn child(&self, first_child: usize, quadrant: usize) -> Self {
        let hx = self.half_width >> 1;
        let hy = self.half_height >> 1;
        let (center_x, center_y) = match quadrant {
            0 => (self.center_x - hx, self.center_y - hy),
            1 => (self.center_x + hx, self.center_y - hy),
            2 => (self.center_x - hx, self.center_y + hy),
            _ => (self.center_x + hx, self.center_y + hy),
        };
        Self {
            index: first_child + quadrant,
            depth: self.depth + 1,
            center_x,
            center_y,
            half_width: hx,
            half_height: hy,
        }
    }

    #[inline(always)]
    pub(crate) fn push_to(&self, list: &mut RecordArray) {
        let back = list.push_back();
        list.set(back, NI_CENTER_X, self.center_x);
        list.set(back, NI_CENTER_Y, self.center_y);
        list.set(back, NI_HALF_WIDTH, self.half_width);
        list.set(back, NI_HALF_HEIGHT, self.half_height);
        list.set(back, NI_INDEX, self.index as i32);
        list.set(back, NI_DEPTH, self.depth as i32);
    }

    #[inline(always)]
    pub(crate) fn read(list: &RecordArray, n: usize) -> Self {
        Self {
            index: list.get(n, NI_INDEX) as usize,
            depth: list.get(n, NI_DEPTH) as u32,
            center_x: list.get(n, NI_CENTER_X),
            center_y: list.get(n, NI_CENTER_Y),
            half_width: list.get(n, NI_HALF_WIDTH),
            half_height: list.get(n, NI_HALF_HEIGHT),
        }
    }

    /// Pops the last record of a traversal stack.
    #[inline(always)]
    pub(crate) fn pop_from(list: &mut RecordArray) -> Self {
        let node = Self::read(list, list.len() - 1);
        list.pop_back();
        node
    }
}

// Routes a rectangle to the children of a branch centred on `node`. Whole
// half-planes are tested rather than quadrant rectangles, so a rectangle
// outside the root extent still lands in the nearest edge quadrants.
// Insert, remove and query all route through here.
#[inline(always)]
pub(crate) fn child_targets(node: &NodeInfo, rect: &Rect, targets: &mut [usize; 4]) -> usize {
    let mut targets_len = 0usize;
    if rect.top <= node.center_y {
        if rect.left <= node.center_x {
            targets[targets_len] = 0;
            targets_len += 1;
        }
        if rect.right > node.center_x {
            targets[targets_len] = 1;
            targets_len += 1;
        }
    }
    if rect.bottom > node.center_y {
        if rect.left <= node.center_x {
            targets[targets_len] = 2;
            targets_len += 1;
        }
        if rect.right > node.center_x {
            targets[targets_len] = 3;
            targets_len += 1;
        }
    }
    targets_len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets_of(rect: Rect) -> Vec<usize> {
        let root = NodeInfo::root(&Rect::new(0, 0, 1024, 1024));
        let mut targets = [0usize; 4];
        let len = child_targets(&root, &rect, &mut targets);
        targets[..len].to_vec()
    }

    #[test]
    fn root_geometry() {
        let root = NodeInfo::root(&Rect::new(-100, 20, 300, 220));
        assert_eq!((root.center_x, root.center_y), (100, 120));
        assert_eq!((root.half_width, root.half_height), (200, 100));
        assert_eq!(root.rect(), Rect::new(-100, 20, 300, 220));
    }

    #[test]
    fn root_geometry_spanning_full_range() {
        let root = NodeInfo::root(&Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX));
        assert_eq!((root.center_x, root.center_y), (-1, -1));
        assert_eq!((root.half_width, root.half_height), (i32::MAX, i32::MAX));
        assert_eq!(root.rect(), Rect::new(i32::MIN, i32::MIN, i32::MAX - 1, i32::MAX - 1));
    }

    #[test]
    fn child_geometry_halves_extent() {
        let root = NodeInfo::root(&Rect::new(0, 0, 1024, 1024));
        let child = root.child(5, 3);
        assert_eq!(child.index, 8);
        assert_eq!(child.depth, 1);
        assert_eq!((child.center_x, child.center_y), (768, 768));
        assert_eq!((child.half_width, child.half_height), (256, 256));
        assert_eq!(root.child(1, 0).rect(), Rect::new(0, 0, 512, 512));
    }

    #[test]
    fn routing_single_quadrants() {
        assert_eq!(targets_of(Rect::new(10, 10, 20, 20)), vec![0]);
        assert_eq!(targets_of(Rect::new(600, 10, 620, 20)), vec![1]);
        assert_eq!(targets_of(Rect::new(10, 600, 20, 620)), vec![2]);
        assert_eq!(targets_of(Rect::new(600, 600, 620, 620)), vec![3]);
    }

    #[test]
    fn routing_straddles_centre() {
        assert_eq!(targets_of(Rect::new(500, 500, 520, 520)), vec![0, 1, 2, 3]);
        assert_eq!(targets_of(Rect::new(500, 10, 520, 20)), vec![0, 1]);
    }

    #[test]
    fn centre_line_belongs_to_top_left() {
        assert_eq!(targets_of(Rect::from_point(512, 512)), vec![0]);
        assert_eq!(targets_of(Rect::from_point(513, 513)), vec![3]);
    }

    #[test]
    fn out_of_extent_routes_to_edge_quadrant() {
        assert_eq!(targets_of(Rect::new(-500, -500, -400, -400)), vec![0]);
        assert_eq!(targets_of(Rect::new(5000, 5000, 5100, 5100)), vec![3]);
    }

    #[test]
    fn stack_records_round_trip() {
        let mut stack = RecordArray::new(NODE_INFO_FIELDS);
        let node = NodeInfo::root(&Rect::new(0, 0, 64, 32)).child(9, 2);
        node.push_to(&mut stack);
        assert_eq!(NodeInfo::pop_from(&mut stack), node);
        assert!(stack.is_empty());
    }
}
