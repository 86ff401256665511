use rand::Rng;

/// Axis-aligned integer rectangle. Both axes are closed intervals, so a
/// rectangle with `left == right` still covers one column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_point(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (i32, i32) {
        let (left, top) = (i64::from(self.left), i64::from(self.top));
        (
            (left + ((i64::from(self.right) - left) >> 1)) as i32,
            (top + ((i64::from(self.bottom) - top) >> 1)) as i32,
        )
    }

    // Inverted rectangles are representable but never intersect anything.
    pub fn is_valid(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    #[inline(always)]
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left <= self.right
            && other.right >= self.left
            && other.top <= self.bottom
            && other.bottom >= self.top
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn contains_rect(&self, inner: &Rect) -> bool {
        self.left <= inner.left
            && self.right >= inner.right
            && self.top <= inner.top
            && self.bottom >= inner.bottom
    }

    pub fn expand_to_include(&mut self, other: &Rect) {
        self.left = self.left.min(other.left);
        self.top = self.top.min(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Random rectangle of at most `max_width` x `max_height` placed fully
    /// inside `self`. Degenerate bounds collapse to the top-left corner.
    pub fn random_inside<R: Rng>(&self, rng: &mut R, max_width: i32, max_height: i32) -> Rect {
        let width = Self::safe_rand(rng, 0, max_width.min(self.width()));
        let height = Self::safe_rand(rng, 0, max_height.min(self.height()));
        let left = Self::safe_rand(rng, self.left, self.right - width);
        let top = Self::safe_rand(rng, self.top, self.bottom - height);
        Rect::new(left, top, left + width, top + height)
    }

    fn safe_rand<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}
