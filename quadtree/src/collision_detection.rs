use common::shapes::Rect;

// Closed-interval overlap on both axes. Conjunctive, so an inverted rectangle
// on either side never matches.
#[inline(always)]
pub fn rectangle_rectangle(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

// Check that Rect inner is fully contained in Rect outer
#[inline(always)]
pub fn rectangle_contains_rectangle(outer: &Rect, inner: &Rect) -> bool {
    outer.contains_rect(inner)
}
