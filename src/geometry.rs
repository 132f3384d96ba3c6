//! Page-coordinate primitives shared by the placement engine and the
//! dismissal policy.
//!
//! Everything here is measured in signed logical units so rectangles that
//! have been scrolled partially off the page keep meaningful coordinates
//! instead of saturating at zero.

/// A rectangle in page coordinates, captured at measurement time.
///
/// `right` and `bottom` are exclusive edges; `width`/`height` are kept
/// alongside them so callers never re-derive one from the other with
/// mismatched scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRect {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl PageRect {
    pub fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Half-open containment check. A degenerate rect contains nothing.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// The visible area of the owning view plus its page scroll offsets at
/// measurement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub scroll_x: i32,
    pub scroll_y: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    pub fn with_scroll(mut self, scroll_x: i32, scroll_y: i32) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}
