//! Anchor-relative placement engine.
//!
//! `compute_position` is a pure function of its request: no caching, no
//! environment access. The caller re-invokes it on every resize/scroll of
//! the owning viewport while the panel is open, and once immediately after
//! the panel is first laid out (the panel rect is only known post-layout).

use crate::geometry::{PageRect, Viewport};

/// Horizontal alignment of the panel against its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Right,
}

/// Inputs to a single placement computation. Both rectangles are measured
/// fresh by the caller for every request; the engine never sees stale ones.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest {
    pub anchor: PageRect,
    pub panel: PageRect,
    pub align: Align,
    pub viewport: Viewport,
    pub margin: i32,
    pub top_close_threshold: i32,
}

/// The panel's resolved screen position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedPosition {
    pub top: i32,
    pub left: i32,
}

/// Outcome of a placement computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Resolved(ComputedPosition),
    /// The anchor has scrolled within the close threshold of the viewport
    /// top; no position is produced and the panel should be dismissed.
    AnchorOutOfView,
}

pub fn compute_position(request: &PlacementRequest) -> Placement {
    let PlacementRequest {
        anchor,
        panel,
        align,
        viewport,
        margin,
        top_close_threshold,
    } = *request;

    if anchor.top < top_close_threshold {
        return Placement::AnchorOutOfView;
    }

    let mut left = match align {
        Align::Right => anchor.right - panel.width + viewport.scroll_x,
        Align::Left => anchor.left + viewport.scroll_x,
    };

    // Right-edge clamp first, then left: on viewports too narrow for the
    // panel the left-margin clamp wins and the panel overflows to the right.
    if left + panel.width > viewport.width {
        left = viewport.width - panel.width - margin;
    }
    if left < margin {
        left = margin;
    }

    let mut top = anchor.bottom;
    if top + panel.height > viewport.height + viewport.scroll_y {
        // Flip above the anchor. This is the only vertical adjustment; a
        // panel taller than the viewport may still overflow the top.
        top = anchor.top - panel.height + viewport.scroll_y;
    }

    Placement::Resolved(ComputedPosition { top, left })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ANCHOR_TOP_CLOSE_THRESHOLD, VIEWPORT_MARGIN};

    fn request(
        anchor: PageRect,
        panel_width: i32,
        panel_height: i32,
        align: Align,
        viewport: Viewport,
    ) -> PlacementRequest {
        PlacementRequest {
            anchor,
            panel: PageRect::from_origin_size(0, 0, panel_width, panel_height),
            align,
            viewport,
            margin: VIEWPORT_MARGIN,
            top_close_threshold: ANCHOR_TOP_CLOSE_THRESHOLD,
        }
    }

    fn resolved(placement: Placement) -> ComputedPosition {
        match placement {
            Placement::Resolved(pos) => pos,
            Placement::AnchorOutOfView => panic!("expected a resolved position"),
        }
    }

    #[test]
    fn clamps_to_left_margin_and_flips_above() {
        // Anchor near the bottom-left of an 800x600 viewport with a panel
        // wider than the space left of the anchor's right edge.
        let anchor = PageRect::from_origin_size(100, 500, 80, 20);
        let req = request(anchor, 256, 200, Align::Right, Viewport::new(800, 600));
        let pos = resolved(compute_position(&req));
        // right-aligned start would be 180 - 256 = -76, clamped to margin
        assert_eq!(pos.left, 16);
        // 520 + 200 overflows 600, flipped to 500 - 200
        assert_eq!(pos.top, 300);
    }

    #[test]
    fn right_align_fits_without_clamping() {
        let anchor = PageRect::from_origin_size(400, 100, 100, 20);
        let req = request(anchor, 200, 150, Align::Right, Viewport::new(800, 600));
        let pos = resolved(compute_position(&req));
        assert_eq!(pos.left, 500 - 200);
        assert_eq!(pos.top, 120);
    }

    #[test]
    fn left_align_clamps_at_right_edge() {
        let anchor = PageRect::from_origin_size(700, 100, 80, 20);
        let req = request(anchor, 256, 150, Align::Left, Viewport::new(800, 600));
        let pos = resolved(compute_position(&req));
        // 700 + 256 overflows 800
        assert_eq!(pos.left, 800 - 256 - 16);
    }

    #[test]
    fn left_margin_wins_on_narrow_viewport() {
        // Panel wider than viewport minus both margins: right clamp drives
        // left negative, the left clamp then pins it to the margin.
        let anchor = PageRect::from_origin_size(50, 100, 40, 20);
        let req = request(anchor, 300, 100, Align::Left, Viewport::new(320, 600));
        let pos = resolved(compute_position(&req));
        assert_eq!(pos.left, 16);
    }

    #[test]
    fn clamp_invariant_holds_when_panel_fits() {
        let viewport = Viewport::new(800, 600);
        for anchor_left in [-50, 0, 100, 400, 750, 900] {
            for align in [Align::Left, Align::Right] {
                let anchor = PageRect::from_origin_size(anchor_left, 200, 80, 20);
                let req = request(anchor, 256, 100, align, viewport);
                let pos = resolved(compute_position(&req));
                assert!(pos.left >= VIEWPORT_MARGIN, "left {} below margin", pos.left);
                assert!(
                    pos.left + 256 <= 800 - VIEWPORT_MARGIN,
                    "left {} overflows right margin",
                    pos.left
                );
            }
        }
    }

    #[test]
    fn flips_above_when_below_overflows() {
        let anchor = PageRect::from_origin_size(100, 550, 80, 20);
        let req = request(anchor, 200, 100, Align::Left, Viewport::new(800, 600));
        let pos = resolved(compute_position(&req));
        assert_eq!(pos.top, 550 - 100);
    }

    #[test]
    fn no_flip_when_below_fits_exactly() {
        let anchor = PageRect::from_origin_size(100, 380, 80, 20);
        let req = request(anchor, 200, 200, Align::Left, Viewport::new(800, 600));
        let pos = resolved(compute_position(&req));
        assert_eq!(pos.top, 400);
    }

    #[test]
    fn scroll_offsets_shift_flip_decision_and_position() {
        let viewport = Viewport::new(800, 600).with_scroll(0, 300);
        // bottom edge in page coordinates is 600 + 300 = 900
        let anchor = PageRect::from_origin_size(100, 750, 80, 20);
        let req = request(anchor, 200, 100, Align::Left, viewport);
        let pos = resolved(compute_position(&req));
        // 770 + 100 fits within 900, no flip
        assert_eq!(pos.top, 770);

        let anchor = PageRect::from_origin_size(100, 850, 80, 20);
        let req = request(anchor, 200, 100, Align::Left, viewport);
        let pos = resolved(compute_position(&req));
        // 870 + 100 overflows 900, flip adds scroll_y
        assert_eq!(pos.top, 850 - 100 + 300);
    }

    #[test]
    fn horizontal_scroll_offsets_initial_left() {
        let viewport = Viewport::new(800, 600).with_scroll(40, 0);
        let anchor = PageRect::from_origin_size(200, 100, 80, 20);
        let req = request(anchor, 100, 50, Align::Left, viewport);
        let pos = resolved(compute_position(&req));
        assert_eq!(pos.left, 240);
    }

    #[test]
    fn anchor_near_viewport_top_reports_out_of_view() {
        let anchor = PageRect::from_origin_size(100, 10, 80, 20);
        let req = request(anchor, 200, 100, Align::Right, Viewport::new(800, 600));
        assert_eq!(compute_position(&req), Placement::AnchorOutOfView);
    }

    #[test]
    fn threshold_is_exclusive() {
        let anchor = PageRect::from_origin_size(100, ANCHOR_TOP_CLOSE_THRESHOLD, 80, 20);
        let req = request(anchor, 200, 100, Align::Right, Viewport::new(800, 600));
        assert!(matches!(compute_position(&req), Placement::Resolved(_)));
    }
}
