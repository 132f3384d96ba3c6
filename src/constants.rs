//! Shared crate-wide constants.

/// Minimum clearance (in logical units) kept between a floating panel and
/// either horizontal viewport edge.
///
/// The placement engine clamps the panel's left edge so that at least this
/// much space remains on both sides whenever the panel fits inside the
/// viewport at all. Panels wider than the viewport minus two margins pin to
/// the left margin and are allowed to overflow on the right.
pub const VIEWPORT_MARGIN: i32 = 16;

/// Distance (in logical units) from the top of the viewport below which the
/// anchor is considered to have scrolled out of the usable viewport.
///
/// When a recomputation observes `anchor.top` above this line the engine
/// reports the anchor as out of view instead of producing a position, and
/// the controller closes the panel. The threshold is policy, not geometry:
/// hosts with a different notion of "scrolled away" override it through
/// `PopoverConfig::top_close_threshold`.
pub const ANCHOR_TOP_CLOSE_THRESHOLD: i32 = 20;
