//! Anchor-positioned popover menus and floating panels for terminal UIs.
//!
//! The crate splits the popover problem into three pieces:
//!
//! 1. [`placement`]: a pure engine that turns an anchor rect, a panel rect
//!    and a viewport into page coordinates, clamped to the horizontal
//!    margins and flipped above the anchor when it would overflow the
//!    bottom.
//! 2. [`dismiss`] + [`listeners`]: the policy that closes an open panel
//!    (outside pointer-down, Escape, anchor scrolled out of view) and the
//!    bookkeeping that guarantees its document hooks never leak.
//! 3. [`controller`]: the open/closed lifecycle glue. The caller owns the
//!    `show` flag; the controller measures, positions, arms and asks to
//!    close through a callback, never flipping `show` itself.
//!
//! [`menu`] carries the item list a popover usually positions, with a
//! ratatui rendering path; hosts with other content can ignore it and drive
//! the controller directly.

pub mod constants;
pub mod controller;
pub mod deferred;
pub mod dismiss;
pub mod events;
pub mod geometry;
pub mod listeners;
pub mod menu;
pub mod placement;
pub mod theme;
pub mod trace;

pub use controller::{LayoutProbe, PopoverConfig, PopoverController};
pub use dismiss::CloseReason;
pub use events::{EnvEvent, Key};
pub use geometry::{PageRect, Viewport};
pub use listeners::{ArmError, ListenerSet};
pub use menu::{Menu, MenuItem, MenuVariant, MenuWidth};
pub use placement::{Align, ComputedPosition, Placement, PlacementRequest, compute_position};
