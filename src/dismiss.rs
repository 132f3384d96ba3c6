//! Dismissal policy: when an open panel must close.
//!
//! `evaluate` is the pure decision; `CloseLatch` collapses however many
//! triggers fire during one open session into a single close request.

use crate::events::{EnvEvent, Key};
use crate::geometry::PageRect;

/// Why the panel was asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    OutsidePointer,
    EscapeKey,
    AnchorOutOfView,
    ItemActivated,
}

/// Decide whether a single environment event dismisses the panel.
///
/// A pointer-down dismisses only when it lands outside both the panel and
/// the anchor; a press on the anchor is the caller's toggle, not ours, and
/// a press on the panel is a menu interaction. An unmeasured panel
/// (`panel = None`) shields nothing.
pub fn evaluate(event: &EnvEvent, panel: Option<PageRect>, anchor: PageRect) -> Option<CloseReason> {
    match *event {
        EnvEvent::PointerDown { x, y } => {
            let inside_panel = panel.is_some_and(|rect| rect.contains(x, y));
            if !inside_panel && !anchor.contains(x, y) {
                Some(CloseReason::OutsidePointer)
            } else {
                None
            }
        }
        EnvEvent::KeyDown(Key::Escape) => Some(CloseReason::EscapeKey),
        _ => None,
    }
}

/// At most one close request per open session.
#[derive(Debug, Default)]
pub struct CloseLatch {
    fired: bool,
}

impl CloseLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-open the latch at the start of a session.
    pub fn reset(&mut self) {
        self.fired = false;
    }

    /// Pass the reason through the first time, swallow every later trigger.
    pub fn fire(&mut self, reason: CloseReason) -> Option<CloseReason> {
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(reason)
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}
