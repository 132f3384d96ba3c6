//! Visibility lifecycle for a floating panel.
//!
//! The controller never owns the open/closed decision: the caller owns a
//! `show` flag and reconciles it through [`PopoverController::sync`]. The
//! controller only ever asks to close, via the caller-supplied `on_close`
//! callback, and the caller answers by flipping `show` off on its next
//! dispatch.
//!
//! Per open session the work is strictly ordered: measure the anchor at
//! open, wait one layout pass for the panel to exist, measure the panel,
//! compute the position, then arm the dismissal hooks. Closing at any point
//! in between bumps the task epoch so pending steps are discarded rather
//! than applied against a dead session.

use crate::deferred::TickQueue;
use crate::dismiss::{self, CloseLatch, CloseReason};
use crate::events::EnvEvent;
use crate::geometry::{PageRect, Viewport};
use crate::listeners::ListenerSet;
use crate::menu::MenuWidth;
use crate::placement::{Align, ComputedPosition, Placement, PlacementRequest, compute_position};

/// The measurement seam between the controller and its host environment.
///
/// `anchor_rect` returns `None` while the anchor is not mounted; the
/// controller treats that as not-ready and computes nothing. `panel_rect`
/// returns `None` until the panel has been laid out, since its size is a
/// function of content.
pub trait LayoutProbe {
    fn anchor_rect(&self) -> Option<PageRect>;
    fn panel_rect(&self) -> Option<PageRect>;
    fn viewport(&self) -> Viewport;
}

impl<T: LayoutProbe + ?Sized> LayoutProbe for &T {
    fn anchor_rect(&self) -> Option<PageRect> {
        (**self).anchor_rect()
    }

    fn panel_rect(&self) -> Option<PageRect> {
        (**self).panel_rect()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PopoverConfig {
    pub align: Align,
    pub width: MenuWidth,
    /// Minimum clearance from either horizontal viewport edge.
    pub margin: i32,
    /// `anchor.top` values above this close the panel on recomputation.
    pub top_close_threshold: i32,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            align: Align::default(),
            width: MenuWidth::default(),
            margin: crate::constants::VIEWPORT_MARGIN,
            top_close_threshold: crate::constants::ANCHOR_TOP_CLOSE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredTask {
    MeasureAndPosition,
    ArmDismiss,
}

pub struct PopoverController {
    config: PopoverConfig,
    open: bool,
    anchor: Option<PageRect>,
    panel: Option<PageRect>,
    position: Option<ComputedPosition>,
    listeners: ListenerSet,
    queue: TickQueue<DeferredTask>,
    latch: CloseLatch,
    on_close: Option<Box<dyn FnMut(CloseReason)>>,
}

impl std::fmt::Debug for PopoverController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopoverController")
            .field("open", &self.open)
            .field("position", &self.position)
            .field("armed", &self.listeners.active_count())
            .finish()
    }
}

impl PopoverController {
    pub fn new(config: PopoverConfig) -> Self {
        Self {
            config,
            open: false,
            anchor: None,
            panel: None,
            position: None,
            listeners: ListenerSet::new(),
            queue: TickQueue::new(),
            latch: CloseLatch::new(),
            on_close: None,
        }
    }

    /// Install the caller's close callback. Invoked at most once per open
    /// session, whatever combination of triggers fires.
    pub fn set_on_close<F: FnMut(CloseReason) + 'static>(&mut self, on_close: F) {
        self.on_close = Some(Box::new(on_close));
    }

    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The panel's resolved page position, once the post-layout measurement
    /// has run. `None` means the panel should not be drawn at a position
    /// yet (not open, anchor missing, or first layout still pending).
    pub fn position(&self) -> Option<ComputedPosition> {
        self.position
    }

    /// Live document-level listener registrations owned by this controller.
    pub fn active_listener_count(&self) -> usize {
        self.listeners.active_count()
    }

    /// The width the host should lay the panel out at, resolved from the
    /// configured width class against the panel's content width.
    ///
    /// Pixel-unit hosts build the rect they report from
    /// [`LayoutProbe::panel_rect`] at this width, so the class configured
    /// here is what the engine ends up clamping against. Cell-unit hosts
    /// size to content and report their measured rects directly.
    pub fn resolved_panel_width(&self, content_width: i32) -> i32 {
        self.config.width.resolve(content_width)
    }

    /// Reconcile the caller-owned `show` flag.
    ///
    /// Opening requires a measurable anchor: with `anchor_rect() == None`
    /// the controller stays closed and nothing is computed or armed. The
    /// caller retries on its next dispatch once the anchor mounts.
    pub fn sync<P: LayoutProbe>(&mut self, show: bool, probe: &P) {
        match (show, self.open) {
            (true, false) => {
                let Some(anchor) = probe.anchor_rect() else {
                    return;
                };
                self.open = true;
                self.anchor = Some(anchor);
                self.panel = None;
                self.position = None;
                self.latch.reset();
                self.queue.bump_epoch();
                if let Err(err) = self.listeners.arm_view() {
                    tracing::warn!(%err, "view hooks survived a close");
                }
                self.queue.schedule(DeferredTask::MeasureAndPosition);
                self.queue.schedule(DeferredTask::ArmDismiss);
                tracing::debug!(?anchor, "popover opened");
            }
            (true, true) => {
                // Caller re-synced while open (its render pass ran again);
                // refresh measurements the same way a view change would.
                self.measure_and_position(probe);
            }
            (false, true) => self.teardown(),
            (false, false) => {}
        }
    }

    /// Release everything this controller holds against the document.
    ///
    /// Called on OPEN -> CLOSED and on host shutdown; no position state
    /// survives it.
    pub fn teardown(&mut self) {
        self.listeners.disarm_all();
        self.queue.bump_epoch();
        self.anchor = None;
        self.panel = None;
        self.position = None;
        if self.open {
            self.open = false;
            tracing::debug!("popover closed");
        }
    }

    /// Run work deferred to the end of the current dispatch. The host calls
    /// this once after each layout pass while the popover is mounted.
    pub fn after_layout<P: LayoutProbe>(&mut self, probe: &P) {
        if !self.open {
            return;
        }
        for task in self.queue.drain() {
            match task {
                DeferredTask::MeasureAndPosition => self.measure_and_position(probe),
                DeferredTask::ArmDismiss => {
                    if let Err(err) = self.listeners.arm_dismiss() {
                        tracing::warn!(%err, "dismissal hooks survived a close");
                    }
                }
            }
        }
    }

    /// Feed one environment event. Returns `true` when the controller
    /// consumed it (recomputed a position or requested a close).
    pub fn handle_event<P: LayoutProbe>(&mut self, event: &EnvEvent, probe: &P) -> bool {
        if !self.open {
            return false;
        }
        match event {
            EnvEvent::ViewChanged => {
                if !self.listeners.view_armed() {
                    return false;
                }
                self.measure_and_position(probe);
                true
            }
            EnvEvent::PointerDown { .. } | EnvEvent::KeyDown(_) => {
                // Not yet armed: the interaction that opened the panel is
                // still in flight and must not dismiss it.
                if !self.listeners.dismiss_armed() {
                    return false;
                }
                let Some(anchor) = self.anchor else {
                    return false;
                };
                match dismiss::evaluate(event, self.panel, anchor) {
                    Some(reason) => {
                        self.request_close(reason);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// The shared idempotent close path. Menu activation and all three
    /// dismissal triggers funnel through here.
    pub fn request_close(&mut self, reason: CloseReason) {
        let Some(reason) = self.latch.fire(reason) else {
            return;
        };
        tracing::debug!(?reason, "close requested");
        if let Some(on_close) = self.on_close.as_mut() {
            on_close(reason);
        }
    }

    /// Measure both rectangles fresh and run the placement engine.
    ///
    /// An anchor that no longer measures, or one inside the top threshold,
    /// closes the panel. A panel that has not been laid out yet reschedules
    /// itself for the next layout pass instead of computing against zeroed
    /// dimensions.
    fn measure_and_position<P: LayoutProbe>(&mut self, probe: &P) {
        let Some(anchor) = probe.anchor_rect() else {
            self.request_close(CloseReason::AnchorOutOfView);
            return;
        };
        self.anchor = Some(anchor);
        let Some(panel) = probe.panel_rect() else {
            self.queue.schedule(DeferredTask::MeasureAndPosition);
            return;
        };
        self.panel = Some(panel);
        let request = PlacementRequest {
            anchor,
            panel,
            align: self.config.align,
            viewport: probe.viewport(),
            margin: self.config.margin,
            top_close_threshold: self.config.top_close_threshold,
        };
        match compute_position(&request) {
            Placement::Resolved(position) => {
                self.position = Some(position);
            }
            Placement::AnchorOutOfView => self.request_close(CloseReason::AnchorOutOfView),
        }
    }
}

impl Drop for PopoverController {
    fn drop(&mut self) {
        self.teardown();
    }
}
