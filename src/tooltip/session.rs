//! Show/hide lifecycle of a single tooltip.
//!
//! A session is slow to appear and instant to disappear: `schedule_show`
//! arms a deadline, `schedule_hide` drops it and hides immediately. The
//! deadline is polled from the owner's event loop through `tick`, the same way
//! widgets check their hover delay each frame. Position is recomputed on the
//! first layout after the tooltip becomes visible, since its size is unknown
//! before then.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::tooltip::placement::{Placement, Side, Viewport, DEFAULT_MARGIN};
use crate::ui::Rect;

/// Delay before a tooltip appears when none is configured
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Where a session is in its show/hide cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Hidden,
    /// A show deadline is armed
    Pending,
    Visible,
}

/// Geometry available at layout time. A rect is `None` while its element
/// is not attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct Geometry {
    pub trigger: Option<Rect>,
    pub tooltip: Option<Rect>,
    pub viewport: Viewport,
}

#[derive(Debug)]
pub struct TooltipSession {
    content: String,
    delay: Duration,
    placement: Placement,
    margin: f32,
    visible: bool,
    position: Side,
    /// Show deadline. At most one per session.
    pending: Option<Instant>,
    /// Set when the tooltip became visible and has not been placed yet
    needs_position: bool,
}

impl TooltipSession {
    /// Mount a session for a tooltip-enabled element.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            delay: DEFAULT_DELAY,
            placement: Placement::Auto,
            margin: DEFAULT_MARGIN,
            visible: false,
            position: Side::default(),
            pending: None,
            needs_position: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last chosen side. Only meaningful while visible.
    pub fn position(&self) -> Side {
        self.position
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending
    }

    pub fn needs_position(&self) -> bool {
        self.needs_position
    }

    pub fn phase(&self) -> Phase {
        if self.visible {
            Phase::Visible
        } else if self.pending.is_some() {
            Phase::Pending
        } else {
            Phase::Hidden
        }
    }

    /// Arm the show deadline, replacing any previous one.
    pub fn schedule_show(&mut self, now: Instant) {
        let deadline = now + self.delay;
        if self.pending.replace(deadline).is_some() {
            tracing::trace!("tooltip show deadline reset");
        }
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "tooltip show scheduled");
    }

    /// Cancel any pending show and hide immediately.
    pub fn schedule_hide(&mut self) {
        let was = self.phase();
        self.pending = None;
        self.visible = false;
        self.needs_position = false;
        if was != Phase::Hidden {
            tracing::debug!(from = ?was, "tooltip hidden");
        }
    }

    /// Fire the show deadline if it has passed. Returns true when the tooltip
    /// just became visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                if self.visible {
                    // Already showing: position stays as computed
                    return false;
                }
                self.visible = true;
                self.needs_position = true;
                tracing::debug!("tooltip shown");
                true
            }
            _ => false,
        }
    }

    /// Place the tooltip if it became visible since the last layout.
    ///
    /// Returns the newly chosen side, or `None` if nothing was recomputed. When
    /// either rect is missing the previous position is kept and the request
    /// stays armed for the next layout of this visibility cycle.
    pub fn layout(&mut self, geometry: &Geometry) -> Option<Side> {
        if !self.visible || !self.needs_position {
            return None;
        }
        let side = self.place(geometry)?;
        self.needs_position = false;
        Some(side)
    }

    /// Recompute the side of a visible tooltip after the viewport scrolled or
    /// resized.
    pub fn reposition(&mut self, geometry: &Geometry) -> Option<Side> {
        if !self.visible {
            return None;
        }
        let side = self.place(geometry)?;
        self.needs_position = false;
        Some(side)
    }

    fn place(&mut self, geometry: &Geometry) -> Option<Side> {
        let (Some(trigger), Some(tooltip)) = (geometry.trigger, geometry.tooltip) else {
            tracing::trace!("tooltip placement deferred: element not attached");
            return None;
        };
        let side = self.placement.resolve(&trigger, &tooltip, &geometry.viewport, self.margin);
        self.position = side;
        Some(side)
    }

    /// Tear the session down. Consuming `self` means no deadline can fire
    /// against it afterwards.
    pub fn unmount(mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("tooltip unmounted with a pending show; cancelled");
        }
    }
}
