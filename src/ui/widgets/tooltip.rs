//! Tooltip widget - hover/focus popup placed on the side of its trigger with the most room

use std::time::Instant;

use serde::Serialize;

use crate::config::TooltipConfig;
use crate::input::{EventResponse, InputEvent};
use crate::tooltip::anchor::{anchor_rect, arrow, clamp_to_viewport, Arrow};
use crate::tooltip::{Geometry, Phase, Side, TooltipSession, Viewport};
use crate::ui::Rect;
use crate::ui::shape::create_triangle_vertices;
use crate::ui::widget::{create_rect_outline_vertices, create_rect_vertices, theme, TextRun, WidgetOutput};

/// Text measurement supplied by the host renderer
pub trait TextMeasure {
    fn measure_text(&self, text: &str) -> f32;
    fn line_height(&self) -> f32;
}

/// Fixed advance per character. Good enough for headless layout and tests.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { char_width: 7.0, line_height: 16.0 }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Resolved geometry of a visible tooltip
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TooltipLayout {
    pub side: Side,
    pub rect: Rect,
    pub arrow: Arrow,
}

/// A tooltip attached to one trigger element.
///
/// Usage each frame:
/// 1. Feed trigger events to `handle_event()`
/// 2. Call `update()` to check the delay timer
/// 3. Call `layout()` with the current trigger rect and viewport
/// 4. Render the returned layout with `output()`
pub struct Tooltip {
    session: Option<TooltipSession>,
    offset: f32,
    arrow_size: f32,
    clamp_inset: Option<f32>,
    padding_x: f32,
    padding_y: f32,
    /// Viewport as of the last layout
    viewport: Viewport,
    /// A viewport event arrived since the last layout
    viewport_dirty: bool,
    /// Side chosen for the current visibility cycle
    side: Option<Side>,
}

impl Tooltip {
    pub fn new(content: impl Into<String>, config: &TooltipConfig) -> Self {
        let session = TooltipSession::new(content)
            .with_delay(config.delay())
            .with_placement(config.placement)
            .with_margin(config.margin);
        Self {
            session: Some(session),
            offset: config.offset,
            arrow_size: config.arrow_size,
            clamp_inset: config.clamp_inset,
            padding_x: config.padding_x,
            padding_y: config.padding_y,
            viewport: Viewport::default(),
            viewport_dirty: false,
            side: None,
        }
    }

    pub fn session(&self) -> Option<&TooltipSession> {
        self.session.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_visible())
    }

    pub fn phase(&self) -> Option<Phase> {
        self.session.as_ref().map(|s| s.phase())
    }

    /// React to a trigger event. Enter and focus schedule a show, leave and
    /// blur hide at once.
    pub fn handle_event(&mut self, event: &InputEvent, now: Instant) -> EventResponse {
        let Some(session) = self.session.as_mut() else {
            return EventResponse::Ignored;
        };
        match event {
            InputEvent::PointerEnter | InputEvent::Focus => session.schedule_show(now),
            InputEvent::PointerLeave | InputEvent::Blur => {
                session.schedule_hide();
                self.side = None;
            }
            InputEvent::ViewportChanged(_) => {
                // Re-placed on the next layout
                self.viewport_dirty = true;
                return EventResponse::Ignored;
            }
        }
        EventResponse::Consumed
    }

    /// Check the delay timer. Returns true when the tooltip just appeared.
    pub fn update(&mut self, now: Instant) -> bool {
        self.session.as_mut().is_some_and(|s| s.tick(now))
    }

    /// Size of the tooltip box for its current content
    pub fn measure(&self, text: &dyn TextMeasure) -> Option<(f32, f32)> {
        let session = self.session.as_ref()?;
        let width = text.measure_text(session.content()) + self.padding_x * 2.0;
        let height = text.line_height() + self.padding_y * 2.0;
        Some((width, height))
    }

    /// Lay out a visible tooltip against its trigger.
    ///
    /// Returns `None` while hidden or while the trigger is not attached. The
    /// side is chosen on the first layout after the tooltip appears and again
    /// whenever the viewport changes.
    pub fn layout(
        &mut self,
        text: &dyn TextMeasure,
        trigger: Option<Rect>,
        viewport: Viewport,
    ) -> Option<TooltipLayout> {
        let (width, height) = self.measure(text)?;
        let viewport_changed = self.viewport_dirty || viewport != self.viewport;
        self.viewport = viewport;

        let session = self.session.as_mut()?;
        if !session.is_visible() {
            // The next show places from scratch
            self.viewport_dirty = false;
            return None;
        }

        let geometry = Geometry {
            trigger,
            tooltip: Some(Rect::from_size(width, height)),
            viewport,
        };
        let placed = if viewport_changed && !session.needs_position() {
            session.reposition(&geometry)
        } else {
            session.layout(&geometry)
        };
        // A viewport change that could not be applied yet is retried
        self.viewport_dirty = viewport_changed && placed.is_none();
        if let Some(side) = placed {
            if self.side != Some(side) {
                tracing::debug!(%side, "tooltip placed");
            }
            self.side = Some(side);
        }

        let trigger = trigger?;
        let side = self.side?;
        let mut rect = anchor_rect(side, &trigger, width, height, self.offset);
        if let Some(inset) = self.clamp_inset {
            rect = clamp_to_viewport(&rect, &viewport, inset);
        }
        Some(TooltipLayout {
            side,
            rect,
            arrow: arrow(side, &rect, &trigger, self.arrow_size),
        })
    }

    /// Render a laid-out tooltip: body, border, arrow and text.
    pub fn output(&self, layout: &TooltipLayout, text: &dyn TextMeasure) -> WidgetOutput {
        let mut output = WidgetOutput::new();
        let Some(session) = self.session.as_ref() else {
            return output;
        };
        if !session.is_visible() || session.content().is_empty() {
            return output;
        }

        let bg_color = theme::TOOLTIP_BACKGROUND.to_array();
        output.shape_vertices.extend(create_rect_vertices(&layout.rect, bg_color));
        output.shape_vertices.extend(create_rect_outline_vertices(
            &layout.rect, theme::TOOLTIP_BORDER.to_array(), 1.0,
        ));
        output.shape_vertices.extend(create_triangle_vertices(layout.arrow.points(), bg_color));

        let content = layout.rect.pad(self.padding_x, self.padding_y, self.padding_x, self.padding_y);
        let text_y = content.y + (content.height - text.line_height()) / 2.0;
        output.text_runs.push(TextRun {
            text: session.content().to_string(),
            x: content.x,
            y: text_y,
            color: theme::TOOLTIP_TEXT.to_array(),
        });

        output
    }

    /// Remove the tooltip. Any pending show is cancelled and later events
    /// and timer checks are ignored.
    pub fn unmount(&mut self) {
        if let Some(session) = self.session.take() {
            session.unmount();
        }
        self.side = None;
    }
}

impl Drop for Tooltip {
    fn drop(&mut self) {
        self.unmount();
    }
}
