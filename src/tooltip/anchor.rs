//! Where the tooltip box and its arrow go once a side is chosen.

use serde::Serialize;

use crate::tooltip::placement::{Side, Viewport};
use crate::ui::Rect;
use crate::ui::shape::ShapePoint;

/// Gap between the trigger and the tooltip box
pub const DEFAULT_OFFSET: f32 = 8.0;
/// Half-width of the arrow base, and its length
pub const DEFAULT_ARROW_SIZE: f32 = 4.0;

/// Place a tooltip of the given size against `side` of the trigger, centered
/// on the other axis.
pub fn anchor_rect(side: Side, trigger: &Rect, width: f32, height: f32, offset: f32) -> Rect {
    match side {
        Side::Top => Rect::new(
            trigger.center_x() - width / 2.0,
            trigger.y - offset - height,
            width,
            height,
        ),
        Side::Bottom => Rect::new(
            trigger.center_x() - width / 2.0,
            trigger.bottom() + offset,
            width,
            height,
        ),
        Side::Left => Rect::new(
            trigger.x - offset - width,
            trigger.center_y() - height / 2.0,
            width,
            height,
        ),
        Side::Right => Rect::new(
            trigger.right() + offset,
            trigger.center_y() - height / 2.0,
            width,
            height,
        ),
    }
}

/// Keep `rect` inside the visible part of the document, `inset` pixels away
/// from every edge. The top-left edge wins when the rect is larger than the
/// viewport.
pub fn clamp_to_viewport(rect: &Rect, viewport: &Viewport, inset: f32) -> Rect {
    let min_x = viewport.scroll_x + inset;
    let min_y = viewport.scroll_y + inset;
    let max_x = viewport.scroll_x + viewport.width - rect.width - inset;
    let max_y = viewport.scroll_y + viewport.height - rect.height - inset;
    rect.with_origin(rect.x.min(max_x).max(min_x), rect.y.min(max_y).max(min_y))
}

/// Triangle on the tooltip edge facing the trigger, pointing back at it
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Arrow {
    pub tip: ShapePoint,
    pub base_start: ShapePoint,
    pub base_end: ShapePoint,
}

impl Arrow {
    pub fn points(&self) -> [ShapePoint; 3] {
        [self.base_start, self.tip, self.base_end]
    }
}

/// Arrow geometry for a tooltip box placed on `side` of `trigger`.
///
/// The arrow follows the trigger's center, kept within the tooltip edge so it
/// still points at the trigger after the box was clamped.
pub fn arrow(side: Side, tooltip: &Rect, trigger: &Rect, size: f32) -> Arrow {
    let along_x = trigger.center_x().min(tooltip.right() - size).max(tooltip.x + size);
    let along_y = trigger.center_y().min(tooltip.bottom() - size).max(tooltip.y + size);

    match side {
        // Box above the trigger: arrow hangs off the bottom edge
        Side::Top => Arrow {
            base_start: ShapePoint::new(along_x - size, tooltip.bottom()),
            base_end: ShapePoint::new(along_x + size, tooltip.bottom()),
            tip: ShapePoint::new(along_x, tooltip.bottom() + size),
        },
        Side::Bottom => Arrow {
            base_start: ShapePoint::new(along_x - size, tooltip.y),
            base_end: ShapePoint::new(along_x + size, tooltip.y),
            tip: ShapePoint::new(along_x, tooltip.y - size),
        },
        Side::Left => Arrow {
            base_start: ShapePoint::new(tooltip.right(), along_y - size),
            base_end: ShapePoint::new(tooltip.right(), along_y + size),
            tip: ShapePoint::new(tooltip.right() + size, along_y),
        },
        Side::Right => Arrow {
            base_start: ShapePoint::new(tooltip.x, along_y - size),
            base_end: ShapePoint::new(tooltip.x, along_y + size),
            tip: ShapePoint::new(tooltip.x - size, along_y),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger() -> Rect {
        Rect::new(100.0, 100.0, 40.0, 20.0)
    }

    #[test]
    fn test_anchor_top_is_centered_and_offset() {
        let r = anchor_rect(Side::Top, &trigger(), 60.0, 24.0, DEFAULT_OFFSET);
        assert_eq!(r.center_x(), trigger().center_x());
        assert_eq!(r.bottom(), trigger().y - DEFAULT_OFFSET);
    }

    #[test]
    fn test_anchor_each_side_clears_trigger() {
        let t = trigger();
        let bottom = anchor_rect(Side::Bottom, &t, 60.0, 24.0, 8.0);
        assert_eq!(bottom.y, t.bottom() + 8.0);

        let left = anchor_rect(Side::Left, &t, 60.0, 24.0, 8.0);
        assert_eq!(left.right(), t.x - 8.0);
        assert_eq!(left.center_y(), t.center_y());

        let right = anchor_rect(Side::Right, &t, 60.0, 24.0, 8.0);
        assert_eq!(right.x, t.right() + 8.0);
    }

    #[test]
    fn test_arrow_points_back_at_trigger() {
        let t = trigger();
        for side in Side::PRIORITY {
            let body = anchor_rect(side, &t, 60.0, 24.0, DEFAULT_OFFSET);
            let a = arrow(side, &body, &t, DEFAULT_ARROW_SIZE);
            // The tip lies strictly between the box and the trigger
            match side {
                Side::Top => assert!(a.tip.y > body.bottom() && a.tip.y < t.y),
                Side::Bottom => assert!(a.tip.y < body.y && a.tip.y > t.bottom()),
                Side::Left => assert!(a.tip.x > body.right() && a.tip.x < t.x),
                Side::Right => assert!(a.tip.x < body.x && a.tip.x > t.right()),
            }
        }
    }

    #[test]
    fn test_arrow_stays_on_clamped_box() {
        let viewport = Viewport::new(300.0, 300.0);
        let t = Rect::new(0.0, 200.0, 10.0, 10.0);
        let body = anchor_rect(Side::Top, &t, 100.0, 20.0, DEFAULT_OFFSET);
        assert!(body.x < 0.0);
        let clamped = clamp_to_viewport(&body, &viewport, 0.0);
        assert_eq!(clamped.x, 0.0);
        let a = arrow(Side::Top, &clamped, &t, 4.0);
        assert_eq!(a.tip.x, 5.0);
        assert!(a.base_start.x >= clamped.x);
    }

    #[test]
    fn test_clamp_respects_inset() {
        let viewport = Viewport::new(500.0, 400.0);
        let r = Rect::new(480.0, -30.0, 100.0, 50.0);
        let c = clamp_to_viewport(&r, &viewport, 20.0);
        assert_eq!(c.x, 380.0);
        assert_eq!(c.y, 20.0);
        assert_eq!(c.width, 100.0);
    }

    #[test]
    fn test_clamp_follows_scroll() {
        let viewport = Viewport::new(1000.0, 800.0).with_scroll(0.0, 1200.0);
        // Visible document range is y in [1200, 2000]
        let above = Rect::new(100.0, 700.0, 100.0, 24.0);
        assert_eq!(clamp_to_viewport(&above, &viewport, 20.0).y, 1220.0);

        let below = Rect::new(100.0, 1990.0, 100.0, 24.0);
        assert_eq!(clamp_to_viewport(&below, &viewport, 20.0).y, 2000.0 - 24.0 - 20.0);

        let inside = Rect::new(100.0, 1468.0, 100.0, 24.0);
        assert_eq!(clamp_to_viewport(&inside, &viewport, 20.0), inside);

        let sideways = Viewport::new(500.0, 400.0).with_scroll(300.0, 0.0);
        let left = Rect::new(0.0, 100.0, 100.0, 24.0);
        assert_eq!(clamp_to_viewport(&left, &sideways, 0.0).x, 300.0);
    }

    #[test]
    fn test_clamp_oversized_prefers_top_left() {
        let viewport = Viewport::new(100.0, 100.0);
        let r = Rect::new(50.0, 50.0, 200.0, 200.0);
        let c = clamp_to_viewport(&r, &viewport, 0.0);
        assert_eq!((c.x, c.y), (0.0, 0.0));
    }
}
