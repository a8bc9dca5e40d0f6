//! Side selection for a tooltip relative to its trigger.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ui::Rect;

/// Clearance required beyond the tooltip's own extent before a side counts as fitting
pub const DEFAULT_MARGIN: f32 = 10.0;

/// Side of the trigger a tooltip is rendered on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Order in which sides are tried, and in which ties are broken
    pub const PRIORITY: [Side; 4] = [Side::Top, Side::Bottom, Side::Right, Side::Left];

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Top and bottom stack the tooltip vertically against the trigger
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => anyhow::bail!("unknown side '{other}' (expected top, bottom, left or right)"),
        }
    }
}

/// How the side is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Pick the side from the available viewport space
    #[default]
    Auto,
    /// Always use this side
    Fixed(Side),
}

impl Placement {
    pub fn resolve(self, trigger: &Rect, tooltip: &Rect, viewport: &Viewport, margin: f32) -> Side {
        match self {
            Placement::Auto => compute_position_with_margin(trigger, tooltip, viewport, margin),
            Placement::Fixed(side) => side,
        }
    }
}

/// Visible window area with its scroll offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub scroll_x: f32,
    #[serde(default)]
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, scroll_x: 0.0, scroll_y: 0.0 }
    }

    pub fn with_scroll(self, scroll_x: f32, scroll_y: f32) -> Self {
        Self { scroll_x, scroll_y, ..self }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

/// Free space between the trigger and each viewport edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spaces {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Spaces {
    pub fn measure(trigger: &Rect, viewport: &Viewport) -> Self {
        Self {
            top: trigger.y - viewport.scroll_y,
            bottom: viewport.height - (trigger.bottom() - viewport.scroll_y),
            left: trigger.x - viewport.scroll_x,
            right: viewport.width - (trigger.right() - viewport.scroll_x),
        }
    }

    pub fn get(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Side with the most room. The first side in priority order reaching the
    /// maximum wins.
    pub fn roomiest(&self) -> Side {
        let mut best = Side::PRIORITY[0];
        for side in Side::PRIORITY {
            if self.get(side) > self.get(best) {
                best = side;
            }
        }
        best
    }
}

/// Extent of the tooltip that has to fit on the given side
fn required_extent(tooltip: &Rect, side: Side) -> f32 {
    if side.is_vertical() { tooltip.height } else { tooltip.width }
}

/// Choose a side using [`DEFAULT_MARGIN`].
pub fn compute_position(trigger: &Rect, tooltip: &Rect, viewport: &Viewport) -> Side {
    compute_position_with_margin(trigger, tooltip, viewport, DEFAULT_MARGIN)
}

/// Choose the side a tooltip should be rendered on.
///
/// Sides are tried in fixed priority (top, bottom, right, left) and the first
/// one with `extent + margin` of free space wins. Top and bottom are preferred
/// even when a horizontal side has more room. When nothing fits, the side with
/// the most space is used.
pub fn compute_position_with_margin(trigger: &Rect, tooltip: &Rect, viewport: &Viewport, margin: f32) -> Side {
    let spaces = Spaces::measure(trigger, viewport);
    let side = Side::PRIORITY
        .into_iter()
        .find(|&side| spaces.get(side) >= required_extent(tooltip, side) + margin)
        .unwrap_or_else(|| spaces.roomiest());

    tracing::trace!(
        ?spaces,
        tooltip_w = tooltip.width,
        tooltip_h = tooltip.height,
        %side,
        "tooltip side chosen"
    );
    side
}
