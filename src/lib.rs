//! Adaptive tooltips
//!
//! Decides which side of its trigger a tooltip is shown on, based on the free
//! viewport space, and runs the delayed show / instant hide lifecycle.

pub mod config;
pub mod input;
pub mod tooltip;
pub mod ui;

pub use config::TooltipConfig;
pub use input::{EventResponse, InputEvent, InputState};
pub use tooltip::{compute_position, Placement, Side, TooltipSession, Viewport};
pub use ui::Rect;
pub use ui::widgets::Tooltip;
