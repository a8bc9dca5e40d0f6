//! Adaptive tooltip positioning
//!
//! `placement` picks the side, `anchor` turns a side into box and arrow
//! geometry, and `session` owns the delayed show / instant hide lifecycle.

pub mod anchor;
pub mod placement;
pub mod session;

pub use anchor::{anchor_rect, arrow, clamp_to_viewport, Arrow};
pub use placement::{compute_position, compute_position_with_margin, Placement, Side, Spaces, Viewport};
pub use session::{Geometry, Phase, TooltipSession};
