//! Widget implementations

pub mod tooltip;

pub use tooltip::{MonospaceMetrics, TextMeasure, Tooltip, TooltipLayout};
