pub mod layout;
pub mod shape;
pub mod widget;
pub mod widgets;

pub use layout::{Color, Rect};
pub use shape::{ShapePoint, ShapeVertex};
pub use widget::{TextRun, WidgetOutput};
