//! Widget output and vertex helpers
//!
//! Widgets keep their own state but regenerate their geometry on every layout
//! pass (immediate-mode output).

use crate::ui::shape::ShapeVertex;
use crate::ui::Rect;

/// A positioned run of text. Glyph shaping is left to the host renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: [f32; 4],
}

/// Output from a widget's layout pass
#[derive(Debug, Default)]
pub struct WidgetOutput {
    /// Triangles for filled shapes
    pub shape_vertices: Vec<ShapeVertex>,
    /// Text to draw on top of the shapes
    pub text_runs: Vec<TextRun>,
}

impl WidgetOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.shape_vertices.is_empty() && self.text_runs.is_empty()
    }

    pub fn extend(&mut self, other: WidgetOutput) {
        self.shape_vertices.extend(other.shape_vertices);
        self.text_runs.extend(other.text_runs);
    }
}

/// Helper to create filled rectangle vertices
pub fn create_rect_vertices(rect: &Rect, color: [f32; 4]) -> Vec<ShapeVertex> {
    let x0 = rect.x;
    let y0 = rect.y;
    let x1 = rect.right();
    let y1 = rect.bottom();

    vec![
        // First triangle
        ShapeVertex { position: [x0, y0], color },
        ShapeVertex { position: [x1, y0], color },
        ShapeVertex { position: [x0, y1], color },
        // Second triangle
        ShapeVertex { position: [x1, y0], color },
        ShapeVertex { position: [x1, y1], color },
        ShapeVertex { position: [x0, y1], color },
    ]
}

/// Helper to create rectangle outline vertices
pub fn create_rect_outline_vertices(rect: &Rect, color: [f32; 4], thickness: f32) -> Vec<ShapeVertex> {
    let mut vertices = Vec::new();

    // Top edge
    vertices.extend(create_rect_vertices(
        &Rect::new(rect.x, rect.y, rect.width, thickness),
        color,
    ));

    // Bottom edge
    vertices.extend(create_rect_vertices(
        &Rect::new(rect.x, rect.bottom() - thickness, rect.width, thickness),
        color,
    ));

    // Left edge
    vertices.extend(create_rect_vertices(
        &Rect::new(rect.x, rect.y + thickness, thickness, rect.height - 2.0 * thickness),
        color,
    ));

    // Right edge
    vertices.extend(create_rect_vertices(
        &Rect::new(rect.right() - thickness, rect.y + thickness, thickness, rect.height - 2.0 * thickness),
        color,
    ));

    vertices
}

/// Tooltip colors
pub mod theme {
    use crate::ui::Color;

    pub const TOOLTIP_BACKGROUND: Color = Color::rgba(0.067, 0.094, 0.153, 1.0); // #111827 - near black
    pub const TOOLTIP_BORDER: Color = Color::rgba(0.216, 0.255, 0.318, 1.0);     // #374151 - subtle edge
    pub const TOOLTIP_TEXT: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
}
