//! Pointer hover tracking

use crate::input::InputEvent;
use crate::ui::Rect;

/// Turns raw pointer positions into enter/leave crossings for one trigger
#[derive(Debug, Default)]
pub struct HoverTracker {
    x: f32,
    y: f32,
    inside: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Record a pointer move in document coordinates, the same space as the
    /// trigger rect. A missing trigger counts as not hovered.
    pub fn update(&mut self, x: f32, y: f32, trigger: Option<&Rect>) -> Option<InputEvent> {
        self.x = x;
        self.y = y;
        let inside = trigger.is_some_and(|r| r.contains(x, y));
        self.set_inside(inside)
    }

    /// The pointer left the window
    pub fn clear(&mut self) -> Option<InputEvent> {
        self.set_inside(false)
    }

    fn set_inside(&mut self, inside: bool) -> Option<InputEvent> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside { InputEvent::PointerEnter } else { InputEvent::PointerLeave })
    }
}
