//! Input handling for tooltip triggers
//!
//! Abstracts winit window events into the four events a tooltip reacts to,
//! plus viewport changes that may require re-placement.

mod hover;

pub use hover::HoverTracker;

use serde::{Deserialize, Serialize};

use crate::tooltip::Viewport;
use crate::ui::Rect;

/// An input event relevant to a tooltip trigger
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerEnter,
    PointerLeave,
    /// The trigger gained keyboard focus
    Focus,
    /// The trigger lost keyboard focus
    Blur,
    /// The window was scrolled or resized
    ViewportChanged(Viewport),
}

impl InputEvent {
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::PointerEnter => "pointer_enter",
            InputEvent::PointerLeave => "pointer_leave",
            InputEvent::Focus => "focus",
            InputEvent::Blur => "blur",
            InputEvent::ViewportChanged(_) => "viewport_changed",
        }
    }
}

/// Response from handling an input event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventResponse {
    /// Event was not handled, should bubble up
    #[default]
    Ignored,
    /// Event was handled, stop propagation
    Consumed,
}

impl EventResponse {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResponse::Consumed)
    }
}

/// Tracks pointer and viewport state for one trigger
#[derive(Debug, Default)]
pub struct InputState {
    pub hover: HoverTracker,
    pub viewport: Viewport,
}

impl InputState {
    pub fn new(viewport: Viewport) -> Self {
        Self { hover: HoverTracker::new(), viewport }
    }

    /// Hit-test a pointer position given in window coordinates against a
    /// trigger in document coordinates.
    pub fn pointer_moved(&mut self, window_x: f32, window_y: f32, trigger: Option<&Rect>) -> Option<InputEvent> {
        let x = window_x + self.viewport.scroll_x;
        let y = window_y + self.viewport.scroll_y;
        self.hover.update(x, y, trigger)
    }

    /// Update the scroll offsets
    pub fn scroll_to(&mut self, scroll_x: f32, scroll_y: f32) -> InputEvent {
        self.viewport = self.viewport.with_scroll(scroll_x, scroll_y);
        InputEvent::ViewportChanged(self.viewport)
    }

    /// Update state from a winit WindowEvent and optionally produce an InputEvent.
    ///
    /// Window focus loss blurs the trigger; gaining window focus does not focus
    /// it, that is up to the application's focus handling.
    pub fn handle_window_event(
        &mut self,
        event: &winit::event::WindowEvent,
        trigger: Option<&Rect>,
    ) -> Option<InputEvent> {
        use winit::event::WindowEvent;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_moved(position.x as f32, position.y as f32, trigger)
            }

            WindowEvent::CursorLeft { .. } => self.hover.clear(),

            WindowEvent::Focused(false) => Some(InputEvent::Blur),

            WindowEvent::Resized(size) => {
                self.viewport.width = size.width as f32;
                self.viewport.height = size.height as f32;
                Some(InputEvent::ViewportChanged(self.viewport))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;
    use winit::event::WindowEvent;

    #[test]
    fn test_window_blur_and_resize() {
        let mut input = InputState::new(Viewport::new(800.0, 600.0).with_scroll(0.0, 40.0));
        assert_eq!(input.handle_window_event(&WindowEvent::Focused(false), None), Some(InputEvent::Blur));
        assert_eq!(input.handle_window_event(&WindowEvent::Focused(true), None), None);

        let resized = input.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(1024, 768)), None);
        let expected = Viewport::new(1024.0, 768.0).with_scroll(0.0, 40.0);
        assert_eq!(resized, Some(InputEvent::ViewportChanged(expected)));
    }

    #[test]
    fn test_scroll_to_keeps_size() {
        let mut input = InputState::new(Viewport::new(800.0, 600.0));
        let event = input.scroll_to(10.0, 250.0);
        assert_eq!(event, InputEvent::ViewportChanged(Viewport::new(800.0, 600.0).with_scroll(10.0, 250.0)));
    }

    #[test]
    fn test_hover_on_scrolled_page() {
        let mut input = InputState::new(Viewport::new(1000.0, 800.0));
        input.scroll_to(0.0, 1200.0);
        // Document y 1500 is drawn at window y 300
        let trigger = Rect::new(400.0, 1500.0, 40.0, 20.0);
        assert_eq!(input.pointer_moved(410.0, 305.0, Some(&trigger)), Some(InputEvent::PointerEnter));
        assert_eq!(input.hover.position(), (410.0, 1505.0));
        assert_eq!(input.pointer_moved(410.0, 1505.0, Some(&trigger)), Some(InputEvent::PointerLeave));
    }

    #[test]
    fn test_horizontal_scroll_offsets_hit_test() {
        let mut input = InputState::new(Viewport::new(800.0, 600.0));
        input.scroll_to(250.0, 0.0);
        let trigger = Rect::new(300.0, 100.0, 40.0, 20.0);
        assert_eq!(input.pointer_moved(300.0, 105.0, Some(&trigger)), None);
        assert_eq!(input.pointer_moved(60.0, 105.0, Some(&trigger)), Some(InputEvent::PointerEnter));
    }

    #[test]
    fn test_event_json_shape() {
        let e: InputEvent = serde_json::from_str(r#"{"type":"pointer_enter"}"#).unwrap();
        assert_eq!(e, InputEvent::PointerEnter);
        let v: InputEvent =
            serde_json::from_str(r#"{"type":"viewport_changed","width":300,"height":200}"#).unwrap();
        assert_eq!(v, InputEvent::ViewportChanged(Viewport::new(300.0, 200.0)));
        assert_eq!(v.name(), "viewport_changed");
    }
}
