use std::time::{Duration, Instant};

use smart_tooltip::input::{InputEvent, InputState};
use smart_tooltip::tooltip::{compute_position, Phase, Side, Viewport};
use smart_tooltip::ui::widgets::{MonospaceMetrics, Tooltip};
use smart_tooltip::{Rect, TooltipConfig};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn corner_trigger_example() {
    // Trigger at the viewport's top-left corner, 30px tall tooltip, 800px viewport
    let trigger = Rect::new(0.0, 0.0, 40.0, 20.0);
    let tooltip = Rect::from_size(120.0, 30.0);
    let side = compute_position(&trigger, &tooltip, &Viewport::new(1200.0, 800.0));
    assert_eq!(side, Side::Bottom);
}

#[test]
fn hover_drives_delayed_show_and_instant_hide() {
    let metrics = MonospaceMetrics::default();
    let viewport = Viewport::new(1200.0, 800.0);
    let trigger = Rect::new(500.0, 400.0, 80.0, 24.0);
    let mut input = InputState::new(viewport);
    let mut tooltip = Tooltip::new("Milestone due", &TooltipConfig::default());
    let t0 = Instant::now();

    // Pointer moves onto the trigger
    let enter = input.hover.update(510.0, 410.0, Some(&trigger)).unwrap();
    assert_eq!(enter, InputEvent::PointerEnter);
    tooltip.handle_event(&enter, t0);

    // Jitter inside the trigger produces no further events
    assert!(input.hover.update(520.0, 412.0, Some(&trigger)).is_none());

    tooltip.update(t0 + ms(100));
    assert_eq!(tooltip.phase(), Some(Phase::Pending));
    assert!(tooltip.layout(&metrics, Some(trigger), viewport).is_none());

    assert!(tooltip.update(t0 + ms(200)));
    let layout = tooltip.layout(&metrics, Some(trigger), viewport).unwrap();
    assert_eq!(layout.side, Side::Top);
    assert!(layout.rect.bottom() < trigger.y);

    let leave = input.hover.update(0.0, 0.0, Some(&trigger)).unwrap();
    tooltip.handle_event(&leave, t0 + ms(250));
    assert!(!tooltip.is_visible());
    assert!(tooltip.layout(&metrics, Some(trigger), viewport).is_none());
}

#[test]
fn quick_pass_over_trigger_never_shows() {
    let mut tooltip = Tooltip::new("Quote pending", &TooltipConfig::default());
    let t0 = Instant::now();
    tooltip.handle_event(&InputEvent::PointerEnter, t0);
    tooltip.handle_event(&InputEvent::PointerLeave, t0 + ms(50));
    for step in 1..10 {
        assert!(!tooltip.update(t0 + ms(step * 100)));
    }
    assert_eq!(tooltip.phase(), Some(Phase::Hidden));
}

#[test]
fn focus_after_hover_keeps_one_deadline() {
    let mut tooltip = Tooltip::new("Fees", &TooltipConfig::default());
    let t0 = Instant::now();
    tooltip.handle_event(&InputEvent::PointerEnter, t0);
    tooltip.handle_event(&InputEvent::Focus, t0 + ms(150));
    let session = tooltip.session().unwrap();
    assert_eq!(session.pending_deadline(), Some(t0 + ms(350)));
    assert!(!tooltip.update(t0 + ms(200)));
    assert!(tooltip.update(t0 + ms(350)));
}

#[test]
fn dropping_a_pending_tooltip_is_clean() {
    let t0 = Instant::now();
    let mut tooltip = Tooltip::new("Gone", &TooltipConfig::default());
    tooltip.handle_event(&InputEvent::PointerEnter, t0);
    tooltip.unmount();
    tooltip.unmount();
    assert!(!tooltip.update(t0 + ms(500)));
    assert_eq!(tooltip.phase(), None);
}
