use adjustscreen::adjust::{AdjustScreen, NoopHost, needs_adjusting};
use adjustscreen::config::{AdjustConfig, GateMode};
use adjustscreen::model::*;

fn size(w: i32, h: i32) -> ViewSize {
    ViewSize::new(w, h)
}

#[test]
fn needs_adjusting_table() {
    assert!(needs_adjusting(true, size(1200, 700), size(800, 600)));
    assert!(needs_adjusting(true, size(800, 600), size(1200, 700)));
    assert!(needs_adjusting(true, size(800, 600), size(800, 500)));

    // same screen
    assert!(!needs_adjusting(true, size(800, 600), size(800, 600)));
    // unknown file size
    assert!(!needs_adjusting(true, size(0, 600), size(800, 500)));
    assert!(!needs_adjusting(true, size(800, 0), size(800, 500)));
    // unknown current size
    assert!(!needs_adjusting(true, size(800, 600), size(0, 500)));
    assert!(!needs_adjusting(true, size(800, 600), size(400, 0)));
    // feature off
    assert!(!needs_adjusting(false, size(1200, 700), size(800, 600)));
}

fn crowded() -> Construction {
    [
        GeoElement::slider("a", Slider::horizontal(0.0, 0.0)),
        GeoElement::slider("b", Slider::horizontal(0.0, 10.0)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn always_mode_ignores_the_size_check() {
    let screen = AdjustScreen::new(
        AdjustConfig::default(),
        Some(size(800, 600)),
        size(800, 600),
    );
    assert!(screen.is_enabled());
    let mut c = crowded();
    assert!(!screen.apply(&mut c, &mut NoopHost).moves.is_empty());
}

#[test]
fn when_resized_skips_same_size() {
    let config = AdjustConfig {
        gate: GateMode::WhenResized,
        ..Default::default()
    };
    let screen = AdjustScreen::new(config, Some(size(800, 600)), size(800, 600));
    assert!(!screen.is_enabled());
    let mut c = crowded();
    let report = screen.apply(&mut c, &mut NoopHost);
    assert!(!report.applied);
    assert!(report.moves.is_empty());
    assert_eq!(c.slider("b").unwrap().y, 10.0);
}

#[test]
fn when_resized_without_saved_size_skips() {
    let config = AdjustConfig {
        gate: GateMode::WhenResized,
        ..Default::default()
    };
    let screen = AdjustScreen::new(config, None, size(800, 600));
    assert!(!screen.is_enabled());
}

#[test]
fn when_resized_runs_on_smaller_screen() {
    let config = AdjustConfig {
        gate: GateMode::WhenResized,
        ..Default::default()
    };
    let screen = AdjustScreen::new(config, Some(size(1920, 1080)), size(1024, 600));
    assert!(screen.is_enabled());
}
