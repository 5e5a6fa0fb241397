//! The "keep this widget visible" capability of the view hosting a
//! construction.

use crate::model::{Button, Slider, ViewSize};

/// View-side hook called by the collector for every widget it picks up.
pub trait ScreenHost {
    fn ensure_slider_on_screen(&mut self, label: &str, slider: &mut Slider);
    fn ensure_button_on_screen(&mut self, label: &str, button: &mut Button);
}

/// Leaves every widget where it is.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl ScreenHost for NoopHost {
    fn ensure_slider_on_screen(&mut self, _label: &str, _slider: &mut Slider) {}
    fn ensure_button_on_screen(&mut self, _label: &str, _button: &mut Button) {}
}

/// Pulls widgets back inside a viewport of the given size.
///
/// Horizontal sliders extend to the right of their anchor, vertical sliders
/// extend upwards from it. A widget larger than the viewport is pinned to the
/// top/left edge. Sliders attached to real-world coordinates are left alone
/// since their screen position depends on the view transform.
#[derive(Debug, Clone, Copy)]
pub struct ClampToViewport {
    pub viewport: ViewSize,
}

impl ClampToViewport {
    pub fn new(viewport: ViewSize) -> Self {
        Self { viewport }
    }
}

fn clamp_span(pos: f64, len: f64, lo: f64, hi: f64) -> f64 {
    if len > hi - lo {
        lo
    } else {
        pos.clamp(lo, hi - len)
    }
}

impl ScreenHost for ClampToViewport {
    fn ensure_slider_on_screen(&mut self, _label: &str, slider: &mut Slider) {
        if !slider.fixed {
            return;
        }
        let w = self.viewport.width as f64;
        let h = self.viewport.height as f64;
        let len = slider.width.max(0.0);
        if slider.horizontal {
            slider.x = clamp_span(slider.x, len, 0.0, w);
            slider.y = slider.y.clamp(0.0, h.max(0.0));
        } else {
            slider.x = slider.x.clamp(0.0, w.max(0.0));
            // anchor sits at the bottom end of the track
            let top = clamp_span(slider.y - len, len, 0.0, h);
            slider.y = top + len;
        }
    }

    fn ensure_button_on_screen(&mut self, _label: &str, button: &mut Button) {
        let fit = |pos: i32, len: i32, limit: i32| -> i32 {
            if limit <= 0 || len >= limit {
                0
            } else {
                pos.clamp(0, limit - len.max(0))
            }
        };
        button.x = fit(button.x, button.width, self.viewport.width);
        button.y = fit(button.y, button.height, self.viewport.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_horizontal_slider_track_inside() {
        let mut host = ClampToViewport::new(ViewSize::new(400, 300));
        let mut s = Slider::horizontal(350.0, 500.0);
        host.ensure_slider_on_screen("a", &mut s);
        assert_eq!(s.x, 200.0);
        assert_eq!(s.y, 300.0);
    }

    #[test]
    fn clamps_vertical_slider_from_bottom_anchor() {
        let mut host = ClampToViewport::new(ViewSize::new(400, 300));
        let mut s = Slider::vertical(10.0, 50.0);
        host.ensure_slider_on_screen("a", &mut s);
        assert_eq!(s.y, 200.0);
        assert_eq!(s.x, 10.0);
    }

    #[test]
    fn skips_world_anchored_slider() {
        let mut host = ClampToViewport::new(ViewSize::new(100, 100));
        let mut s = Slider {
            fixed: false,
            ..Slider::horizontal(-5.0, 900.0)
        };
        host.ensure_slider_on_screen("a", &mut s);
        assert_eq!((s.x, s.y), (-5.0, 900.0));
    }

    #[test]
    fn degenerate_viewport_pins_button_to_origin() {
        let mut host = ClampToViewport::new(ViewSize::new(-20, 0));
        let mut b = Button::new(30, 40, -10, -5);
        host.ensure_button_on_screen("b", &mut b);
        assert_eq!((b.x, b.y), (0, 0));
    }

    #[test]
    fn pins_oversized_button_to_origin() {
        let mut host = ClampToViewport::new(ViewSize::new(100, 100));
        let mut b = Button::new(50, 90, 150, 20);
        host.ensure_button_on_screen("b", &mut b);
        assert_eq!((b.x, b.y), (0, 80));
    }
}
