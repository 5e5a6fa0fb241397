use super::host::ScreenHost;
use super::report::{AdjustReport, MoveReason};
use crate::model::{Construction, ElementKind};
use log::debug;

/// Labels of the widgets picked up from a construction, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Widgets {
    pub hsliders: Vec<String>,
    pub vsliders: Vec<String>,
    pub buttons: Vec<String>,
}

impl Widgets {
    pub fn is_empty(&self) -> bool {
        self.hsliders.is_empty() && self.vsliders.is_empty() && self.buttons.is_empty()
    }
}

/// Split the construction into horizontal sliders, vertical sliders and
/// buttons, and let the host pull each of them back on screen.
///
/// Plain numerics, input boxes and every other element kind are skipped.
pub fn collect_widgets(
    construction: &mut Construction,
    host: &mut dyn ScreenHost,
    report: &mut AdjustReport,
) -> Widgets {
    debug!("collecting widgets from {} elements", construction.len());
    let mut widgets = Widgets::default();
    for geo in construction.elements_mut() {
        match &mut geo.kind {
            ElementKind::Numeric {
                slider: Some(slider),
            } => {
                if slider.horizontal {
                    widgets.hsliders.push(geo.label.clone());
                } else {
                    widgets.vsliders.push(geo.label.clone());
                }
                let before = (slider.x, slider.y);
                host.ensure_slider_on_screen(&geo.label, slider);
                report.record(&geo.label, MoveReason::EnsureVisible, before, (slider.x, slider.y));
            }
            ElementKind::Button(button) => {
                widgets.buttons.push(geo.label.clone());
                let before = (button.x as f64, button.y as f64);
                host.ensure_button_on_screen(&geo.label, button);
                report.record(
                    &geo.label,
                    MoveReason::EnsureVisible,
                    before,
                    (button.x as f64, button.y as f64),
                );
            }
            _ => {}
        }
    }
    widgets
}
