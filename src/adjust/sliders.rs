//! De-overlapping of sliders along one axis.

use super::report::{AdjustReport, MoveReason};
use crate::config::Strategy;
use crate::model::{Construction, GeoElement, Slider};
use log::debug;

/// Which slider orientation a pass handles. Horizontal sliders are stacked
/// vertically, so they are compared and pushed along `y`; vertical sliders
/// along `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderAxis {
    Horizontal,
    Vertical,
}

impl SliderAxis {
    pub fn key(self, s: &Slider) -> f64 {
        match self {
            SliderAxis::Horizontal => s.y,
            SliderAxis::Vertical => s.x,
        }
    }

    fn with_key(self, s: &Slider, key: f64) -> (f64, f64) {
        match self {
            SliderAxis::Horizontal => (s.x, key),
            SliderAxis::Vertical => (key, s.y),
        }
    }

    fn reason(self) -> MoveReason {
        match self {
            SliderAxis::Horizontal => MoveReason::HSliderOverlap,
            SliderAxis::Vertical => MoveReason::VSliderOverlap,
        }
    }
}

fn slider_of(c: &Construction, label: &str) -> Option<Slider> {
    c.slider(label).copied()
}

fn move_slider(
    c: &mut Construction,
    label: &str,
    axis: SliderAxis,
    to: (f64, f64),
    report: &mut AdjustReport,
) {
    if let Some(s) = c.get_mut(label).and_then(GeoElement::as_slider_mut) {
        let from = (s.x, s.y);
        debug!("adjusting {} to ({}, {})", label, to.0, to.1);
        s.set_location(to.0, to.1);
        report.record(label, axis.reason(), from, to);
    }
}

/// Stable ascending sort of slider labels by their coordinate on `axis`.
/// Labels that share a coordinate keep their relative order.
pub fn sort_sliders(c: &Construction, labels: &mut [String], axis: SliderAxis) {
    labels.sort_by(|a, b| {
        let ka = slider_of(c, a).map(|s| axis.key(&s)).unwrap_or(f64::NEG_INFINITY);
        let kb = slider_of(c, b).map(|s| axis.key(&s)).unwrap_or(f64::NEG_INFINITY);
        ka.total_cmp(&kb)
    });
}

/// Separate sliders that sit closer than `threshold` to their neighbour.
/// Returns the number of sliders moved.
pub fn resolve_sliders(
    c: &mut Construction,
    labels: &mut [String],
    axis: SliderAxis,
    threshold: f64,
    strategy: Strategy,
    report: &mut AdjustReport,
) -> usize {
    sort_sliders(c, labels, axis);
    match strategy {
        Strategy::Greedy => resolve_greedy(c, labels, axis, threshold, report),
        Strategy::Monotonic => resolve_monotonic(c, labels, axis, threshold, report),
    }
}

// Walk from the far end. Every fix pushes one threshold further than the
// previous fix, so earlier sliders in a cascade land beyond later ones.
fn resolve_greedy(
    c: &mut Construction,
    labels: &[String],
    axis: SliderAxis,
    threshold: f64,
    report: &mut AdjustReport,
) -> usize {
    let mut push = threshold;
    let mut moved = 0;
    for idx in (1..labels.len()).rev() {
        let (Some(prev), Some(cur)) = (slider_of(c, &labels[idx - 1]), slider_of(c, &labels[idx]))
        else {
            continue;
        };
        debug!("{} - {}", labels[idx - 1], labels[idx]);
        if axis.key(&cur) - axis.key(&prev) < threshold {
            let to = axis.with_key(&cur, axis.key(&cur) + push);
            move_slider(c, &labels[idx], axis, to, report);
            push += threshold;
            moved += 1;
        }
    }
    moved
}

fn resolve_monotonic(
    c: &mut Construction,
    labels: &[String],
    axis: SliderAxis,
    threshold: f64,
    report: &mut AdjustReport,
) -> usize {
    let mut moved = 0;
    for idx in 1..labels.len() {
        let (Some(prev), Some(cur)) = (slider_of(c, &labels[idx - 1]), slider_of(c, &labels[idx]))
        else {
            continue;
        };
        let min = axis.key(&prev) + threshold;
        if axis.key(&cur) < min {
            move_slider(c, &labels[idx], axis, axis.with_key(&cur, min), report);
            moved += 1;
        }
    }
    moved
}
