use super::report::{AdjustReport, MoveReason};
use crate::config::Strategy;
use crate::model::{Button, Construction, GeoElement};
use log::debug;

fn button_of(c: &Construction, label: &str) -> Option<Button> {
    c.button(label).copied()
}

fn move_button(c: &mut Construction, label: &str, x: i32, y: i32, report: &mut AdjustReport) {
    if let Some(b) = c.get_mut(label).and_then(GeoElement::as_button_mut) {
        let from = (b.x as f64, b.y as f64);
        b.set_location(x, y);
        report.record(label, MoveReason::ButtonOverlap, from, (x as f64, y as f64));
    }
}

/// `y` just below `b` with `gap` pixels between, saturating at the screen
/// coordinate range.
fn below(b: &Button, gap: i32) -> i32 {
    b.y.saturating_add(b.height).saturating_add(gap)
}

fn overlaps(a: &Button, b: &Button) -> bool {
    a.rect().intersects(b.rect()) || b.rect().intersects(a.rect())
}

/// Stable ascending sort of button labels by screen `y`.
pub fn sort_buttons(c: &Construction, labels: &mut [String]) {
    labels.sort_by_key(|l| button_of(c, l).map(|b| b.y).unwrap_or(i32::MIN));
}

/// Move buttons whose rectangles intersect their neighbour's to just below
/// it, `gap` pixels apart. Returns the number of buttons moved.
pub fn resolve_buttons(
    c: &mut Construction,
    labels: &mut [String],
    gap: i32,
    strategy: Strategy,
    report: &mut AdjustReport,
) -> usize {
    sort_buttons(c, labels);
    let mut moved = 0;
    match strategy {
        // The upper button of an overlapping pair drops below the lower one.
        // There is no accumulator: a later fix can overlap an earlier pair.
        Strategy::Greedy => {
            for idx in (1..labels.len()).rev() {
                let (Some(b1), Some(b2)) =
                    (button_of(c, &labels[idx - 1]), button_of(c, &labels[idx]))
                else {
                    continue;
                };
                let overlap = overlaps(&b1, &b2);
                debug!("{} - {} overlaps: {}", labels[idx - 1], labels[idx], overlap);
                if overlap {
                    move_button(c, &labels[idx - 1], b1.x, below(&b2, gap), report);
                    moved += 1;
                }
            }
        }
        Strategy::Monotonic => {
            for idx in 1..labels.len() {
                let (Some(prev), Some(cur)) =
                    (button_of(c, &labels[idx - 1]), button_of(c, &labels[idx]))
                else {
                    continue;
                };
                if overlaps(&prev, &cur) {
                    move_button(c, &labels[idx], cur.x, below(&prev, gap), report);
                    moved += 1;
                }
            }
        }
    }
    moved
}
