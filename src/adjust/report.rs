use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveReason {
    /// Pulled back inside the viewport by the host.
    EnsureVisible,
    HSliderOverlap,
    VSliderOverlap,
    ButtonOverlap,
}

/// One repositioned widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub label: String,
    pub reason: MoveReason,
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// What a pass did to a construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjustReport {
    /// `false` when the gate skipped the pass.
    pub applied: bool,
    pub hsliders: usize,
    pub vsliders: usize,
    pub buttons: usize,
    pub moves: Vec<Move>,
}

impl AdjustReport {
    /// Record a move; positions that did not change are ignored.
    pub fn record(&mut self, label: &str, reason: MoveReason, from: (f64, f64), to: (f64, f64)) {
        if from == to {
            return;
        }
        self.moves.push(Move {
            label: label.to_string(),
            reason,
            from,
            to,
        });
    }

    pub fn count(&self, reason: MoveReason) -> usize {
        self.moves.iter().filter(|m| m.reason == reason).count()
    }

    /// Labels of all widgets that ended up somewhere else.
    pub fn moved_labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for m in &self.moves {
            if !out.contains(&m.label.as_str()) {
                out.push(m.label.as_str());
            }
        }
        out
    }
}
