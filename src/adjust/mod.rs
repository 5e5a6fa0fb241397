//! Screen adjustment for constructions opened on a different screen size.
//!
//! When a file is opened on a screen smaller than the one it was saved on,
//! screen-anchored widgets may end up on top of each other. [`AdjustScreen`]
//! runs one pass over the construction:
//!
//! 1. [`collect`] – pick up sliders and buttons, let the host keep them visible
//! 2. [`sliders`] – separate horizontal sliders along `y`, then vertical
//!    sliders along `x`
//! 3. [`buttons`] – move intersecting buttons apart
//!
//! Each step runs once and is independent of the others. Whether the pass runs
//! at all is decided by [`gate::needs_adjusting`] according to the configured
//! [`GateMode`].

pub mod buttons;
pub mod collect;
pub mod gate;
pub mod host;
pub mod report;
pub mod sliders;

pub use collect::{Widgets, collect_widgets};
pub use gate::needs_adjusting;
pub use host::{ClampToViewport, NoopHost, ScreenHost};
pub use report::{AdjustReport, Move, MoveReason};
pub use sliders::SliderAxis;

use crate::config::{AdjustConfig, GateMode};
use crate::model::{Construction, GeoDocument, ViewSize};
use log::{debug, info};

/// Checks whether the saved screen differs from the current one and, if so,
/// moves widgets so they fit the current screen.
#[derive(Debug, Clone)]
pub struct AdjustScreen {
    config: AdjustConfig,
    enabled: bool,
}

impl AdjustScreen {
    /// Build an adjuster for a construction saved at `file_size` and shown at
    /// `current`. The gate is evaluated here, once.
    pub fn new(config: AdjustConfig, file_size: Option<ViewSize>, current: ViewSize) -> Self {
        let enabled = match config.gate {
            GateMode::Always => true,
            GateMode::WhenResized => needs_adjusting(
                config.feature_enabled,
                file_size.unwrap_or_default(),
                current,
            ),
        };
        Self { config, enabled }
    }

    pub fn for_document(config: AdjustConfig, doc: &GeoDocument, current: ViewSize) -> Self {
        Self::new(config, doc.file_size, current)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn config(&self) -> &AdjustConfig {
        &self.config
    }

    /// Run the pass. The construction is only borrowed for the duration of
    /// the call.
    pub fn apply(&self, construction: &mut Construction, host: &mut dyn ScreenHost) -> AdjustReport {
        let mut report = AdjustReport::default();
        if !self.enabled {
            debug!("adjustment not needed");
            return report;
        }
        report.applied = true;

        let mut widgets = collect_widgets(construction, host, &mut report);
        report.hsliders = widgets.hsliders.len();
        report.vsliders = widgets.vsliders.len();
        report.buttons = widgets.buttons.len();

        let cfg = &self.config;
        sliders::resolve_sliders(
            construction,
            &mut widgets.hsliders,
            SliderAxis::Horizontal,
            cfg.hslider_threshold,
            cfg.strategy,
            &mut report,
        );
        sliders::resolve_sliders(
            construction,
            &mut widgets.vsliders,
            SliderAxis::Vertical,
            cfg.vslider_threshold,
            cfg.strategy,
            &mut report,
        );
        buttons::resolve_buttons(
            construction,
            &mut widgets.buttons,
            cfg.button_gap,
            cfg.strategy,
            &mut report,
        );

        info!(
            "adjusted {} widget(s): {} hslider(s), {} vslider(s), {} button(s)",
            report.moved_labels().len(),
            report.hsliders,
            report.vsliders,
            report.buttons
        );
        report
    }
}

/// Adjust a parsed document for a viewport of size `current`. When `clamp` is
/// set, widgets are first pulled inside the viewport.
pub fn adjust_document(
    doc: &mut GeoDocument,
    config: AdjustConfig,
    current: ViewSize,
    clamp: bool,
) -> AdjustReport {
    let adjuster = AdjustScreen::for_document(config, doc, current);
    if clamp {
        let mut host = ClampToViewport::new(current);
        adjuster.apply(&mut doc.construction, &mut host)
    } else {
        adjuster.apply(&mut doc.construction, &mut NoopHost)
    }
}
