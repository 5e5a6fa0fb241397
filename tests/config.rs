use adjustscreen::config::*;
use adjustscreen::model::ViewSize;
use std::io::Write;

#[test]
fn defaults_match_observed_constants() {
    let cfg = AdjustConfig::default();
    assert_eq!(cfg.hslider_threshold, 50.0);
    assert_eq!(cfg.vslider_threshold, 50.0);
    assert_eq!(cfg.button_gap, 10);
    assert_eq!(cfg.strategy, Strategy::Greedy);
    assert_eq!(cfg.gate, GateMode::Always);
    assert!(cfg.feature_enabled);
    assert_eq!(cfg.viewport, None);
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let cfg = AdjustConfig::from_toml_str(
        r#"
strategy = "monotonic"
gate = "when_resized"
button_gap = 4

[viewport]
width = 1024
height = 600
"#,
    )
    .unwrap();
    assert_eq!(cfg.strategy, Strategy::Monotonic);
    assert_eq!(cfg.gate, GateMode::WhenResized);
    assert_eq!(cfg.button_gap, 4);
    assert_eq!(cfg.hslider_threshold, 50.0);
    assert_eq!(cfg.viewport, Some(ViewSize::new(1024, 600)));
}

#[test]
fn unknown_strategy_is_rejected() {
    assert!(AdjustConfig::from_toml_str(r#"strategy = "sideways""#).is_err());
}

#[test]
fn load_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "feature_enabled = false").unwrap();
    let path = camino::Utf8PathBuf::from_path_buf(f.path().to_path_buf()).unwrap();
    let cfg = AdjustConfig::load(&path).unwrap();
    assert!(!cfg.feature_enabled);
}

#[test]
fn viewport_must_be_positive() {
    assert!(check_viewport(ViewSize::new(1024, 600)).is_ok());
    assert!(check_viewport(ViewSize::new(0, 600)).is_err());
    assert!(check_viewport(ViewSize::new(1024, -1)).is_err());
    assert!(check_viewport(ViewSize::new(-800, -600)).is_err());
}
