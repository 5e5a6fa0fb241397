use adjustscreen::adjust::buttons::resolve_buttons;
use adjustscreen::adjust::{AdjustReport, AdjustScreen, MoveReason, NoopHost};
use adjustscreen::config::{AdjustConfig, Strategy};
use adjustscreen::model::*;
use proptest::prelude::*;

fn buttons(specs: &[(&str, i32, i32, i32, i32)]) -> Construction {
    specs
        .iter()
        .map(|(l, x, y, w, h)| GeoElement::button(*l, Button::new(*x, *y, *w, *h)))
        .collect()
}

fn apply(c: &mut Construction, strategy: Strategy) -> AdjustReport {
    let config = AdjustConfig {
        strategy,
        ..Default::default()
    };
    AdjustScreen::new(config, None, ViewSize::new(800, 600)).apply(c, &mut NoopHost)
}

#[test]
fn upper_button_drops_below_lower_one() {
    let mut c = buttons(&[("A", 0, 100, 60, 20), ("B", 0, 110, 60, 20)]);
    let report = apply(&mut c, Strategy::Greedy);
    let a = c.button("A").unwrap();
    assert_eq!((a.x, a.y), (0, 140));
    assert_eq!(c.button("B").unwrap().y, 110);
    assert_eq!(report.count(MoveReason::ButtonOverlap), 1);
}

#[test]
fn non_intersecting_buttons_are_left_alone() {
    let mut c = buttons(&[
        ("A", 0, 0, 60, 20),
        ("B", 0, 20, 60, 20), // shares an edge with A
        ("C", 100, 30, 60, 20),
    ]);
    let report = apply(&mut c, Strategy::Greedy);
    assert!(report.moves.is_empty());
    assert_eq!(c.button("A").unwrap().y, 0);
    assert_eq!(c.button("B").unwrap().y, 20);
}

#[test]
fn side_by_side_buttons_do_not_overlap() {
    let mut c = buttons(&[("A", 0, 100, 50, 20), ("B", 60, 105, 50, 20)]);
    let report = apply(&mut c, Strategy::Greedy);
    assert!(report.moves.is_empty());
}

#[test]
fn greedy_can_push_a_button_onto_an_earlier_pair() {
    let mut c = buttons(&[
        ("A", 0, 0, 50, 20),
        ("B", 0, 5, 50, 20),
        ("C", 0, 30, 50, 20),
    ]);
    apply(&mut c, Strategy::Greedy);
    let a = c.button("A").unwrap();
    let cc = c.button("C").unwrap();
    assert_eq!(a.y, 35);
    assert!(a.rect().intersects(cc.rect()));
}

#[test]
fn monotonic_moves_the_lower_button() {
    let mut c = buttons(&[
        ("A", 0, 0, 50, 20),
        ("B", 0, 5, 50, 20),
        ("C", 0, 30, 50, 20),
    ]);
    apply(&mut c, Strategy::Monotonic);
    assert_eq!(c.button("A").unwrap().y, 0);
    assert_eq!(c.button("B").unwrap().y, 30);
    assert_eq!(c.button("C").unwrap().y, 60);
}

#[test]
fn input_boxes_are_not_moved() {
    let mut c = buttons(&[("A", 0, 100, 60, 20)]);
    c.insert(GeoElement {
        label: "box".into(),
        kind: ElementKind::InputBox(Button::new(0, 105, 60, 20)),
    });
    let report = apply(&mut c, Strategy::Greedy);
    assert_eq!(report.buttons, 1);
    assert!(report.moves.is_empty());
}

#[test]
fn buttons_near_the_coordinate_limit_saturate() {
    let xml = r#"<geogebra><construction>
<element type="button" label="A">
	<absoluteScreenLocation x="0" y="2147483600"/>
	<dimensions width="50" height="40"/>
</element>
<element type="button" label="B">
	<absoluteScreenLocation x="0" y="2147483610"/>
	<dimensions width="50" height="40"/>
</element>
</construction></geogebra>"#;
    for strategy in [Strategy::Greedy, Strategy::Monotonic] {
        let mut doc = adjustscreen::parser::parse_document(xml).unwrap();
        let report = apply(&mut doc.construction, strategy);
        assert_eq!(report.count(MoveReason::ButtonOverlap), 1);
        let moved = match strategy {
            Strategy::Greedy => "A",
            Strategy::Monotonic => "B",
        };
        assert_eq!(doc.construction.button(moved).unwrap().y, i32::MAX);
    }
}

proptest! {
    #[test]
    fn monotonic_leaves_no_intersecting_neighbours(
        specs in prop::collection::vec((0i32..200, 0i32..300, 1i32..80, 1i32..40), 0..10)
    ) {
        let mut c: Construction = specs
            .iter()
            .enumerate()
            .map(|(i, (x, y, w, h))| GeoElement::button(format!("b{}", i), Button::new(*x, *y, *w, *h)))
            .collect();
        let mut ls: Vec<String> = c.elements().map(|e| e.label.clone()).collect();
        let mut report = AdjustReport::default();
        resolve_buttons(&mut c, &mut ls, 10, Strategy::Monotonic, &mut report);
        for w in ls.windows(2) {
            let a = c.button(&w[0]).unwrap().rect();
            let b = c.button(&w[1]).unwrap().rect();
            prop_assert!(!a.intersects(b));
        }
    }
}
