use mindmap_core::layout::zoom::{MAX_ZOOM, MIN_ZOOM};
use mindmap_core::{
    domain_positions, MindMapNode, NodeKind, PinchTracker, TouchPoint, ZoomState,
};
use std::f64::consts::{FRAC_PI_2, PI};

fn root_with_domains(count: usize) -> MindMapNode {
    (0..count).fold(
        MindMapNode::new("root", NodeKind::Root, "Root", ""),
        |root, index| {
            root.with_child(MindMapNode::new(
                format!("d{index}"),
                NodeKind::Domain,
                format!("Domain {index}"),
                "",
            ))
        },
    )
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn three_domains_start_at_top_and_are_evenly_spaced() {
    let root = root_with_domains(3);
    let positions = domain_positions(&root);

    assert_eq!(positions.len(), 3);
    assert!(approx(positions[0].angle, -FRAC_PI_2));
    assert!(approx(positions[1].angle - positions[0].angle, 2.0 * PI / 3.0));
    assert!(approx(positions[2].angle - positions[1].angle, 2.0 * PI / 3.0));

    assert!(approx(positions[0].x, 50.0));
    assert!(approx(positions[0].y, 20.0));
    let ids = positions
        .iter()
        .map(|p| p.node.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["d0", "d1", "d2"]);
}

#[test]
fn four_domains_land_on_compass_points() {
    let root = root_with_domains(4);
    let positions = domain_positions(&root);

    let points = positions
        .iter()
        .map(|p| (p.x.round(), p.y.round()))
        .collect::<Vec<_>>();
    assert_eq!(
        points,
        vec![(50.0, 20.0), (80.0, 50.0), (50.0, 80.0), (20.0, 50.0)]
    );
}

#[test]
fn positions_stay_on_the_circle() {
    let root = root_with_domains(7);
    for position in domain_positions(&root) {
        let radius = (position.x - 50.0).hypot(position.y - 50.0);
        assert!(approx(radius, 30.0));
    }
}

#[test]
fn zero_domains_produce_empty_layout() {
    let root = root_with_domains(0);
    assert!(domain_positions(&root).is_empty());
}

#[test]
fn transform_formats_translate() {
    let root = root_with_domains(4);
    let positions = domain_positions(&root);
    assert!(positions[0].transform().starts_with("translate(50 "));
}

#[test]
fn zoom_is_clamped_for_any_number_of_steps() {
    let mut zoom = ZoomState::new();
    for _ in 0..20 {
        zoom.zoom_in();
        assert!(zoom.level() <= MAX_ZOOM);
    }
    assert_eq!(zoom.level(), MAX_ZOOM);
    assert!(!zoom.can_zoom_in());

    for _ in 0..20 {
        zoom.zoom_out();
        assert!(zoom.level() >= MIN_ZOOM);
    }
    assert_eq!(zoom.level(), MIN_ZOOM);
    assert!(!zoom.can_zoom_out());

    zoom.reset();
    assert_eq!(zoom.level(), 1.0);
}

#[test]
fn zoom_steps_by_quarter() {
    let mut zoom = ZoomState::new();
    zoom.zoom_in();
    assert_eq!(zoom.level(), 1.25);
    zoom.zoom_out();
    zoom.zoom_out();
    assert_eq!(zoom.level(), 0.75);
}

#[test]
fn pinch_scales_incrementally_from_last_sample() {
    let mut zoom = ZoomState::new();
    let mut pinch = PinchTracker::new();
    let pair = |distance: f64| [TouchPoint::new(0.0, 0.0), TouchPoint::new(distance, 0.0)];

    pinch.touch_start(&pair(100.0));
    pinch.touch_move(&pair(120.0), &mut zoom);
    assert!(approx(zoom.level(), 1.2));

    pinch.touch_move(&pair(150.0), &mut zoom);
    assert!(approx(zoom.level(), 1.2 * 150.0 / 120.0));

    pinch.touch_move(&pair(75.0), &mut zoom);
    assert!(approx(zoom.level(), 0.75));
}

#[test]
fn pinch_result_is_clamped() {
    let mut zoom = ZoomState::new();
    let mut pinch = PinchTracker::new();
    let pair = |distance: f64| [TouchPoint::new(0.0, 0.0), TouchPoint::new(0.0, distance)];

    pinch.touch_start(&pair(10.0));
    pinch.touch_move(&pair(1_000.0), &mut zoom);
    assert_eq!(zoom.level(), MAX_ZOOM);

    pinch.touch_move(&pair(1.0), &mut zoom);
    assert_eq!(zoom.level(), MIN_ZOOM);
}

#[test]
fn pinch_ignores_moves_without_two_touches() {
    let mut zoom = ZoomState::new();
    let mut pinch = PinchTracker::new();
    pinch.touch_start(&[TouchPoint::new(0.0, 0.0), TouchPoint::new(50.0, 0.0)]);

    pinch.touch_move(&[TouchPoint::new(0.0, 0.0)], &mut zoom);
    assert_eq!(zoom.level(), 1.0);

    pinch.touch_end();
    assert!(!pinch.is_pinching());
    pinch.touch_move(
        &[TouchPoint::new(0.0, 0.0), TouchPoint::new(90.0, 0.0)],
        &mut zoom,
    );
    assert_eq!(zoom.level(), 1.0);
    assert!(pinch.is_pinching());
}
