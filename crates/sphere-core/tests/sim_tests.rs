// Host-side scenario tests driving the full simulation the way the frame
// loop does, one pointer event and one frame at a time.

use sphere_core::config::SphereConfig;
use sphere_core::input::{PointerInput, PointerKind};
use sphere_core::physics::Mode;
use sphere_core::sim::SphereSim;

fn sim_100() -> SphereSim {
    SphereSim::new(100, 800.0, 600.0, SphereConfig::default())
}

fn ev(kind: PointerKind, x: f32, y: f32) -> PointerInput {
    PointerInput { kind, x, y }
}

#[test]
fn drag_right_release_decays_back_to_idle() {
    let mut sim = sim_100();
    let cfg = sim.config().clone();

    sim.pointer(ev(PointerKind::Down, 300.0, 300.0));
    assert_eq!(sim.mode(), Mode::Drag);
    for step in 1..=5 {
        sim.pointer(ev(PointerKind::Move, 300.0 + step as f32 * 10.0, 300.0));
        sim.advance_frame();
    }
    let tap = sim.pointer(ev(PointerKind::Up, 350.0, 300.0));
    assert!(tap.is_none(), "a 50px drag must not count as a tap");
    assert_eq!(sim.mode(), Mode::Inertia);

    let (vel_x, vel_y) = sim.velocity();
    assert!(
        vel_y > 0.0,
        "dragging right must yield positive yaw velocity, got {vel_y}"
    );
    assert!(vel_x.abs() < 1e-6, "horizontal drag must not add pitch");

    let bound =
        ((cfg.stop_threshold / (vel_x.abs() + vel_y.abs())).ln() / cfg.friction.ln()).ceil()
            as usize
            + 1;
    let rot_before = sim.rotation().1;
    let mut frames = 0;
    while sim.mode() == Mode::Inertia {
        sim.advance_frame();
        frames += 1;
        assert!(
            frames <= bound,
            "inertia outlived its bound of {bound} frames"
        );
    }
    assert_eq!(sim.mode(), Mode::Idle);
    assert!(sim.rotation().1 > rot_before, "inertia keeps spinning");
}

#[test]
fn tap_on_a_node_reports_its_index() {
    let mut sim = sim_100();
    // Front-most node of the initial projection.
    let nodes = sim.nodes();
    let front = (0..nodes.len())
        .max_by(|&a, &b| nodes.z[a].partial_cmp(&nodes.z[b]).unwrap())
        .unwrap();
    let (x, y) = (nodes.sx[front], nodes.sy[front]);

    sim.pointer(ev(PointerKind::Down, x, y));
    let tap = sim.pointer(ev(PointerKind::Up, x, y));
    assert_eq!(tap.map(|t| t.node_index), Some(front));
    assert_eq!(sim.mode(), Mode::Idle, "a tap carries no momentum");
}

#[test]
fn small_jitter_still_counts_as_a_tap() {
    let mut sim = sim_100();
    let nodes = sim.nodes();
    let front = (0..nodes.len())
        .max_by(|&a, &b| nodes.z[a].partial_cmp(&nodes.z[b]).unwrap())
        .unwrap();
    let (x, y) = (nodes.sx[front], nodes.sy[front]);

    let jitter = sim.config().tap_threshold_px * 0.5;
    sim.pointer(ev(PointerKind::Down, x, y));
    sim.pointer(ev(PointerKind::Move, x + jitter, y));
    sim.advance_frame();
    let tap = sim.pointer(ev(PointerKind::Up, x, y));
    assert!(tap.is_some(), "sub-threshold jitter must still tap");
}

#[test]
fn cancel_mid_drag_transitions_to_inertia() {
    let mut sim = sim_100();
    sim.pointer(ev(PointerKind::Down, 100.0, 100.0));
    sim.pointer(ev(PointerKind::Move, 140.0, 100.0));
    sim.pointer(ev(PointerKind::Cancel, 140.0, 100.0));
    assert_eq!(sim.mode(), Mode::Inertia);
}

#[test]
fn non_finite_pointer_events_are_ignored() {
    let mut sim = sim_100();
    sim.pointer(ev(PointerKind::Down, 300.0, 300.0));
    sim.pointer(ev(PointerKind::Move, 320.0, 300.0));
    let mode = sim.mode();
    let vel = sim.velocity();
    let rot = sim.rotation();

    sim.pointer(ev(PointerKind::Move, f32::NAN, 300.0));
    sim.pointer(ev(PointerKind::Up, 300.0, f32::INFINITY));

    assert_eq!(sim.mode(), mode);
    assert_eq!(sim.velocity(), vel);
    assert_eq!(sim.rotation(), rot);

    for _ in 0..200 {
        sim.advance_frame();
        let (vx, vy) = sim.velocity();
        let (rx, ry) = sim.rotation();
        assert!(vx.is_finite() && vy.is_finite());
        assert!(rx.is_finite() && ry.is_finite());
    }
}

#[test]
fn resize_preserves_rotation_and_recenters() {
    // A single item sits at the sphere origin and always projects to the
    // canvas center, which makes recentering exact.
    let mut sim = SphereSim::new(1, 800.0, 600.0, SphereConfig::default());
    for _ in 0..120 {
        sim.advance_frame();
    }
    let rot = sim.rotation();
    let vel = sim.velocity();
    assert_eq!(sim.nodes().sx[0], 400.0);

    sim.resize(400.0, 400.0);
    assert_eq!(sim.rotation(), rot, "resize must not touch rotation");
    assert_eq!(sim.velocity(), vel, "resize must not touch velocity");

    sim.advance_frame();
    assert_eq!(sim.nodes().sx[0], 200.0);
    assert_eq!(sim.nodes().sy[0], 200.0);
}

#[test]
fn leave_relaxes_magnetic_follow_to_baseline() {
    let mut sim = sim_100();
    let cfg = sim.config().clone();
    // Hover far right; idle velocity picks up the follow bias.
    for _ in 0..300 {
        sim.pointer(ev(PointerKind::Move, 800.0, 300.0));
        sim.advance_frame();
    }
    let biased = sim.velocity().1;
    assert!(biased > cfg.base_spin_y + cfg.follow_sensitivity * 0.5);

    sim.pointer(ev(PointerKind::Leave, 800.0, 300.0));
    for _ in 0..600 {
        sim.advance_frame();
    }
    let relaxed = sim.velocity().1;
    assert!(
        (relaxed - cfg.base_spin_y).abs() < 1e-5,
        "after leave the spin must settle at the baseline, got {relaxed}"
    );
}
