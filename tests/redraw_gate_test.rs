use synthwave_grid::term::{FrameKey, RedrawGate, Viewport};

fn key(version: u64) -> FrameKey {
    FrameKey {
        version,
        viewport: Viewport::new(80, 24),
        paused: false,
    }
}

#[test]
fn redraw_gate_draws_first_frame() {
    let mut gate = RedrawGate::new(500);
    assert!(gate.should_redraw(0, key(0)));
}

#[test]
fn redraw_gate_draws_every_new_version() {
    let mut gate = RedrawGate::new(500);
    for (now, version) in (0..10).map(|i| (i * 16, i)) {
        assert!(gate.should_redraw(now, key(version)));
    }
}

#[test]
fn redraw_gate_throttles_unchanged_scene() {
    let mut gate = RedrawGate::new(500);
    assert!(gate.should_redraw(0, key(7)));
    assert!(!gate.should_redraw(16, key(7)));
    assert!(!gate.should_redraw(499, key(7)));
    assert!(gate.should_redraw(500, key(7)));
    assert!(!gate.should_redraw(600, key(7)));
}

#[test]
fn redraw_gate_reacts_to_resize_and_pause() {
    let mut gate = RedrawGate::new(500);
    assert!(gate.should_redraw(0, key(3)));

    let resized = FrameKey {
        viewport: Viewport::new(100, 30),
        ..key(3)
    };
    assert!(gate.should_redraw(10, resized));

    let paused = FrameKey {
        paused: true,
        ..resized
    };
    assert!(gate.should_redraw(20, paused));
    assert!(!gate.should_redraw(30, paused));
}

#[test]
fn redraw_gate_invalidate_forces_next_frame() {
    let mut gate = RedrawGate::new(500);
    assert!(gate.should_redraw(0, key(1)));
    assert!(!gate.should_redraw(5, key(1)));

    gate.invalidate();
    assert!(gate.should_redraw(6, key(1)));
    assert!(!gate.should_redraw(7, key(1)));
}
