use synthwave_grid::core::GridSimulation;
use synthwave_grid::render::{GridDraw, SkipReason};
use synthwave_grid::term::{FrameBuffer, SceneView, Viewport};
use synthwave_grid::types::GridConfig;

fn sim(rows: usize) -> GridSimulation {
    let config = GridConfig {
        rows,
        ..GridConfig::default()
    };
    GridSimulation::from_seed(config, 4).unwrap()
}

#[test]
fn scene_fills_the_whole_viewport() {
    let sim = sim(30);
    let mut view = SceneView::new();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&sim, vp, None);

    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);
    assert_eq!(view.canvas().width(), 80);
    assert_eq!(view.canvas().height(), 48);
    assert!(fb.cells().iter().any(|c| c.ch == '▀'));
}

#[test]
fn sun_is_warm_and_corners_are_dark() {
    // A single row draws no grid, leaving backdrop and sun.
    let sim = sim(1);
    let mut view = SceneView::new();
    let fb = view.render(&sim, Viewport::new(80, 24), None);

    // Sun center: x = 40, y = 0.35 * 48 = 16.8 pixels -> cell row 8.
    let sun = view.canvas().pixel(40, 17).unwrap();
    assert!(sun.r > 200, "sun pixel {sun:?}");
    assert!(sun.r > sun.b);

    let corner = view.canvas().pixel(0, 0).unwrap();
    assert!(corner.r < 10 && corner.g < 10 && corner.b < 10, "corner {corner:?}");

    let cell = fb.get(40, 8).unwrap();
    assert!(cell.style.fg.r > 200 || cell.style.bg.r > 200);
}

#[test]
fn overlay_is_centered_and_bold() {
    let sim = sim(30);
    let mut view = SceneView::new();
    let fb = view.render(&sim, Viewport::new(40, 10), Some("PAUSED"));

    let row: Vec<char> = fb.row(5).iter().map(|c| c.ch).collect();
    let text: String = row[17..23].iter().collect();
    assert_eq!(text, "PAUSED");
    assert!(fb.get(17, 5).unwrap().style.bold);
    assert!(!fb.get(0, 0).unwrap().style.bold);
}

#[test]
fn render_into_resizes_existing_buffer() {
    let sim = sim(30);
    let mut view = SceneView::new();
    let mut fb = FrameBuffer::new(3, 3);

    let drawn = view.render_into(&sim, Viewport::new(60, 20), None, &mut fb);
    assert_eq!(drawn.quads(), 29 * 59);
    assert_eq!((fb.width(), fb.height()), (60, 20));

    view.render_into(&sim, Viewport::new(30, 12), None, &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 12));
    assert_eq!(fb.cells().len(), 30 * 12);
}

#[test]
fn zero_sized_terminal_renders_nothing() {
    let sim = sim(30);
    let mut view = SceneView::new();
    let mut fb = FrameBuffer::new(10, 10);

    let drawn = view.render_into(&sim, Viewport::new(0, 0), Some("PAUSED"), &mut fb);
    assert_eq!(drawn, GridDraw::Skipped(SkipReason::EmptyViewport));
    assert!(fb.cells().is_empty());
}

#[test]
fn same_state_renders_identically() {
    let sim = sim(30);
    let mut a = SceneView::new();
    let mut b = SceneView::new();
    let vp = Viewport::new(50, 16);

    assert_eq!(a.render(&sim, vp, None), b.render(&sim, vp, None));
    // Reusing buffers gives the same frame again.
    assert_eq!(a.render(&sim, vp, None), b.render(&sim, vp, None));
}
