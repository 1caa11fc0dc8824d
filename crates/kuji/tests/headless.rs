use kuji::render::{HeadlessRenderer, SeatingLayout};
use kuji::{HistoryStore, KujiConfig};

fn roster(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Name{i}")).collect()
}

#[test]
fn draw_and_render_produces_svg_and_records_the_draw() {
    let mut renderer = HeadlessRenderer::new().with_history(HistoryStore::in_memory());
    let (assignment, svg) = renderer.draw_and_render(&roster(5)).unwrap();

    assert_eq!(assignment.len(), 5);
    assert!(svg.starts_with("<svg"));
    assert_eq!(renderer.engine.history().len(), 1);
}

#[test]
fn draw_and_layout_uses_the_overridden_site_config() {
    let mut overrides = KujiConfig::empty_object();
    overrides.set_value("seating.canvasWidth", serde_json::json!(640));

    let mut renderer = HeadlessRenderer::new()
        .with_site_config(overrides)
        .with_history(HistoryStore::in_memory());
    let (_, layout) = renderer.draw_and_layout(&roster(4)).unwrap();

    let SeatingLayout::DoubleRing(layout) = layout else {
        panic!("expected double-ring layout");
    };
    assert_eq!(layout.width, 640.0);
}

#[test]
fn layout_assignment_does_not_touch_the_history() {
    let mut renderer = HeadlessRenderer::new().with_history(HistoryStore::in_memory());
    let (assignment, _) = renderer.draw_and_layout(&roster(3)).unwrap();
    assert_eq!(renderer.engine.history().len(), 1);

    renderer.layout_assignment(&assignment).unwrap();
    renderer.render_assignment_svg(&assignment).unwrap();
    assert_eq!(renderer.engine.history().len(), 1);
}

#[test]
fn results_grid_honors_the_configured_column_count() {
    let mut overrides = KujiConfig::empty_object();
    overrides.set_value("seating.resultColumns", serde_json::json!(2));

    let mut renderer = HeadlessRenderer::new()
        .with_site_config(overrides)
        .with_history(HistoryStore::in_memory());
    let (assignment, _) = renderer.draw_and_layout(&roster(5)).unwrap();

    let grid = renderer.results_grid(&assignment);
    assert_eq!(grid.columns, 2);
    assert_eq!(grid.rows, 3);

    // The site defaults carry three columns.
    let default_renderer = HeadlessRenderer::new().with_history(HistoryStore::in_memory());
    let grid = default_renderer.results_grid(&assignment);
    assert_eq!(grid.columns, 3);
}

#[test]
fn empty_roster_is_rejected() {
    let mut renderer = HeadlessRenderer::new().with_history(HistoryStore::in_memory());
    let err = renderer.draw_and_render(&[]).unwrap_err();
    assert!(matches!(
        err,
        kuji::render::HeadlessError::Core(kuji::Error::EmptyRoster)
    ));
}
