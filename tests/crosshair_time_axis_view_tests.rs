use chart_views::ChartError;
use chart_views::lwc::model::{
    ChartModel, ChartOptions, Crosshair, CrosshairPosition, CrosshairTimeAndCoordinate, PaneId,
    TimeScale, TimeScalePoint,
};
use chart_views::lwc::renderers::TimeAxisRendererOptions;
use chart_views::lwc::views::CrosshairTimeAxisView;
use chart_views::render::{Color, RenderFrame, Viewport};

const TIMES: [f64; 3] = [1_699_920_000.0, 1_700_006_400.0, 1_700_092_800.0];

fn model(width: f64, times: &[f64]) -> (ChartModel, PaneId) {
    let (mut model, pane) = ChartModel::with_default_pane(ChartOptions::default()).expect("model");
    model.set_time_scale_width(width).expect("width");
    model
        .set_time_scale_points(times.iter().copied().map(TimeScalePoint::new).collect())
        .expect("points");
    (model, pane)
}

fn point_at(model: &mut ChartModel, pane: PaneId, index: i64, x: f64) {
    model
        .set_crosshair_position(
            CrosshairPosition {
                index,
                price: 1.0,
                x,
                y: 10.0,
            },
            pane,
        )
        .expect("position");
}

#[test]
fn empty_time_scale_hides_label_with_zero_width() {
    let (mut model, pane) = model(0.0, &[]);
    point_at(&mut model, pane, 0, 10.0);

    let mut view = CrosshairTimeAxisView::with_default_provider();
    let data = view.renderer(&model).expect("renderer").data().clone();
    assert!(!data.visible);
    assert_eq!(data.width, 0.0);
}

#[test]
fn width_is_refreshed_even_when_label_disabled() {
    let (mut model, pane) = model(640.0, &TIMES);
    let mut options = model.options().clone();
    options.crosshair.vert_line.label_visible = false;
    model.apply_options(options).expect("options");
    point_at(&mut model, pane, 1, 10.0);

    let mut view = CrosshairTimeAxisView::default();
    let data = view.renderer(&model).expect("renderer").data().clone();
    assert!(!data.visible);
    assert_eq!(data.width, 640.0);

    model.set_time_scale_width(720.0).expect("width");
    view.update();
    assert_eq!(view.renderer(&model).expect("renderer").data().width, 720.0);
}

#[test]
fn visible_label_formats_crosshair_time() {
    let (mut model, pane) = model(600.0, &TIMES);
    point_at(&mut model, pane, 1, 212.0);

    let mut view = CrosshairTimeAxisView::with_default_provider();
    let data = view.renderer(&model).expect("renderer").data().clone();
    assert!(data.visible);
    assert_eq!(data.text, "15 Nov '23");
    assert_eq!(data.coordinate, 212.0);
    assert_eq!(data.width, 600.0);
    assert_eq!(data.background, Color::from_rgb8(0x13, 0x17, 0x22));
    assert_eq!(data.color, Color::WHITE);
    assert!(!data.tick_visible);
}

#[test]
fn ticks_visible_option_is_copied() {
    let (mut model, pane) = model(600.0, &TIMES);
    let mut options = model.options().clone();
    options.time_scale.ticks_visible = true;
    options.time_scale.time_visible = true;
    options.time_scale.seconds_visible = false;
    model.apply_options(options).expect("options");
    point_at(&mut model, pane, 0, 10.0);

    let mut view = CrosshairTimeAxisView::with_default_provider();
    let data = view.renderer(&model).expect("renderer").data().clone();
    assert!(data.tick_visible);
    assert_eq!(data.text, "14 Nov '23   00:00");
}

#[test]
fn index_without_time_hides_label() {
    let (mut model, pane) = model(600.0, &TIMES);
    point_at(&mut model, pane, 9, 10.0);

    let mut view = CrosshairTimeAxisView::with_default_provider();
    assert!(!view.renderer(&model).expect("renderer").data().visible);
}

#[test]
fn provider_time_without_scale_point_is_an_invariant_violation() {
    let (mut model, pane) = model(600.0, &TIMES);
    point_at(&mut model, pane, 9, 10.0);

    let mut view = CrosshairTimeAxisView::new(Box::new(|crosshair: &Crosshair, _: &TimeScale| {
        CrosshairTimeAndCoordinate {
            time: Some(0.0),
            coordinate: crosshair.applied_x(),
        }
    }));
    assert!(matches!(
        view.renderer(&model),
        Err(ChartError::MissingTimeScalePoint { index: 9 })
    ));
}

#[test]
fn renderer_reflects_moves_only_after_update() {
    let (mut model, pane) = model(600.0, &TIMES);
    point_at(&mut model, pane, 0, 10.0);
    let mut view = CrosshairTimeAxisView::with_default_provider();
    let first = view.renderer(&model).expect("first").data().clone();
    assert_eq!(first.text, "14 Nov '23");

    point_at(&mut model, pane, 2, 300.0);
    let cached = view.renderer(&model).expect("cached").data().clone();
    assert_eq!(cached.coordinate, 10.0);

    view.update();
    let data = view.renderer(&model).expect("fresh").data().clone();
    assert_eq!(data.text, "16 Nov '23");
    assert_eq!(data.coordinate, 300.0);
}

#[test]
fn label_draws_into_axis_frame() {
    let (mut model, pane) = model(600.0, &TIMES);
    point_at(&mut model, pane, 1, 598.0);

    let mut view = CrosshairTimeAxisView::with_default_provider();
    let mut frame = RenderFrame::new(Viewport::new(600, 28));
    view.renderer(&model)
        .expect("renderer")
        .draw(&mut frame, &TimeAxisRendererOptions::from_font_size(12.0));

    assert_eq!(frame.rects.len(), 1);
    let rect = frame.rects[0];
    assert!(rect.x + rect.width <= 600.0 + 1e-9);
    assert!(frame.validate().is_ok());
}
