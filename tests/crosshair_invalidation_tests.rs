use chart_views::lwc::model::{
    ChartModel, ChartOptions, CrosshairPosition, InvalidateMask, InvalidationLevel,
    PriceScaleHandle, SeriesPlotRow, SeriesStyleOptions, SeriesType, TimeScalePoint,
};
use chart_views::lwc::views::CrosshairViews;

fn position(index: i64, x: f64, y: f64, price: f64) -> CrosshairPosition {
    CrosshairPosition { index, price, x, y }
}

#[test]
fn bundle_creates_views_per_pane() {
    let (mut model, first) = ChartModel::with_default_pane(ChartOptions::default()).expect("model");
    let second = model.add_pane();
    let mut views = CrosshairViews::for_model(&model);

    assert!(views.pane_view_mut(first).is_some());
    assert!(views.pane_view_mut(second).is_some());
    let left = PriceScaleHandle::left(second);
    let right = PriceScaleHandle::right(first);
    assert!(views.price_axis_view_mut(&left).is_some());
    assert!(views.price_axis_view_mut(&right).is_some());
    assert_eq!(views.price_axis_views_mut().count(), 4);
}

#[test]
fn below_cursor_level_keeps_caches() {
    let (model, _) = ChartModel::with_default_pane(ChartOptions::default()).expect("model");
    let mut views = CrosshairViews::for_model(&model);
    let none = InvalidateMask::new(InvalidationLevel::None);
    assert!(!views.apply_invalidation(&none));
    assert!(views.apply_invalidation(&InvalidateMask::cursor()));
}

#[test]
fn pending_cursor_invalidation_refreshes_every_view() {
    let (mut model, pane) = ChartModel::with_default_pane(ChartOptions::default()).expect("model");
    model.set_pane_height(pane, 300.0).expect("height");
    model.set_time_scale_width(500.0).expect("width");
    let points = vec![
        TimeScalePoint::new(1_700_000_000.0),
        TimeScalePoint::new(1_700_086_400.0),
    ];
    model.set_time_scale_points(points).expect("points");
    let series = model
        .add_series(
            PriceScaleHandle::right(pane),
            SeriesStyleOptions::defaults_for(SeriesType::Area),
        )
        .expect("series");
    model
        .set_series_data(
            series,
            vec![
                SeriesPlotRow::single_value(0, 1_700_000_000.0, 20.0).expect("row"),
                SeriesPlotRow::single_value(1, 1_700_086_400.0, 30.0).expect("row"),
            ],
        )
        .expect("data");

    let mut views = CrosshairViews::for_model(&model);
    model
        .set_crosshair_position(position(0, 40.0, 50.0, 21.0), pane)
        .expect("position");
    assert!(views.sync_with(&mut model));

    let right = PriceScaleHandle::right(pane);
    let label = views
        .price_axis_view_mut(&right)
        .expect("right label")
        .renderer(&model)
        .expect("renderer")
        .data()
        .clone();
    assert_eq!(label.text, "21.00");
    let x = views
        .pane_view_mut(pane)
        .expect("pane view")
        .renderer(&model)
        .expect("renderer")
        .data()
        .x;
    assert_eq!(x, 40.0);

    model
        .set_crosshair_position(position(1, 90.0, 60.0, 28.0), pane)
        .expect("move");
    assert!(views.sync_with(&mut model));
    assert!(!views.sync_with(&mut model));

    let label = views
        .price_axis_view_mut(&right)
        .expect("right label")
        .renderer(&model)
        .expect("renderer")
        .data()
        .clone();
    assert_eq!(label.text, "28.00");
    let time = views
        .time_axis_view_mut()
        .renderer(&model)
        .expect("renderer")
        .data()
        .clone();
    assert!(time.visible);
    assert_eq!(time.text, "15 Nov '23");
    assert_eq!(time.coordinate, 90.0);
}
