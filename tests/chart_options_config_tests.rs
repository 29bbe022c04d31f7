use chart_views::ChartError;
use chart_views::lwc::model::{
    ChartModel, ChartOptions, CrosshairMode, CrosshairPosition, InvalidationLevel, PriceScaleHandle,
    PriceScaleMode,
};
use chart_views::render::{Color, LineStyle};

const CONFIG: &str = r##"{
    "layout": { "font_size": 14 },
    "crosshair": {
        "mode": "Normal",
        "vert_line": { "color": "rgba(10, 20, 30, 0.5)", "width": 2, "style": "Solid" },
        "horz_line": { "label_visible": false }
    },
    "time_scale": { "time_visible": true, "date_format": "%Y-%m-%d" },
    "right_price_scale": { "mode": "IndexedTo100" }
}"##;

#[test]
fn json_document_configures_model() {
    let options = ChartOptions::from_json_str(CONFIG).expect("config");
    let (model, pane) = ChartModel::with_default_pane(options).expect("model");

    let crosshair = model.crosshair().options();
    assert_eq!(crosshair.mode, CrosshairMode::Normal);
    assert_eq!(crosshair.vert_line.style, LineStyle::Solid);
    let expected = Color::rgba(10.0 / 255.0, 20.0 / 255.0, 30.0 / 255.0, 0.5);
    assert_eq!(crosshair.vert_line.color, expected);
    assert!(!crosshair.horz_line.label_visible);
    assert!(model.time_scale().options().time_visible);

    let scale = model.price_scale(&PriceScaleHandle::right(pane)).expect("scale");
    assert_eq!(scale.mode(), PriceScaleMode::IndexedTo100);
    assert_eq!(scale.font_size(), 14.0);
}

#[test]
fn apply_options_propagates_and_invalidates_fully() {
    let (mut model, pane) = ChartModel::with_default_pane(ChartOptions::default()).expect("model");
    model.take_pending_invalidation();

    let options = ChartOptions::from_json_str(CONFIG).expect("config");
    model.apply_options(options.clone()).expect("apply");

    assert_eq!(model.options(), &options);
    assert_eq!(
        model
            .price_scale(&PriceScaleHandle::left(pane))
            .expect("scale")
            .font_size(),
        14.0
    );
    let mask = model.take_pending_invalidation().expect("mask");
    assert_eq!(mask.full_invalidation(), InvalidationLevel::Full);
}

#[test]
fn hidden_mode_keeps_crosshair_invisible() {
    let options =
        ChartOptions::from_json_str(r#"{"crosshair": {"mode": "Hidden"}}"#).expect("config");
    let (mut model, pane) = ChartModel::with_default_pane(options).expect("model");
    model
        .set_crosshair_position(
            CrosshairPosition {
                index: 0,
                price: 1.0,
                x: 1.0,
                y: 1.0,
            },
            pane,
        )
        .expect("position");
    assert!(!model.crosshair().visible());
}

#[test]
fn malformed_documents_are_invalid_data() {
    for input in [
        "{",
        r#"{"layout": {"font_size": -1}}"#,
        r##"{"crosshair": {"horz_line": {"color": "#12"}}}"##,
        r#"{"crosshair": {"mode": "Sideways"}}"#,
    ] {
        assert!(matches!(
            ChartOptions::from_json_str(input),
            Err(ChartError::InvalidData(_))
        ));
    }
}

#[test]
fn serialized_options_round_trip() {
    let options = ChartOptions::from_json_str(CONFIG).expect("config");
    let json = options.to_json_pretty().expect("json");
    assert!(json.contains("\"IndexedTo100\""));
    let reparsed = ChartOptions::from_json_str(&json).expect("reparse");
    assert_eq!(reparsed, options);
}
