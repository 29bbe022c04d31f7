use chart_views::lwc::model::{
    BarColorOverrides, BarStyle, BarStyleOptions, BaseValuePrice, BaselineStyleOptions,
    CandlestickStyleOptions, PaneId, PriceScaleHandle, Series, SeriesId, SeriesPlotRow,
    SeriesStyleOptions, SeriesType, StrictRange,
};
use chart_views::render::Color;
use proptest::prelude::*;

fn override_color() -> Color {
    Color::from_rgb8(1, 2, 3)
}

fn series(options: SeriesStyleOptions, rows: Vec<SeriesPlotRow>) -> Series {
    let mut series = Series::new(
        SeriesId::new(0),
        PriceScaleHandle::right(PaneId::new(0)),
        options,
    );
    series.set_data(rows).expect("set data");
    series
}

fn row(open: f64, close: f64, with_override: bool) -> SeriesPlotRow {
    let row = SeriesPlotRow::ohlc(0, 0.0, open, open.max(close), open.min(close), close)
        .expect("finite row");
    if with_override {
        row.with_overrides(BarColorOverrides {
            color: Some(override_color()),
            border_color: Some(override_color()),
            wick_color: Some(override_color()),
            top_line_color: Some(override_color()),
            bottom_line_color: Some(override_color()),
            ..BarColorOverrides::default()
        })
    } else {
        row
    }
}

fn series_type_strategy() -> impl Strategy<Value = SeriesType> {
    proptest::sample::select(SeriesType::ALL.to_vec())
}

proptest! {
    #[test]
    fn bar_classification_follows_open_close(
        open in -1_000.0f64..1_000.0,
        close in -1_000.0f64..1_000.0,
        with_override in any::<bool>()
    ) {
        let options = BarStyleOptions::default();
        let rows = vec![row(open, close, with_override)];
        let series = series(SeriesStyleOptions::Bar(options), rows);
        let style = series.bar_colorer().bar_style(0, None).expect("style");

        let expected = if with_override {
            override_color()
        } else if close >= open {
            options.up_color
        } else {
            options.down_color
        };
        prop_assert_eq!(style.bar_color(), expected);
    }

    #[test]
    fn candlestick_channels_follow_the_same_trend(
        open in -1_000.0f64..1_000.0,
        close in -1_000.0f64..1_000.0,
        with_override in any::<bool>()
    ) {
        let options = CandlestickStyleOptions {
            border_up_color: Color::from_rgb8(0, 200, 0),
            border_down_color: Color::from_rgb8(200, 0, 0),
            wick_up_color: Color::from_rgb8(0, 100, 0),
            wick_down_color: Color::from_rgb8(100, 0, 0),
            ..CandlestickStyleOptions::default()
        };
        let series = series(
            SeriesStyleOptions::Candlestick(options),
            vec![row(open, close, with_override)],
        );
        let style = series.bar_colorer().bar_style(0, None).expect("style");
        let BarStyle::Candlestick(style) = style else {
            panic!("candlestick series must resolve a candlestick style");
        };

        let up = close >= open;
        if with_override {
            prop_assert_eq!(style.bar_border_color, override_color());
            prop_assert_eq!(style.bar_wick_color, override_color());
        } else {
            let (border, wick) = if up {
                (options.border_up_color, options.wick_up_color)
            } else {
                (options.border_down_color, options.wick_down_color)
            };
            prop_assert_eq!(style.bar_border_color, border);
            prop_assert_eq!(style.bar_wick_color, wick);
        }
    }

    #[test]
    fn baseline_classification_ignores_overrides(
        value in -1_000.0f64..1_000.0,
        base in -1_000.0f64..1_000.0,
        with_override in any::<bool>()
    ) {
        let options = BaselineStyleOptions {
            base_value: BaseValuePrice { price: base },
            ..BaselineStyleOptions::default()
        };
        let series = series(
            SeriesStyleOptions::Baseline(options),
            vec![row(value, value, with_override)],
        );
        let style = series.bar_colorer().bar_style(0, None).expect("style");

        let expected = if value >= base {
            options.top_line_color
        } else {
            options.bottom_line_color
        };
        prop_assert_eq!(style.bar_color(), expected);
    }

    #[test]
    fn every_series_type_resolves_a_fully_valid_style(
        series_type in series_type_strategy(),
        open in -1_000.0f64..1_000.0,
        close in -1_000.0f64..1_000.0,
        with_override in any::<bool>()
    ) {
        let series = series(
            SeriesStyleOptions::defaults_for(series_type),
            vec![row(open, close, with_override)],
        );
        let style = series.bar_colorer().bar_style(0, None).expect("style");
        prop_assert_eq!(style.series_type(), series_type);

        let channels: Vec<Color> = match style {
            BarStyle::Bar(s) => vec![s.bar_color],
            BarStyle::Candlestick(s) => vec![s.bar_color, s.bar_border_color, s.bar_wick_color],
            BarStyle::Area(s) => vec![s.bar_color, s.line_color, s.top_color, s.bottom_color],
            BarStyle::Baseline(s) => vec![
                s.bar_color,
                s.top_line_color,
                s.bottom_line_color,
                s.top_fill_color1,
                s.top_fill_color2,
                s.bottom_fill_color1,
                s.bottom_fill_color2,
            ],
            BarStyle::Line(s) => vec![s.bar_color, s.line_color],
            BarStyle::Histogram(s) => vec![s.bar_color],
        };
        for channel in channels {
            prop_assert!(channel.validate().is_ok());
        }
    }

    #[test]
    fn range_scan_agrees_with_indexed_lookup(
        closes in proptest::collection::vec(-100.0f64..100.0, 1..48)
    ) {
        let rows = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let (high, low) = (close.max(0.0), close.min(0.0));
                SeriesPlotRow::ohlc(i as i64 * 2, i as f64, 0.0, high, low, close).expect("row")
            })
            .collect();
        let options = SeriesStyleOptions::defaults_for(SeriesType::Candlestick);
        let series = series(options, rows);
        let colorer = series.bar_colorer();
        let range = StrictRange::new(0, closes.len() as i64 * 2);

        let styles = colorer.bar_styles_in_range(range).expect("range");
        for (index, style) in styles {
            prop_assert_eq!(style, colorer.bar_style(index, None).expect("lookup"));
        }
    }
}
