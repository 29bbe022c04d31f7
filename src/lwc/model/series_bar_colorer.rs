#[cfg(feature = "parallel-styles")]
use rayon::prelude::*;
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::{
    PlotRowValueIndex, Series, SeriesPlotRow, SeriesStyleOptions, SeriesType, StrictRange,
    TimePointIndex,
};

/// Bars a caller already resolved, passed to skip the binary search.
///
/// `previous_value` carries trend context for resolvers that need it.
#[derive(Debug, Clone, Copy)]
pub struct PrecomputedBars<'a> {
    pub value: &'a SeriesPlotRow,
    pub previous_value: Option<&'a SeriesPlotRow>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarColorerStyle {
    pub bar_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandlesticksColorerStyle {
    pub bar_color: Color,
    pub bar_border_color: Color,
    pub bar_wick_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaBarColorerStyle {
    pub bar_color: Color,
    pub line_color: Color,
    pub top_color: Color,
    pub bottom_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineBarColorerStyle {
    pub bar_color: Color,
    pub top_line_color: Color,
    pub bottom_line_color: Color,
    pub top_fill_color1: Color,
    pub top_fill_color2: Color,
    pub bottom_fill_color1: Color,
    pub bottom_fill_color2: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBarColorerStyle {
    pub bar_color: Color,
    pub line_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBarColorerStyle {
    pub bar_color: Color,
}

/// Resolved paint style of one bar; the variant matches the series type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarStyle {
    Bar(BarColorerStyle),
    Candlestick(CandlesticksColorerStyle),
    Area(AreaBarColorerStyle),
    Baseline(BaselineBarColorerStyle),
    Line(LineBarColorerStyle),
    Histogram(HistogramBarColorerStyle),
}

impl BarStyle {
    #[must_use]
    pub fn bar_color(&self) -> Color {
        match self {
            Self::Bar(style) => style.bar_color,
            Self::Candlestick(style) => style.bar_color,
            Self::Area(style) => style.bar_color,
            Self::Baseline(style) => style.bar_color,
            Self::Line(style) => style.bar_color,
            Self::Histogram(style) => style.bar_color,
        }
    }

    #[must_use]
    pub fn series_type(&self) -> SeriesType {
        match self {
            Self::Bar(_) => SeriesType::Bar,
            Self::Candlestick(_) => SeriesType::Candlestick,
            Self::Area(_) => SeriesType::Area,
            Self::Baseline(_) => SeriesType::Baseline,
            Self::Line(_) => SeriesType::Line,
            Self::Histogram(_) => SeriesType::Histogram,
        }
    }
}

/// Returns `None` when `options` belong to another series type.
type StyleGetterFn = fn(&SeriesStyleOptions, PrecomputedBars<'_>) -> Option<BarStyle>;

fn is_up(bar: &SeriesPlotRow) -> bool {
    bar.value(PlotRowValueIndex::Open) <= bar.value(PlotRowValueIndex::Close)
}

fn bar_style(options: &SeriesStyleOptions, bars: PrecomputedBars<'_>) -> Option<BarStyle> {
    let SeriesStyleOptions::Bar(style) = options else {
        return None;
    };
    let bar = bars.value;
    let trend_color = if is_up(bar) {
        style.up_color
    } else {
        style.down_color
    };

    Some(BarStyle::Bar(BarColorerStyle {
        bar_color: bar.overrides().color.unwrap_or(trend_color),
    }))
}

fn candlestick_style(options: &SeriesStyleOptions, bars: PrecomputedBars<'_>) -> Option<BarStyle> {
    let SeriesStyleOptions::Candlestick(style) = options else {
        return None;
    };
    let bar = bars.value;
    let overrides = bar.overrides();
    let up = is_up(bar);
    let pick = |up_color: Color, down_color: Color| if up { up_color } else { down_color };

    Some(BarStyle::Candlestick(CandlesticksColorerStyle {
        bar_color: overrides
            .color
            .unwrap_or_else(|| pick(style.up_color, style.down_color)),
        bar_border_color: overrides
            .border_color
            .unwrap_or_else(|| pick(style.border_up_color, style.border_down_color)),
        bar_wick_color: overrides
            .wick_color
            .unwrap_or_else(|| pick(style.wick_up_color, style.wick_down_color)),
    }))
}

fn area_style(options: &SeriesStyleOptions, bars: PrecomputedBars<'_>) -> Option<BarStyle> {
    let SeriesStyleOptions::Area(style) = options else {
        return None;
    };
    let overrides = bars.value.overrides();
    let line_color = overrides.line_color.unwrap_or(style.line_color);

    Some(BarStyle::Area(AreaBarColorerStyle {
        bar_color: line_color,
        line_color,
        top_color: overrides.top_color.unwrap_or(style.top_color),
        bottom_color: overrides.bottom_color.unwrap_or(style.bottom_color),
    }))
}

fn baseline_style(options: &SeriesStyleOptions, bars: PrecomputedBars<'_>) -> Option<BarStyle> {
    let SeriesStyleOptions::Baseline(style) = options else {
        return None;
    };
    let bar = bars.value;
    let overrides = bar.overrides();
    // The above/below decision reads the style line colors only; per-bar
    // line color overrides apply to the stroke channels below.
    let is_above_baseline = bar.value(PlotRowValueIndex::Close) >= style.base_value.price;

    Some(BarStyle::Baseline(BaselineBarColorerStyle {
        bar_color: if is_above_baseline {
            style.top_line_color
        } else {
            style.bottom_line_color
        },
        top_line_color: overrides.top_line_color.unwrap_or(style.top_line_color),
        bottom_line_color: overrides
            .bottom_line_color
            .unwrap_or(style.bottom_line_color),
        top_fill_color1: overrides.top_fill_color1.unwrap_or(style.top_fill_color1),
        top_fill_color2: overrides.top_fill_color2.unwrap_or(style.top_fill_color2),
        bottom_fill_color1: overrides
            .bottom_fill_color1
            .unwrap_or(style.bottom_fill_color1),
        bottom_fill_color2: overrides
            .bottom_fill_color2
            .unwrap_or(style.bottom_fill_color2),
    }))
}

fn line_style(options: &SeriesStyleOptions, bars: PrecomputedBars<'_>) -> Option<BarStyle> {
    let SeriesStyleOptions::Line(style) = options else {
        return None;
    };
    let color = bars.value.overrides().color.unwrap_or(style.color);

    Some(BarStyle::Line(LineBarColorerStyle {
        bar_color: color,
        line_color: color,
    }))
}

fn histogram_style(options: &SeriesStyleOptions, bars: PrecomputedBars<'_>) -> Option<BarStyle> {
    let SeriesStyleOptions::Histogram(style) = options else {
        return None;
    };

    Some(BarStyle::Histogram(HistogramBarColorerStyle {
        bar_color: bars.value.overrides().color.unwrap_or(style.color),
    }))
}

fn style_getter_for(series_type: SeriesType) -> StyleGetterFn {
    match series_type {
        SeriesType::Bar => bar_style,
        SeriesType::Candlestick => candlestick_style,
        SeriesType::Area => area_style,
        SeriesType::Baseline => baseline_style,
        SeriesType::Line => line_style,
        SeriesType::Histogram => histogram_style,
    }
}

/// Resolves the paint style of single bars of one series.
///
/// The resolver is picked from the series type once, at construction; a
/// series never changes type afterwards.
#[derive(Clone, Copy)]
pub struct SeriesBarColorer<'a> {
    series: &'a Series,
    style_getter: StyleGetterFn,
}

impl std::fmt::Debug for SeriesBarColorer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesBarColorer")
            .field("series", &self.series.id())
            .field("series_type", &self.series.series_type())
            .finish()
    }
}

impl<'a> SeriesBarColorer<'a> {
    #[must_use]
    pub fn new(series: &'a Series) -> Self {
        Self {
            series,
            style_getter: style_getter_for(series.series_type()),
        }
    }

    /// Resolves the style of the bar at `bar_index`.
    ///
    /// With `precomputed_bars` the lookup is skipped and `bar_index` is only
    /// informational. Without it, a missing bar is reported as
    /// `ChartError::BarNotFound`; callers are expected to query existing bars.
    pub fn bar_style(
        &self,
        bar_index: TimePointIndex,
        precomputed_bars: Option<PrecomputedBars<'_>>,
    ) -> ChartResult<BarStyle> {
        match precomputed_bars {
            Some(bars) => self.resolve(bars),
            None => self.resolve(self.find_bar(bar_index)?),
        }
    }

    /// Resolves every bar inside `range`, feeding each resolver its
    /// predecessor directly instead of searching per bar.
    pub fn bar_styles_in_range(
        &self,
        range: StrictRange,
    ) -> ChartResult<Vec<(TimePointIndex, BarStyle)>> {
        let all_rows = self.series.bars().rows();
        let (offset, rows) = self.series.bars().range_with_offset(range);
        let resolve_at = |position: usize, row: &SeriesPlotRow| {
            let previous_value = (offset + position)
                .checked_sub(1)
                .map(|previous| &all_rows[previous]);
            self.resolve(PrecomputedBars {
                value: row,
                previous_value,
            })
            .map(|style| (row.index(), style))
        };

        #[cfg(feature = "parallel-styles")]
        {
            rows.par_iter()
                .enumerate()
                .map(|(position, row)| resolve_at(position, row))
                .collect()
        }

        #[cfg(not(feature = "parallel-styles"))]
        {
            rows.iter()
                .enumerate()
                .map(|(position, row)| resolve_at(position, row))
                .collect()
        }
    }

    fn resolve(&self, bars: PrecomputedBars<'_>) -> ChartResult<BarStyle> {
        (self.style_getter)(self.series.options(), bars).ok_or_else(|| {
            ChartError::SeriesTypeMismatch {
                expected: self.series.series_type(),
                actual: self.series.options().series_type(),
            }
        })
    }

    fn find_bar(&self, bar_index: TimePointIndex) -> ChartResult<PrecomputedBars<'a>> {
        let rows = self.series.bars().rows();
        match rows.binary_search_by_key(&bar_index, SeriesPlotRow::index) {
            Ok(position) => Ok(PrecomputedBars {
                value: &rows[position],
                previous_value: position.checked_sub(1).map(|previous| &rows[previous]),
            }),
            Err(_) => {
                warn!(
                    series = self.series.id().raw(),
                    index = bar_index,
                    "bar colorer queried a missing bar"
                );
                Err(ChartError::BarNotFound { index: bar_index })
            }
        }
    }
}
