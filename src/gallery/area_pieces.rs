use chrono::{Days, NaiveDate};

use crate::error::{ChartError, ChartResult};
use crate::option::{
    AreaStyle, Axis, AxisKind, BoundaryGap, ChartOption, DataValue, Length, LineStyle, MarkAnchor,
    MarkLabel, MarkLine, MarkLineEntry, Series, Smooth, VisualMap, VisualPiece,
};

const SERIES_START: (i32, u32, u32) = (2019, 10, 10);
const VALUES: [f64; 9] = [
    200.0, 560.0, 750.0, 580.0, 250.0, 300.0, 450.0, 300.0, 100.0,
];
const HIGHLIGHT: &str = "rgba(0,0,180,0.4)";
/// Open x-index intervals shaded by the visual map.
const HIGHLIGHTED_RANGES: [(f64, f64); 2] = [(1.0, 3.0), (5.0, 7.0)];

/// `count` consecutive ISO dates starting at `start`.
pub fn dated_categories(start: NaiveDate, count: usize) -> ChartResult<Vec<String>> {
    (0..count as u64)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .map(|date| date.format("%Y-%m-%d").to_string())
                .ok_or_else(|| {
                    ChartError::InvalidArgument(format!("date {start} + {offset} days overflows"))
                })
        })
        .collect()
}

/// Smoothed area line whose fill is highlighted over two x ranges, with
/// boundary lines at each range edge.
pub fn area_pieces_option() -> ChartResult<ChartOption> {
    let (year, month, day) = SERIES_START;
    let start = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ChartError::InvalidData("invalid series start date".to_owned()))?;
    let dates = dated_categories(start, VALUES.len())?;

    let mut series = Series::line();
    series.smooth = Some(Smooth::Factor(0.6));
    series.symbol = Some("none".to_owned());
    series.line_style = Some(LineStyle::width(5.0).with_color("#5470C6"));
    series.area_style = Some(AreaStyle::default());
    series.mark_line = Some(MarkLine {
        symbol: Some(["none".to_owned(), "none".to_owned()]),
        label: Some(MarkLabel::hidden()),
        data: HIGHLIGHTED_RANGES
            .iter()
            .flat_map(|&(lower, upper)| [lower, upper])
            .map(|x| MarkLineEntry::Anchor(MarkAnchor::at_x(x)))
            .collect(),
    });
    series.data = dates
        .into_iter()
        .zip(VALUES)
        .map(|(date, value)| DataValue::Pair(date, value))
        .collect();

    Ok(ChartOption {
        x_axis: vec![Axis::new(AxisKind::Category).with_boundary_gap(BoundaryGap::Flag(false))],
        y_axis: vec![Axis::value()
            .with_boundary_gap(BoundaryGap::Range([Length::px(0.0), Length::percent(30.0)]))],
        visual_map: Some(VisualMap::hidden_x_pieces(
            0,
            HIGHLIGHTED_RANGES
                .iter()
                .map(|&(lower, upper)| VisualPiece::open(lower, upper, HIGHLIGHT))
                .collect(),
        )),
        series: vec![series],
        ..ChartOption::default()
    })
}
