use crate::option::{
    Axis, AxisCoord, AxisLabel, BoundaryGap, ChartOption, DataViewFeature, DataZoomFeature,
    Enabled, LabelPosition, Legend, MagicTypeFeature, MarkAnchor, MarkLabel, MarkLine,
    MarkLineEntry, MarkPoint, MarkStatistic, Length, Series, SeriesKind, Title, Toolbox,
    ToolboxFeatures, Tooltip, TooltipTrigger,
};

use super::WEEKDAYS;

const HIGHEST: [i32; 7] = [10, 11, 13, 11, 12, 12, 9];
const LOWEST: [i32; 7] = [1, -2, 2, 5, 3, 2, 0];

/// Weekly highs and lows with extreme points and average lines.
#[must_use]
pub fn temperature_change_option() -> ChartOption {
    let mut highest = Series::line()
        .with_name("Highest")
        .with_data(HIGHEST.iter().copied());
    highest.mark_point = Some(MarkPoint {
        data: vec![
            MarkAnchor::statistic(MarkStatistic::Max, "Max"),
            MarkAnchor::statistic(MarkStatistic::Min, "Min"),
        ],
    });
    highest.mark_line = Some(average_line(Vec::new()));

    let mut lowest = Series::line()
        .with_name("Lowest")
        .with_data(LOWEST.iter().copied());
    lowest.mark_point = Some(MarkPoint {
        data: vec![MarkAnchor {
            name: Some("周最低".to_owned()),
            value: Some(-2.0),
            x_axis: Some(AxisCoord::Value(1.0)),
            y_axis: Some(AxisCoord::Value(-1.5)),
            ..MarkAnchor::default()
        }],
    });
    lowest.mark_line = Some(average_line(vec![peak_segment()]));

    ChartOption {
        title: Some(Title::new("未来一周气温变化 ")),
        tooltip: Some(Tooltip::new(TooltipTrigger::Axis)),
        legend: Some(Legend::default()),
        toolbox: Some(Toolbox {
            show: Some(true),
            feature: ToolboxFeatures {
                data_zoom: Some(DataZoomFeature {
                    y_axis_index: Some("none".to_owned()),
                }),
                data_view: Some(DataViewFeature { read_only: false }),
                magic_type: Some(MagicTypeFeature {
                    kinds: vec![SeriesKind::Line, SeriesKind::Bar],
                }),
                restore: Some(Enabled {}),
                save_as_image: Some(Enabled {}),
            },
        }),
        x_axis: vec![Axis::category(WEEKDAYS).with_boundary_gap(BoundaryGap::Flag(false))],
        y_axis: vec![Axis::value().with_label(AxisLabel::formatter("{value} °C"))],
        series: vec![highest, lowest],
        ..ChartOption::default()
    }
}

fn average_line(extra: Vec<MarkLineEntry>) -> MarkLine {
    let mut data = vec![MarkLineEntry::Anchor(MarkAnchor::statistic(
        MarkStatistic::Average,
        "Avg",
    ))];
    data.extend(extra);
    MarkLine {
        data,
        ..MarkLine::default()
    }
}

/// Segment from 90% of the grid width at the series maximum to the maximum point.
fn peak_segment() -> MarkLineEntry {
    let start = MarkAnchor {
        symbol: Some("none".to_owned()),
        x: Some(Length::percent(90.0)),
        y_axis: Some(AxisCoord::Statistic(MarkStatistic::Max)),
        ..MarkAnchor::default()
    };
    let end = MarkAnchor {
        statistic: Some(MarkStatistic::Max),
        name: Some("最高点".to_owned()),
        symbol: Some("circle".to_owned()),
        label: Some(MarkLabel {
            position: Some(LabelPosition::Start),
            formatter: Some("Max".to_owned()),
            ..MarkLabel::default()
        }),
        ..MarkAnchor::default()
    };
    MarkLineEntry::Segment([start, end])
}
