use crate::option::{
    Axis, AxisPointerKind, AxisTick, ChartOption, Grid, Length, Series, Tooltip, TooltipTrigger,
};

use super::WEEKDAYS;

/// Single bar series over the week with a shadow pointer.
#[must_use]
pub fn basic_bar_option() -> ChartOption {
    let mut x_axis = Axis::category(WEEKDAYS);
    x_axis.axis_tick = Some(AxisTick {
        align_with_label: true,
    });

    let mut series = Series::bar()
        .with_name("series1")
        .with_data([820, 932, 901, 934, 1290, 1330, 1320]);
    series.bar_width = Some(Length::percent(60.0));
    let tooltip = Tooltip::new(TooltipTrigger::Axis).with_axis_pointer(AxisPointerKind::Shadow);

    ChartOption {
        tooltip: Some(tooltip),
        grid: Some(Grid::percent_margins(3.0, 4.0, 3.0)),
        x_axis: vec![x_axis],
        y_axis: vec![Axis::value()],
        series: vec![series],
        ..ChartOption::default()
    }
}
