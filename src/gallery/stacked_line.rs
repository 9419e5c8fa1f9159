use crate::option::{
    Axis, BoundaryGap, ChartOption, Grid, Legend, Series, Title, Toolbox, Tooltip, TooltipTrigger,
};

use super::WEEKDAYS;

const CHANNELS: [(&str, [u32; 7]); 5] = [
    ("Email", [120, 132, 101, 134, 90, 230, 210]),
    ("Union Ads", [220, 182, 191, 234, 290, 330, 310]),
    ("Video Ads", [150, 232, 201, 154, 190, 330, 410]),
    ("Direct", [320, 332, 301, 334, 390, 330, 320]),
    ("Search Engine", [820, 932, 901, 934, 1290, 1330, 1320]),
];

#[must_use]
pub fn stacked_line_option() -> ChartOption {
    ChartOption {
        title: Some(Title::new("折线图堆叠")),
        tooltip: Some(Tooltip::new(TooltipTrigger::Axis).with_cross_pointer("#6a7985")),
        legend: Some(Legend::entries(CHANNELS.iter().map(|(name, _)| *name))),
        grid: Some(Grid::percent_margins(3.0, 4.0, 3.0)),
        toolbox: Some(Toolbox::save_as_image()),
        x_axis: vec![Axis::category(WEEKDAYS).with_boundary_gap(BoundaryGap::Flag(false))],
        y_axis: vec![Axis::value()],
        series: CHANNELS
            .iter()
            .map(|(name, values)| {
                Series::line()
                    .with_name(*name)
                    .with_stack("Total")
                    .with_data(values.iter().copied())
            })
            .collect(),
        ..ChartOption::default()
    }
}
