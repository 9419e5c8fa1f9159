use crate::option::{
    AreaStyle, Axis, BoundaryGap, ChartOption, Fill, Grid, LabelPosition, Legend, LineStyle,
    LinearGradient, Series, SeriesLabel, Smooth, Title, Toolbox, Tooltip, TooltipTrigger,
};

use super::WEEKDAYS;

const PALETTE: [&str; 5] = ["#80FFA5", "#00DDFF", "#37A2FF", "#FF0087", "#FFBF00"];

struct Band {
    name: &'static str,
    top: &'static str,
    bottom: &'static str,
    values: [u32; 7],
}

const BANDS: [Band; 5] = [
    Band {
        name: "Email",
        top: "rgb(128, 255, 165)",
        bottom: "rgb(1, 191, 236)",
        values: [140, 232, 101, 264, 90, 340, 250],
    },
    Band {
        name: "Union Ads",
        top: "rgb(0, 221, 255)",
        bottom: "rgb(77, 119, 255)",
        values: [120, 282, 111, 234, 220, 340, 310],
    },
    Band {
        name: "Video Ads",
        top: "rgb(55, 162, 255)",
        bottom: "rgb(116, 21, 219)",
        values: [320, 132, 201, 334, 190, 130, 220],
    },
    Band {
        name: "Direct",
        top: "rgb(255, 0, 135)",
        bottom: "rgb(135, 0, 157)",
        values: [220, 402, 231, 134, 190, 230, 120],
    },
    Band {
        name: "Search Engine",
        top: "rgb(255, 191, 0)",
        bottom: "rgb(224, 62, 76)",
        values: [220, 302, 181, 234, 210, 290, 150],
    },
];

/// Smoothed stacked areas with per-band vertical gradients and no stroke.
#[must_use]
pub fn stacked_area_option() -> ChartOption {
    let last = BANDS.len() - 1;
    let series = BANDS
        .iter()
        .enumerate()
        .map(|(index, band)| {
            let mut series = Series::line()
                .with_name(band.name)
                .with_stack("Total")
                .with_data(band.values.iter().copied())
                .with_emphasis_on_series();
            series.smooth = Some(Smooth::Flag(true));
            series.line_style = Some(LineStyle::width(0.0));
            series.show_symbol = Some(false);
            let fill = Fill::Gradient(LinearGradient::vertical(band.top, band.bottom));
            series.area_style = Some(AreaStyle {
                opacity: Some(0.8),
                color: Some(fill),
            });
            // Stack totals are labelled on the top band only.
            if index == last {
                series.label = Some(SeriesLabel {
                    show: true,
                    position: LabelPosition::Top,
                });
            }
            series
        })
        .collect();

    ChartOption {
        color: PALETTE.iter().map(|color| (*color).to_owned()).collect(),
        title: Some(Title::new("渐变堆叠面积图")),
        tooltip: Some(Tooltip::new(TooltipTrigger::Axis).with_cross_pointer("#6a7985")),
        legend: Some(Legend::entries(BANDS.iter().map(|band| band.name))),
        grid: Some(Grid::percent_margins(3.0, 4.0, 3.0)),
        toolbox: Some(Toolbox::save_as_image()),
        x_axis: vec![Axis::category(WEEKDAYS).with_boundary_gap(BoundaryGap::Flag(false))],
        y_axis: vec![Axis::value()],
        series,
        ..ChartOption::default()
    }
}
