use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{UniformSource, generate_ranking_table};
use crate::error::{ChartError, ChartResult};
use crate::option::{
    Axis, AxisLabel, BoundaryGap, ChartOption, EndLabel, Grid, LineStyle, Series, Smooth,
    SplitLine, Title, Toolbox, Tooltip, TooltipTrigger,
};

/// Entries and periods ranked by the bump chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpChartSettings {
    #[serde(default = "default_names")]
    pub names: Vec<String>,
    #[serde(default = "default_years")]
    pub years: Vec<String>,
}

impl Default for BumpChartSettings {
    fn default() -> Self {
        Self {
            names: default_names(),
            years: default_years(),
        }
    }
}

impl BumpChartSettings {
    pub fn validate(&self) -> ChartResult<()> {
        if self.names.is_empty() {
            return Err(ChartError::InvalidArgument(
                "bump chart needs at least one name".to_owned(),
            ));
        }
        if self.years.is_empty() {
            return Err(ChartError::InvalidArgument(
                "bump chart needs at least one year".to_owned(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(ChartError::InvalidArgument(format!(
                "bump chart name `{duplicate}` is listed twice"
            )));
        }
        Ok(())
    }
}

fn default_names() -> Vec<String> {
    [
        "Orange",
        "Tomato",
        "Apple",
        "Sakana",
        "Banana",
        "Iwashi",
        "Snappy Fish",
        "Lemon",
        "Pasta",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

fn default_years() -> Vec<String> {
    (2001..=2006).map(|year: u32| year.to_string()).collect()
}

/// Ranking lines over the configured years, one randomly ranked line per name.
///
/// The y axis is inverted so rank 1 sits on top.
pub fn bump_chart_option<S>(
    settings: &BumpChartSettings,
    source: &mut S,
) -> ChartResult<ChartOption>
where
    S: UniformSource + ?Sized,
{
    settings.validate()?;
    let table = generate_ranking_table(&settings.names, settings.years.len(), source)?;

    let series = table
        .into_iter()
        .map(|(name, ranks)| {
            let mut series = Series::line()
                .with_name(name)
                .with_data(ranks)
                .with_emphasis_on_series();
            series.symbol_size = Some(20.0);
            series.smooth = Some(Smooth::Flag(true));
            series.end_label = Some(EndLabel {
                show: true,
                formatter: "{a}".to_owned(),
                distance: Some(20.0),
            });
            series.line_style = Some(LineStyle::width(4.0));
            series
        })
        .collect();

    let mut x_axis = Axis::category(settings.years.iter().cloned())
        .with_boundary_gap(BoundaryGap::Flag(false))
        .with_label(AxisLabel {
            margin: Some(30.0),
            font_size: Some(16.0),
            formatter: None,
        });
    x_axis.split_line = Some(SplitLine { show: true });

    let mut y_axis = Axis::value()
        .with_label(AxisLabel {
            margin: Some(30.0),
            font_size: Some(16.0),
            formatter: Some("#{value}".to_owned()),
        })
        .with_range(1.0, settings.names.len() as f64);
    y_axis.inverse = Some(true);
    y_axis.interval = Some(1.0);

    Ok(ChartOption {
        title: Some(Title::new("Bump Chart (Ranking)")),
        tooltip: Some(Tooltip::new(TooltipTrigger::Item)),
        grid: Some(Grid::px_margins(30.0, 110.0, 30.0)),
        toolbox: Some(Toolbox::save_as_image()),
        x_axis: vec![x_axis],
        y_axis: vec![y_axis],
        series,
        ..ChartOption::default()
    })
}
