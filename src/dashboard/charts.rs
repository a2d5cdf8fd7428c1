//! Chart generation and rendering for the dashboard.
//!
//! The spending chart is built as an ECharts configuration with `charming`
//! and can be written out as a standalone HTML page.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::Line,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::dashboard::series::{ChartPolicy, SeriesPoint};

/// Where the standalone chart page loads ECharts from.
const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The HTML element ID of the chart container.
const CHART_ID: &str = "spending-chart";

/// Build a line chart over `points`, titled according to `policy`.
pub fn series_chart(points: &[SeriesPoint], policy: ChartPolicy) -> Chart {
    let labels: Vec<String> = points.iter().map(|point| point.date.to_string()).collect();
    let values: Vec<f64> = points.iter().map(|point| point.amount).collect();

    let (title, subtitle, name) = match policy {
        ChartPolicy::RunningTotal => (
            "Spending",
            "Running total".to_owned(),
            "Total",
        ),
        ChartPolicy::Recent(count) => (
            "Recent transactions",
            format!("Last {count} transactions"),
            "Amount",
        ),
    };

    Chart::new()
        .title(Title::new().text(title).subtext(subtitle))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name(name).data(values))
}

/// Render `chart` as a standalone HTML page.
pub fn chart_page(chart: &Chart) -> Markup {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{CHART_ID}"));
            chart.setOption({});
            window.addEventListener('resize', chart.resize);
        }});"#,
        chart
    );

    html!(
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Expense Tracker" }
                script src=(ECHARTS_SCRIPT_URL) {}
                script { (PreEscaped(script)) }
            }
            body {
                div id=(CHART_ID) style="width: 100%; min-height: 380px;" {}
            }
        }
    )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
