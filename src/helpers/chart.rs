use compute::trend::TrendPoint;
use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

/// Build the inline HTML for the historical sales trend line chart.
///
/// X axis carries the chronologically sorted "Year Month" labels the trend
/// series provides; Y axis is Base Sales.
pub fn trend_chart_html(series: &[TrendPoint], product: &str, volume: &str) -> String {
    let labels: Vec<String> = series.iter().map(|point| point.label.clone()).collect();
    let values: Vec<f64> = series.iter().map(|point| point.base_sales).collect();

    let trace = Scatter::new(labels, values)
        .mode(Mode::LinesMarkers)
        .name(&format!("{product} - {volume}"));

    let layout = Layout::new()
        .title(Title::with_text("Sales Trend"))
        .x_axis(Axis::new().title(Title::with_text("Time")))
        .y_axis(Axis::new().title(Title::with_text("Base Sales")))
        .height(400);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot.to_inline_html(Some("sales-trend"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_embeds_the_series_labels() {
        let series = vec![
            TrendPoint {
                label: "2023 October".to_string(),
                base_sales: 100.0,
            },
            TrendPoint {
                label: "2023 November".to_string(),
                base_sales: 200.0,
            },
        ];
        let html = trend_chart_html(&series, "Soap", "500g");
        assert!(html.contains("sales-trend"));
        assert!(html.contains("2023 October"));
        assert!(html.contains("Soap - 500g"));
    }
}
