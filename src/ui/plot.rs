use eframe::egui::{RichText, Ui};
use egui_plot::{Corner, Legend, Line, LineStyle as PlotLineStyle, Plot, PlotBounds, PlotPoints};

use crate::chart::spec::{ChartSpec, Dash};
use crate::color::line_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart in the central panel.
pub fn chart_plot(ui: &mut Ui, state: &mut AppState) {
    let reset_view = state.take_view_reset();
    let index = state.current_index();
    let Some(chart) = state.current_chart() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No charts to show");
        });
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(&chart.title).strong());
    });

    render_chart(ui, chart, index, reset_view);
}

fn plot_style(dash: Dash) -> PlotLineStyle {
    match dash {
        Dash::Solid => PlotLineStyle::Solid,
        Dash::Dashed => PlotLineStyle::Dashed { length: 10.0 },
    }
}

/// The chart's own axis window; never derived from the data.
pub fn plot_bounds(chart: &ChartSpec) -> PlotBounds {
    PlotBounds::from_min_max(
        [chart.x_range.min, chart.y_range.min],
        [chart.x_range.max, chart.y_range.max],
    )
}

/// Draw `chart`, snapping to its axis window when `reset_view` is set.
///
/// The plot id includes `index` so each chart keeps separate zoom memory.
/// Egui's double-click reset would auto-fit the data, so it is disabled;
/// the toolbar's "Reset view" restores the chart window instead.
pub fn render_chart(ui: &mut Ui, chart: &ChartSpec, index: usize, reset_view: bool) {
    Plot::new(("chart_plot", index))
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            if reset_view {
                plot_ui.set_plot_bounds(plot_bounds(chart));
            }
            for series in &chart.series {
                let points: PlotPoints = chart.points(series).into();
                let line = Line::new(points)
                    .name(&series.label)
                    .color(line_color(series.style.color))
                    .width(series.style.width)
                    .style(plot_style(series.style.dash));

                plot_ui.line(line);
            }
        });
}
