use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use degree_guide::state::AppState;

// ---------------------------------------------------------------------------
// Fee comparison chart
// ---------------------------------------------------------------------------

/// Grouped bars of local vs international tuition for the visible results.
pub fn fee_chart(ui: &mut Ui, state: &AppState) {
    if state.result_count() == 0 {
        ui.label("Nothing to compare.");
        return;
    }

    let names: Vec<String> = state.visible().map(|u| u.name.clone()).collect();
    let mut local = Vec::with_capacity(names.len());
    let mut international = Vec::with_capacity(names.len());

    for (i, uni) in state.visible().enumerate() {
        let x = i as f64;
        local.push(
            Bar::new(x - 0.2, uni.tuition_fee.local as f64)
                .width(0.4)
                .name(&uni.name),
        );
        international.push(
            Bar::new(x + 0.2, uni.tuition_fee.international as f64)
                .width(0.4)
                .name(&uni.name),
        );
    }

    Plot::new("fee_chart")
        .legend(Legend::default())
        .height(260.0)
        .y_axis_label("PKR")
        .x_axis_formatter(move |mark, _range| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > f64::EPSILON || pos < 0.0 {
                return String::new();
            }
            names.get(pos as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(local)
                    .name("Local students")
                    .color(Color32::from_rgb(22, 163, 74)),
            );
            plot_ui.bar_chart(
                BarChart::new(international)
                    .name("International")
                    .color(Color32::from_rgb(37, 99, 235)),
            );
        });
}
