use eframe::egui;

use degree_guide::color::FieldColors;
use degree_guide::state::{AppState, ViewMode};

use crate::ui::{panels, plot, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DegreeGuideApp {
    pub state: AppState,
    colors: FieldColors,
    /// Field list the colours were built from; rebuilt when a new catalog
    /// brings different fields.
    color_fields: Vec<String>,
}

impl DegreeGuideApp {
    pub fn new(state: AppState) -> Self {
        let color_fields = state.field_options();
        Self {
            colors: FieldColors::new(&color_fields),
            color_fields,
            state,
        }
    }

    fn refresh_colors(&mut self) {
        let fields = self.state.field_options();
        if fields != self.color_fields {
            self.colors = FieldColors::new(&fields);
            self.color_fields = fields;
        }
    }
}

impl eframe::App for DegreeGuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });
        self.refresh_colors();

        // ---- Left side panel: advanced filters ----
        if self.state.show_filters {
            egui::SidePanel::left("filter_panel")
                .default_width(240.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::filter_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: search, results, fee chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::search_bar(ui, &mut self.state);
                    results::results_header(ui, &mut self.state);
                    match self.state.view_mode {
                        ViewMode::Cards => {
                            results::university_cards(ui, &mut self.state, &self.colors)
                        }
                        ViewMode::Table => results::university_table(ui, &mut self.state),
                    }
                    ui.add_space(12.0);
                    egui::CollapsingHeader::new("Cost Comparison")
                        .default_open(false)
                        .show(ui, |ui| {
                            plot::fee_chart(ui, &self.state);
                        });
                });
        });

        results::details_window(ctx, &mut self.state);
    }
}
