use eframe::egui::{self, Color32, RichText, Ui};

use degree_guide::data::filter::BudgetRange;
use degree_guide::data::model::{DegreeLevel, LocationCategory};
use degree_guide::data::{loader, SAMPLE_CATALOG};
use degree_guide::state::{AppState, QUICK_FIELDS, SLIDER_STEP};

use super::format_amount;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open catalog…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload sample").clicked() {
                load_sample(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(RichText::new("🎓 DegreeGuide").strong());
        ui.separator();

        ui.label(format!(
            "{} universities loaded, {} shown",
            state.catalog.len(),
            state.result_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Hero: search box and quick filters
// ---------------------------------------------------------------------------

pub fn search_bar(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(12.0);
        ui.heading(RichText::new("Find Your Perfect Degree Program").size(26.0));
        ui.label("Discover universities and programs that match your interests, budget, and career goals.");
        ui.add_space(8.0);

        let mut search = state.criteria.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search for programs, universities, or fields of study...")
                .desired_width(ui.available_width().min(640.0)),
        );
        if response.changed() {
            state.set_search(search);
        }
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui: &mut Ui| {
            if ui
                .selectable_label(state.show_filters, "⚙ Advanced Filters")
                .clicked()
            {
                state.toggle_filters();
            }
            for field in QUICK_FIELDS {
                let selected = state.criteria.active_field() == Some(field);
                if ui.selectable_label(selected, field).clicked() {
                    state.quick_field(field);
                }
            }
        });
        ui.add_space(8.0);
    });
}

// ---------------------------------------------------------------------------
// Advanced filter panel
// ---------------------------------------------------------------------------

/// Render the advanced filter widgets (side panel).
pub fn filter_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Your Search");
    ui.separator();

    ui.strong("Field of Study");
    let mut field = state.criteria.active_field().map(str::to_string);
    egui::ComboBox::from_id_salt("field_of_study")
        .selected_text(field.as_deref().unwrap_or("Select field"))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut field, None, "Any field");
            for option in state.field_options() {
                let label = option.clone();
                ui.selectable_value(&mut field, Some(option), label);
            }
        });
    if field.as_deref() != state.criteria.active_field() {
        state.set_field(field);
    }
    ui.add_space(6.0);

    ui.strong("Degree Type");
    let mut degree = state.criteria.degree;
    egui::ComboBox::from_id_salt("degree_type")
        .selected_text(degree.map_or("Select type", DegreeLevel::label))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut degree, None, "Any type");
            for level in DegreeLevel::ALL {
                ui.selectable_value(&mut degree, Some(level), level.label());
            }
        });
    if degree != state.criteria.degree {
        state.set_degree(degree);
    }
    ui.add_space(6.0);

    ui.strong("Location");
    let mut location = state.criteria.location;
    egui::ComboBox::from_id_salt("location")
        .selected_text(location.map_or("Select location", LocationCategory::label))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut location, None, "Anywhere");
            for cat in LocationCategory::ALL {
                ui.selectable_value(&mut location, Some(cat), cat.label());
            }
        });
    if location != state.criteria.location {
        state.set_location(location);
    }
    ui.add_space(6.0);

    budget_sliders(ui, state);
    ui.add_space(10.0);

    if ui.button("Clear filters").clicked() {
        state.clear_filters();
    }
}

fn budget_sliders(ui: &mut Ui, state: &mut AppState) {
    let BudgetRange { mut min, mut max } = state.criteria.budget;
    let ceiling = state.budget_ceiling();

    ui.strong(format!(
        "Budget Range: PKR {} - {}",
        format_amount(min),
        format_amount(max)
    ));

    let mut changed = false;
    for (label, value) in [("From", &mut min), ("To", &mut max)] {
        changed |= ui
            .add(
                egui::Slider::new(value, 0..=ceiling)
                    .step_by(SLIDER_STEP as f64)
                    .custom_formatter(|v, _| format_amount(v as u64))
                    .text(label),
            )
            .changed();
    }

    if changed {
        // Keep the two thumbs from crossing, like a two-handle range slider.
        if min > max {
            if min != state.criteria.budget.min {
                max = min;
            } else {
                min = max;
            }
        }
        state.set_budget(BudgetRange::new(min, max));
    }
}

// ---------------------------------------------------------------------------
// Catalog loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open university catalog")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} universities from {} with fields {:?}",
                    catalog.len(),
                    path.display(),
                    catalog.fields
                );
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn load_sample(state: &mut AppState) {
    match loader::parse_json(SAMPLE_CATALOG) {
        Ok(catalog) => state.set_catalog(catalog),
        Err(e) => {
            log::error!("Bundled catalog is invalid: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
