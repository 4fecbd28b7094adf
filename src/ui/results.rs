use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use degree_guide::color::{category_color, FieldColors};
use degree_guide::data::model::University;
use degree_guide::data::sort::SortKey;
use degree_guide::state::{AppState, CardTab, ViewMode};

use super::format_amount;

const CARD_WIDTH: f32 = 320.0;

/// Header row: result count, sort selector and view toggle.
pub fn results_header(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(format!("Found {} Universities", state.result_count()));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            let mut view = state.view_mode;
            ui.selectable_value(&mut view, ViewMode::Table, "Table");
            ui.selectable_value(&mut view, ViewMode::Cards, "Cards");
            state.view_mode = view;
            ui.separator();

            let mut key = state.sort_key;
            egui::ComboBox::from_id_salt("sort_by")
                .selected_text(key.label())
                .width(180.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for option in SortKey::ALL {
                        ui.selectable_value(&mut key, option, option.label());
                    }
                });
            if key != state.sort_key {
                state.set_sort(key);
            }
            ui.label("Sort by");
        });
    });
    ui.separator();
}

// ---------------------------------------------------------------------------
// Card grid
// ---------------------------------------------------------------------------

pub fn university_cards(ui: &mut Ui, state: &mut AppState, colors: &FieldColors) {
    if state.result_count() == 0 {
        ui.label("No universities match the current filters.");
        return;
    }

    let n_cols = ((ui.available_width() / CARD_WIDTH).floor() as usize).clamp(1, 3);
    let indices = state.visible_indices.clone();

    ui.columns(n_cols, |cols: &mut [Ui]| {
        for (slot, &idx) in indices.iter().enumerate() {
            let ui = &mut cols[slot % n_cols];
            university_card(ui, state, idx, colors);
            ui.add_space(8.0);
        }
    });
}

fn university_card(ui: &mut Ui, state: &mut AppState, idx: usize, colors: &FieldColors) {
    let uni = state.catalog.universities[idx].clone();
    let mut tab = state.card_tab(&uni.id);
    let mut open_details = false;

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());

        if let Some(uri) = image_uri(&uni.image) {
            ui.add(egui::Image::new(uri).max_height(140.0));
        }

        ui.horizontal(|ui: &mut Ui| {
            ui.vertical(|ui: &mut Ui| {
                ui.label(RichText::new(&uni.name).size(18.0).strong());
                ui.label(format!("📍 {}", uni.location));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui: &mut Ui| {
                ui.vertical(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(uni.category.badge())
                            .color(Color32::WHITE)
                            .background_color(category_color(uni.category)),
                    );
                    ui.label(format!("⭐ {:.1}", uni.rating));
                    ui.label(format!("Rank #{}", uni.ranking));
                });
            });
        });
        ui.separator();

        ui.horizontal(|ui: &mut Ui| {
            ui.selectable_value(&mut tab, CardTab::Programs, "Programs");
            ui.selectable_value(&mut tab, CardTab::Fees, "Fees");
        });

        match tab {
            CardTab::Programs => {
                for program in uni.programs.iter().take(2) {
                    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(&program.name)
                                .strong()
                                .color(colors.color_for(&program.field)),
                        );
                        ui.label(
                            RichText::new(format!("{} • {}", program.duration, program.degree))
                                .small(),
                        );
                        ui.horizontal_wrapped(|ui: &mut Ui| {
                            for career in program.career_paths.iter().take(2) {
                                ui.label(RichText::new(career).small().italics());
                            }
                        });
                    });
                }
                if uni.programs.is_empty() {
                    ui.label("No programs listed.");
                }
            }
            CardTab::Fees => fee_lines(ui, &uni),
        }

        ui.add_space(4.0);
        if ui
            .add_sized([ui.available_width(), 24.0], egui::Button::new("View Details"))
            .clicked()
        {
            open_details = true;
        }
    });

    if tab != state.card_tab(&uni.id) {
        state.set_card_tab(&uni.id, tab);
    }
    if open_details {
        state.open_details(&uni.id);
    }
}

fn fee_lines(ui: &mut Ui, uni: &University) {
    egui::Grid::new(("fees", &uni.id))
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Local Students:");
            ui.label(
                RichText::new(format!("PKR {}", format_amount(uni.tuition_fee.local)))
                    .strong()
                    .color(Color32::from_rgb(22, 163, 74)),
            );
            ui.end_row();
            ui.label("International:");
            ui.label(
                RichText::new(format!("PKR {}", format_amount(uni.tuition_fee.international)))
                    .strong()
                    .color(Color32::from_rgb(37, 99, 235)),
            );
            ui.end_row();
        });
    if uni.scholarships {
        ui.label(
            RichText::new("Scholarships Available")
                .color(Color32::from_rgb(133, 77, 14))
                .background_color(Color32::from_rgb(254, 249, 195)),
        );
    }
}

/// Only local files are shown; other references are skipped.
fn image_uri(reference: &str) -> Option<String> {
    let path = Path::new(reference);
    (!reference.is_empty() && path.is_file()).then(|| format!("file://{}", path.display()))
}

// ---------------------------------------------------------------------------
// Table view
// ---------------------------------------------------------------------------

pub fn university_table(ui: &mut Ui, state: &mut AppState) {
    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in [
                "Rank", "University", "Location", "Type", "Rating", "Local fee", "Intl fee", "Programs",
            ] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for uni in state.visible() {
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("#{}", uni.ranking));
                    });
                    row.col(|ui: &mut Ui| {
                        if ui.link(&uni.name).clicked() {
                            clicked = Some(uni.id.clone());
                        }
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&uni.location);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.colored_label(category_color(uni.category), uni.category.badge());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", uni.rating));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_amount(uni.tuition_fee.local));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_amount(uni.tuition_fee.international));
                    });
                    row.col(|ui: &mut Ui| {
                        let names: Vec<&str> = uni.programs.iter().map(|p| p.name.as_str()).collect();
                        ui.label(names.join(", "));
                    });
                });
            }
        });

    if let Some(id) = clicked {
        state.open_details(&id);
    }
}

// ---------------------------------------------------------------------------
// Details window
// ---------------------------------------------------------------------------

pub fn details_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(uni) = state.details().cloned() else {
        return;
    };

    let mut open = true;
    egui::Window::new(&uni.name)
        .open(&mut open)
        .collapsible(false)
        .default_width(420.0)
        .show(ctx, |ui: &mut Ui| {
            ui.label(format!("📍 {}  •  {}", uni.location, uni.category.badge()));
            ui.label(format!("⭐ {:.1}   Rank #{}", uni.rating, uni.ranking));
            fee_lines(ui, &uni);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                for program in &uni.programs {
                    egui::CollapsingHeader::new(RichText::new(&program.name).strong())
                        .id_salt(("program", &uni.id, &program.id))
                        .default_open(true)
                        .show(ui, |ui: &mut Ui| {
                            ui.label(format!(
                                "{} • {} • {}",
                                program.field, program.duration, program.degree
                            ));
                            ui.label(format!("Average salary: {}", program.average_salary));
                            if !program.requirements.is_empty() {
                                ui.strong("Requirements");
                                for req in &program.requirements {
                                    ui.label(format!("• {req}"));
                                }
                            }
                            if !program.career_paths.is_empty() {
                                ui.strong("Career paths");
                                for career in &program.career_paths {
                                    ui.label(format!("• {career}"));
                                }
                            }
                        });
                }
            });
        });

    if !open {
        state.close_details();
    }
}
