use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::LocationCategory;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Badge colour for a university's location category.
pub fn category_color(category: LocationCategory) -> Color32 {
    match category {
        LocationCategory::Local => Color32::from_rgb(34, 197, 94),
        LocationCategory::International => Color32::from_rgb(59, 130, 246),
    }
}

// ---------------------------------------------------------------------------
// Field of study → Color32
// ---------------------------------------------------------------------------

/// Assigns each field of study a distinct badge colour.
#[derive(Debug, Clone, Default)]
pub struct FieldColors {
    mapping: BTreeMap<String, Color32>,
}

impl FieldColors {
    pub fn new(fields: &[String]) -> Self {
        let mapping = fields
            .iter()
            .cloned()
            .zip(generate_palette(fields.len()))
            .collect();
        FieldColors { mapping }
    }

    pub fn color_for(&self, field: &str) -> Color32 {
        self.mapping.get(field).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_hues() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_field_falls_back_to_gray() {
        let colors = FieldColors::new(&["Law".to_string(), "Arts".to_string()]);
        assert_ne!(colors.color_for("Law"), Color32::GRAY);
        assert_eq!(colors.color_for("Medicine"), Color32::GRAY);
    }
}
