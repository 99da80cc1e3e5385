//! Colors derived from the data: category backgrounds, tag chips and the
//! header of the detail panel.

use crate::location::LocationId;

/// Background and text color pairs for tags, cycled by position.
pub const TAG_COLORS: [(&str, &str); 6] = [
    ("#FFF5F5", "#1A1A1A"),
    ("#FFFAF0", "#1A1A1A"),
    ("#FEFFF0", "#1A1A1A"),
    ("#F0FFF4", "#1A1A1A"),
    ("#F0F7FF", "#1A1A1A"),
    ("#FAF5FF", "#1A1A1A"),
];

fn category_hue(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    index as f64 / total as f64 * 360.0
}

/// Pastel background spreading the categories over the color wheel.
#[must_use]
pub fn category_color(index: usize, total: usize) -> String {
    format!("hsl({}, 35%, 97%)", category_hue(index, total).round())
}

#[must_use]
pub fn category_hover_color(index: usize, total: usize) -> String {
    format!("hsl({}, 40%, 95%)", category_hue(index, total).round())
}

#[must_use]
pub const fn tag_color(index: usize) -> (&'static str, &'static str) {
    TAG_COLORS[index % TAG_COLORS.len()]
}

/// Complementary pastel gradient, stable per location.
#[must_use]
pub fn detail_gradient(id: LocationId) -> String {
    // ~golden angle in degrees
    let hue = id.wrapping_mul(137) % 360;
    let complement = (hue + 180) % 360;
    format!(
        "linear-gradient(135deg, hsl({hue}, 100%, 92%) 0%, hsl({complement}, 100%, 92%) 100%)"
    )
}
