//! Text measurement helpers shared by the menu rows.

use eframe::egui;
use egui::{Color32, FontId, Painter};

const ELLIPSIS: &str = "..";

/// Truncates text to fit within a given width, appending ".." if truncated.
///
/// Virtualized rows have an estimated width, so labels made of unusually
/// wide glyphs can overflow; those are cut here instead of being clipped
/// mid-glyph.
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `available_width` - Maximum width available for the text
/// * `font_id` - Font used for measuring
/// * `painter` - Painter used for measuring
pub fn truncate_text_to_fit(text: &str, available_width: f32, font_id: &FontId, painter: &Painter) -> String {
    let measure = |s: String| painter.layout_no_wrap(s, font_id.clone(), Color32::WHITE).size().x;

    if available_width <= 0.0 {
        return String::new();
    }
    if measure(text.to_string()) <= available_width {
        return text.to_string();
    }

    let available_for_text = available_width - measure(ELLIPSIS.to_string());
    if available_for_text <= 0.0 {
        return String::new();
    }

    // Binary search on the number of chars that still fit
    let mut low = 0;
    let mut high = text.chars().count();
    while low < high {
        let mid = (low + high).div_ceil(2);
        let candidate: String = text.chars().take(mid).collect();
        if measure(candidate) <= available_for_text {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = text.chars().take(low).collect();
    result.push_str(ELLIPSIS);
    result
}
