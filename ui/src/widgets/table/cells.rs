//! Cell rendering functions for the employees table.

use egui::{Image, RichText, Ui, vec2};

use super::columns::AVATAR_SIZE;

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: u32) {
    ui.label(RichText::new(id.to_string()).monospace());
}

/// Avatar loaded from `url`. Users without an image get a placeholder.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, url: &str) {
    if url.is_empty() {
        ui.weak("-");
        return;
    }
    ui.add(
        Image::from_uri(url.to_owned())
            .fit_to_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE))
            .corner_radius(AVATAR_SIZE / 2.0),
    );
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}
