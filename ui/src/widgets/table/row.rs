//! Row rendering for the employees table.

use egui_extras::TableRow;
use roster_business::{DisplayMappings, User};

use super::cells::{render_avatar_cell, render_id_cell, render_text_cell};

/// `"F/28"`: gender label, then age.
pub fn demography(user: &User, mappings: &DisplayMappings) -> String {
    format!("{}/{}", mappings.display_gender(&user.gender), user.age)
}

/// `"Mississippi, USA"`: state, then country abbreviation or the raw country.
pub fn location(user: &User, mappings: &DisplayMappings) -> String {
    format!(
        "{}, {}",
        user.address.state,
        mappings.display_country(&user.address.country)
    )
}

#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User, mappings: &DisplayMappings) {
    row.col(|ui| render_id_cell(ui, user.id));
    row.col(|ui| render_avatar_cell(ui, &user.image));
    row.col(|ui| render_text_cell(ui, &user.full_name()));
    row.col(|ui| render_text_cell(ui, &demography(user, mappings)));
    row.col(|ui| render_text_cell(ui, &user.company.title));
    row.col(|ui| render_text_cell(ui, &location(user, mappings)));
}
