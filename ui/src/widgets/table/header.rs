//! Table header with clickable sort targets.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{IconSet, SortDirection, SortField, SortState};

/// Header labels, with the field each sortable column sorts by.
pub const HEADERS: [(&str, Option<SortField>); 6] = [
    ("ID", Some(SortField::Id)),
    ("Image", None),
    ("Full Name", Some(SortField::FullName)),
    ("Demography (Age)", Some(SortField::Age)),
    ("Designation", None),
    ("Location", None),
];

/// `"Full Name ⬆"` on the active column, the bare label elsewhere.
pub fn header_text(
    label: &str,
    field: Option<SortField>,
    sort: &SortState,
    icons: IconSet,
) -> String {
    match field.and_then(|field| sort.direction_of(field)) {
        Some(SortDirection::Ascending) => format!("{label} {}", icons.ascending()),
        Some(SortDirection::Descending) => format!("{label} {}", icons.descending()),
        None => label.to_owned(),
    }
}

/// Renders the header row. Returns the column the user clicked, if sortable.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sort: &SortState,
    icons: IconSet,
) -> Option<SortField> {
    let mut clicked = None;

    for (label, field) in HEADERS {
        header.col(|ui| {
            let text = header_text(label, field, sort, icons);
            if render_header_cell(ui, &text, field.is_some()) {
                clicked = field;
            }
        });
    }

    clicked
}

#[inline]
fn render_header_cell(ui: &mut Ui, text: &str, sortable: bool) -> bool {
    if sortable {
        ui.add(Button::new(RichText::new(text).strong()).frame(false))
            .on_hover_text("Sort")
            .clicked()
    } else {
        ui.strong(text);
        false
    }
}
