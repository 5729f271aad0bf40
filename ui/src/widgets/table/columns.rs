//! Column definitions for the employees table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 50.0;
pub const IMAGE_WIDTH: f32 = 56.0;
pub const DEMOGRAPHY_WIDTH: f32 = 130.0;
pub const ROW_HEIGHT: f32 = 40.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const AVATAR_SIZE: f32 = 32.0;

/// In order: ID, Image, Full Name, Demography, Designation, Location.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),
        Column::exact(IMAGE_WIDTH),
        Column::auto().at_least(140.0),
        Column::exact(DEMOGRAPHY_WIDTH),
        Column::auto().at_least(120.0),
        Column::remainder().at_least(120.0),
    ]
}
