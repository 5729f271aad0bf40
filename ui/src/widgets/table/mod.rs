//! Employees table.
//!
//! - `columns`: column definitions and widths
//! - `header`: header row with sort targets
//! - `row`: one user per row
//! - `cells`: cell rendering functions

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::{
    BusinessConfig, FetchStatusCompute, SortState, TableAction, UsersPageCompute,
};
use roster_states::StateCtx;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the current page of users. Returns a sort request from a header click.
pub fn users_table(state_ctx: &StateCtx, ui: &mut Ui) -> Option<TableAction> {
    let loading = state_ctx
        .cached::<FetchStatusCompute>()
        .is_some_and(FetchStatusCompute::is_loading);
    if loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading users...");
        });
    }

    let (Some(page), Some(config)) = (
        state_ctx.cached::<UsersPageCompute>(),
        state_ctx.state::<BusinessConfig>(),
    ) else {
        return None;
    };
    let sort = state_ctx.state::<SortState>().copied().unwrap_or_default();
    let mappings = config.mappings();
    let icons = config.table.icons;

    let mut clicked = None;
    let mut builder = TableBuilder::new(ui)
        .id_salt("employees_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            clicked = render_table_header(&mut header, &sort, icons);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, page.rows.len(), |mut row| {
                if let Some(user) = page.rows.get(row.index()) {
                    render_user_row(&mut row, user, &mappings);
                }
            });
        });

    if !loading && page.total_rows == 0 {
        ui.weak("No users to show");
    }

    clicked.map(TableAction::ToggleSort)
}
