use egui::{Button, Ui};
use roster_business::{TableAction, UsersPageCompute};
use roster_states::StateCtx;

/// Previous / Next buttons around a "Page X of Y" indicator.
///
/// Hidden when the table is not paginated.
pub fn pagination_bar(state_ctx: &StateCtx, ui: &mut Ui) -> Option<TableAction> {
    let page = state_ctx.cached::<UsersPageCompute>()?;
    if !page.paginated {
        return None;
    }

    ui.horizontal(|ui| {
        let mut action = None;

        if ui
            .add_enabled(page.has_previous(), Button::new("Previous"))
            .clicked()
        {
            action = Some(TableAction::PreviousPage);
        }

        ui.label(page.indicator());

        if ui.add_enabled(page.has_next(), Button::new("Next")).clicked() {
            action = Some(TableAction::NextPage);
        }

        action
    })
    .inner
}
