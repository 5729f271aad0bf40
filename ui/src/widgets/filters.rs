//! Country and gender dropdowns above the table.

use egui::{ComboBox, Ui};
use roster_business::{
    BusinessConfig, COUNTRY_OPTIONS, FilterState, GENDER_OPTIONS, IconSet, TableAction,
};
use roster_states::StateCtx;
use ustr::Ustr;

pub const COUNTRY_PLACEHOLDER: &str = "Country";
pub const GENDER_PLACEHOLDER: &str = "Gender";

/// Renders the filter bar. Returns the change the user picked, if any.
pub fn filter_bar(state_ctx: &StateCtx, ui: &mut Ui) -> Option<TableAction> {
    let filter = state_ctx.state::<FilterState>().copied().unwrap_or_default();
    let icons = state_ctx
        .state::<BusinessConfig>()
        .map_or_else(IconSet::default, |config| config.table.icons);

    ui.horizontal(|ui| {
        ui.label(icons.filter());

        let country = option_combo(
            ui,
            "country_filter",
            COUNTRY_PLACEHOLDER,
            COUNTRY_OPTIONS,
            filter.country(),
        );
        let gender = option_combo(
            ui,
            "gender_filter",
            GENDER_PLACEHOLDER,
            GENDER_OPTIONS,
            filter.gender(),
        );

        if country != filter.country() {
            Some(TableAction::SetCountry(country))
        } else if gender != filter.gender() {
            Some(TableAction::SetGender(gender))
        } else {
            None
        }
    })
    .inner
}

/// Label shown for `value`, falling back to the raw value.
fn option_label(options: &[(&str, &'static str)], value: Ustr) -> String {
    options
        .iter()
        .find(|(v, _)| *v == value.as_str())
        .map_or_else(|| value.to_string(), |(_, label)| (*label).to_owned())
}

fn option_combo(
    ui: &mut Ui,
    id: &str,
    placeholder: &str,
    options: &[(&str, &'static str)],
    current: Option<Ustr>,
) -> Option<Ustr> {
    let mut selected = current;
    let selected_text =
        current.map_or_else(|| placeholder.to_owned(), |v| option_label(options, v));

    ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, placeholder);
            for (value, label) in options {
                ui.selectable_value(&mut selected, Some(Ustr::from(*value)), *label);
            }
        });

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_labels_fall_back_to_the_value() {
        assert_eq!(option_label(GENDER_OPTIONS, Ustr::from("female")), "Female");
        assert_eq!(option_label(COUNTRY_OPTIONS, Ustr::from("UAE")), "UAE");
        assert_eq!(option_label(COUNTRY_OPTIONS, Ustr::from("Canada")), "Canada");
    }
}
