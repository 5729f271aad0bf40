use log::debug;
use roster_states::StateCtx;
use ustr::Ustr;

use crate::{
    BusinessConfig, FetchState, FetchStatusCompute, FetchUsersCommand, FilterState, PageState,
    SortField, SortState, UsersCompute, UsersPageCompute, VisibleUsersCompute,
};

/// Everything the table controls can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    SetCountry(Option<Ustr>),
    SetGender(Option<Ustr>),
    ToggleSort(SortField),
    PreviousPage,
    NextPage,
}

/// Register the roster states, computes and command on `ctx`.
pub fn register(ctx: &mut StateCtx, config: BusinessConfig, fetch: FetchState) {
    ctx.add_state(config);
    ctx.add_state(fetch);
    ctx.add_state(FilterState::default());
    ctx.add_state(SortState::default());
    ctx.add_state(PageState::default());

    ctx.record_compute(UsersCompute::default());
    ctx.record_compute(FetchStatusCompute::default());
    ctx.record_compute(VisibleUsersCompute::default());
    ctx.record_compute(UsersPageCompute::default());

    ctx.record_command(FetchUsersCommand);
}

/// Apply a control interaction.
///
/// Filter changes go back to page 1. Page moves stay within `[1, total_pages]` and, when
/// `refetch_on_page_change` is set, dispatch a new fetch.
pub fn apply_action(ctx: &mut StateCtx, action: TableAction) {
    debug!("Apply {action:?}");

    match action {
        TableAction::SetCountry(country) => {
            ctx.update::<FilterState>(|filter| filter.set_country(country));
            ctx.update::<PageState>(PageState::reset);
        }
        TableAction::SetGender(gender) => {
            ctx.update::<FilterState>(|filter| filter.set_gender(gender));
            ctx.update::<PageState>(PageState::reset);
        }
        TableAction::ToggleSort(field) => {
            ctx.update::<SortState>(|sort| sort.toggle(field));
        }
        TableAction::PreviousPage => {
            let total = cached_total_pages(ctx);
            let moved = ctx.state_mut::<PageState>().is_some_and(|page| {
                page.clamp_to(total);
                page.previous()
            });
            if moved {
                refetch_if_configured(ctx);
            }
        }
        TableAction::NextPage => {
            let total = cached_total_pages(ctx);
            let moved = ctx.state_mut::<PageState>().is_some_and(|page| {
                page.clamp_to(total);
                page.next(total)
            });
            if moved {
                refetch_if_configured(ctx);
            }
        }
    }
}

fn cached_total_pages(ctx: &StateCtx) -> usize {
    ctx.cached::<UsersPageCompute>().map_or(0, |page| page.total_pages)
}

fn refetch_if_configured(ctx: &mut StateCtx) {
    let refetch = ctx
        .state::<BusinessConfig>()
        .is_some_and(|config| config.table.refetch_on_page_change);
    if refetch {
        ctx.dispatch::<FetchUsersCommand>();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{MockFetcher, SortDirection, TableConfig, json_response};

    fn payload(n: u32) -> serde_json::Value {
        let users: Vec<_> = (1..=n)
            .map(|id| {
                json!({
                    "id": id,
                    "firstName": format!("User{id}"),
                    "lastName": "Test",
                    "age": 30,
                    "gender": if id % 2 == 0 { "female" } else { "male" },
                    "address": { "state": "Texas", "country": "United States" },
                })
            })
            .collect();
        json!({ "users": users })
    }

    fn setup(config: BusinessConfig, fetcher: MockFetcher) -> StateCtx {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut ctx = StateCtx::new();
        register(&mut ctx, config, FetchState::new(fetcher));
        ctx.dispatch::<FetchUsersCommand>();
        ctx.run_all_dirty();
        ctx
    }

    fn current_page(ctx: &StateCtx) -> usize {
        ctx.state::<PageState>().expect("page state").page()
    }

    #[test]
    fn registered_graph_is_acyclic() {
        let mut ctx = StateCtx::new();
        register(&mut ctx, BusinessConfig::default(), FetchState::default());
        assert!(ctx.verify_deps().is_ok());
    }

    #[test]
    fn next_and_previous_stop_at_the_bounds() {
        let mut ctx = setup(BusinessConfig::default(), MockFetcher::ok_json(&payload(25)));

        apply_action(&mut ctx, TableAction::PreviousPage);
        assert_eq!(current_page(&ctx), 1);

        for _ in 0..5 {
            apply_action(&mut ctx, TableAction::NextPage);
            ctx.run_all_dirty();
        }
        assert_eq!(current_page(&ctx), 3);

        apply_action(&mut ctx, TableAction::PreviousPage);
        ctx.run_all_dirty();
        assert_eq!(current_page(&ctx), 2);
    }

    #[test]
    fn filter_change_resets_the_page() {
        let mut ctx = setup(BusinessConfig::default(), MockFetcher::ok_json(&payload(25)));
        apply_action(&mut ctx, TableAction::NextPage);
        ctx.run_all_dirty();
        assert_eq!(current_page(&ctx), 2);

        apply_action(&mut ctx, TableAction::SetGender(Some(Ustr::from("female"))));
        ctx.run_all_dirty();

        assert_eq!(current_page(&ctx), 1);
        let page = ctx.cached::<UsersPageCompute>().expect("page");
        assert_eq!(page.total_rows, 12);
        assert!(page.rows.iter().all(|u| u.gender == "female"));
    }

    #[test]
    fn header_clicks_toggle_the_sort() {
        let mut ctx = setup(BusinessConfig::default(), MockFetcher::ok_json(&payload(3)));

        apply_action(&mut ctx, TableAction::ToggleSort(SortField::Age));
        apply_action(&mut ctx, TableAction::ToggleSort(SortField::Age));
        assert_eq!(
            *ctx.state::<SortState>().expect("sort"),
            SortState::new(SortField::Age, SortDirection::Descending)
        );

        apply_action(&mut ctx, TableAction::ToggleSort(SortField::Id));
        ctx.run_all_dirty();
        let ids: Vec<u32> = ctx
            .cached::<UsersPageCompute>()
            .expect("page")
            .rows
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn page_change_refetches_only_when_configured() {
        let fetcher = MockFetcher::ok_json(&payload(25));
        let mut ctx = setup(BusinessConfig::default(), fetcher.clone());
        apply_action(&mut ctx, TableAction::NextPage);
        assert_eq!(fetcher.requested_urls().len(), 1);

        let fetcher = MockFetcher::ok_json(&payload(25));
        let config = BusinessConfig::default().with_table(TableConfig {
            refetch_on_page_change: true,
            ..TableConfig::default()
        });
        let mut ctx = setup(config, fetcher.clone());
        apply_action(&mut ctx, TableAction::NextPage);
        ctx.run_all_dirty();
        assert_eq!(fetcher.requested_urls().len(), 2);
        assert_eq!(current_page(&ctx), 2);
    }

    #[test]
    fn refetch_that_shrinks_the_list_keeps_the_pager_coherent() {
        let fetcher = MockFetcher::ok_json(&payload(25));
        let config = BusinessConfig::default().with_table(TableConfig {
            refetch_on_page_change: true,
            ..TableConfig::default()
        });
        let mut ctx = setup(config, fetcher.clone());

        apply_action(&mut ctx, TableAction::NextPage);
        ctx.run_all_dirty();
        fetcher.set_response(Ok(json_response(200, &payload(4))));
        apply_action(&mut ctx, TableAction::NextPage);
        ctx.run_all_dirty();

        let page = ctx.cached::<UsersPageCompute>().expect("page");
        assert_eq!(page.indicator(), "Page 1 of 1");
        assert_eq!(page.rows.len(), 4);
        assert!(!page.has_previous());

        apply_action(&mut ctx, TableAction::PreviousPage);
        ctx.run_all_dirty();
        assert_eq!(current_page(&ctx), 1);
        assert_eq!(fetcher.requested_urls().len(), 3);
    }
}
