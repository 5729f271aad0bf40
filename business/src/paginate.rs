use roster_states::State;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl State for PageState {}

impl PageState {
    pub fn new(page: usize) -> Self {
        Self { page: page.max(1) }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pull the page back onto `[1, total_pages]` after the list shrank.
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.page = clamp_page(self.page, total_pages);
    }

    /// Move back one page. Returns `false` at the first page.
    pub fn previous(&mut self) -> bool {
        if has_previous(self.page) {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one page. Returns `false` at or past the last page.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if has_next(self.page, total_pages) {
            self.page += 1;
            true
        } else {
            false
        }
    }
}

/// `ceil(len / page_size)`; zero when either is zero.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// `page` limited to `[1, total_pages]`. An empty list still has page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn has_previous(page: usize) -> bool {
    page > 1
}

pub fn has_next(page: usize, total_pages: usize) -> bool {
    page < total_pages
}

/// The slice `[(page - 1) * page_size, page * page_size)`, clamped to `items`.
///
/// Pages past the end, page 0 and a zero page size all yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .filter(|start| *start < items.len())
    else {
        return &[];
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_items_in_pages_of_ten() {
        let ids: Vec<u32> = (1..=25).collect();

        assert_eq!(paginate(&ids, 1, 10), (1..=10).collect::<Vec<_>>().as_slice());
        assert_eq!(paginate(&ids, 3, 10), &[21, 22, 23, 24, 25]);
        assert_eq!(total_pages(ids.len(), 10), 3);
    }

    #[test]
    fn pages_concatenate_back_to_the_input() {
        let items: Vec<u32> = (0..37).collect();
        for page_size in 1..=12 {
            let pages = total_pages(items.len(), page_size);
            let rebuilt: Vec<u32> = (1..=pages)
                .flat_map(|page| paginate(&items, page, page_size).iter().copied())
                .collect();
            assert_eq!(rebuilt, items, "page size {page_size}");
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3];
        let empty: [u32; 0] = [];

        assert!(paginate(&items, 2, 3).is_empty());
        assert!(paginate(&items, 99, 3).is_empty());
        assert!(paginate(&items, 0, 3).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert!(paginate(&empty, 1, 10).is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn total_pages_uses_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn page_state_stays_within_bounds() {
        let mut page = PageState::default();
        assert!(!page.previous());
        assert_eq!(page.page(), 1);

        assert!(page.next(3));
        assert!(page.next(3));
        assert!(!page.next(3));
        assert_eq!(page.page(), 3);

        assert!(page.previous());
        assert_eq!(page.page(), 2);

        page.reset();
        assert_eq!(page, PageState::new(0));
        assert!(!page.next(0));
    }

    #[test]
    fn clamping_pulls_a_stale_page_back_in_range() {
        assert_eq!(clamp_page(3, 1), 1);
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(0, 3), 1);

        let mut page = PageState::new(5);
        page.clamp_to(2);
        assert_eq!(page.page(), 2);
        assert!(page.previous());
        assert_eq!(page.page(), 1);
    }
}
