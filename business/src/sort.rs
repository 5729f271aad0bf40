use std::borrow::Borrow;
use std::cmp::Ordering;

use roster_states::State;

use crate::User;

/// Sortable columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Id,
    FullName,
    Age,
}

impl SortField {
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::FullName => a.full_name().cmp(&b.full_name()),
            Self::Age => a.age.cmp(&b.age),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction. Defaults to id ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl State for SortState {}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active ascending column flips to descending; anything else becomes
    /// ascending on the clicked column.
    pub fn toggle(&mut self, field: SortField) {
        self.direction = if self.field == field && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.field = field;
    }

    /// The direction shown on `field`'s header, if it is the active column.
    pub fn direction_of(&self, field: SortField) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }

    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        self.direction.apply(self.field.compare(a, b))
    }
}

/// Stable in-place sort, so equal keys keep their filtered order.
pub fn sort_users<U: Borrow<User>>(users: &mut [U], sort: &SortState) {
    users.sort_by(|a, b| sort.compare(Borrow::<User>::borrow(a), Borrow::<User>::borrow(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, first: &str, age: u32) -> User {
        User {
            id,
            first_name: first.to_owned(),
            last_name: "Doe".to_owned(),
            age,
            ..User::default()
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(3, "Carol", 41),
            user(1, "Alice", 29),
            user(4, "Dave", 35),
            user(2, "Bob", 52),
        ]
    }

    fn ids<U: Borrow<User>>(users: &[U]) -> Vec<u32> {
        users.iter().map(|u| Borrow::<User>::borrow(u).id).collect()
    }

    #[test]
    fn sorts_by_each_field() {
        let mut users = sample();

        sort_users(&mut users, &SortState::default());
        assert_eq!(ids(&users), vec![1, 2, 3, 4]);

        sort_users(&mut users, &SortState::new(SortField::Age, SortDirection::Ascending));
        assert_eq!(ids(&users), vec![1, 4, 3, 2]);

        sort_users(
            &mut users,
            &SortState::new(SortField::FullName, SortDirection::Descending),
        );
        assert_eq!(ids(&users), vec![4, 3, 2, 1]);
    }

    #[test]
    fn descending_is_ascending_reversed() {
        let users = sample();
        for field in [SortField::Id, SortField::FullName, SortField::Age] {
            let mut ascending: Vec<&User> = users.iter().collect();
            let mut descending = ascending.clone();

            sort_users(&mut ascending, &SortState::new(field, SortDirection::Ascending));
            sort_users(&mut descending, &SortState::new(field, SortDirection::Descending));
            ascending.reverse();

            assert_eq!(ids(&ascending), ids(&descending), "{field:?}");
        }
    }

    #[test]
    fn ties_keep_their_relative_order() {
        let mut users = vec![user(9, "Zed", 30), user(2, "Amy", 30), user(5, "Kim", 30)];
        sort_users(&mut users, &SortState::new(SortField::Age, SortDirection::Descending));
        assert_eq!(ids(&users), vec![9, 2, 5]);
    }

    #[test]
    fn header_clicks_follow_the_toggle_rules() {
        let mut sort = SortState::default();

        sort.toggle(SortField::Age);
        assert_eq!(sort, SortState::new(SortField::Age, SortDirection::Ascending));

        sort.toggle(SortField::Age);
        assert_eq!(sort, SortState::new(SortField::Age, SortDirection::Descending));

        sort.toggle(SortField::FullName);
        assert_eq!(
            sort,
            SortState::new(SortField::FullName, SortDirection::Ascending)
        );

        sort.toggle(SortField::FullName);
        sort.toggle(SortField::FullName);
        assert_eq!(
            sort,
            SortState::new(SortField::FullName, SortDirection::Ascending)
        );
    }

    #[test]
    fn default_click_on_id_flips_to_descending() {
        let mut sort = SortState::default();
        sort.toggle(SortField::Id);
        assert_eq!(sort.direction_of(SortField::Id), Some(SortDirection::Descending));
        assert_eq!(sort.direction_of(SortField::Age), None);
    }
}
