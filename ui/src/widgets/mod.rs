mod filters;
mod pagination;
pub mod table;

pub use filters::filter_bar;
pub use pagination::pagination_bar;
pub use table::users_table;
