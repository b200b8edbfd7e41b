pub mod details;
pub mod form;
pub mod list;

pub use details::CategoryDetails;
pub use form::CategoryForm;
pub use list::CategoryList;
