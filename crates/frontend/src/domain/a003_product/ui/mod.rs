pub mod details;
pub mod form;
pub mod list;

pub use details::ProductDetails;
pub use form::ProductForm;
pub use list::{ProductList, ScopedProducts};
