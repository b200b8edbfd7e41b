pub mod details;
pub mod form;
pub mod list;

pub use details::ShopDetails;
pub use form::ShopForm;
pub use list::ShopList;
