//! Shop create / edit form
//!
//! MVVM split:
//! - view_model.rs: draft state, interval edits and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ShopForm;
pub use view_model::ShopFormViewModel;
