//! Product create / edit form (MVVM: view_model.rs holds state and commands, view.rs the UI)

mod view;
mod view_model;

pub use view::ProductForm;
pub use view_model::ProductFormViewModel;
