pub mod action_buttons;
pub mod pagination_controls;
pub mod search_input;

pub use action_buttons::ActionButtons;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
