pub mod aggregate;

pub use aggregate::{sort_by_name, Category, CategoryDto, CategoryId, CategoryRef};
