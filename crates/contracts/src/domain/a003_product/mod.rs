pub mod aggregate;
pub mod query;

pub use aggregate::{
    localized_view, Locale, LocalizedProduct, Product, ProductDto, ProductId, NO_SHOP_LABEL,
};
pub use query::ProductListQuery;
