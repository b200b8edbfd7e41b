pub mod a001_shop;
pub mod a002_category;
pub mod a003_product;
pub mod common;
