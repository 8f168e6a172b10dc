//! Catalog Domain Concerns

pub mod brands;
pub mod carts;
pub mod products;
