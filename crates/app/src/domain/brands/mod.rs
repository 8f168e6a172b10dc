//! Brands

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::BrandsServiceError;
pub use service::*;
