//! Brands

pub(crate) mod index;
