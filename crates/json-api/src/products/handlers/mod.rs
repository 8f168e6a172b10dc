//! Product Handlers

pub(crate) mod by_brand;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;
