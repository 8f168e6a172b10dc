//! Cart Handlers

pub(crate) mod by_user;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
