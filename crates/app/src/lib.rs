//! Shared domain, persistence and catalog client modules for the shop API.

pub mod catalog;
pub mod context;
pub mod database;
pub mod documents;
pub mod domain;
pub mod ids;
pub mod results;

#[cfg(test)]
mod test;
