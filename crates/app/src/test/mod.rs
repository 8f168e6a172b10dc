//! Shared support for store-backed tests.

mod context;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
