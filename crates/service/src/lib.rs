//! Service layer providing the trivia operations on top of a data store.
//! - Separates game logic from data access.
//! - Reuses entity definitions in the `models` crate through the SeaORM store.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod domain;
pub mod pagination;
pub mod store;
pub mod categories;
pub mod questions;
pub mod quiz;
pub mod seed;
#[cfg(test)]
pub mod test_support;
