//! Parameterized SQL for the catalog: fixed identifiers, values always bound.

mod builder;
pub use builder::*;
