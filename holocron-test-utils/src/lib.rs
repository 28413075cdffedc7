//! Shared test utilities for the Holocron workspace.
//!
//! Tests build an in-memory SQLite database through [`TestBuilder`], then use the
//! fixture helpers on [`TestContext`] to insert records.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
