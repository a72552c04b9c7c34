//! Rifle profile registry.
//!
//! The calculation core never touches storage; handlers reach the registry
//! through the [`RifleRepository`] trait so the backing store can be swapped.
//! - `repository`: trait, record and error types
//! - `local`: in-memory implementation for development and tests

pub mod local;
pub mod repository;

pub use local::LocalRifleRepository;
pub use repository::{RepositoryError, RepositoryResult, Rifle, RifleRepository};
