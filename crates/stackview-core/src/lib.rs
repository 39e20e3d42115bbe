//! Core logic for stackview
//!
//! This crate provides:
//! - The compose stack snapshot model
//! - Display derivation for a single service (prefixes, aliases, image split, masking)
//! - Route resolution with redirect-to-stack on unknown services
//! - Snapshot sources and a per-stack cache

mod derive;
mod details;
mod error;
mod format;
mod model;
mod overview;
mod route;
mod source;

pub use derive::*;
pub use details::*;
pub use error::*;
pub use format::*;
pub use model::*;
pub use overview::*;
pub use route::*;
pub use source::*;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
