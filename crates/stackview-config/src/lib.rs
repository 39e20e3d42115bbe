//! Configuration handling for stackview
//!
//! Global configuration lives at `~/.config/stackview/config.toml`.

mod error;
mod global;

pub use error::*;
pub use global::*;
