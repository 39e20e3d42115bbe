//! CLI command implementations

mod inspect;
mod manage;

use stackview_config::GlobalConfig;
use stackview_core::StackStore;
use std::sync::Arc;

pub use inspect::*;
pub use manage::*;

/// What every stack command needs: a snapshot store and the effective config
pub struct Context {
    pub store: Arc<StackStore>,
    pub config: GlobalConfig,
}

impl Context {
    fn internal_domain(&self) -> &str {
        &self.config.display.internal_domain
    }
}
