//! # Config Commands
//!
//! Retrieves the running configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - `config` in the REPL
/// - Currency formatting and delivery thresholds on the front-end
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
