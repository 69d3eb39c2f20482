use thiserror::Error;
use tools::ToolError;

/// The only failure that crosses the plugin boundary.
///
/// Every hook swallows its own errors after logging them; initialization
/// alone re-raises.
#[derive(Debug, Error)]
pub enum PluginError {
  #[error("plugin initialization failed: {0}")]
  Init(#[from] ToolError),
}
