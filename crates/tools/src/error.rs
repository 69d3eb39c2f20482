use thiserror::Error;

/// Failures crossing the tool boundary.
#[derive(Debug, Error)]
pub enum ToolError {
  /// The injected executor rejected the call. The original error passes
  /// through unchanged and stays available for downcasting.
  #[error(transparent)]
  Execution(#[from] anyhow::Error),

  /// The service replied with a shape the typed wrapper does not accept.
  #[error("malformed {tool} response: {source}")]
  Decode {
    tool: &'static str,
    #[source]
    source: serde_json::Error,
  },

  /// A local value failed to encode as JSON.
  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  /// Routers require a non-empty project path.
  #[error("project path must not be empty")]
  EmptyProjectPath,
}
