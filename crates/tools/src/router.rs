//! Forwarding layer between typed plugin intent and the generic tool call.
//!
//! The router owns nothing but its construction inputs: the project path it
//! stamps onto every call and the executor it forwards through. Each typed
//! method maps its parameters onto the service's argument keys, calls
//! [`ToolRouter::call_tool`], and decodes the reply into a declared shape.

use std::sync::Arc;

use inmemoria_core::Logger;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
  InsightType, SearchMode, ToolError, ToolExecutor,
  response::{CodingApproach, InsightReceipt, LearnOutcome, PatternRecommendations, ProjectBlueprint, SearchResponse},
};

/// Namespace prefix applied to every outbound tool name.
const TOOL_PREFIX: &str = "in-memoria-";

/// Argument key carrying the project root on every call.
const PROJECT_PATH_KEY: &str = "project_path";

/// Result limit used when a search caller does not supply one.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Attribution tag used when an insight caller does not supply one.
pub const DEFAULT_SOURCE_AGENT: &str = "opencode";

/// Routes typed In-Memoria operations through the injected executor.
pub struct ToolRouter {
  project_path: String,
  executor: Arc<dyn ToolExecutor>,
  logger: Logger,
}

impl ToolRouter {
  /// Build a router for `project_path`. The path rides along on every
  /// outbound call; an empty one is rejected at construction.
  pub fn new(
    project_path: impl Into<String>,
    executor: Arc<dyn ToolExecutor>,
    logger: Logger,
  ) -> Result<Self, ToolError> {
    let project_path = project_path.into();
    if project_path.is_empty() {
      return Err(ToolError::EmptyProjectPath);
    }
    Ok(Self {
      project_path,
      executor,
      logger,
    })
  }

  pub fn project_path(&self) -> &str {
    &self.project_path
  }

  /// Generic passthrough: qualifies `name`, merges the project path into
  /// `args` (overwriting any caller-supplied value under that key), and
  /// returns the raw reply. Executor failures are logged and returned
  /// unchanged; there is no retry and no wrapping beyond the error kind.
  pub async fn call_tool(&self, name: &str, mut args: Map<String, Value>) -> Result<Value, ToolError> {
    let qualified = format!("{TOOL_PREFIX}{name}");
    args.insert(PROJECT_PATH_KEY.to_string(), Value::String(self.project_path.clone()));

    self.logger.debug(format!("Calling {qualified} {}", Value::Object(args.clone())));

    match self.executor.execute_tool(&qualified, args).await {
      Ok(result) => {
        self.logger.debug(format!("{qualified} completed"));
        Ok(result)
      }
      Err(err) => {
        self.logger.error(format!("{qualified} failed: {err}"));
        Err(ToolError::Execution(err))
      }
    }
  }

  async fn invoke<T: DeserializeOwned>(&self, tool: &'static str, args: Map<String, Value>) -> Result<T, ToolError> {
    let raw = self.call_tool(tool, args).await?;
    serde_json::from_value(raw).map_err(|source| ToolError::Decode { tool, source })
  }

  /// Project identity and learning status.
  pub async fn project_blueprint(&self) -> Result<ProjectBlueprint, ToolError> {
    self.invoke("get_project_blueprint", Map::new()).await
  }

  /// Ask the service to (re)learn the project; `force` skips its staleness
  /// check.
  pub async fn auto_learn_if_needed(&self, force: bool) -> Result<LearnOutcome, ToolError> {
    let mut args = Map::new();
    args.insert("force".to_string(), Value::Bool(force));
    self.invoke("auto_learn_if_needed", args).await
  }

  /// Predicted implementation route for a problem description.
  pub async fn predict_coding_approach(
    &self,
    problem: &str,
    current_file: Option<&str>,
  ) -> Result<CodingApproach, ToolError> {
    let mut args = Map::new();
    args.insert("problemDescription".to_string(), Value::String(problem.to_string()));
    if let Some(file) = current_file {
      args.insert("currentFile".to_string(), Value::String(file.to_string()));
    }
    self.invoke("predict_coding_approach", args).await
  }

  /// Search the learned codebase. `mode` defaults to semantic and `limit`
  /// to [`DEFAULT_SEARCH_LIMIT`].
  pub async fn search_codebase(
    &self,
    query: &str,
    mode: Option<SearchMode>,
    limit: Option<usize>,
  ) -> Result<SearchResponse, ToolError> {
    let mut args = Map::new();
    args.insert("query".to_string(), Value::String(query.to_string()));
    args.insert(
      "type".to_string(),
      serde_json::to_value(mode.unwrap_or_default()).unwrap_or_default(),
    );
    args.insert("limit".to_string(), Value::from(limit.unwrap_or(DEFAULT_SEARCH_LIMIT)));
    self.invoke("search_codebase", args).await
  }

  /// Pattern guidance for a problem description.
  pub async fn pattern_recommendations(
    &self,
    problem: &str,
    current_file: Option<&str>,
  ) -> Result<PatternRecommendations, ToolError> {
    let mut args = Map::new();
    args.insert("problemDescription".to_string(), Value::String(problem.to_string()));
    if let Some(file) = current_file {
      args.insert("currentFile".to_string(), Value::String(file.to_string()));
    }
    self.invoke("get_pattern_recommendations", args).await
  }

  /// Feed an insight back to the service. `source_agent` defaults to
  /// [`DEFAULT_SOURCE_AGENT`].
  pub async fn contribute_insights(
    &self,
    insight_type: InsightType,
    content: Map<String, Value>,
    confidence: f64,
    source_agent: Option<&str>,
  ) -> Result<InsightReceipt, ToolError> {
    let mut args = Map::new();
    args.insert(
      "type".to_string(),
      serde_json::to_value(insight_type).unwrap_or_default(),
    );
    args.insert("content".to_string(), Value::Object(content));
    args.insert("confidence".to_string(), Value::from(confidence));
    args.insert(
      "source_agent".to_string(),
      Value::String(source_agent.unwrap_or(DEFAULT_SOURCE_AGENT).to_string()),
    );
    self.invoke("contribute_insights", args).await
  }
}
