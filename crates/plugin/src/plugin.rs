//! Lifecycle facade the host drives.
//!
//! Hooks never propagate failures: each one logs what went wrong and hands
//! control straight back to the host. Initialization is the single
//! exception.

use chrono::Utc;
use inmemoria_core::Logger;
use serde::Serialize;
use serde_json::{Map, Value};
use tools::{InsightType, ToolError, ToolRouter};

use crate::{
  context::{
    AiErrorContext, AiResponseContext, ConversationContext, ConversationSummary, FileChangeContext,
    FileChangeKind, FileSaveContext, PluginContext, ProjectContext, TaskCompleteContext, ToolContext,
    ToolsListContext,
  },
  error::PluginError,
  hook::HookKind,
};

/// Name the plugin registers under.
pub const PLUGIN_NAME: &str = "opencode-inmemoria";

/// Metadata key stamped onto `ai.response.before` payloads.
const CONTEXT_KEY: &str = "in-memoria";

/// Metadata key stamped onto `tools.list` payloads.
const SUGGESTIONS_KEY: &str = "in-memoria-suggestions";

/// Saves at or above this many bytes skip the auto-learn pass.
const LEARN_SIZE_LIMIT: u64 = 100_000;

/// Registration record the host reads at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginMetadata {
  pub name: &'static str,
  pub version: &'static str,
  pub hooks: Vec<&'static str>,
  pub description: &'static str,
  pub author: &'static str,
}

/// Bridges host lifecycle hooks to the In-Memoria service.
pub struct InMemoriaPlugin {
  router: Option<ToolRouter>,
  logger: Logger,
}

impl Default for InMemoriaPlugin {
  fn default() -> Self {
    Self::new()
  }
}

impl InMemoriaPlugin {
  pub fn new() -> Self {
    Self { router: None, logger: Logger::default() }
  }

  /// Wires the plugin to the host.
  ///
  /// Without an `execute_tool` function the plugin loads inert: every hook
  /// becomes a pass-through.
  pub fn initialize(&mut self, ctx: PluginContext) -> Result<(), PluginError> {
    self.logger = ctx.logger;
    self.logger.info("Initializing In-Memoria plugin...");

    match ctx.execute_tool {
      Some(executor) => match ToolRouter::new(ctx.workspace_path, executor, self.logger.clone()) {
        Ok(router) => self.router = Some(router),
        Err(err) => {
          self.logger.error(format!("Failed to initialize: {err}"));
          return Err(err.into());
        }
      },
      None => self.logger.warn("No executeTool function provided"),
    }

    self.logger.info("In-Memoria plugin initialized");
    Ok(())
  }

  /// Drops the router. Hooks fall back to their inert paths afterwards.
  pub fn destroy(&mut self) {
    self.logger.info("Shutting down In-Memoria plugin...");
    self.router = None;
  }

  /// Whether initialization produced a live router.
  pub fn is_active(&self) -> bool {
    self.router.is_some()
  }

  pub fn metadata(&self) -> PluginMetadata {
    PluginMetadata {
      name: PLUGIN_NAME,
      version: env!("CARGO_PKG_VERSION"),
      hooks: HookKind::ALL.iter().map(|kind| kind.as_str()).collect(),
      description: "Persistent intelligence plugin for OpenCode",
      author: "OpenCode Community",
    }
  }

  /// Checks whether the project wants a learning pass and runs one.
  pub async fn on_project_open(&self, _ctx: &ProjectContext) {
    let Some(router) = &self.router else { return };
    if let Err(err) = self.learn_project(router).await {
      self.logger.error(format!("Failed to handle project open: {err}"));
    }
  }

  pub async fn on_tool_execute_before(&self, ctx: ToolContext) -> ToolContext {
    self.logger.debug(format!("Tool executing: {}", ctx.tool_name));
    ctx
  }

  pub async fn on_tool_execute_after(&self, ctx: ToolContext) -> ToolContext {
    self.logger.debug(format!("Tool completed: {}", ctx.tool_name));
    ctx
  }

  /// Stamps service context under the `in-memoria` metadata key.
  ///
  /// The payload comes back untouched when the service cannot be reached.
  pub async fn on_ai_response_before(&self, mut ctx: AiResponseContext) -> AiResponseContext {
    let Some(router) = &self.router else { return ctx };
    match self.project_stamp(router, &ctx).await {
      Ok(stamp) => {
        ctx.base.metadata.get_or_insert_with(Map::new).insert(CONTEXT_KEY.to_string(), stamp);
      }
      Err(err) => self.logger.error(format!("Failed to get context: {err}")),
    }
    ctx
  }

  /// Captures architectural decisions from a successful task.
  pub async fn on_task_complete(&self, ctx: &TaskCompleteContext) {
    let Some(router) = &self.router else { return };
    if !ctx.success {
      return;
    }
    if let Err(err) = self.capture_decisions(router, ctx).await {
      self.logger.error(format!("Failed to capture insights: {err}"));
    }
  }

  /// Files the failure away as a bug pattern.
  pub async fn on_ai_error(&self, ctx: &AiErrorContext) {
    let Some(router) = &self.router else { return };
    if let Err(err) = self.record_bug_pattern(router, ctx).await {
      self.logger.error(format!("Failed to record bug pattern: {err}"));
    }
  }

  /// Triggers a learning pass for modified files outside vendored trees.
  pub async fn on_file_change(&self, ctx: &FileChangeContext) {
    let Some(router) = &self.router else { return };
    if ctx.path.contains("node_modules") || ctx.path.contains(".git") {
      return;
    }
    self.logger.debug(format!("File changed: {}", ctx.path));
    if ctx.kind != FileChangeKind::Modified {
      return;
    }
    if let Err(err) = router.auto_learn_if_needed(false).await {
      self.logger.error(format!("Failed to handle file change: {err}"));
    }
  }

  /// Triggers a learning pass for saves under [`LEARN_SIZE_LIMIT`].
  pub async fn on_file_save(&self, ctx: &FileSaveContext) {
    let Some(router) = &self.router else { return };
    self.logger.debug(format!("File saved: {}", ctx.path));
    if ctx.size >= LEARN_SIZE_LIMIT {
      return;
    }
    if let Err(err) = router.auto_learn_if_needed(false).await {
      self.logger.error(format!("Failed to handle file save: {err}"));
    }
  }

  pub async fn on_conversation_start(&self, _ctx: &ConversationContext) {
    self.logger.info("Conversation started");
  }

  /// Persists summary decisions and logs the session totals.
  pub async fn on_conversation_end(&self, ctx: &ConversationContext) {
    let Some(router) = &self.router else { return };
    let Some(summary) = &ctx.summary else { return };
    if let Err(err) = self.capture_session(router, &ctx.session_id, summary).await {
      self.logger.error(format!("Failed to capture session: {err}"));
    }
  }

  /// Attaches pattern suggestions under the `in-memoria-suggestions` key.
  pub async fn on_tools_list(&self, mut ctx: ToolsListContext) -> ToolsListContext {
    let Some(router) = &self.router else { return ctx };
    let Some(task) = ctx.task_context.clone() else { return ctx };
    match self.suggestion_stamp(router, &task, ctx.current_file.as_deref()).await {
      Ok(stamp) => {
        ctx.base.metadata.get_or_insert_with(Map::new).insert(SUGGESTIONS_KEY.to_string(), stamp);
      }
      Err(err) => self.logger.error(format!("Failed to get suggestions: {err}")),
    }
    ctx
  }

  async fn learn_project(&self, router: &ToolRouter) -> Result<(), ToolError> {
    let blueprint = router.project_blueprint().await?;
    if !blueprint.learning_status.is_some_and(|status| status.needs_learning) {
      return Ok(());
    }
    self.logger.info("Auto-learning project...");
    let outcome = router.auto_learn_if_needed(false).await?;
    if outcome.success {
      self.logger.info(format!(
        "Learned {} patterns from {} files",
        outcome.patterns_extracted, outcome.files_processed
      ));
    }
    Ok(())
  }

  /// Assembles the full stamp before it touches the payload; a failure
  /// partway through leaves the context without an `in-memoria` entry.
  async fn project_stamp(&self, router: &ToolRouter, ctx: &AiResponseContext) -> Result<Value, ToolError> {
    let blueprint = router.project_blueprint().await?;
    let mut stamp = Map::new();
    stamp.insert("project".to_string(), serde_json::to_value(blueprint.project)?);
    stamp.insert("timestamp".to_string(), Value::String(Utc::now().to_rfc3339()));
    if let Some(task) = &ctx.task_description {
      let recommendations = router.pattern_recommendations(task, ctx.current_file.as_deref()).await?;
      stamp.insert("patterns".to_string(), serde_json::to_value(recommendations.patterns)?);
    }
    Ok(Value::Object(stamp))
  }

  async fn suggestion_stamp(
    &self,
    router: &ToolRouter,
    task: &str,
    current_file: Option<&str>,
  ) -> Result<Value, ToolError> {
    let recommendations = router.pattern_recommendations(task, current_file).await?;
    let mut stamp = Map::new();
    stamp.insert("patterns".to_string(), serde_json::to_value(recommendations.patterns)?);
    stamp.insert("approach".to_string(), Value::String(recommendations.recommended_approach));
    Ok(Value::Object(stamp))
  }

  async fn capture_decisions(&self, router: &ToolRouter, ctx: &TaskCompleteContext) -> Result<(), ToolError> {
    if ctx.decisions.is_empty() {
      return Ok(());
    }
    for decision in &ctx.decisions {
      let mut content = Map::new();
      content.insert("description".to_string(), Value::String(decision.description.clone()));
      content.insert("reasoning".to_string(), Value::String(decision.reasoning.clone()));
      content.insert("files".to_string(), serde_json::to_value(&decision.files)?);
      content.insert("task".to_string(), Value::String(ctx.task.description.clone()));
      router.contribute_insights(InsightType::BestPractice, content, 0.85, None).await?;
    }
    self.logger.info(format!("Captured {} decisions", ctx.decisions.len()));
    Ok(())
  }

  async fn record_bug_pattern(&self, router: &ToolRouter, ctx: &AiErrorContext) -> Result<(), ToolError> {
    let mut content = Map::new();
    content.insert("error".to_string(), Value::String(ctx.error.message.clone()));
    if let Some(stack) = &ctx.error.stack {
      content.insert("stack".to_string(), Value::String(stack.clone()));
    }
    if let Some(file) = &ctx.current_file {
      content.insert("file".to_string(), Value::String(file.clone()));
    }
    content.insert("project".to_string(), Value::String(ctx.project.name.clone()));
    router.contribute_insights(InsightType::BugPattern, content, 0.9, None).await?;
    self.logger.info("Recorded bug pattern");
    Ok(())
  }

  async fn capture_session(
    &self,
    router: &ToolRouter,
    session_id: &str,
    summary: &ConversationSummary,
  ) -> Result<(), ToolError> {
    for decision in &summary.decisions {
      let mut content = Map::new();
      content.insert("description".to_string(), Value::String(decision.description.clone()));
      content.insert("reasoning".to_string(), Value::String(decision.reasoning.clone()));
      content.insert("files".to_string(), serde_json::to_value(&summary.files_modified)?);
      content.insert("session_id".to_string(), Value::String(session_id.to_string()));
      router.contribute_insights(InsightType::BestPractice, content, 0.8, None).await?;
    }
    self.logger.info(format!(
      "Session: {} tasks, {} files",
      summary.tasks_completed,
      summary.files_modified.len()
    ));
    Ok(())
  }
}
