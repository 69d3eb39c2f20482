//! Common fixtures for plugin integration tests.
//!
//! Hooks run against a scripted in-process service; nothing here talks to a
//! real In-Memoria instance.

#![allow(dead_code)]

use inmemoria_core::{BufferSink, LogLevel, Logger};
use plugin::{
  AiErrorContext, AiResponseContext, ConversationContext, ConversationSummary, ErrorInfo,
  FileChangeContext, FileChangeKind, FileSaveContext, HookContext, InMemoriaPlugin, PluginContext,
  ProjectContext, ProjectIdentity, SummaryDecision, TaskCompleteContext, TaskDecision, TaskInfo,
  ToolsListContext,
};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tools::ToolExecutor;

pub const BLUEPRINT_TOOL: &str = "in-memoria-get_project_blueprint";
pub const LEARN_TOOL: &str = "in-memoria-auto_learn_if_needed";
pub const RECOMMEND_TOOL: &str = "in-memoria-get_pattern_recommendations";
pub const CONTRIBUTE_TOOL: &str = "in-memoria-contribute_insights";

/// Scripted stand-in for the In-Memoria service.
///
/// Replies are keyed by full tool name; unscripted calls fail. Every call is
/// recorded for assertions.
#[derive(Default)]
pub struct FakeService {
  calls: Mutex<Vec<(String, Map<String, Value>)>>,
  replies: Mutex<HashMap<String, Value>>,
  failure: Mutex<Option<String>>,
}

impl FakeService {
  pub fn respond(&self, tool: &str, reply: Value) {
    self.replies.lock().unwrap().insert(tool.to_string(), reply);
  }

  /// Makes every subsequent call fail with `message`.
  pub fn fail_with(&self, message: &str) {
    *self.failure.lock().unwrap() = Some(message.to_string());
  }

  pub fn calls(&self) -> Vec<(String, Map<String, Value>)> {
    self.calls.lock().unwrap().clone()
  }

  /// Arguments of every recorded call to `tool`, in order.
  pub fn calls_to(&self, tool: &str) -> Vec<Map<String, Value>> {
    self
      .calls()
      .into_iter()
      .filter(|(name, _)| name == tool)
      .map(|(_, args)| args)
      .collect()
  }
}

#[async_trait::async_trait]
impl ToolExecutor for FakeService {
  async fn execute_tool(&self, name: &str, args: Map<String, Value>) -> anyhow::Result<Value> {
    self.calls.lock().unwrap().push((name.to_string(), args));
    if let Some(message) = self.failure.lock().unwrap().clone() {
      anyhow::bail!(message);
    }
    match self.replies.lock().unwrap().get(name) {
      Some(reply) => Ok(reply.clone()),
      None => anyhow::bail!("unscripted tool: {name}"),
    }
  }
}

/// A plugin wired to a [`FakeService`] plus the sink capturing its log lines.
pub struct Harness {
  pub plugin: InMemoriaPlugin,
  pub service: Arc<FakeService>,
  pub sink: Arc<BufferSink>,
}

/// Initialize a plugin against a scripted service and a capturing logger.
pub fn active_plugin() -> Harness {
  let service = Arc::new(FakeService::default());
  let sink = Arc::new(BufferSink::default());
  let logger = Logger::with_sink(LogLevel::Debug, sink.clone());
  let executor: Arc<dyn ToolExecutor> = service.clone();

  let mut plugin = InMemoriaPlugin::new();
  plugin
    .initialize(PluginContext {
      version: "1.0.0".to_string(),
      workspace_path: "/workspace/demo".to_string(),
      storage_path: "/tmp/in-memoria".to_string(),
      logger,
      execute_tool: Some(executor),
    })
    .expect("initialize should succeed");

  Harness { plugin, service, sink }
}

/// Initialize a plugin without an executor; every hook should stay inert.
pub fn inert_plugin() -> (InMemoriaPlugin, Arc<BufferSink>) {
  let sink = Arc::new(BufferSink::default());
  let logger = Logger::with_sink(LogLevel::Debug, sink.clone());

  let mut plugin = InMemoriaPlugin::new();
  plugin
    .initialize(PluginContext {
      version: "1.0.0".to_string(),
      workspace_path: "/workspace/demo".to_string(),
      storage_path: "/tmp/in-memoria".to_string(),
      logger,
      execute_tool: None,
    })
    .expect("initialize should succeed without an executor");

  (plugin, sink)
}

pub fn blueprint_reply(needs_learning: bool) -> Value {
  json!({
    "project": { "name": "demo", "path": "/workspace/demo", "type": "rust", "files": 42 },
    "learningStatus": { "needsLearning": needs_learning, "lastLearned": "2026-01-04T12:00:00Z" }
  })
}

pub fn learn_reply() -> Value {
  json!({
    "success": true,
    "project": "/workspace/demo",
    "filesProcessed": 156,
    "patternsExtracted": 43
  })
}

pub fn recommendations_reply() -> Value {
  json!({
    "problem_description": "add cursor pagination",
    "patterns": [{
      "pattern": "cursor-pagination",
      "confidence": 0.9,
      "reasoning": "used by every list endpoint",
      "exampleFiles": ["src/api/list.rs"]
    }],
    "recommendedApproach": "reuse the cursor helpers"
  })
}

pub fn receipt_reply() -> Value {
  json!({
    "success": true,
    "insight_type": "best_practice",
    "stored": true,
    "confidence": 0.85,
    "source": "opencode",
    "timestamp": "2026-01-05T10:00:00Z"
  })
}

/// Base fields shared by every payload.
pub fn base(hook_name: &str) -> HookContext {
  HookContext {
    timestamp: "2026-01-05T10:00:00Z".to_string(),
    hook_name: hook_name.to_string(),
    metadata: None,
  }
}

pub fn project_context() -> ProjectContext {
  ProjectContext {
    base: base("project.open"),
    project_name: "demo".to_string(),
    project_path: "/workspace/demo".to_string(),
    config: None,
  }
}

pub fn ai_response_context(task_description: Option<&str>) -> AiResponseContext {
  AiResponseContext {
    base: base("ai.response.before"),
    current_file: Some("src/api/list.rs".to_string()),
    project: ProjectIdentity { name: "demo".to_string(), path: "/workspace/demo".to_string() },
    messages: vec![],
    task_description: task_description.map(str::to_string),
  }
}

pub fn decision(description: &str) -> TaskDecision {
  TaskDecision {
    description: description.to_string(),
    reasoning: "matches the existing layering".to_string(),
    files: vec!["src/api/list.rs".to_string()],
  }
}

pub fn task_complete_context(success: bool, decisions: Vec<TaskDecision>) -> TaskCompleteContext {
  TaskCompleteContext {
    base: base("task.complete"),
    task: TaskInfo {
      description: "add cursor pagination".to_string(),
      started_at: "2026-01-05T09:00:00Z".to_string(),
      completed_at: "2026-01-05T10:00:00Z".to_string(),
    },
    files_modified: vec!["src/api/list.rs".to_string()],
    pattern_used: None,
    decisions,
    success,
  }
}

pub fn ai_error_context() -> AiErrorContext {
  AiErrorContext {
    base: base("ai.error"),
    error: ErrorInfo {
      message: "borrow of moved value".to_string(),
      stack: Some("at src/api/list.rs:42".to_string()),
      code: None,
    },
    current_file: Some("src/api/list.rs".to_string()),
    project: ProjectIdentity { name: "demo".to_string(), path: "/workspace/demo".to_string() },
    messages: vec![],
  }
}

pub fn file_change_context(path: &str, kind: FileChangeKind) -> FileChangeContext {
  FileChangeContext {
    base: base("file.change"),
    path: path.to_string(),
    kind,
    content: None,
    previous_content: None,
    project_path: "/workspace/demo".to_string(),
    change_timestamp: "2026-01-05T10:00:00Z".to_string(),
  }
}

pub fn file_save_context(path: &str, size: u64) -> FileSaveContext {
  FileSaveContext {
    base: base("file.save"),
    path: path.to_string(),
    content: String::new(),
    is_new_file: false,
    project_path: "/workspace/demo".to_string(),
    size,
  }
}

pub fn summary_decision(description: &str) -> SummaryDecision {
  SummaryDecision {
    description: description.to_string(),
    reasoning: "kept the session consistent".to_string(),
  }
}

pub fn summary(decisions: Vec<SummaryDecision>) -> ConversationSummary {
  ConversationSummary {
    tasks_completed: 3,
    patterns_used: vec!["cursor-pagination".to_string()],
    decisions,
    files_modified: vec!["src/api/list.rs".to_string(), "src/api/cursor.rs".to_string()],
  }
}

pub fn conversation_context(summary: Option<ConversationSummary>) -> ConversationContext {
  ConversationContext {
    base: base("conversation.end"),
    session_id: "session-123".to_string(),
    started_at: "2026-01-05T09:00:00Z".to_string(),
    ended_at: Some("2026-01-05T10:00:00Z".to_string()),
    tasks_completed: Some(3),
    patterns_learned: None,
    files_modified: None,
    summary,
  }
}

pub fn tools_list_context(task_context: Option<&str>) -> ToolsListContext {
  ToolsListContext {
    base: base("tools.list"),
    last_message: None,
    current_file: Some("src/api/list.rs".to_string()),
    available_tools: vec!["read".to_string(), "edit".to_string()],
    task_context: task_context.map(str::to_string),
  }
}
