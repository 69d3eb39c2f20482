//! Payload types the host hands to each lifecycle hook.
//!
//! Wire field names are camelCase. Every hook payload flattens the shared
//! [`HookContext`] fields and accepts stamped metadata.

use inmemoria_core::Logger;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tools::ToolExecutor;

/// Fields common to every hook payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookContext {
  pub timestamp: String,
  pub hook_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metadata: Option<Map<String, Value>>,
}

/// Everything the host injects at plugin startup.
///
/// `execute_tool` is the single entry point to the intelligence service;
/// when the host omits it the plugin stays loaded but inert.
#[derive(Clone)]
pub struct PluginContext {
  pub version: String,
  pub workspace_path: String,
  pub storage_path: String,
  pub logger: Logger,
  pub execute_tool: Option<Arc<dyn ToolExecutor>>,
}

/// Payload for `project.open`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
  #[serde(flatten)]
  pub base: HookContext,
  pub project_name: String,
  pub project_path: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub config: Option<Map<String, Value>>,
}

/// Payload for `tool.execute.before` and `tool.execute.after`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolContext {
  #[serde(flatten)]
  pub base: HookContext,
  pub tool_name: String,
  #[serde(default)]
  pub args: Map<String, Value>,
  /// Present only in the after hook.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub result: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

/// Project identity as the host reports it inside AI hooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdentity {
  pub name: String,
  pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
  User,
  Assistant,
  System,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
  pub role: MessageRole,
  pub content: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub timestamp: Option<String>,
}

/// Payload for `ai.response.before`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponseContext {
  #[serde(flatten)]
  pub base: HookContext,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_file: Option<String>,
  pub project: ProjectIdentity,
  #[serde(default)]
  pub messages: Vec<Message>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub task_description: Option<String>,
}

/// The task a `task.complete` payload reports on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
  pub description: String,
  pub started_at: String,
  pub completed_at: String,
}

/// One architectural decision recorded during a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDecision {
  pub description: String,
  pub reasoning: String,
  #[serde(default)]
  pub files: Vec<String>,
}

/// Payload for `task.complete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompleteContext {
  #[serde(flatten)]
  pub base: HookContext,
  pub task: TaskInfo,
  #[serde(default)]
  pub files_modified: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pattern_used: Option<String>,
  #[serde(default)]
  pub decisions: Vec<TaskDecision>,
  pub success: bool,
}

/// Error details carried by `ai.error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub stack: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,
}

/// Payload for `ai.error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiErrorContext {
  #[serde(flatten)]
  pub base: HookContext,
  pub error: ErrorInfo,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_file: Option<String>,
  pub project: ProjectIdentity,
  #[serde(default)]
  pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileChangeKind {
  Created,
  Modified,
  Deleted,
}

/// Payload for `file.change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChangeContext {
  #[serde(flatten)]
  pub base: HookContext,
  pub path: String,
  #[serde(rename = "type")]
  pub kind: FileChangeKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub previous_content: Option<String>,
  pub project_path: String,
  pub change_timestamp: String,
}

/// Payload for `file.save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSaveContext {
  #[serde(flatten)]
  pub base: HookContext,
  pub path: String,
  pub content: String,
  pub is_new_file: bool,
  pub project_path: String,
  /// File size in bytes.
  pub size: u64,
}

/// One decision kept in a session summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryDecision {
  pub description: String,
  pub reasoning: String,
}

/// Roll-up the host attaches to `conversation.end`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
  pub tasks_completed: u32,
  #[serde(default)]
  pub patterns_used: Vec<String>,
  #[serde(default)]
  pub decisions: Vec<SummaryDecision>,
  #[serde(default)]
  pub files_modified: Vec<String>,
}

/// Payload for `conversation.start` and `conversation.end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
  #[serde(flatten)]
  pub base: HookContext,
  pub session_id: String,
  pub started_at: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ended_at: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tasks_completed: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub patterns_learned: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub files_modified: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary: Option<ConversationSummary>,
}

/// Payload for `tools.list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsListContext {
  #[serde(flatten)]
  pub base: HookContext,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_file: Option<String>,
  #[serde(default)]
  pub available_tools: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub task_context: Option<String>,
}
