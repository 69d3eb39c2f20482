//! OpenCode plugin that bridges host lifecycle hooks to the In-Memoria
//! persistent intelligence service.

mod context;
mod error;
mod hook;
mod plugin;

pub use context::{
  AiErrorContext, AiResponseContext, ConversationContext, ConversationSummary, ErrorInfo,
  FileChangeContext, FileChangeKind, FileSaveContext, HookContext, Message, MessageRole,
  PluginContext, ProjectContext, ProjectIdentity, SummaryDecision, TaskCompleteContext,
  TaskDecision, TaskInfo, ToolContext, ToolsListContext,
};
pub use error::PluginError;
pub use hook::HookKind;
pub use plugin::{InMemoriaPlugin, PLUGIN_NAME, PluginMetadata};
