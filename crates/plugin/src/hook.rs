/// Lifecycle hooks the plugin registers with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
  ProjectOpen,
  ToolExecuteBefore,
  ToolExecuteAfter,
  AiResponseBefore,
  TaskComplete,
  AiError,
  FileChange,
  ConversationStart,
  ConversationEnd,
  FileSave,
  ToolsList,
}

impl HookKind {
  /// Every hook, in the order the host advertises them.
  pub const ALL: [HookKind; 11] = [
    Self::ProjectOpen,
    Self::ToolExecuteBefore,
    Self::ToolExecuteAfter,
    Self::AiResponseBefore,
    Self::TaskComplete,
    Self::AiError,
    Self::FileChange,
    Self::ConversationStart,
    Self::ConversationEnd,
    Self::FileSave,
    Self::ToolsList,
  ];

  /// Dotted event name used in the host registration table.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::ProjectOpen => "project.open",
      Self::ToolExecuteBefore => "tool.execute.before",
      Self::ToolExecuteAfter => "tool.execute.after",
      Self::AiResponseBefore => "ai.response.before",
      Self::TaskComplete => "task.complete",
      Self::AiError => "ai.error",
      Self::FileChange => "file.change",
      Self::ConversationStart => "conversation.start",
      Self::ConversationEnd => "conversation.end",
      Self::FileSave => "file.save",
      Self::ToolsList => "tools.list",
    }
  }
}

impl std::fmt::Display for HookKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
