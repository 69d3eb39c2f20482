use serde::{Deserialize, Serialize};

/// Search strategy understood by the `search_codebase` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
  #[default]
  Semantic,
  Text,
  Pattern,
}

/// Insight category accepted by the `contribute_insights` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
  BugPattern,
  Optimization,
  RefactorSuggestion,
  BestPractice,
}
