//! Typed result shapes for the In-Memoria tool service.
//!
//! Field names mirror the service's replies exactly, mixed casing and all.
//! Unknown fields are ignored; a richer service reply still decodes.

use serde::{Deserialize, Serialize};

/// Service summary of a project's identity and learning state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBlueprint {
  pub project: BlueprintProject,
  /// Absent when the service has nothing to report; read as "no learning
  /// needed".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub learning_status: Option<LearningStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintProject {
  pub name: String,
  pub path: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub files: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStatus {
  pub needs_learning: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_learned: Option<String>,
}

/// Outcome of an `auto_learn_if_needed` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnOutcome {
  pub success: bool,
  pub project: String,
  pub files_processed: u64,
  pub patterns_extracted: u64,
}

/// Suggested implementation route for a described problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingApproach {
  pub task: String,
  pub approach: String,
  pub likely_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
  pub query: String,
  pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
  pub file: String,
  pub line: u32,
  #[serde(rename = "match")]
  pub matched: String,
}

/// Pattern guidance for a problem description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRecommendations {
  pub problem_description: String,
  pub patterns: Vec<PatternRecommendation>,
  #[serde(rename = "recommendedApproach")]
  pub recommended_approach: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecommendation {
  pub pattern: String,
  pub confidence: f64,
  pub reasoning: String,
  pub example_files: Vec<String>,
}

/// Acknowledgement for a contributed insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReceipt {
  pub success: bool,
  pub insight_type: String,
  pub stored: bool,
  pub confidence: f64,
  pub source: String,
  pub timestamp: String,
}
