mod error;
mod executor;
mod request;
mod response;
mod router;

pub use error::ToolError;
pub use executor::ToolExecutor;
pub use request::{InsightType, SearchMode};
pub use response::{
  BlueprintProject, CodingApproach, InsightReceipt, LearnOutcome, LearningStatus, PatternRecommendation,
  PatternRecommendations, ProjectBlueprint, SearchHit, SearchResponse,
};
pub use router::{DEFAULT_SEARCH_LIMIT, DEFAULT_SOURCE_AGENT, ToolRouter};
