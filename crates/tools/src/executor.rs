use anyhow::Result;
use futures::future::BoxFuture;
use serde_json::{Map, Value};

/// Capability handle for reaching the In-Memoria tool service.
///
/// The host injects one of these at plugin initialization; every remote
/// operation flows through `execute_tool` with an already-qualified tool
/// name and a complete argument map. Transport and retry behavior belong
/// to the implementation, not to the plugin.
#[async_trait::async_trait]
pub trait ToolExecutor: Send + Sync {
  async fn execute_tool(&self, name: &str, args: Map<String, Value>) -> Result<Value>;
}

/// Plain async closures work as executors.
#[async_trait::async_trait]
impl<F> ToolExecutor for F
where
  F: Fn(String, Map<String, Value>) -> BoxFuture<'static, Result<Value>> + Send + Sync,
{
  async fn execute_tool(&self, name: &str, args: Map<String, Value>) -> Result<Value> {
    (self)(name.to_string(), args).await
  }
}
