//! Uniform lifecycle for pipeline stages
//!
//! Every stage exposes the same three operations so an orchestrator can
//! drive a heterogeneous list of them generically: `name` for logging,
//! `defaults` once to fill unset configuration, then `execute`.

pub mod publish;

use crate::core::context::Context;
use crate::core::error::PublishResult;

/// Skip reason used when skip-publish suppresses network side effects
pub const SKIP_PUBLISH_SET: &str = "publishing is disabled";

/// Result of one stage execution.
///
/// A skip is deliberate and informational; callers must not log or
/// propagate it as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The stage ran and all of its work completed
  Completed,
  /// The stage chose not to run
  Skipped(String),
}

impl Outcome {
  /// Build a skip outcome
  pub fn skipped(reason: impl Into<String>) -> Self {
    Outcome::Skipped(reason.into())
  }

  /// Whether this outcome is a skip
  pub fn is_skipped(&self) -> bool {
    matches!(self, Outcome::Skipped(_))
  }
}

/// One composable step of the release pipeline
pub trait Stage: Send + Sync {
  /// Short human-readable label for logging; no side effects
  fn name(&self) -> &'static str;

  /// Fill in unset configuration. Idempotent, and cheap even when the
  /// stage is disabled.
  fn defaults(&self, ctx: &mut Context) -> PublishResult<()>;

  /// Run the stage
  fn execute(&self, ctx: &Context) -> PublishResult<Outcome>;
}
