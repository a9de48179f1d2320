//! Execution context shared by pipeline stages

use crate::artifact::Catalogue;
use crate::core::config::Config;
use std::thread;

/// Everything a stage needs for one pipeline execution.
///
/// The context is built by the caller before any stage runs. Stages read
/// it and, apart from `defaults` filling unset configuration, only mutate
/// artifact extension entries through the catalogue.
#[derive(Debug)]
pub struct Context {
  /// Resolved configuration
  pub config: Config,
  /// Artifact catalogue produced by earlier stages
  pub artifacts: Catalogue,
  /// Current source-control tag
  pub current_tag: String,
  /// Maximum number of concurrent upload tasks
  pub parallelism: usize,
  /// Snapshot mode: tolerate failures of lookups that need network or auth
  pub snapshot: bool,
  /// Suppress every network side effect
  pub skip_publish: bool,
}

impl Context {
  /// Create a context with defaults derived from the environment
  pub fn new(config: Config) -> Self {
    Self {
      config,
      artifacts: Catalogue::new(),
      current_tag: String::new(),
      parallelism: thread::available_parallelism().map(usize::from).unwrap_or(1),
      snapshot: false,
      skip_publish: false,
    }
  }

  /// Set the current source-control tag
  pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
    self.current_tag = tag.into();
    self
  }

  /// Override the upload parallelism limit
  pub fn with_parallelism(mut self, limit: usize) -> Self {
    self.parallelism = limit;
    self
  }
}
