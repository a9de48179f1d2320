//! Contracts for the external collaborators of the publication stage
//!
//! Authentication, retries, and the wire protocol live behind these
//! traits. The stage treats them as opaque and propagates their errors
//! untouched.

use crate::core::config::RepoRef;
use crate::core::context::Context;
use anyhow::Result;
use std::fmt;
use std::fs::File;

/// Opaque identifier of a release record on the hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseId(String);

impl ReleaseId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ReleaseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Client for the release-hosting service
pub trait HostClient: Send + Sync {
  /// Create a release record, or update it when one already exists for
  /// the target; returns the identifier of the record
  fn create_release(&self, ctx: &Context, name: &str, body: &str) -> Result<ReleaseId>;

  /// Stream one artifact file to the release under the given logical
  /// name; returns the remote download location
  fn upload(&self, ctx: &Context, release: &ReleaseId, name: &str, file: &mut File) -> Result<String>;
}

/// Resolves the target repository when none is configured
pub trait RepoResolver: Send + Sync {
  fn resolve(&self) -> Result<RepoRef>;
}

/// Renders the human-readable release description
pub trait BodyRenderer: Send + Sync {
  fn render(&self, ctx: &Context) -> Result<String>;
}
