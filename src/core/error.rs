//! Error types for the publication pipeline
//!
//! Collaborator failures are carried whole rather than flattened to
//! strings, so the original cause chain stays visible to callers.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the publication pipeline
#[derive(Debug)]
pub enum PublishError {
  /// The target repository could not be resolved
  Resolve { source: anyhow::Error },

  /// A collaborator call failed (body rendering, release creation)
  Collaborator(anyhow::Error),

  /// An artifact file could not be opened for upload
  FileOpen {
    artifact: String,
    path: PathBuf,
    source: io::Error,
  },

  /// Uploading one artifact failed
  Upload {
    artifact: String,
    source: anyhow::Error,
  },

  /// A catalogue write targeted an artifact that does not exist
  UnknownArtifact { name: String },
}

impl fmt::Display for PublishError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PublishError::Resolve { source } => {
        write!(f, "could not resolve target repository: {}", source)
      }
      PublishError::Collaborator(source) => write!(f, "{}", source),
      PublishError::FileOpen { artifact, path, source } => {
        write!(f, "failed to open {} at {}: {}", artifact, path.display(), source)
      }
      PublishError::Upload { artifact, source } => {
        write!(f, "failed to upload {}: {}", artifact, source)
      }
      PublishError::UnknownArtifact { name } => {
        write!(f, "artifact '{}' not found in catalogue", name)
      }
    }
  }
}

impl std::error::Error for PublishError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PublishError::Resolve { source }
      | PublishError::Collaborator(source)
      | PublishError::Upload { source, .. } => Some(source.as_ref()),
      PublishError::FileOpen { source, .. } => Some(source),
      PublishError::UnknownArtifact { .. } => None,
    }
  }
}

impl From<anyhow::Error> for PublishError {
  fn from(err: anyhow::Error) -> Self {
    PublishError::Collaborator(err)
  }
}

/// Result type alias for the publication pipeline
pub type PublishResult<T> = Result<T, PublishError>;
