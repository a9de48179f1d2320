//! Artifact records and the catalogue shared across pipeline stages

use crate::core::error::{PublishError, PublishResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Type tag describing what an artifact is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
  /// Plain file with no special handling
  File,
  /// Compressed archive ready for distribution
  Archive,
  /// Standalone executable
  Binary,
  /// Checksum manifest covering other artifacts
  Checksum,
  /// Detached signature
  Signature,
  /// OS package (deb, rpm, apk)
  Package,
  /// Anything that fits no other tag
  Other,
}

/// One build artifact tracked by the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
  /// Logical name, unique within a catalogue
  pub name: String,
  /// Location on local storage
  pub path: PathBuf,
  /// Type tag, assigned by the stage that produced the artifact
  pub kind: ArtifactType,
  /// Open-ended key/value extensions
  #[serde(default)]
  pub extra: HashMap<String, Value>,
}

impl Artifact {
  /// Create an artifact record
  pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: ArtifactType) -> Self {
    Self {
      name: name.into(),
      path: path.into(),
      kind,
      extra: HashMap::new(),
    }
  }

  /// Attach an extension entry
  pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.extra.insert(key.into(), value.into());
    self
  }

  /// Read an extension entry as a string
  pub fn extra_str(&self, key: &str) -> Option<&str> {
    self.extra.get(key).and_then(Value::as_str)
  }
}

/// Catalogue of the artifacts produced by the pipeline so far.
///
/// Items sit behind a mutex so concurrent upload tasks can write
/// extension entries for different artifacts without corrupting each
/// other.
#[derive(Debug, Default)]
pub struct Catalogue {
  items: Mutex<Vec<Artifact>>,
}

impl Catalogue {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add an artifact.
  ///
  /// Logical names are expected to be unique within one catalogue; the
  /// name is the identity [`Catalogue::set_extra`] targets.
  pub fn add(&self, artifact: Artifact) {
    self.items.lock().expect("catalogue mutex poisoned").push(artifact);
  }

  /// Snapshot of every artifact
  pub fn list(&self) -> Vec<Artifact> {
    self.items.lock().expect("catalogue mutex poisoned").clone()
  }

  /// Snapshot of the artifacts matching a predicate
  pub fn filter<F>(&self, keep: F) -> Vec<Artifact>
  where
    F: Fn(&Artifact) -> bool,
  {
    self
      .items
      .lock()
      .expect("catalogue mutex poisoned")
      .iter()
      .filter(|artifact| keep(artifact))
      .cloned()
      .collect()
  }

  /// Snapshot of the artifacts whose type is one of `kinds`
  pub fn by_types(&self, kinds: &[ArtifactType]) -> Vec<Artifact> {
    self.filter(|artifact| kinds.contains(&artifact.kind))
  }

  /// Set an extension entry on the artifact with the given name,
  /// overwriting any previous value under the same key
  pub fn set_extra(&self, name: &str, key: impl Into<String>, value: impl Into<Value>) -> PublishResult<()> {
    let mut items = self.items.lock().expect("catalogue mutex poisoned");
    match items.iter_mut().find(|artifact| artifact.name == name) {
      Some(artifact) => {
        artifact.extra.insert(key.into(), value.into());
        Ok(())
      }
      None => Err(PublishError::UnknownArtifact { name: name.to_string() }),
    }
  }

  /// Number of artifacts in the catalogue
  pub fn len(&self) -> usize {
    self.items.lock().expect("catalogue mutex poisoned").len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
