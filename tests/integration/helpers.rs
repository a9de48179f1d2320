//! Test helpers for integration tests

use anyhow::Result;
use slipway::artifact::{Artifact, ArtifactType};
use slipway::core::config::{Config, RepoRef};
use slipway::core::context::Context;
use slipway::remote::{BodyRenderer, HostClient, ReleaseId, RepoResolver};
use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// A workspace holding artifact payloads on disk for one test run
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write an artifact payload to disk and return its catalogue record
  pub fn artifact(&self, name: &str, kind: ArtifactType) -> Result<Artifact> {
    let path = self.path.join(name);
    std::fs::write(&path, format!("payload of {}", name))?;
    Ok(Artifact::new(name, path, kind))
  }
}

/// Build a context with the target repo configured and a fixed tag
pub fn release_context(tag: &str, parallelism: usize) -> Context {
  let mut config = Config::default();
  config.project_name = "widget".to_string();
  config.release.repo = RepoRef::new("acme", "widget");
  Context::new(config).with_tag(tag).with_parallelism(parallelism)
}

/// Hosting-service fake that records calls, tracks peak upload
/// concurrency, and can be told to fail named uploads
#[derive(Default)]
pub struct RecordingHost {
  pub created: Mutex<Vec<(String, String)>>,
  pub uploaded: Mutex<Vec<String>>,
  fail_uploads: Mutex<Vec<String>>,
  upload_delay: Option<Duration>,
  active: AtomicUsize,
  pub peak: AtomicUsize,
}

impl RecordingHost {
  pub fn new() -> SharedHost {
    SharedHost(Arc::new(Self::default()))
  }

  /// Host whose uploads take a while, so concurrency is observable
  pub fn with_delay(delay: Duration) -> SharedHost {
    SharedHost(Arc::new(Self {
      upload_delay: Some(delay),
      ..Self::default()
    }))
  }

  /// Make the upload of the named artifact fail
  pub fn fail_upload(&self, name: &str) {
    self.fail_uploads.lock().unwrap().push(name.to_string());
  }
}

/// Shared, cloneable handle to a [`RecordingHost`].
///
/// Exists because the hosting-service trait is foreign to this test crate
/// and the orphan rule forbids implementing it directly on `Arc<_>`. The
/// handle derefs to the inner host so tests can read its recorded calls.
#[derive(Clone)]
pub struct SharedHost(Arc<RecordingHost>);

impl std::ops::Deref for SharedHost {
  type Target = RecordingHost;

  fn deref(&self) -> &RecordingHost {
    &self.0
  }
}

impl HostClient for SharedHost {
  fn create_release(&self, _ctx: &Context, name: &str, body: &str) -> Result<ReleaseId> {
    self.created.lock().unwrap().push((name.to_string(), body.to_string()));
    Ok(ReleaseId::new(format!("release-{}", name)))
  }

  fn upload(&self, _ctx: &Context, release: &ReleaseId, name: &str, _file: &mut File) -> Result<String> {
    let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
    self.peak.fetch_max(now, Ordering::SeqCst);
    if let Some(delay) = self.upload_delay {
      thread::sleep(delay);
    }
    self.active.fetch_sub(1, Ordering::SeqCst);

    if self.fail_uploads.lock().unwrap().iter().any(|failing| failing == name) {
      anyhow::bail!("connection reset while uploading {}", name);
    }
    self.uploaded.lock().unwrap().push(name.to_string());
    Ok(format!("https://releases.example.com/{}/{}", release, name))
  }
}

/// Resolver that always answers with the same repository
pub struct FixedResolver(pub RepoRef);

impl RepoResolver for FixedResolver {
  fn resolve(&self) -> Result<RepoRef> {
    Ok(self.0.clone())
  }
}

/// Renderer producing a deterministic body from the context
pub struct TagBody;

impl BodyRenderer for TagBody {
  fn render(&self, ctx: &Context) -> Result<String> {
    Ok(format!("Release {} of {}", ctx.current_tag, ctx.config.project_name))
  }
}
