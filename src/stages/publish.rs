//! Release publication: create the remote release record and attach
//! every uploadable artifact to it

use crate::artifact::{Artifact, ArtifactType};
use crate::core::context::Context;
use crate::core::error::{PublishError, PublishResult};
use crate::core::group::TaskGroup;
use crate::core::template;
use crate::remote::{BodyRenderer, HostClient, ReleaseId, RepoResolver};
use crate::stages::{Outcome, SKIP_PUBLISH_SET, Stage};
use std::fs::File;
use tracing::{debug, info};

/// Extension-map key under which the stage records an artifact's remote
/// download location
pub const DOWNLOAD_PATH: &str = "release_download_path";

/// Skip reason returned when releasing is disabled in configuration
pub const SKIP_DISABLED: &str = "release is disabled";

/// Artifact types that get attached to a release
const UPLOADABLE: &[ArtifactType] = &[
  ArtifactType::Archive,
  ArtifactType::Binary,
  ArtifactType::Checksum,
  ArtifactType::Signature,
  ArtifactType::Package,
];

/// Stage that publishes a release record and uploads artifacts to it
pub struct PublishStage {
  client: Box<dyn HostClient>,
  resolver: Box<dyn RepoResolver>,
  renderer: Box<dyn BodyRenderer>,
}

impl PublishStage {
  /// Create the stage with its collaborators
  pub fn new(
    client: impl HostClient + 'static,
    resolver: impl RepoResolver + 'static,
    renderer: impl BodyRenderer + 'static,
  ) -> Self {
    Self {
      client: Box::new(client),
      resolver: Box::new(resolver),
      renderer: Box::new(renderer),
    }
  }
}

impl Stage for PublishStage {
  fn name(&self) -> &'static str {
    "publishing release"
  }

  fn defaults(&self, ctx: &mut Context) -> PublishResult<()> {
    if ctx.config.release.disable {
      return Ok(());
    }
    if ctx.config.release.name_template.is_empty() {
      ctx.config.release.name_template = template::DEFAULT_NAME_TEMPLATE.to_string();
    }
    if ctx.config.release.repo.is_set() {
      return Ok(());
    }
    match self.resolver.resolve() {
      Ok(repo) => {
        ctx.config.release.repo = repo;
        Ok(())
      }
      Err(source) if ctx.snapshot => {
        debug!(error = %source, "leaving target repository unresolved in snapshot mode");
        Ok(())
      }
      Err(source) => Err(PublishError::Resolve { source }),
    }
  }

  fn execute(&self, ctx: &Context) -> PublishResult<Outcome> {
    if ctx.config.release.disable {
      return Ok(Outcome::skipped(SKIP_DISABLED));
    }
    if ctx.skip_publish {
      return Ok(Outcome::skipped(SKIP_PUBLISH_SET));
    }

    let name = template::render(&ctx.config.release.name_template, ctx);
    info!(
      tag = %ctx.current_tag,
      repo = %ctx.config.release.repo,
      name = %name,
      "creating or updating release"
    );
    let body = self.renderer.render(ctx).map_err(PublishError::Collaborator)?;
    let release = self
      .client
      .create_release(ctx, &name, &body)
      .map_err(PublishError::Collaborator)?;

    let mut group = TaskGroup::new(ctx.parallelism);
    let client = self.client.as_ref();
    let release = &release;
    for artifact in ctx.artifacts.by_types(UPLOADABLE) {
      group.submit(move || upload(ctx, client, release, artifact));
    }
    group.wait()?;
    Ok(Outcome::Completed)
  }
}

fn upload(ctx: &Context, client: &dyn HostClient, release: &ReleaseId, artifact: Artifact) -> PublishResult<()> {
  let mut file = File::open(&artifact.path).map_err(|source| PublishError::FileOpen {
    artifact: artifact.name.clone(),
    path: artifact.path.clone(),
    source,
  })?;
  info!(file = %artifact.path.display(), name = %artifact.name, "uploading artifact");
  let location = client
    .upload(ctx, release, &artifact.name, &mut file)
    .map_err(|source| PublishError::Upload {
      artifact: artifact.name.clone(),
      source,
    })?;
  ctx.artifacts.set_extra(&artifact.name, DOWNLOAD_PATH, location)
}
