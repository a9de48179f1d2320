//! Publish release records to a remote hosting service and attach build
//! artifacts to them.
//!
//! The crate is one stage of a larger release pipeline. The heart of it is
//! [`TaskGroup`], a bounded-concurrency primitive that runs independent
//! fallible upload tasks with a configurable ceiling and reports one
//! combined outcome. [`PublishStage`] builds on it: create (or update) the
//! release, fan out one upload per eligible artifact, and record each
//! returned download location back onto the artifact.
//!
//! Remote-repository detection, release-note rendering, and the hosting
//! wire protocol stay behind the narrow traits in [`remote`]; callers
//! supply implementations for their hosting service of choice.

pub mod artifact;
pub mod core;
pub mod remote;
pub mod stages;

pub use crate::artifact::{Artifact, ArtifactType, Catalogue};
pub use crate::core::config::{Config, ReleaseConfig, RepoRef};
pub use crate::core::context::Context;
pub use crate::core::error::{PublishError, PublishResult};
pub use crate::core::group::TaskGroup;
pub use crate::remote::{BodyRenderer, HostClient, ReleaseId, RepoResolver};
pub use crate::stages::publish::PublishStage;
pub use crate::stages::{Outcome, Stage};
