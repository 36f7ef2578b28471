// ABOUTME: Generic deployment struct parameterized by state marker.
// ABOUTME: Carries the target, artifact, and health contract through the pipeline.

use crate::artifact::Artifact;
use crate::types::SlotName;
use std::marker::PhantomData;

use super::state::Initialized;

/// Target of one pipeline run: which app and which staging slot.
#[derive(Debug, Clone)]
pub struct DeployTarget {
    pub resource_group: String,
    pub app: String,
    pub slot: SlotName,
}

/// A deployment in progress, parameterized by its current state.
///
/// Transitions consume `self` and return the next state, so an
/// unverified deployment can never be swapped.
#[derive(Debug)]
pub struct Deployment<S> {
    pub(crate) target: DeployTarget,
    pub(crate) artifact: Artifact,
    pub(crate) health_path: String,
    pub(crate) expected_version: Option<String>,
    pub(crate) _state: PhantomData<S>,
}

impl Deployment<Initialized> {
    pub fn new(
        target: DeployTarget,
        artifact: Artifact,
        health_path: impl Into<String>,
        expected_version: Option<String>,
    ) -> Self {
        Deployment {
            target,
            artifact,
            health_path: health_path.into(),
            expected_version,
            _state: PhantomData,
        }
    }
}

impl<S> Deployment<S> {
    pub fn target(&self) -> &DeployTarget {
        &self.target
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn expected_version(&self) -> Option<&str> {
        self.expected_version.as_deref()
    }
}
