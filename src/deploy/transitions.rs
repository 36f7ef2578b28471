// ABOUTME: State transition methods for the deployment pipeline.
// ABOUTME: Each method consumes self and returns the next state on success.

use std::marker::PhantomData;

use crate::artifact::Artifact;
use crate::azure::SlotApi;
use crate::health::{Clock, HealthReport, HealthVerifier, Probe, ProbeTarget};
use crate::types::SlotName;

use super::Deployment;
use super::error::DeployError;
use super::state::{ArtifactDeployed, Completed, Initialized, SlotVerified, Swapped};

impl<S> Deployment<S> {
    fn transition<T>(self) -> Deployment<T> {
        Deployment {
            target: self.target,
            artifact: self.artifact,
            health_path: self.health_path,
            expected_version: self.expected_version,
            _state: PhantomData,
        }
    }

    /// Resolve a slot's URL and run the health verifier against it.
    async fn verify_against<A, P, C>(
        &self,
        api: &A,
        verifier: &HealthVerifier<P, C>,
        slot: &SlotName,
    ) -> Result<HealthReport, DeployError>
    where
        A: SlotApi + ?Sized,
        P: Probe,
        C: Clock,
    {
        let base_url = api
            .resolve_slot_url(&self.target.resource_group, &self.target.app, slot)
            .await
            .map_err(DeployError::Resolution)?;

        let probe_target =
            ProbeTarget::new(base_url, &self.health_path, self.expected_version.clone());

        Ok(verifier.verify(&probe_target).await?)
    }
}

impl Deployment<Initialized> {
    /// Stamp APP_VERSION on the slot so version-matched probes can see it.
    /// A no-op when no expected version is configured.
    pub async fn stamp_version<A: SlotApi + ?Sized>(&self, api: &A) -> Result<(), DeployError> {
        if let Some(version) = &self.expected_version {
            api.set_app_setting(
                &self.target.resource_group,
                &self.target.app,
                &self.target.slot,
                "APP_VERSION",
                version,
            )
            .await
            .map_err(DeployError::VersionStamp)?;
        }

        Ok(())
    }

    /// Push the artifact to the staging slot.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::ArtifactDeploy` if the push fails.
    #[must_use = "deployment state must be used"]
    pub async fn deploy_artifact<A: SlotApi + ?Sized>(
        self,
        api: &A,
    ) -> Result<Deployment<ArtifactDeployed>, DeployError> {
        match &self.artifact {
            Artifact::Image(image) => {
                api.update_container(
                    &self.target.resource_group,
                    &self.target.app,
                    &self.target.slot,
                    image,
                )
                .await
            }
            Artifact::Package(path) => {
                api.deploy_zip(
                    &self.target.resource_group,
                    &self.target.app,
                    &self.target.slot,
                    path,
                )
                .await
            }
        }
        .map_err(DeployError::ArtifactDeploy)?;

        Ok(self.transition())
    }
}

impl Deployment<ArtifactDeployed> {
    /// Verify the staging slot is serving healthy traffic. Always runs,
    /// in both prod and non-prod modes.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Resolution` if the slot has no hostname, or the
    /// terminal health timeout if the budget is exhausted.
    #[must_use = "deployment state must be used"]
    pub async fn verify_slot<A, P, C>(
        self,
        api: &A,
        verifier: &HealthVerifier<P, C>,
    ) -> Result<(Deployment<SlotVerified>, HealthReport), DeployError>
    where
        A: SlotApi + ?Sized,
        P: Probe,
        C: Clock,
    {
        let report = self.verify_against(api, verifier, &self.target.slot).await?;
        Ok((self.transition(), report))
    }
}

impl Deployment<SlotVerified> {
    /// Promote the staging slot into the target slot.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Swap` if the swap fails.
    #[must_use = "deployment state must be used"]
    pub async fn swap<A: SlotApi + ?Sized>(
        self,
        api: &A,
        target_slot: &SlotName,
    ) -> Result<Deployment<Swapped>, DeployError> {
        api.swap_slots(
            &self.target.resource_group,
            &self.target.app,
            &self.target.slot,
            target_slot,
        )
        .await
        .map_err(DeployError::Swap)?;

        Ok(self.transition())
    }

    /// Non-prod pipelines end here: deployed and verified.
    pub fn finish(self) -> Deployment<Completed> {
        self.transition()
    }
}

impl Deployment<Swapped> {
    /// Re-verify against the swapped production target.
    ///
    /// A timeout here is a deployment failure requiring operator attention;
    /// the swap is not rolled back automatically.
    #[must_use = "deployment state must be used"]
    pub async fn verify_production<A, P, C>(
        self,
        api: &A,
        verifier: &HealthVerifier<P, C>,
        target_slot: &SlotName,
    ) -> Result<(Deployment<Completed>, HealthReport), DeployError>
    where
        A: SlotApi + ?Sized,
        P: Probe,
        C: Clock,
    {
        let report = self.verify_against(api, verifier, target_slot).await?;
        Ok((self.transition(), report))
    }
}
