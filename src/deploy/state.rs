// ABOUTME: Deployment state markers for the typestate pipeline.
// ABOUTME: Zero-sized types enforce valid transition order at compile time.

/// Initial state: target known, nothing deployed yet.
/// Available actions: `stamp_version()`, `deploy_artifact()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Initialized;

/// Artifact pushed to the staging slot.
/// Available actions: `verify_slot()`
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactDeployed;

/// Staging slot verified healthy.
/// Available actions: `swap()` (prod mode) or `finish()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotVerified;

/// Staging swapped into the production target.
/// Available actions: `verify_production()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Swapped;

/// Terminal state: pipeline complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct Completed;
