use super::parameters::CosmologyParameters;

use thiserror::Error;

/// Failure reported by the external distance engine, passed through to the
/// caller unmasked.
#[derive(Debug, Error)]
#[error("cosmology provider failed at z = {z}: {reason}")]
pub struct CosmologyProviderError {
    z: f64,
    reason: String,
}

impl CosmologyProviderError {
    pub fn new(z: f64, reason: impl Into<String>) -> CosmologyProviderError {
        CosmologyProviderError {
            z,
            reason: reason.into(),
        }
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// External collaborator supplying cosmological distances and volumes.
///
/// This library consumes the three quantities below and nothing else; it does
/// not solve the distance-redshift relation itself. Distances are in Mpc,
/// volumes in Mpc^3, the differential volume in Mpc^3 per steradian per unit
/// redshift. All three assume a flat universe (see
/// [`CosmologyParameters::omega_k`]). Correctness of the numbers is the
/// provider's contract; the population engine only checks finiteness where an
/// integral would otherwise silently diverge.
pub trait CosmologyProvider: Send + Sync {
    fn luminosity_distance(
        &self,
        z: f64,
        params: &CosmologyParameters,
    ) -> Result<f64, CosmologyProviderError>;

    fn comoving_volume(
        &self,
        z: f64,
        params: &CosmologyParameters,
    ) -> Result<f64, CosmologyProviderError>;

    fn diff_comoving_volume(
        &self,
        z: f64,
        params: &CosmologyParameters,
    ) -> Result<f64, CosmologyProviderError>;
}
