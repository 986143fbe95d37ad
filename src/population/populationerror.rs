use crate::cosmology::provider::CosmologyProviderError;
use crate::math::quadrature::QuadratureError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("redshift integration over [{lower}, {upper}] failed: {reason}")]
    IntegrationFailure {
        lower: f64,
        upper: f64,
        reason: String,
    },

    #[error("sample_redshift called before build_redshift_sampling_table")]
    SamplingTableNotBuilt,

    #[error(
        "invalid sampling table bounds: zmin = {zmin}, zmax = {zmax}, bins = {bins} \
         (need 0 < zmin < zmax and bins > 0)"
    )]
    InvalidSamplingTable { zmin: f64, zmax: f64, bins: usize },

    #[error(transparent)]
    CosmologyProvider(#[from] CosmologyProviderError),
}

impl PopulationError {
    /// Collapses a quadrature failure into the population taxonomy: provider
    /// errors pass through unmasked, numerical failures become
    /// `IntegrationFailure` with the offending bounds.
    pub(crate) fn from_quadrature(
        error: QuadratureError<PopulationError>,
        lower: f64,
        upper: f64,
    ) -> PopulationError {
        match error {
            QuadratureError::Integrand(inner) => inner,
            other => PopulationError::IntegrationFailure {
                lower,
                upper,
                reason: other.to_string(),
            },
        }
    }
}
