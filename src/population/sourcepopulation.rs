use std::f64::consts::PI;
use std::sync::Arc;

use rand::Rng;

use crate::cosmology::parameters::CosmologyParameters;
use crate::cosmology::provider::{CosmologyProvider, CosmologyProviderError};
use crate::evolution::evolutionlaw::EvolutionLaw;
use crate::math::quadrature;
use crate::units::{GEV_PER_SEC_TO_ERG_PER_YEAR, MPC_TO_CM};

use super::populationerror::PopulationError;
use super::samplingtable::RedshiftSamplingTable;
use super::weighting::{CandleNormalization, RedshiftWeighting, SteadyCandle, SteadyWeighting};

/// Anchor redshift at which a number density is considered "local".
pub const ZLOCAL: f64 = 0.01;

/// Pivot energy of the power-law spectrum, in GeV.
pub const DEFAULT_E0: f64 = 1e5;

// The standard-candle denominator integral always runs to z = 10 regardless
// of the population horizon, so the normalization basis stays fixed.
const CANDLE_ZMAX: f64 = 10.0;

const INTEGRATION_RTOL: f64 = 1e-10;

const DEFAULT_TABLE_ZMIN: f64 = 0.0005;
const DEFAULT_TABLE_BINS: usize = 10000;

/// Population of steady standard-candle sources under a chosen cosmology and
/// density-evolution law.
///
/// The luminosity distance at z = 1 recurs in every normalization integral
/// and is cached at construction. The redshift sampling table is built on
/// demand by [`build_redshift_sampling_table`](Self::build_redshift_sampling_table);
/// rebuilding silently replaces the previous table.
pub struct SourcePopulation {
    evolution: Arc<dyn EvolutionLaw>,
    cosmology: Arc<dyn CosmologyProvider>,
    params: CosmologyParameters,
    weighting: Arc<dyn RedshiftWeighting>,
    candle: Arc<dyn CandleNormalization>,
    dl1: f64,
    table: Option<RedshiftSamplingTable>,
}

impl SourcePopulation {
    pub fn new(
        cosmology: Arc<dyn CosmologyProvider>,
        params: CosmologyParameters,
        evolution: Arc<dyn EvolutionLaw>,
    ) -> Result<SourcePopulation, PopulationError> {
        SourcePopulation::with_strategies(
            cosmology,
            params,
            evolution,
            Arc::new(SteadyWeighting),
            Arc::new(SteadyCandle),
        )
    }

    pub(crate) fn with_strategies(
        cosmology: Arc<dyn CosmologyProvider>,
        params: CosmologyParameters,
        evolution: Arc<dyn EvolutionLaw>,
        weighting: Arc<dyn RedshiftWeighting>,
        candle: Arc<dyn CandleNormalization>,
    ) -> Result<SourcePopulation, PopulationError> {
        let dl1 = cosmology.luminosity_distance(1.0, &params)?;
        if !dl1.is_finite() || dl1 <= 0.0 {
            return Err(CosmologyProviderError::new(
                1.0,
                format!("luminosity distance {} is not positive and finite", dl1),
            )
            .into());
        }
        Ok(SourcePopulation {
            evolution,
            cosmology,
            params,
            weighting,
            candle,
            dl1,
            table: None,
        })
    }

    pub fn params(&self) -> &CosmologyParameters {
        &self.params
    }

    /// Cached luminosity distance at z = 1, in Mpc.
    pub fn dl1(&self) -> f64 {
        self.dl1
    }

    pub fn luminosity_distance(&self, z: f64) -> Result<f64, PopulationError> {
        Ok(self.cosmology.luminosity_distance(z, &self.params)?)
    }

    /// Differential source rate `dN/dz`, up to the population normalization:
    /// `4pi * evolution(z) * dV_c/dz/dOmega * weighting(z)`.
    ///
    /// The `4pi` cancels in every normalized use but is kept so the value
    /// reads as an all-sky rate; callers using this raw must not drop it.
    pub fn redshift_distribution(&self, z: f64) -> Result<f64, PopulationError> {
        let diff_volume = self.cosmology.diff_comoving_volume(z, &self.params)?;
        Ok(4.0 * PI * self.evolution.evaluate(z) * diff_volume * self.weighting.weight(z))
    }

    /// Integral of the redshift distribution over `[0, zmax]`.
    pub fn redshift_integral(&self, zmax: f64) -> Result<f64, PopulationError> {
        self.integrate(&|z| self.redshift_distribution(z), 0.0, zmax)
    }

    /// Builds the inverse-transform sampling table over
    /// `[0.0005, zmax)` with 10000 bins.
    pub fn build_redshift_sampling_table(&mut self, zmax: f64) -> Result<(), PopulationError> {
        self.build_redshift_sampling_table_with(zmax, DEFAULT_TABLE_ZMIN, DEFAULT_TABLE_BINS)
    }

    /// Builds the sampling table over `[zmin, zmax)` with edge spacing
    /// `zmax/bins`. `zmin` must stay above zero to keep clear of the distance
    /// singularity at z = 0, and below `zmax` so the table is non-empty.
    /// Replaces any previously built table.
    pub fn build_redshift_sampling_table_with(
        &mut self,
        zmax: f64,
        zmin: f64,
        bins: usize,
    ) -> Result<(), PopulationError> {
        if !(zmin > 0.0) || !(zmax > zmin) || bins == 0 {
            return Err(PopulationError::InvalidSamplingTable { zmin, zmax, bins });
        }
        let step = zmax / bins as f64;
        let mut edges = Vec::with_capacity(bins);
        for i in 0.. {
            let z = zmin + i as f64 * step;
            if z >= zmax {
                break;
            }
            edges.push(z);
        }
        let mut pdf = Vec::with_capacity(edges.len());
        for &z in edges.iter() {
            pdf.push(self.redshift_distribution(z)?);
        }
        self.table = Some(RedshiftSamplingTable::new(edges, &pdf));
        Ok(())
    }

    /// Draws `n` redshifts by inverse-transform sampling against the built
    /// table. Fails with [`PopulationError::SamplingTableNotBuilt`] if the
    /// table has not been set up.
    pub fn sample_redshift<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, PopulationError> {
        let table = self
            .table
            .as_ref()
            .ok_or(PopulationError::SamplingTableNotBuilt)?;
        Ok((0..n).map(|_| table.lookup(rng.random::<f64>())).collect())
    }

    pub(crate) fn sampling_table(&self) -> Option<&RedshiftSamplingTable> {
        self.table.as_ref()
    }

    /// Total number of sources within `zmax` given a local number density:
    /// the local density anchors on `V_c(z = 0.01)` and scales by the ratio
    /// of the horizon integral to the local integral, which stays numerically
    /// stable where a direct density-to-rate conversion at z ~ 0 would not.
    pub fn nsources(&self, density: f64, zmax: f64) -> Result<f64, PopulationError> {
        let local_volume = self.cosmology.comoving_volume(ZLOCAL, &self.params)?;
        let local_integral = self.redshift_integral(ZLOCAL)?;
        let horizon_integral = self.redshift_integral(zmax)?;
        Ok(density * local_volume / (local_integral / horizon_integral))
    }

    /// Converts a flux normalization (already scaled by `e0^2`) with spectral
    /// index `|index|` into a rest-frame luminosity at z = 1, in erg/yr.
    pub fn flux_to_lumi(
        &self,
        fluxnorm: f64,
        index: f64,
        emin: f64,
        emax: f64,
        e0: f64,
    ) -> Result<f64, PopulationError> {
        let flux_integral = self.spectral_energy_integral(index, emin, emax, e0)?;
        Ok(fluxnorm / e0.powi(2)
            * flux_integral
            * GEV_PER_SEC_TO_ERG_PER_YEAR
            * 4.0
            * PI
            * (self.dl1 * MPC_TO_CM).powi(2))
    }

    /// Exact algebraic inverse of [`flux_to_lumi`](Self::flux_to_lumi).
    pub fn lumi_to_flux(
        &self,
        luminosity: f64,
        index: f64,
        emin: f64,
        emax: f64,
        e0: f64,
    ) -> Result<f64, PopulationError> {
        let flux_integral = self.spectral_energy_integral(index, emin, emax, e0)?;
        Ok(luminosity / 4.0 / PI / (self.dl1 * MPC_TO_CM).powi(2)
            / GEV_PER_SEC_TO_ERG_PER_YEAR
            / flux_integral
            * e0.powi(2))
    }

    /// Per-source flux normalization such that `nsources` standard candles
    /// distributed per the redshift distribution reproduce the observed
    /// all-sky diffuse flux `4pi * fluxnorm`.
    ///
    /// The denominator integral runs over `z in [0, 10]` regardless of
    /// `zmax`, keeping the normalization basis fixed even for populations
    /// with a smaller horizon.
    pub fn standard_candle_sources(
        &self,
        fluxnorm: f64,
        density: f64,
        zmax: f64,
        index: f64,
    ) -> Result<f64, PopulationError> {
        let norm = self.redshift_integral(zmax)?;
        let ntotal = self.nsources(density, zmax)?;
        let all_sky = self.candle.all_sky_norm(fluxnorm);
        let exponent = self.candle.spectral_exponent(index);
        let denominator = self.integrate(
            &|z| {
                let dl = self.luminosity_distance(z)?;
                Ok((1.0 + z).powf(exponent) / dl.powi(2) * self.redshift_distribution(z)? / norm)
            },
            0.0,
            CANDLE_ZMAX,
        )?;
        Ok(all_sky / ntotal / self.dl1.powi(2) / denominator)
    }

    fn spectral_energy_integral(
        &self,
        index: f64,
        emin: f64,
        emax: f64,
        e0: f64,
    ) -> Result<f64, PopulationError> {
        self.integrate(&|e| Ok(e * (e / e0).powf(-index.abs())), emin, emax)
    }

    fn integrate<F>(&self, f: &F, lower: f64, upper: f64) -> Result<f64, PopulationError>
    where
        F: Fn(f64) -> Result<f64, PopulationError>,
    {
        quadrature::integrate(f, lower, upper, INTEGRATION_RTOL)
            .map_err(|error| PopulationError::from_quadrature(error, lower, upper))
    }
}
