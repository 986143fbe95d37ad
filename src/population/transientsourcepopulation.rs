use std::sync::Arc;

use rand::Rng;

use crate::cosmology::parameters::CosmologyParameters;
use crate::cosmology::provider::CosmologyProvider;
use crate::evolution::evolutionlaw::EvolutionLaw;

use super::populationerror::PopulationError;
use super::sourcepopulation::SourcePopulation;
use super::weighting::{TransientCandle, TransientWeighting};

/// Population of burst-like standard candles.
///
/// A [`SourcePopulation`] built with the transient strategies: the redshift
/// distribution carries the `1/(1+z)` time dilation of the observed burst
/// rate, and [`standard_candle_sources`](Self::standard_candle_sources)
/// normalizes a fluence (GeV/cm^2 at z = 1, for a burst rate density per
/// year) rather than a steady flux.
pub struct TransientSourcePopulation {
    population: SourcePopulation,
}

impl TransientSourcePopulation {
    pub fn new(
        cosmology: Arc<dyn CosmologyProvider>,
        params: CosmologyParameters,
        evolution: Arc<dyn EvolutionLaw>,
    ) -> Result<TransientSourcePopulation, PopulationError> {
        let population = SourcePopulation::with_strategies(
            cosmology,
            params,
            evolution,
            Arc::new(TransientWeighting),
            Arc::new(TransientCandle),
        )?;
        Ok(TransientSourcePopulation { population })
    }

    pub fn params(&self) -> &CosmologyParameters {
        self.population.params()
    }

    pub fn dl1(&self) -> f64 {
        self.population.dl1()
    }

    pub fn redshift_distribution(&self, z: f64) -> Result<f64, PopulationError> {
        self.population.redshift_distribution(z)
    }

    pub fn redshift_integral(&self, zmax: f64) -> Result<f64, PopulationError> {
        self.population.redshift_integral(zmax)
    }

    pub fn build_redshift_sampling_table(&mut self, zmax: f64) -> Result<(), PopulationError> {
        self.population.build_redshift_sampling_table(zmax)
    }

    pub fn build_redshift_sampling_table_with(
        &mut self,
        zmax: f64,
        zmin: f64,
        bins: usize,
    ) -> Result<(), PopulationError> {
        self.population
            .build_redshift_sampling_table_with(zmax, zmin, bins)
    }

    pub fn sample_redshift<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, PopulationError> {
        self.population.sample_redshift(n, rng)
    }

    pub fn nsources(&self, density: f64, zmax: f64) -> Result<f64, PopulationError> {
        self.population.nsources(density, zmax)
    }

    pub fn flux_to_lumi(
        &self,
        fluxnorm: f64,
        index: f64,
        emin: f64,
        emax: f64,
        e0: f64,
    ) -> Result<f64, PopulationError> {
        self.population.flux_to_lumi(fluxnorm, index, emin, emax, e0)
    }

    pub fn lumi_to_flux(
        &self,
        luminosity: f64,
        index: f64,
        emin: f64,
        emax: f64,
        e0: f64,
    ) -> Result<f64, PopulationError> {
        self.population
            .lumi_to_flux(luminosity, index, emin, emax, e0)
    }

    /// Per-burst fluence at z = 1 reproducing the observed all-sky diffuse
    /// flux, for a burst rate density measured per year. Same fixed `[0, 10]`
    /// denominator bound as the steady population.
    pub fn standard_candle_sources(
        &self,
        fluxnorm: f64,
        density: f64,
        zmax: f64,
        index: f64,
    ) -> Result<f64, PopulationError> {
        self.population
            .standard_candle_sources(fluxnorm, density, zmax, index)
    }
}
