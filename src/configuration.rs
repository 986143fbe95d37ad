use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::cosmology::parameters::CosmologyParameters;
use crate::cosmology::provider::CosmologyProvider;
use crate::evolution::evolutionlaw::{UnsupportedEvolutionLaw, get_evolution};
use crate::population::populationerror::PopulationError;
use crate::population::sourcepopulation::SourcePopulation;
use crate::population::transientsourcepopulation::TransientSourcePopulation;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error(transparent)]
    UnsupportedEvolutionLaw(#[from] UnsupportedEvolutionLaw),

    #[error(transparent)]
    Population(#[from] PopulationError),
}

fn default_transient() -> bool {
    false
}

/// Population configuration as read from a JSON file:
///
/// ```json
/// {
///     "cosmology": {"omega_m": 0.308, "omega_lambda": 0.692, "h": 0.678},
///     "evolution": "HB2006SFR",
///     "transient": false
/// }
/// ```
#[derive(Deserialize)]
pub struct Configuration {
    cosmology: CosmologyParameters,
    evolution: String,
    #[serde(default = "default_transient")]
    transient: bool,
}

/// Either population kind, as selected by the `transient` flag.
pub enum ConfiguredPopulation {
    Steady(SourcePopulation),
    Transient(TransientSourcePopulation),
}

impl Configuration {
    pub fn new(
        cosmology: CosmologyParameters,
        evolution: String,
        transient: bool,
    ) -> Configuration {
        Configuration {
            cosmology,
            evolution,
            transient,
        }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn cosmology(&self) -> &CosmologyParameters {
        &self.cosmology
    }

    pub fn evolution(&self) -> &str {
        &self.evolution
    }

    pub fn transient(&self) -> bool {
        self.transient
    }

    /// Builds the configured population against the supplied distance engine.
    /// Fails fast on an unknown evolution-law name.
    pub fn build(
        &self,
        cosmology: Arc<dyn CosmologyProvider>,
    ) -> Result<ConfiguredPopulation, ConfigurationError> {
        let evolution = get_evolution(&self.evolution)?;
        if self.transient {
            let population = TransientSourcePopulation::new(cosmology, self.cosmology, evolution)?;
            Ok(ConfiguredPopulation::Transient(population))
        } else {
            let population = SourcePopulation::new(cosmology, self.cosmology, evolution)?;
            Ok(ConfiguredPopulation::Steady(population))
        }
    }
}
