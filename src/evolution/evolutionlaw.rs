use std::sync::Arc;

use thiserror::Error;

use super::candelsclash2015::CandelsClash2015SNRate;
use super::hopkinsbeacom2006::HopkinsBeacom2006StarFormationRate;
use super::noevolution::NoEvolution;
use super::yukseletal2008::YukselEtAl2008StarFormationRate;

/// Names accepted by [`get_evolution`].
pub const SUPPORTED_EVOLUTIONS: [&str; 4] =
    ["NoEvolution", "HB2006SFR", "YMKBH2008SFR", "CC2015SNR"];

#[derive(Debug, Error)]
#[error("source evolution '{name}' is not supported (supported: {})", SUPPORTED_EVOLUTIONS.join(", "))]
pub struct UnsupportedEvolutionLaw {
    name: String,
}

impl UnsupportedEvolutionLaw {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Source-density evolution with redshift.
///
/// Laws are parametrized in the coordinate `x = log10(1+z)`; `evaluate` is
/// the public entry point taking the redshift itself. Implementations are
/// stateless and freely shared across populations.
pub trait EvolutionLaw: Send + Sync {
    fn parametrization(&self, x: f64) -> f64;

    fn evaluate(&self, z: f64) -> f64 {
        self.parametrization((1.0 + z).log10())
    }
}

/// Looks up an evolution law by its configuration name.
pub fn get_evolution(name: &str) -> Result<Arc<dyn EvolutionLaw>, UnsupportedEvolutionLaw> {
    match name {
        "NoEvolution" => Ok(Arc::new(NoEvolution)),
        "HB2006SFR" => Ok(Arc::new(HopkinsBeacom2006StarFormationRate)),
        "YMKBH2008SFR" => Ok(Arc::new(YukselEtAl2008StarFormationRate)),
        "CC2015SNR" => Ok(Arc::new(CandelsClash2015SNRate)),
        _ => Err(UnsupportedEvolutionLaw {
            name: name.to_owned(),
        }),
    }
}
