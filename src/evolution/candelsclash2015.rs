use super::evolutionlaw::EvolutionLaw;

/// Core-collapse supernova rate from the CANDELS + CLASH surveys
/// (Strolger et al. 2015), a Sersic-shaped curve in `10^x = 1+z`.
pub struct CandelsClash2015SNRate;

impl CandelsClash2015SNRate {
    const A: f64 = 0.015;
    const B: f64 = 1.5;
    const C: f64 = 5.0;
    const D: f64 = 6.1;
}

impl EvolutionLaw for CandelsClash2015SNRate {
    fn parametrization(&self, x: f64) -> f64 {
        let u = 10f64.powf(x);
        Self::A * u.powf(Self::C) / ((u / Self::B).powf(Self::D) + 1.0)
    }
}
