use super::evolutionlaw::EvolutionLaw;

/// Constant comoving source density at all redshifts.
pub struct NoEvolution;

impl EvolutionLaw for NoEvolution {
    fn parametrization(&self, _x: f64) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_exactly_one_everywhere() {
        let law = NoEvolution;
        for z in [0.0, 0.5, 1.0, 4.0, 10.0] {
            assert_eq!(law.evaluate(z), 1.0);
        }
    }
}
