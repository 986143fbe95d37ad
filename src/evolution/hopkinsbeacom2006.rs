use super::evolutionlaw::EvolutionLaw;

/// Star formation history from Hopkins and Beacom 2006, in M_sun/yr/Mpc^3.
///
/// Three power-law segments in `x = log10(1+z)`. The segments are only
/// approximately continuous at the published breakpoints; the formulas are
/// reproduced as given, not smoothed.
pub struct HopkinsBeacom2006StarFormationRate;

impl EvolutionLaw for HopkinsBeacom2006StarFormationRate {
    fn parametrization(&self, x: f64) -> f64 {
        if x < 0.30963 {
            10f64.powf(3.28 * x - 1.82)
        } else if x < 0.73878 {
            10f64.powf(-0.26 * x - 0.724)
        } else {
            10f64.powf(-8.0 * x + 4.99)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn local_rate_matches_the_published_normalization() {
        let law = HopkinsBeacom2006StarFormationRate;
        // x = 0 at z = 0, so the first segment gives 10^-1.82.
        assert_relative_eq!(law.evaluate(0.0), 10f64.powf(-1.82), max_relative = 1e-12);
    }

    #[test]
    fn segments_nearly_meet_at_the_breakpoints() {
        let law = HopkinsBeacom2006StarFormationRate;
        for (x, left, right) in [
            (0.30963, (3.28, -1.82), (-0.26, -0.724)),
            (0.73878, (-0.26, -0.724), (-8.0, 4.99)),
        ] {
            let from_left = 10f64.powf(left.0 * x + left.1);
            let from_right = 10f64.powf(right.0 * x + right.1);
            assert_relative_eq!(from_left, from_right, max_relative = 2e-2);
            assert_relative_eq!(law.parametrization(x), from_right, max_relative = 1e-12);
        }
    }

    #[test]
    fn rate_declines_at_high_redshift() {
        let law = HopkinsBeacom2006StarFormationRate;
        assert!(law.evaluate(8.0) < law.evaluate(1.0));
    }
}
