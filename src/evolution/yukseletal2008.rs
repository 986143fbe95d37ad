use super::evolutionlaw::EvolutionLaw;

/// Star formation rate from Yuksel et al. 2008 (arXiv:0804.4008, Eq. 5),
/// in M_sun/yr/Mpc^3.
///
/// Unlike the other laws, this smoothly-broken power law is parametrized in
/// `1+z` directly, so `evaluate` is overridden to skip the `log10(1+z)`
/// coordinate change that the trait default applies.
pub struct YukselEtAl2008StarFormationRate;

impl YukselEtAl2008StarFormationRate {
    const A: f64 = 3.4;
    const B_SLOPE: f64 = -0.3;
    const C_SLOPE: f64 = -3.5;
    // Precomputed from the break redshifts z1 = 1, z2 = 4:
    // B = (1+z1)^(1 - a/b), C = (1+z1)^((b-a)/c) * (1+z2)^(1 - b/c).
    const B: f64 = 5160.63662037;
    const C: f64 = 9.06337604231;
    const ETA: f64 = -10.0;
    const R0: f64 = 0.02;
}

impl EvolutionLaw for YukselEtAl2008StarFormationRate {
    fn parametrization(&self, x: f64) -> f64 {
        Self::R0
            * (x.powf(Self::A * Self::ETA)
                + (x / Self::B).powf(Self::B_SLOPE * Self::ETA)
                + (x / Self::C).powf(Self::C_SLOPE * Self::ETA))
            .powf(1.0 / Self::ETA)
    }

    fn evaluate(&self, z: f64) -> f64 {
        self.parametrization(1.0 + z)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn local_rate_is_r0() {
        let law = YukselEtAl2008StarFormationRate;
        // At z = 0 the first term dominates with u = 1, so the rate is ~r0.
        assert_relative_eq!(law.evaluate(0.0), 0.02, max_relative = 1e-3);
    }

    #[test]
    fn takes_the_unshifted_argument() {
        let law = YukselEtAl2008StarFormationRate;
        assert_eq!(law.evaluate(1.0), law.parametrization(2.0));
    }

    #[test]
    fn rises_to_the_first_break_then_falls_beyond_the_second() {
        let law = YukselEtAl2008StarFormationRate;
        assert!(law.evaluate(1.0) > law.evaluate(0.0));
        assert!(law.evaluate(8.0) < law.evaluate(4.0));
    }
}
