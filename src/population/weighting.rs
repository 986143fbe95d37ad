use crate::units::SECONDS_PER_YEAR;

use std::f64::consts::PI;

/// Extra redshift-dependent weight applied to the raw source-density
/// distribution. Steady populations carry none; transient populations pick up
/// the `1/(1+z)` time dilation of the observed burst rate.
pub trait RedshiftWeighting: Send + Sync {
    fn weight(&self, z: f64) -> f64;
}

/// Variant-specific pieces of the standard-candle normalization: how the
/// observed diffuse normalization scales to an all-sky rate, and which power
/// of `(1+z)` enters the denominator integral.
pub trait CandleNormalization: Send + Sync {
    fn all_sky_norm(&self, fluxnorm: f64) -> f64;

    fn spectral_exponent(&self, index: f64) -> f64;
}

pub struct SteadyWeighting;

impl RedshiftWeighting for SteadyWeighting {
    fn weight(&self, _z: f64) -> f64 {
        1.0
    }
}

pub struct TransientWeighting;

impl RedshiftWeighting for TransientWeighting {
    fn weight(&self, z: f64) -> f64 {
        1.0 / (1.0 + z)
    }
}

pub struct SteadyCandle;

impl CandleNormalization for SteadyCandle {
    fn all_sky_norm(&self, fluxnorm: f64) -> f64 {
        4.0 * PI * fluxnorm
    }

    fn spectral_exponent(&self, index: f64) -> f64 {
        -index.abs() + 2.0
    }
}

/// The burst rate density is per year, so the all-sky rate converts to an
/// all-sky fluence rate; the exponent gains one power of `(1+z)` to balance
/// the time dilation already folded into the transient redshift distribution.
pub struct TransientCandle;

impl CandleNormalization for TransientCandle {
    fn all_sky_norm(&self, fluxnorm: f64) -> f64 {
        4.0 * PI * fluxnorm * SECONDS_PER_YEAR
    }

    fn spectral_exponent(&self, index: f64) -> f64 {
        -index.abs() + 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_weight_is_unity() {
        assert_eq!(SteadyWeighting.weight(0.0), 1.0);
        assert_eq!(SteadyWeighting.weight(5.0), 1.0);
    }

    #[test]
    fn transient_weight_is_time_dilation() {
        assert_eq!(TransientWeighting.weight(0.0), 1.0);
        assert_eq!(TransientWeighting.weight(1.0), 0.5);
    }

    #[test]
    fn exponents_treat_the_index_sign_as_irrelevant() {
        assert_eq!(SteadyCandle.spectral_exponent(-2.0), 0.0);
        assert_eq!(SteadyCandle.spectral_exponent(2.0), 0.0);
        assert_eq!(TransientCandle.spectral_exponent(2.0), 1.0);
    }
}
