use serde::Deserialize;

/// Flat-universe cosmological parameters, fixed for the lifetime of a
/// population. The curvature density is derived, not free.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CosmologyParameters {
    omega_m: f64,
    omega_lambda: f64,
    h: f64,
}

impl CosmologyParameters {
    pub fn new(omega_m: f64, omega_lambda: f64, h: f64) -> CosmologyParameters {
        CosmologyParameters {
            omega_m,
            omega_lambda,
            h,
        }
    }

    pub fn omega_m(&self) -> f64 {
        self.omega_m
    }

    pub fn omega_lambda(&self) -> f64 {
        self.omega_lambda
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    /// Derived curvature density, expected to be ~0 for the flat
    /// parameter sets this library is used with.
    pub fn omega_k(&self) -> f64 {
        1.0 - self.omega_m - self.omega_lambda
    }
}

impl Default for CosmologyParameters {
    fn default() -> CosmologyParameters {
        CosmologyParameters {
            omega_m: 0.308,
            omega_lambda: 0.692,
            h: 0.678,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn default_set_is_flat() {
        let params = CosmologyParameters::default();
        assert_abs_diff_eq!(params.omega_k(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn deserializes_from_json() {
        let params: CosmologyParameters =
            serde_json::from_str(r#"{"omega_m": 0.3, "omega_lambda": 0.7, "h": 0.7}"#).unwrap();
        assert_eq!(params.omega_m(), 0.3);
        assert_eq!(params.omega_lambda(), 0.7);
        assert_eq!(params.h(), 0.7);
    }
}
