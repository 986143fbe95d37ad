/// Megaparsec in centimeters.
pub const MPC_TO_CM: f64 = 3.086e24;

/// Conversion factor from GeV/s to erg/yr.
pub const GEV_PER_SEC_TO_ERG_PER_YEAR: f64 = 50526.0;

/// Seconds in one (365 day) year, matching the burst-rate-density convention.
pub const SECONDS_PER_YEAR: f64 = 86400.0 * 365.0;
