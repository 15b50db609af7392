//! Log-distance path-loss proximity estimation.

use crate::error::{PayloadError, Result};

/// Path-loss exponent for open space. Obstructed environments run up to ~4.0.
pub const DEFAULT_ENVIRONMENT_FACTOR: f64 = 2.0;

/// Estimate the gateway-to-beacon distance in meters.
///
/// `distance = 10 ^ ((tx_power - rssi) / (10 * environment_factor))`, where
/// `tx_power` is the calibrated power at one meter and `rssi` the measured
/// value. The result is not clamped; implausible inputs yield implausible
/// distances rather than errors.
///
/// A non-positive or non-finite `environment_factor` breaks the model and is
/// rejected as [`PayloadError::InvalidEnvironmentFactor`].
pub fn estimate_distance(tx_power: i8, rssi: i8, environment_factor: f64) -> Result<f64> {
    if !environment_factor.is_finite() || environment_factor <= 0.0 {
        return Err(PayloadError::InvalidEnvironmentFactor(environment_factor));
    }

    let delta = f64::from(i16::from(tx_power) - i16::from(rssi));
    Ok(10f64.powf(delta / (10.0 * environment_factor)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_distance() {
        // 10^(6/20)
        let distance = estimate_distance(-59, -65, 2.0).unwrap();
        assert!((distance - 1.995_262_314_968_879_6).abs() < 1e-6);
    }

    #[test]
    fn test_equal_power_is_one_meter() {
        let distance = estimate_distance(-59, -59, 2.0).unwrap();
        assert!((distance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_monotonically_decreasing_in_rssi() {
        let mut previous = f64::INFINITY;
        for rssi in -100..=-30 {
            let distance = estimate_distance(-59, rssi, 2.0).unwrap();
            assert!(
                distance < previous,
                "distance should shrink as rssi rises (rssi {})",
                rssi
            );
            previous = distance;
        }
    }

    #[test]
    fn test_higher_factor_pulls_estimate_in() {
        let open = estimate_distance(-59, -75, 2.0).unwrap();
        let obstructed = estimate_distance(-59, -75, 4.0).unwrap();
        assert!(obstructed < open);
    }

    #[test]
    fn test_rejects_non_positive_factor() {
        assert!(matches!(
            estimate_distance(-59, -65, 0.0),
            Err(PayloadError::InvalidEnvironmentFactor(_))
        ));
        assert!(matches!(
            estimate_distance(-59, -65, -2.0),
            Err(PayloadError::InvalidEnvironmentFactor(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_factor() {
        assert!(estimate_distance(-59, -65, f64::NAN).is_err());
        assert!(estimate_distance(-59, -65, f64::INFINITY).is_err());
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        // i8 extremes stress the widened subtraction
        let distance = estimate_distance(127, -128, 2.0).unwrap();
        assert!(distance.is_finite());
    }
}
