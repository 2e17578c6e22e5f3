//! Time-dependent mass for fuel-burning bodies
//!
//! The burn clock is the global simulation clock: fuel starts burning at
//! t = 0 and the fuel term is left unclamped once it crosses zero.

use super::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelModel {
    pub dry_mass: f64,     // kg
    pub initial_fuel: f64, // kg
    pub burn_rate: f64,    // kg/s
}

impl FuelModel {
    pub fn new(dry_mass: f64, initial_fuel: f64, burn_rate: f64) -> Self {
        Self {
            dry_mass,
            initial_fuel,
            burn_rate,
        }
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), SimError> {
        let reason = if !(self.dry_mass.is_finite() && self.dry_mass > 0.0) {
            "dry mass must be positive"
        } else if !(self.initial_fuel.is_finite() && self.initial_fuel >= 0.0) {
            "initial fuel must be non-negative"
        } else if !(self.burn_rate.is_finite() && self.burn_rate >= 0.0) {
            "burn rate must be non-negative"
        } else {
            return Ok(());
        };
        Err(SimError::InvalidFuelModel {
            name: name.to_owned(),
            reason,
        })
    }

    /// Fuel left after `elapsed` simulated seconds, possibly negative
    pub fn fuel_mass(&self, elapsed: f64) -> Result<f64, SimError> {
        // NaN fails the comparison too
        if !(elapsed >= 0.0) {
            return Err(SimError::NegativeElapsed(elapsed));
        }
        Ok(self.initial_fuel - self.burn_rate * elapsed)
    }

    /// Dry mass plus remaining fuel
    pub fn total_mass(&self, elapsed: f64) -> Result<f64, SimError> {
        Ok(self.dry_mass + self.fuel_mass(elapsed)?)
    }

    /// Simulated seconds until the fuel term reaches zero
    pub fn burnout_time(&self) -> Option<f64> {
        (self.burn_rate > 0.0).then(|| self.initial_fuel / self.burn_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rocket() -> FuelModel {
        FuelModel::new(1.0e4, 1.0e4, 5.0)
    }

    #[test]
    fn mass_starts_at_dry_plus_fuel() {
        assert_eq!(rocket().total_mass(0.0).unwrap(), 2.0e4);
    }

    #[test]
    fn fuel_term_is_not_clamped() {
        let f = rocket();
        let past_burnout = f.burnout_time().unwrap() + 1000.0;
        assert_eq!(f.fuel_mass(past_burnout).unwrap(), -5000.0);
    }

    #[test]
    fn negative_and_nan_elapsed_are_rejected() {
        let f = rocket();
        assert_eq!(f.fuel_mass(-1.0), Err(SimError::NegativeElapsed(-1.0)));
        assert!(f.total_mass(f64::NAN).is_err());
    }

    #[test]
    fn zero_burn_rate_never_burns_out() {
        assert_eq!(FuelModel::new(1.0, 1.0, 0.0).burnout_time(), None);
    }
}
