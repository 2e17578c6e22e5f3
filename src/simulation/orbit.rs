//! Orbital parameterization helpers
//!
//! Polar placement around a central mass and the circular-orbit velocity
//! used both at construction and for scripted satellites.

use super::states::NVec2;

/// Astronomical unit in meters
pub const AU: f64 = 149_597_870_700.0;
pub const SECS_IN_A_DAY: f64 = 86_400.0;

/// `r * (cos θ, sin θ)` with θ in radians
pub fn polar_position(r: f64, theta: f64) -> NVec2 {
    NVec2::new(r * theta.cos(), r * theta.sin())
}

/// Speed of a circular orbit of radius `r` around `central_mass`.
/// From F = G m1 m2 / r^2 and a = v^2 / r.
#[allow(non_snake_case)]
pub fn circular_speed(G: f64, central_mass: f64, r: f64) -> f64 {
    (G * central_mass / r).sqrt()
}

/// Velocity of magnitude `speed` rotated +90 degrees from `angle_deg`,
/// i.e. counter-clockwise orbital motion
pub fn tangential_velocity(speed: f64, angle_deg: f64) -> NVec2 {
    let theta = ((angle_deg + 90.0) % 360.0).to_radians();
    NVec2::new(speed * theta.cos(), speed * theta.sin())
}

/// Keplerian period of a circular orbit, `2π sqrt(r^3 / GM)`
#[allow(non_snake_case)]
pub fn orbital_period(G: f64, central_mass: f64, r: f64) -> f64 {
    2.0 * std::f64::consts::PI * (r.powi(3) / (G * central_mass)).sqrt()
}

/// Angle in degrees from a (degrees, hours, minutes) triple
pub fn angle_from_dhm(degrees: f64, hours: f64, minutes: f64) -> f64 {
    degrees + (hours + minutes / 60.0) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangent_is_quarter_turn_ahead() {
        let v = tangential_velocity(2.0, 0.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);

        // wraps past 360
        let v = tangential_velocity(1.0, 300.0);
        let expected = NVec2::new(30f64.to_radians().cos(), 30f64.to_radians().sin());
        assert!((v - expected).norm() < 1e-12);
    }

    #[test]
    fn dhm_conversion() {
        assert!((angle_from_dhm(129.0, 15.0, 25.9) - 129.257_194_4).abs() < 1e-6);
        assert_eq!(angle_from_dhm(0.0, 0.0, 0.0), 0.0);
    }
}
