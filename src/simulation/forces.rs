//! Force / acceleration contributors for the slingshot engine
//!
//! Defines the acceleration trait, the term set that sums contributors, and
//! direct Newtonian gravity with a near-collision guard.

use crate::simulation::states::{NVec2, System};

/// Net acceleration of one body for one sub-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NetAccel {
    Vector(NVec2),
    /// Undefined this sub-step because the body got too close to another.
    /// The integrator answers it by zeroing the body's velocity.
    Poison,
}

impl NetAccel {
    pub fn zero() -> Self {
        NetAccel::Vector(NVec2::zeros())
    }

    pub fn is_poison(&self) -> bool {
        matches!(self, NetAccel::Poison)
    }

    /// Vector sum; poison absorbs everything
    pub fn combine(self, other: NetAccel) -> NetAccel {
        match (self, other) {
            (NetAccel::Vector(a), NetAccel::Vector(b)) => NetAccel::Vector(a + b),
            _ => NetAccel::Poison,
        }
    }
}

/// Collection of acceleration terms (gravity, thrust, etc.)
/// Each term implements [`Acceleration`] and their contributions are
/// combined into a single [`NetAccel`] per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Net acceleration of body `i` from every term
    pub fn net_acceleration(&self, i: usize, sys: &System) -> NetAccel {
        self.terms
            .iter()
            .fold(NetAccel::zero(), |acc, term| acc.combine(term.acceleration(i, sys)))
    }

    /// Accelerations for all bodies in `sys`, computed from its current state.
    /// Every call returns a new vector with one independent slot per body.
    pub fn accumulate_accels(&self, sys: &System) -> Vec<NetAccel> {
        (0..sys.bodies.len())
            .map(|i| self.net_acceleration(i, sys))
            .collect()
    }
}

/// Trait for acceleration sources operating on [`System`]
pub trait Acceleration {
    /// Contribution to body `i`
    fn acceleration(&self, i: usize, sys: &System) -> NetAccel;
}

/// Newtonian gravity between gravity-coupled bodies.
///
/// There is no softening: if body `i` is closer than `dist_threshold` to any
/// coupled body its whole accumulation is abandoned and the result is
/// [`NetAccel::Poison`], not just the offending pair.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64,              // gravitational constant
    pub dist_threshold: f64, // near-collision distance
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, i: usize, sys: &System) -> NetAccel {
        let Some(bi) = sys.bodies.get(i) else {
            return NetAccel::zero();
        };
        // neither pulls nor is pulled
        if !bi.gravity_coupled {
            return NetAccel::zero();
        }

        let mut a = NVec2::zeros();
        for (j, bj) in sys.bodies.iter().enumerate() {
            if j == i || !bj.gravity_coupled {
                continue;
            }

            // displacement from i to j
            let r = bj.x - bi.x;
            let dist = r.norm();

            if dist < self.dist_threshold {
                tracing::debug!(body = %bi.name, other = %bj.name, dist, "near collision, acceleration poisoned");
                return NetAccel::Poison;
            }

            // magnitude G m_j / r^2 along the unit vector r / |r|
            a += (self.G * bj.m / (dist * dist)) * (r / dist);
        }
        NetAccel::Vector(a)
    }
}

impl NewtonianGravity {
    /// Magnitude of the gravitational force between bodies `i` and `j` in
    /// newtons, or `None` if either is uncoupled or they are too close
    pub fn force_between(&self, i: usize, j: usize, sys: &System) -> Option<f64> {
        let (bi, bj) = (sys.bodies.get(i)?, sys.bodies.get(j)?);
        if i == j || !bi.gravity_coupled || !bj.gravity_coupled {
            return None;
        }
        let dist = (bj.x - bi.x).norm();
        (dist >= self.dist_threshold).then(|| self.G * bi.m * bj.m / (dist * dist))
    }
}
