//! Breach lookup.
//!
//! [`BreachSource`] is the seam a real breach corpus plugs into. The crate
//! only ships [`SimulatedBreaches`], which fabricates results for demos from
//! an injected random generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use secrecy::{ExposeSecret, SecretString};

use crate::assessment::BreachDetails;

/// Password that the simulation always reports as breached.
pub const BREACH_SENTINEL: &str = "test-breach@1234";

pub const DEFAULT_BREACH_PROBABILITY: f64 = 0.2;

const FIRST_FOUND: &str = "January 2022";
const LAST_FOUND: &str = "September 2023";

/// Sites every simulated breach lists.
const BASE_SITES: [&str; 2] = ["examplesite.com", "compromised-email.net"];

/// Sites added with the given probability, in order.
const EXTRA_SITES: [(&str, f64); 2] = [("another-breach.org", 0.5), ("hacked-database.com", 0.3)];

/// Decides whether a password appears in a breach corpus.
pub trait BreachSource {
    /// Returns the breach details, or `None` when the password was not found.
    fn check(&mut self, password: &SecretString) -> Option<BreachDetails>;
}

impl<B: BreachSource + ?Sized> BreachSource for &mut B {
    fn check(&mut self, password: &SecretString) -> Option<BreachDetails> {
        (**self).check(password)
    }
}

/// Fabricated breach results drawn from `R`.
#[derive(Debug, Clone)]
pub struct SimulatedBreaches<R = StdRng> {
    rng: R,
    probability: f64,
}

impl SimulatedBreaches<StdRng> {
    /// Simulation with a reproducible sequence of draws.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SimulatedBreaches<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            probability: DEFAULT_BREACH_PROBABILITY,
        }
    }

    /// Overrides the breach probability, clamped into `0.0..=1.0`.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    fn details(&mut self) -> Option<BreachDetails> {
        let mut websites: Vec<String> = BASE_SITES.iter().map(|s| s.to_string()).collect();
        for (site, chance) in EXTRA_SITES {
            if self.rng.gen_bool(chance) {
                websites.push(site.to_string());
            }
        }
        BreachDetails::new(websites, FIRST_FOUND, LAST_FOUND)
    }
}

impl<R: Rng> BreachSource for SimulatedBreaches<R> {
    fn check(&mut self, password: &SecretString) -> Option<BreachDetails> {
        // the sentinel short-circuits before any draw
        let breached = password.expose_secret() == BREACH_SENTINEL
            || self.rng.gen_bool(self.probability);
        if breached { self.details() } else { None }
    }
}
