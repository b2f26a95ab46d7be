//! Placeholder geocoding.
//!
//! Nothing here resolves addresses. `RandomGeocoder` returns arbitrary
//! coordinates so the map has something to plot; swap in a real
//! implementation of [`Geocoder`] without touching the chat flow.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::Location;

pub trait Geocoder {
    fn locate(&mut self, address: &str) -> Location;
}

#[derive(Debug, Clone)]
pub struct RandomGeocoder {
    rng: StdRng,
    decimals: u32,
}

impl RandomGeocoder {
    pub fn new(decimals: u32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            decimals,
        }
    }

    /// Deterministic variant for tests and demos.
    pub fn seeded(seed: u64, decimals: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            decimals,
        }
    }

    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals.min(15) as i32);
        (value * scale).round() / scale
    }
}

impl Default for RandomGeocoder {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Geocoder for RandomGeocoder {
    fn locate(&mut self, address: &str) -> Location {
        let lat = self.rng.gen_range(-90.0..=90.0);
        let lng = self.rng.gen_range(-180.0..=180.0);
        Location {
            lat: self.round(lat),
            lng: self.round(lng),
            address: address.to_string(),
        }
    }
}
