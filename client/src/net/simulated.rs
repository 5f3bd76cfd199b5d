//! Simulated contact backend for demos and offline previews.
//!
//! Waits a fixed delay and then succeeds with a fixed probability. The RNG is
//! seedable so tests can force either outcome deterministically.

#[cfg(test)]
#[path = "simulated_test.rs"]
mod simulated_test;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{ContactRequest, FAILURE_MESSAGE, SUCCESS_MESSAGE};

pub const SIMULATED_DELAY: Duration = Duration::from_millis(2000);
pub const SIMULATED_SUCCESS_RATE: f64 = 0.8;

#[derive(Clone)]
pub struct SimulatedBackend {
    rng: Arc<Mutex<StdRng>>,
    success_rate: f64,
    delay: Duration,
}

impl SimulatedBackend {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
            success_rate: SIMULATED_SUCCESS_RATE,
            delay: SIMULATED_DELAY,
        }
    }

    /// Override the success probability; clamped to `[0, 1]`.
    #[must_use]
    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    /// Draw one outcome without waiting.
    ///
    /// # Errors
    ///
    /// Returns the fixed failure message on a losing draw.
    pub fn roll(&self) -> Result<String, String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        if rng.random_bool(self.success_rate) {
            Ok(SUCCESS_MESSAGE.to_owned())
        } else {
            Err(FAILURE_MESSAGE.to_owned())
        }
    }

    /// Wait the simulated network delay, then draw an outcome.
    ///
    /// # Errors
    ///
    /// Returns the fixed failure message on a losing draw.
    pub async fn submit(&self, request: &ContactRequest) -> Result<String, String> {
        #[cfg(feature = "hydrate")]
        {
            log::info!("simulating contact submission from {}", request.email);
            gloo_timers::future::sleep(self.delay).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
        self.roll()
    }
}
