use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tracing::debug;

/// Uniform random choice of the nameserver to contact next.
///
/// Owns its generator so a fixed seed reproduces a walk exactly.
pub struct NameserverSelector {
    rng: Mutex<fastrand::Rng>,
}

impl NameserverSelector {
    /// Seeded from the wall clock.
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    pub fn with_seed(seed: u64) -> Self {
        debug!(seed = seed, "Nameserver selector seeded");
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    pub async fn select(&self, candidates: &[String]) -> Option<String> {
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.lock().await.usize(..candidates.len());
        Some(candidates[index].clone())
    }
}

impl Default for NameserverSelector {
    fn default() -> Self {
        Self::new()
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
