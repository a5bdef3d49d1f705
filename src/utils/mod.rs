//! Utility functions for algebraic systems

mod input;

use crate::algebra::CayleyTable;
use crate::Result;
use rand::Rng;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use input::parse_input;

/// Load object from JSON file
pub fn load_json<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let obj = serde_json::from_str(&contents)?;
    Ok(obj)
}

/// A table on `{0, ..., n-1}` with every entry drawn uniformly from the set.
///
/// The result is always closed and always positionally encoded.
pub fn random_table<R: Rng + ?Sized>(n: usize, rng: &mut R) -> CayleyTable<usize> {
    CayleyTable::from_fn(n, |_, _| rng.gen_range(0..n))
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Logs the time between its creation and its drop
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time in seconds
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            tracing::debug!(name = %self.name, elapsed_s = self.elapsed(), "timer finished");
        }
    }
}
