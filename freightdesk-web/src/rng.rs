//! Per-page-load random source.
//!
//! Sailings are not meant to be reproducible across loads; stability comes
//! from the schedule cache. Tests pass their own seeded generator instead.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fresh generator seeded from the clock.
#[must_use]
pub fn session_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(entropy())
}

#[cfg(target_arch = "wasm32")]
fn entropy() -> u64 {
    js_sys::Date::now().to_bits() ^ (js_sys::Math::random().to_bits() << 1)
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
        })
}
