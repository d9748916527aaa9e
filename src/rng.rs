//! Randomness for particle seeding: a `fastrand::Rng` seeded from the
//! browser's crypto source, or from the clock when the `rng` feature is off
//! or the source is unavailable.

pub use fastrand::Rng;

pub fn entropy_seed(now_ms: f64) -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    (now_ms * 1000.0) as u64 ^ 0x5851_F42D_4C95_7F2D
}

pub fn from_entropy(now_ms: f64) -> Rng {
    Rng::with_seed(entropy_seed(now_ms))
}

/// Uniform in [lo, hi).
pub fn range(rng: &mut Rng, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.f64()
}
