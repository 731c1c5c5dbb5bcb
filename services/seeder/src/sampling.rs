use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Normal draw clamped to `[lo, hi]`. Clamped, not resampled: out-of-range
/// tails land exactly on the bounds.
pub fn clamped_normal<R: Rng>(rng: &mut R, mean: f64, stddev: f64, lo: f64, hi: f64) -> f64 {
    let dist = Normal::new(mean, stddev).expect("finite mean and positive stddev");
    dist.sample(rng).clamp(lo, hi)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
