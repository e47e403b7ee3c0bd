//! Stateless hashing of `(index, salt)` pairs into unit-interval samples.
//! Deterministic across runs and platforms: integer mixing only, no generator state.

/// Independent draw channels reserved per field salt.
/// Placement functions use channel 0..CHANNELS_PER_SALT for position, scale, rotation...
pub const CHANNELS_PER_SALT: u32 = 16;

/// 64-bit avalanche mix (splitmix64 finalizer).
#[inline]
pub fn mix64(seed: u64) -> u64 {
    let mut n = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    n = (n ^ (n >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    n = (n ^ (n >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    n ^ (n >> 31)
}

/// Deterministic sample in [0, 1) for `index` under `salt`.
#[inline]
pub fn unit(index: u32, salt: u32) -> f64 {
    let key = ((salt as u64) << 32) | index as u64;
    // Top 53 bits fill an f64 mantissa exactly, so the result never reaches 1.0.
    (mix64(key) >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Per-field sampler. Each channel derives its own salt so draws for the
/// same index (position vs. scale vs. rotation) are decorrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    salt: u32,
}

impl Sampler {
    pub fn new(salt: u32) -> Self {
        Self { salt }
    }

    /// Sample in [0, 1) for `index` on draw `channel`.
    #[inline]
    pub fn draw(&self, index: u32, channel: u32) -> f64 {
        debug_assert!(channel < CHANNELS_PER_SALT);
        let channel_salt = self
            .salt
            .wrapping_mul(CHANNELS_PER_SALT)
            .wrapping_add(channel);
        unit(index, channel_salt)
    }

    /// Sample in [-0.5, 0.5) for `index` on draw `channel`.
    #[inline]
    pub fn centered(&self, index: u32, channel: u32) -> f64 {
        self.draw(index, channel) - 0.5
    }
}
