use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random source for spawn positions and preset selection.
///
/// Seeded explicitly so tests are reproducible; the browser build seeds
/// from `Math.random()` and the clock.
pub struct SimRng {
    inner: SmallRng,
}

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_entropy() -> Self {
        let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let low = js_sys::Date::now() as u64;
        Self::from_seed((high << 32) ^ low)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed);
        Self::from_seed(nanos)
    }

    /// Uniform sample in `[0, 1)`
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Uniform sample in `[0, span)`
    #[inline]
    pub fn below(&mut self, span: f32) -> f32 {
        self.unit() * span
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
