//! Animation clock
//!
//! A single monotonically increasing "seconds since start" scalar, read once
//! per frame and never reset. Backed by `performance.now()` in the browser
//! and `Instant` on native.

#[cfg(target_arch = "wasm32")]
fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Wall-clock-derived elapsed time, anchored when the animation starts.
pub struct AnimationClock {
    start: f64,
}

impl AnimationClock {
    /// Anchor the clock at the current instant.
    pub fn start() -> Self {
        Self {
            start: now_seconds(),
        }
    }

    /// Fractional seconds since `start()`.
    pub fn elapsed_seconds(&self) -> f64 {
        now_seconds() - self.start
    }
}
