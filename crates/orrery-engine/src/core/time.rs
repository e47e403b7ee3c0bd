/// Simulation clock fed by the host's elapsed time.
///
/// The host passes absolute elapsed seconds each frame. Everything downstream
/// derives from that value, so the clock only enforces monotonicity: a value
/// earlier than the last observed one is clamped to it.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    elapsed: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the elapsed time for a new frame. Returns the time actually used.
    pub fn observe(&mut self, elapsed: f64) -> f64 {
        if elapsed.is_finite() && elapsed > self.elapsed {
            self.elapsed = elapsed;
        }
        self.elapsed
    }

    /// Seconds since the scene started.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observes_forward_time() {
        let mut clock = SimClock::new();
        assert_eq!(clock.observe(0.5), 0.5);
        assert_eq!(clock.observe(1.25), 1.25);
        assert_eq!(clock.elapsed(), 1.25);
    }

    #[test]
    fn earlier_values_clamp() {
        let mut clock = SimClock::new();
        clock.observe(3.0);
        assert_eq!(clock.observe(2.0), 3.0);
        assert_eq!(clock.elapsed(), 3.0);
    }

    #[test]
    fn non_finite_is_ignored() {
        let mut clock = SimClock::new();
        clock.observe(1.0);
        assert_eq!(clock.observe(f64::NAN), 1.0);
        assert_eq!(clock.observe(f64::INFINITY), 1.0);
    }
}
