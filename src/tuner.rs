//! The wideband tuner interface a drop receiver attaches to.
//!
//! The tuner itself is external: some front-end delivers complex baseband
//! batches at 960 kHz or 2.4 MHz around a center frequency. The receiver
//! side only needs the read-only view defined here; sample delivery and
//! retune notifications are pushed through the [`crate::ddr::DdrRegistry`]
//! by whoever drives the tuner.

/// Read-only view of a wideband tuner.
pub trait Tuner {
    /// Identifier the `WBRX` configuration key refers to.
    fn name(&self) -> &str;

    /// Native sample rate in Hz, 960000 or 2400000.
    fn sample_rate(&self) -> u32;

    /// Current center frequency in Hz.
    fn center_fq(&self) -> u32;

    /// Whether the front-end is delivering samples.
    fn is_ready(&self) -> bool {
        true
    }
}

/// A tuner whose state is maintained by the hosting application.
///
/// Useful for file playback and tests: the host updates the fields and
/// forwards the matching events (`iq_received`, `tuner_fq_changed`,
/// `ready_state_changed`) to the registry itself.
pub struct ManualTuner {
    name: String,
    sample_rate: u32,
    center_fq: u32,
    ready: bool,
}

impl ManualTuner {
    /// Create a tuner view with the given identity and geometry.
    pub fn new(name: impl Into<String>, sample_rate: u32, center_fq: u32) -> Self {
        Self {
            name: name.into(),
            sample_rate,
            center_fq,
            ready: true,
        }
    }

    /// Retune. The host must follow up with
    /// [`DdrRegistry::tuner_fq_changed`](crate::ddr::DdrRegistry::tuner_fq_changed).
    pub fn set_center_fq(&mut self, center_fq: u32) {
        self.center_fq = center_fq;
    }

    /// Flip the ready state. The host must follow up with
    /// [`DdrRegistry::ready_state_changed`](crate::ddr::DdrRegistry::ready_state_changed).
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
}

impl Tuner for ManualTuner {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn center_fq(&self) -> u32 {
        self.center_fq
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_tuner() {
        let mut tuner = ManualTuner::new("WBRX1", 2_400_000, 100_000_000);
        assert_eq!(tuner.name(), "WBRX1");
        assert_eq!(tuner.sample_rate(), 2_400_000);
        assert!(tuner.is_ready());

        tuner.set_center_fq(99_000_000);
        assert_eq!(tuner.center_fq(), 99_000_000);

        tuner.set_ready(false);
        assert!(!tuner.is_ready());
    }
}
