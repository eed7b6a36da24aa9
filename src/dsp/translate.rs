//! Frequency translation to DC.
//!
//! A [`Translate`] block multiplies the incoming I/Q stream by a precomputed
//! complex-exponential lookup table, shifting the channel of interest from its
//! offset inside the tuner passband down to DC. The table length is the exact
//! period of the offset sinusoid at the source rate, `N = R / gcd(R, |f|)`, so
//! repeated traversal introduces no long-term phase error and no dead samples.
//!
//! # Example
//!
//! ```rust
//! use droprx::dsp::translate::Translate;
//! use droprx::Sample;
//!
//! // Shift a channel 200 kHz above center down to DC at a 960 kHz rate
//! let mut trans = Translate::new(960_000, 200_000);
//! let input = vec![Sample::new(1.0, 0.0); 24];
//! let mut output = Vec::new();
//! trans.iq_received(&mut output, &input);
//! assert_eq!(output.len(), 24);
//! ```

use crate::Sample;

/// Complex mixer driven by an exact-period exponential lookup table.
///
/// A zero offset clears the table and the block degenerates to a copy; this
/// is the common case for a receiver parked on the tuner's center frequency.
pub struct Translate {
    samp_rate: u32,
    exp_lut: Vec<Sample>,
    n: usize,
}

impl Translate {
    /// Create a translator for a source at `samp_rate` Hz, shifting by
    /// `offset` Hz (positive offsets sit above the tuner center).
    pub fn new(samp_rate: u32, offset: i32) -> Self {
        let mut trans = Self {
            samp_rate,
            exp_lut: Vec::new(),
            n: 0,
        };
        trans.set_offset(offset);
        trans
    }

    /// Retarget the translator to a new offset.
    ///
    /// The phase index resets to zero on every call, including a call that
    /// repeats the current offset. For `offset == 0` the table is cleared and
    /// the block passes samples through untouched.
    pub fn set_offset(&mut self, offset: i32) {
        self.n = 0;
        self.exp_lut.clear();
        if offset == 0 {
            return;
        }
        let period = self.samp_rate / gcd(self.samp_rate, offset.unsigned_abs());
        self.exp_lut.reserve(period as usize);
        for i in 0..period {
            let ang = -2.0 * std::f64::consts::PI * f64::from(offset) * f64::from(i)
                / f64::from(self.samp_rate);
            self.exp_lut.push(Sample::new(ang.cos() as f32, ang.sin() as f32));
        }
    }

    /// Mix a batch of samples down by the configured offset into `out`.
    pub fn iq_received(&mut self, out: &mut Vec<Sample>, input: &[Sample]) {
        out.clear();
        if self.exp_lut.is_empty() {
            out.extend_from_slice(input);
            return;
        }
        out.reserve(input.len());
        for &s in input {
            out.push(s * self.exp_lut[self.n]);
            self.n += 1;
            if self.n == self.exp_lut.len() {
                self.n = 0;
            }
        }
    }
}

/// Greatest common divisor, iterative on purpose: offsets are caller
/// controlled and recursion depth should not depend on them.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(960_000, 200_000), 40_000);
        assert_eq!(gcd(2_400_000, 25_000), 25_000);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(12, 0), 12);
    }

    #[test]
    fn test_lut_period() {
        let trans = Translate::new(960_000, 200_000);
        assert_eq!(trans.exp_lut.len(), 24);

        let trans = Translate::new(2_400_000, 25_000);
        assert_eq!(trans.exp_lut.len(), 96);

        // Negative offsets use the same magnitude for sizing
        let trans = Translate::new(960_000, -200_000);
        assert_eq!(trans.exp_lut.len(), 24);
    }

    #[test]
    fn test_zero_offset_is_bitexact_passthrough() {
        let mut trans = Translate::new(960_000, 0);
        let input: Vec<Sample> = (0..100)
            .map(|i| Sample::new(i as f32 * 0.01, -(i as f32) * 0.02))
            .collect();
        let mut out = Vec::new();
        trans.iq_received(&mut out, &input);
        assert_eq!(out, input);
    }

    #[test]
    fn test_offset_carrier_lands_on_dc() {
        // A pure carrier at exactly the offset frequency becomes a constant
        // after translation.
        let rate = 960_000u32;
        let offset = 200_000i32;
        let mut trans = Translate::new(rate, offset);

        let input: Vec<Sample> = (0..480)
            .map(|i| {
                let ang =
                    2.0 * std::f64::consts::PI * offset as f64 * i as f64 / rate as f64;
                Sample::new(ang.cos() as f32, ang.sin() as f32)
            })
            .collect();
        let mut out = Vec::new();
        trans.iq_received(&mut out, &input);
        for s in &out {
            assert_relative_eq!(s.re, 1.0, epsilon = 1e-5);
            assert_relative_eq!(s.im, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_total_phase_advance() {
        // After L samples at rate R the accumulated rotation applied to a
        // constant input is -2*pi*f*L/R (mod 2*pi).
        let rate = 960_000u32;
        let offset = 150_000i32;
        let mut trans = Translate::new(rate, offset);

        let len = 1000usize;
        let input = vec![Sample::new(1.0, 0.0); len + 1];
        let mut out = Vec::new();
        trans.iq_received(&mut out, &input);

        let expected =
            -2.0 * std::f64::consts::PI * offset as f64 * len as f64 / rate as f64;
        let expected = expected.rem_euclid(2.0 * std::f64::consts::PI);
        let got = (out[len].im as f64)
            .atan2(out[len].re as f64)
            .rem_euclid(2.0 * std::f64::consts::PI);
        assert_relative_eq!(got, expected, epsilon = 1e-3);
    }

    #[test]
    fn test_phase_index_wraps_across_batches() {
        let rate = 960_000u32;
        let offset = 200_000i32;

        let input: Vec<Sample> = (0..96)
            .map(|i| Sample::new((i as f32 * 0.1).cos(), (i as f32 * 0.1).sin()))
            .collect();

        let mut whole = Translate::new(rate, offset);
        let mut split = Translate::new(rate, offset);

        let mut out_whole = Vec::new();
        whole.iq_received(&mut out_whole, &input);

        let mut out_a = Vec::new();
        let mut out_b = Vec::new();
        // 37 is deliberately not a divisor of the 24-entry table
        split.iq_received(&mut out_a, &input[..37]);
        split.iq_received(&mut out_b, &input[37..]);
        out_a.extend_from_slice(&out_b);

        assert_eq!(out_whole, out_a);
    }

    #[test]
    fn test_set_offset_resets_phase() {
        let mut trans = Translate::new(960_000, 200_000);
        let input = vec![Sample::new(1.0, 0.0); 10];
        let mut first = Vec::new();
        trans.iq_received(&mut first, &input);

        // Re-applying the same offset restarts the table from index zero
        trans.set_offset(200_000);
        let mut second = Vec::new();
        trans.iq_received(&mut second, &input);
        assert_eq!(first, second);
    }
}
