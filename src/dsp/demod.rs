//! FM and AM demodulation to 16 kHz audio.
//!
//! The FM path uses a mixed delay/phase-adapter demodulator on
//! amplitude-normalized samples: compared with the plain
//! `arg(s * conj(s_prev))` form it behaves better at low signal levels and
//! pipelines trivially. The raw phase stream is then decimated to audio,
//! through an extra wideband stage when the channel rate is above 32 kHz.

use crate::dsp::coeffs;
use crate::dsp::decimator::Decimator;
use crate::Sample;

/// FM demodulator with deviation-matched audio gain.
///
/// The gain maps full deviation to a peak audio amplitude of 1.0 and is then
/// halved for 6 dB of headroom, so a full-deviation signal peaks at 0.5 on
/// the audio output. The gain rides on the 32k->16k audio decimator's
/// coefficients.
pub struct FmDemodulator {
    iold: f32,
    qold: f32,
    audio_dec_wb: Option<Decimator<f32>>,
    audio_dec: Decimator<f32>,
}

impl FmDemodulator {
    /// Create a demodulator for a channel at `samp_rate` Hz expecting at most
    /// `max_dev` Hz of deviation.
    pub fn new(samp_rate: u32, max_dev: f64) -> Self {
        let mut demod = Self {
            iold: 1.0,
            qold: 1.0,
            audio_dec_wb: None,
            audio_dec: Decimator::new(2, &coeffs::DEC_AUDIO_32K_16K),
        };
        demod.set_demod_params(samp_rate, max_dev);
        demod
    }

    /// Reconfigure for a new channel rate and maximum deviation.
    ///
    /// Channel rates above 32 kHz get a wideband pre-stage (160k->32k or
    /// 192k->32k) ahead of the common 32k->16k audio decimator.
    pub fn set_demod_params(&mut self, samp_rate: u32, max_dev: f64) {
        // Map full deviation to peak audio 1.0, then back off 6 dB.
        let mut adj = f64::from(samp_rate) / (2.0 * std::f64::consts::PI * max_dev);
        adj /= 2.0;
        self.audio_dec.set_gain(20.0 * adj.log10());

        self.audio_dec_wb = match samp_rate {
            160_000 => Some(Decimator::new(5, &coeffs::DEC_160K_32K)),
            192_000 => Some(Decimator::new(6, &coeffs::DEC_192K_32K)),
            _ => None,
        };
    }

    /// Demodulate a channel-rate batch into 16 kHz audio.
    pub fn iq_received(&mut self, samples: &[Sample]) -> Vec<f32> {
        // FM = atan2(Qn*In-1 - In*Qn-1, In*In-1 + Qn*Qn-1), from
        // "Watch your Is and Qs" (article-sdr-is-qs.pdf).
        let mut audio = Vec::with_capacity(samples.len());
        for &samp in samples {
            let mag = samp.norm();
            let samp = if mag > 0.0 { samp / mag } else { samp };

            let i = samp.re;
            let q = samp.im;
            let demod = (q * self.iold - i * self.qold).atan2(i * self.iold + q * self.qold);
            self.iold = i;
            self.qold = q;
            audio.push(demod);
        }

        let mut dec_audio = Vec::new();
        match &mut self.audio_dec_wb {
            Some(wb) => {
                let mut dec_audio1 = Vec::new();
                wb.decimate(&mut dec_audio1, &audio);
                self.audio_dec.decimate(&mut dec_audio, &dec_audio1);
            }
            None => self.audio_dec.decimate(&mut dec_audio, &audio),
        }
        dec_audio
    }
}

/// AM envelope detector.
///
/// Emits `gain * |s|` per input sample, at the channelizer's output rate.
/// The 10 kHz bandwidth mode the AM path runs under lands on 16 kHz for both
/// tuner rates, which already satisfies the audio sink contract.
pub struct AmDemodulator {
    gain: f32,
}

impl AmDemodulator {
    /// Create an envelope detector with unity gain.
    pub fn new() -> Self {
        Self { gain: 1.0 }
    }

    /// Set the envelope gain in dB.
    pub fn set_gain(&mut self, gain_db: f64) {
        self.gain = 10f64.powf(gain_db / 20.0) as f32;
    }

    /// Detect the envelope of a channel-rate batch.
    pub fn iq_received(&mut self, samples: &[Sample]) -> Vec<f32> {
        samples.iter().map(|s| self.gain * s.norm()).collect()
    }
}

impl Default for AmDemodulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// Narrowband FM gain constant: full deviation maps to 0.5 peak audio.
    const HEADROOM_PEAK: f64 = 0.5;

    fn fm_tone(samp_rate: u32, dev: f64, tone: f64, len: usize) -> Vec<Sample> {
        (0..len)
            .map(|k| {
                let t = k as f64 / f64::from(samp_rate);
                let phase = (dev / tone) * (2.0 * PI * tone * t).sin();
                Sample::new(phase.cos() as f32, phase.sin() as f32)
            })
            .collect()
    }

    #[test]
    fn test_unmodulated_carrier_is_silent() {
        let mut demod = FmDemodulator::new(32_000, 5_000.0);
        let input = vec![Sample::new(0.7, 0.0); 640];
        let audio = demod.iq_received(&input);
        assert_eq!(audio.len(), 320);
        // The (1, 1) seed makes the very first phase difference nonzero; it
        // rings through the audio decimator for taps/2 outputs and is gone.
        for &a in &audio[40..] {
            assert!(a.abs() < 1e-6, "carrier should demodulate to silence");
        }
    }

    #[test]
    fn test_zero_samples_produce_zero_audio() {
        // An idle channel delivers zero-valued samples; normalization must
        // not turn those into NaN.
        let mut demod = FmDemodulator::new(32_000, 5_000.0);
        let input = vec![Sample::new(0.0, 0.0); 64];
        let audio = demod.iq_received(&input);
        for &a in &audio {
            assert!(a.is_finite());
        }
    }

    #[test]
    fn test_amplitude_is_normalized_away() {
        // The same FM signal at two very different amplitudes demodulates
        // identically.
        let mut loud = FmDemodulator::new(32_000, 5_000.0);
        let mut quiet = FmDemodulator::new(32_000, 5_000.0);

        let input = fm_tone(32_000, 3_000.0, 1_000.0, 6_400);
        let attenuated: Vec<Sample> = input.iter().map(|&s| s * 0.01).collect();

        let a = loud.iq_received(&input);
        let b = quiet.iq_received(&attenuated);
        for (&x, &y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(x, y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_narrowband_tone_amplitude() {
        // 3 kHz deviation against a 5 kHz maximum: expect 3/5 of the
        // full-deviation peak.
        let mut demod = FmDemodulator::new(32_000, 5_000.0);
        let input = fm_tone(32_000, 3_000.0, 1_000.0, 32_000);
        let audio = demod.iq_received(&input);

        let settled = &audio[audio.len() / 2..];
        let peak = settled.iter().fold(0.0f32, |a, &b| a.max(b.abs()));
        let expected = (3_000.0 / 5_000.0) * HEADROOM_PEAK;
        assert_relative_eq!(f64::from(peak), expected, epsilon = 0.02);
    }

    #[test]
    fn test_wideband_stage_is_inserted_above_32k() {
        let mut demod = FmDemodulator::new(192_000, 75_000.0);
        assert!(demod.audio_dec_wb.is_some());
        let input = vec![Sample::new(1.0, 0.0); 1_920];
        let audio = demod.iq_received(&input);
        // 192k -> 32k -> 16k is a twelvefold reduction
        assert_eq!(audio.len(), 160);

        demod.set_demod_params(32_000, 5_000.0);
        assert!(demod.audio_dec_wb.is_none());
    }

    #[test]
    fn test_wideband_160k_stage() {
        let mut demod = FmDemodulator::new(160_000, 75_000.0);
        let input = vec![Sample::new(1.0, 0.0); 1_600];
        let audio = demod.iq_received(&input);
        assert_eq!(audio.len(), 160);
    }

    #[test]
    fn test_am_envelope() {
        let mut demod = AmDemodulator::new();
        let input = vec![Sample::new(0.3, 0.4); 100];
        let audio = demod.iq_received(&input);
        assert_eq!(audio.len(), 100);
        for &a in &audio {
            assert_relative_eq!(a, 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_am_gain() {
        let mut demod = AmDemodulator::new();
        demod.set_gain(20.0);
        let input = vec![Sample::new(0.05, 0.0); 10];
        let audio = demod.iq_received(&input);
        for &a in &audio {
            assert_relative_eq!(a, 0.5, epsilon = 1e-6);
        }
    }
}
