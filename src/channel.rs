//! The per-receiver DSP channel.
//!
//! A [`Channel`] wires translator, channelizer and demodulators into one
//! pipeline: tuner-rate I/Q goes in, 16 kHz audio comes out. It owns both
//! demodulators and switches between them with the [`Modulation`] selector,
//! mirroring the bandwidth mode onto the channelizer.

use std::fmt;
use std::str::FromStr;

use crate::dsp::channelizer::{Bandwidth, Channelizer};
use crate::dsp::demod::{AmDemodulator, FmDemodulator};
use crate::dsp::translate::Translate;
use crate::error::{Error, Result};
use crate::Sample;

/// Modulation selected for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulation {
    /// Narrowband FM, 5 kHz deviation in a 20 kHz channel.
    Fm,
    /// Wideband (broadcast) FM, 75 kHz deviation.
    Wbfm,
    /// Amplitude modulation in a 10 kHz channel.
    Am,
}

impl FromStr for Modulation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FM" => Ok(Modulation::Fm),
            "WBFM" => Ok(Modulation::Wbfm),
            "AM" => Ok(Modulation::Am),
            other => Err(Error::UnknownModulation(other.to_string())),
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modulation::Fm => write!(f, "FM"),
            Modulation::Wbfm => write!(f, "WBFM"),
            Modulation::Am => write!(f, "AM"),
        }
    }
}

type PreDemodTap = Box<dyn FnMut(&[Sample])>;

/// One receive channel: translate, channelize, demodulate.
///
/// Batch lengths handed to [`iq_received`](Self::iq_received) must be a
/// multiple of the overall decimation of every mode, audio stages included:
/// a multiple of 60 at 960 kHz, 150 at 2.4 MHz (any multiple of 300 covers
/// both).
pub struct Channel {
    sample_rate: u32,
    trans: Translate,
    channelizer: Channelizer,
    fm_demod: FmDemodulator,
    am_demod: AmDemodulator,
    modulation: Modulation,
    enabled: bool,
    pre_demod: Vec<PreDemodTap>,
    translated: Vec<Sample>,
    channelized: Vec<Sample>,
}

impl Channel {
    /// Create a channel at `fq_offset` Hz from the tuner center.
    ///
    /// Fails for tuner rates without a channelizer variant. The channel
    /// starts enabled, in FM.
    pub fn new(fq_offset: i32, sample_rate: u32) -> Result<Self> {
        let channelizer = Channelizer::new(sample_rate)?;
        let mut channel = Self {
            sample_rate,
            trans: Translate::new(sample_rate, fq_offset),
            channelizer,
            fm_demod: FmDemodulator::new(32_000, 5_000.0),
            am_demod: AmDemodulator::new(),
            modulation: Modulation::Fm,
            enabled: true,
            pre_demod: Vec::new(),
            translated: Vec::new(),
            channelized: Vec::new(),
        };
        channel.set_modulation(Modulation::Fm);
        Ok(channel)
    }

    /// The tuner rate this channel consumes.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Move the channel to a new offset from the tuner center.
    ///
    /// The translator phase restarts from zero on every call.
    pub fn set_fq_offset(&mut self, fq_offset: i32) {
        self.trans.set_offset(fq_offset);
    }

    /// Select the modulation, retargeting bandwidth and demodulator gain.
    pub fn set_modulation(&mut self, modulation: Modulation) {
        match modulation {
            Modulation::Fm => {
                self.channelizer.set_bw(Bandwidth::Khz20);
                self.fm_demod
                    .set_demod_params(self.channelizer.ch_samp_rate(), 5_000.0);
            }
            Modulation::Wbfm => {
                self.channelizer.set_bw(Bandwidth::Wide);
                self.fm_demod
                    .set_demod_params(self.channelizer.ch_samp_rate(), 75_000.0);
            }
            Modulation::Am => {
                self.channelizer.set_bw(Bandwidth::Khz10);
            }
        }
        self.modulation = modulation;
    }

    /// The currently selected modulation.
    pub fn modulation(&self) -> Modulation {
        self.modulation
    }

    /// The channelizer output rate for the current bandwidth.
    pub fn ch_samp_rate(&self) -> u32 {
        self.channelizer.ch_samp_rate()
    }

    /// Subscribe to the post-channelizer complex stream.
    ///
    /// The tap fires once per processed batch, before demodulation, with
    /// samples at [`ch_samp_rate`](Self::ch_samp_rate). The buffer must not
    /// be retained past the callback.
    pub fn on_pre_demod(&mut self, tap: impl FnMut(&[Sample]) + 'static) {
        self.pre_demod.push(Box::new(tap));
    }

    /// Process a tuner-rate batch into 16 kHz audio.
    ///
    /// A disabled channel drops the batch and returns no audio.
    pub fn iq_received(&mut self, samples: &[Sample]) -> Vec<f32> {
        if !self.enabled {
            return Vec::new();
        }
        self.trans.iq_received(&mut self.translated, samples);
        self.channelizer
            .iq_received(&mut self.channelized, &self.translated);
        for tap in &mut self.pre_demod {
            tap(&self.channelized);
        }
        match self.modulation {
            Modulation::Fm | Modulation::Wbfm => self.fm_demod.iq_received(&self.channelized),
            Modulation::Am => self.am_demod.iq_received(&self.channelized),
        }
    }

    /// Let batches through again. Idempotent.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Drop incoming batches. Idempotent.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether the channel currently processes batches.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_unsupported_rate_fails() {
        assert!(Channel::new(0, 1_000_000).is_err());
    }

    #[test]
    fn test_defaults() {
        let ch = Channel::new(0, 960_000).unwrap();
        assert_eq!(ch.modulation(), Modulation::Fm);
        assert!(ch.is_enabled());
        assert_eq!(ch.ch_samp_rate(), 32_000);
    }

    #[test]
    fn test_modulation_selects_bandwidth() {
        let mut ch = Channel::new(0, 960_000).unwrap();

        ch.set_modulation(Modulation::Wbfm);
        assert_eq!(ch.ch_samp_rate(), 192_000);

        ch.set_modulation(Modulation::Am);
        assert_eq!(ch.ch_samp_rate(), 16_000);

        ch.set_modulation(Modulation::Fm);
        assert_eq!(ch.ch_samp_rate(), 32_000);
    }

    #[test]
    fn test_modulation_from_str() {
        assert_eq!("FM".parse::<Modulation>().unwrap(), Modulation::Fm);
        assert_eq!("WBFM".parse::<Modulation>().unwrap(), Modulation::Wbfm);
        assert_eq!("AM".parse::<Modulation>().unwrap(), Modulation::Am);
        assert!(matches!(
            "LSB".parse::<Modulation>(),
            Err(Error::UnknownModulation(_))
        ));
        // Matching is case sensitive, as in the configuration file
        assert!("fm".parse::<Modulation>().is_err());
    }

    #[test]
    fn test_disabled_channel_produces_nothing() {
        let mut ch = Channel::new(0, 960_000).unwrap();
        let input = vec![Sample::new(1.0, 0.0); 9600];

        ch.disable();
        ch.disable(); // idempotent
        assert!(ch.iq_received(&input).is_empty());

        ch.enable();
        ch.enable();
        assert_eq!(ch.iq_received(&input).len(), 9600 / 60);
    }

    #[test]
    fn test_set_modulation_twice_is_idempotent() {
        let mut once = Channel::new(0, 960_000).unwrap();
        let mut twice = Channel::new(0, 960_000).unwrap();
        once.set_modulation(Modulation::Wbfm);
        twice.set_modulation(Modulation::Wbfm);
        twice.set_modulation(Modulation::Wbfm);

        let input: Vec<Sample> = (0..9600)
            .map(|i| {
                let ang = i as f32 * 0.01;
                Sample::new(ang.cos(), ang.sin())
            })
            .collect();
        assert_eq!(once.iq_received(&input), twice.iq_received(&input));
    }

    #[test]
    fn test_pre_demod_tap_sees_channel_rate_batches() {
        let mut ch = Channel::new(0, 960_000).unwrap();
        let seen = Rc::new(RefCell::new(0usize));
        let tap_seen = Rc::clone(&seen);
        ch.on_pre_demod(move |batch| {
            *tap_seen.borrow_mut() += batch.len();
        });

        let input = vec![Sample::new(1.0, 0.0); 9600];
        ch.iq_received(&input);
        assert_eq!(*seen.borrow(), 9600 / 30);

        ch.disable();
        ch.iq_received(&input);
        assert_eq!(*seen.borrow(), 9600 / 30, "tap must not fire when disabled");
    }
}
