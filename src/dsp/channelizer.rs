//! Multi-stage channelizers for the two supported tuner rates.
//!
//! A channelizer owns a pool of long-lived decimator stages and, per selected
//! bandwidth, composes a short-lived [`Cascade`] over them. Because the pool
//! outlives the cascade, delay lines persist across bandwidth changes: a mode
//! switch costs a brief transient instead of a full refill.
//!
//! Each variant declares a fixed cascade menu; the overall decimation always
//! lands on the channel rate `tuner_rate / dec_fact()`.

use crate::dsp::coeffs;
use crate::dsp::decimator::{Cascade, Decimator};
use crate::error::{Error, Result};
use crate::Sample;

/// Channel bandwidth selection.
///
/// `Wide` leaves the channel at the widest rate the tuner supports (192 kHz
/// or 160 kHz) for wideband FM; the three narrow modes land on 32 kHz or
/// 16 kHz with a shaping filter matched to the channel raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bandwidth {
    /// Widest passband, for broadcast FM.
    Wide,
    /// 20 kHz channel (25 kHz raster shaping).
    Khz20,
    /// 10 kHz channel (12.5 kHz raster shaping).
    Khz10,
    /// 6 kHz channel (SSB-width shaping).
    Khz6,
}

/// Channelizer for a 960 kHz tuner.
pub struct Channelizer960 {
    dec_960k_192k: Decimator<Sample>,
    dec_192k_64k: Decimator<Sample>,
    dec_64k_32k: Decimator<Sample>,
    dec_192k_48k: Decimator<Sample>,
    dec_48k_16k: Decimator<Sample>,
    ch_filt: Decimator<Sample>,
    ch_filt_narr: Decimator<Sample>,
    ch_filt_6k: Decimator<Sample>,
    bw: Bandwidth,
}

impl Channelizer960 {
    fn new() -> Self {
        Self {
            dec_960k_192k: Decimator::new(5, &coeffs::DEC_960K_192K),
            dec_192k_64k: Decimator::new(3, &coeffs::DEC_192K_64K),
            dec_64k_32k: Decimator::new(2, &coeffs::DEC_64K_32K),
            dec_192k_48k: Decimator::new(4, &coeffs::DEC_192K_48K),
            dec_48k_16k: Decimator::new(3, &coeffs::DEC_48K_16K),
            ch_filt: Decimator::new(1, &coeffs::CHANNEL_25K),
            ch_filt_narr: Decimator::new(1, &coeffs::CHANNEL_12K5),
            ch_filt_6k: Decimator::new(1, &coeffs::CHANNEL_SSB),
            bw: Bandwidth::Khz20,
        }
    }

    fn cascade(&mut self) -> Cascade<'_, Sample> {
        match self.bw {
            Bandwidth::Wide => Cascade::new(vec![&mut self.dec_960k_192k]),
            Bandwidth::Khz20 => Cascade::new(vec![
                &mut self.dec_960k_192k,
                &mut self.dec_192k_64k,
                &mut self.dec_64k_32k,
                &mut self.ch_filt,
            ]),
            Bandwidth::Khz10 => Cascade::new(vec![
                &mut self.dec_960k_192k,
                &mut self.dec_192k_48k,
                &mut self.dec_48k_16k,
                &mut self.ch_filt_narr,
            ]),
            Bandwidth::Khz6 => Cascade::new(vec![
                &mut self.dec_960k_192k,
                &mut self.dec_192k_48k,
                &mut self.dec_48k_16k,
                &mut self.ch_filt_6k,
            ]),
        }
    }

    fn dec_fact(&self) -> u32 {
        match self.bw {
            Bandwidth::Wide => self.dec_960k_192k.dec_fact(),
            Bandwidth::Khz20 => {
                self.dec_960k_192k.dec_fact()
                    * self.dec_192k_64k.dec_fact()
                    * self.dec_64k_32k.dec_fact()
                    * self.ch_filt.dec_fact()
            }
            Bandwidth::Khz10 => {
                self.dec_960k_192k.dec_fact()
                    * self.dec_192k_48k.dec_fact()
                    * self.dec_48k_16k.dec_fact()
                    * self.ch_filt_narr.dec_fact()
            }
            Bandwidth::Khz6 => {
                self.dec_960k_192k.dec_fact()
                    * self.dec_192k_48k.dec_fact()
                    * self.dec_48k_16k.dec_fact()
                    * self.ch_filt_6k.dec_fact()
            }
        }
    }
}

/// Channelizer for a 2.4 MHz tuner.
pub struct Channelizer2400 {
    dec_2400k_800k: Decimator<Sample>,
    dec_800k_160k: Decimator<Sample>,
    dec_160k_32k: Decimator<Sample>,
    dec_32k_16k: Decimator<Sample>,
    ch_filt: Decimator<Sample>,
    ch_filt_narr: Decimator<Sample>,
    ch_filt_6k: Decimator<Sample>,
    bw: Bandwidth,
}

impl Channelizer2400 {
    fn new() -> Self {
        Self {
            dec_2400k_800k: Decimator::new(3, &coeffs::DEC_2400K_800K),
            dec_800k_160k: Decimator::new(5, &coeffs::DEC_800K_160K),
            dec_160k_32k: Decimator::new(5, &coeffs::DEC_160K_32K),
            dec_32k_16k: Decimator::new(2, &coeffs::DEC_32K_16K),
            ch_filt: Decimator::new(1, &coeffs::CHANNEL_25K),
            ch_filt_narr: Decimator::new(1, &coeffs::CHANNEL_12K5),
            ch_filt_6k: Decimator::new(1, &coeffs::CHANNEL_SSB),
            bw: Bandwidth::Khz20,
        }
    }

    fn cascade(&mut self) -> Cascade<'_, Sample> {
        match self.bw {
            Bandwidth::Wide => Cascade::new(vec![
                &mut self.dec_2400k_800k,
                &mut self.dec_800k_160k,
            ]),
            Bandwidth::Khz20 => Cascade::new(vec![
                &mut self.dec_2400k_800k,
                &mut self.dec_800k_160k,
                &mut self.dec_160k_32k,
                &mut self.ch_filt,
            ]),
            Bandwidth::Khz10 => Cascade::new(vec![
                &mut self.dec_2400k_800k,
                &mut self.dec_800k_160k,
                &mut self.dec_160k_32k,
                &mut self.dec_32k_16k,
                &mut self.ch_filt_narr,
            ]),
            Bandwidth::Khz6 => Cascade::new(vec![
                &mut self.dec_2400k_800k,
                &mut self.dec_800k_160k,
                &mut self.dec_160k_32k,
                &mut self.dec_32k_16k,
                &mut self.ch_filt_6k,
            ]),
        }
    }

    fn dec_fact(&self) -> u32 {
        match self.bw {
            Bandwidth::Wide => {
                self.dec_2400k_800k.dec_fact() * self.dec_800k_160k.dec_fact()
            }
            Bandwidth::Khz20 => {
                self.dec_2400k_800k.dec_fact()
                    * self.dec_800k_160k.dec_fact()
                    * self.dec_160k_32k.dec_fact()
                    * self.ch_filt.dec_fact()
            }
            Bandwidth::Khz10 => {
                self.dec_2400k_800k.dec_fact()
                    * self.dec_800k_160k.dec_fact()
                    * self.dec_160k_32k.dec_fact()
                    * self.dec_32k_16k.dec_fact()
                    * self.ch_filt_narr.dec_fact()
            }
            Bandwidth::Khz6 => {
                self.dec_2400k_800k.dec_fact()
                    * self.dec_800k_160k.dec_fact()
                    * self.dec_160k_32k.dec_fact()
                    * self.dec_32k_16k.dec_fact()
                    * self.ch_filt_6k.dec_fact()
            }
        }
    }
}

/// A channelizer for one of the two supported tuner rates.
///
/// Dispatch is a `match` over the variant rather than virtual calls, which
/// lets the compiler see straight through to the cascade loops.
pub enum Channelizer {
    /// 960 kHz tuner variant.
    Rate960(Channelizer960),
    /// 2.4 MHz tuner variant.
    Rate2400(Channelizer2400),
}

impl Channelizer {
    /// Build the channelizer variant for `tuner_rate`, starting in the
    /// 20 kHz bandwidth mode.
    pub fn new(tuner_rate: u32) -> Result<Self> {
        match tuner_rate {
            960_000 => Ok(Channelizer::Rate960(Channelizer960::new())),
            2_400_000 => Ok(Channelizer::Rate2400(Channelizer2400::new())),
            other => Err(Error::UnsupportedSampleRate(other)),
        }
    }

    /// The tuner rate this channelizer was built for.
    pub fn tuner_rate(&self) -> u32 {
        match self {
            Channelizer::Rate960(_) => 960_000,
            Channelizer::Rate2400(_) => 2_400_000,
        }
    }

    /// The currently selected bandwidth.
    pub fn bw(&self) -> Bandwidth {
        match self {
            Channelizer::Rate960(ch) => ch.bw,
            Channelizer::Rate2400(ch) => ch.bw,
        }
    }

    /// Select a bandwidth mode.
    ///
    /// Only the cascade composition changes; the stage pool and its delay
    /// lines stay put, so the switch costs a short transient and nothing
    /// else.
    pub fn set_bw(&mut self, bw: Bandwidth) {
        match self {
            Channelizer::Rate960(ch) => ch.bw = bw,
            Channelizer::Rate2400(ch) => ch.bw = bw,
        }
    }

    /// Overall decimation factor of the active cascade.
    pub fn dec_fact(&self) -> u32 {
        match self {
            Channelizer::Rate960(ch) => ch.dec_fact(),
            Channelizer::Rate2400(ch) => ch.dec_fact(),
        }
    }

    /// The channel sample rate, `tuner_rate / dec_fact()`.
    pub fn ch_samp_rate(&self) -> u32 {
        self.tuner_rate() / self.dec_fact()
    }

    /// Run a batch through the active cascade, writing the channel-rate
    /// stream into `out`.
    pub fn iq_received(&mut self, out: &mut Vec<Sample>, input: &[Sample]) {
        match self {
            Channelizer::Rate960(ch) => ch.cascade().decimate(out, input),
            Channelizer::Rate2400(ch) => ch.cascade().decimate(out, input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_rate_rejected() {
        assert!(matches!(
            Channelizer::new(1_024_000),
            Err(Error::UnsupportedSampleRate(1_024_000))
        ));
    }

    #[test]
    fn test_default_bandwidth_is_20k() {
        let ch = Channelizer::new(960_000).unwrap();
        assert_eq!(ch.bw(), Bandwidth::Khz20);
    }

    #[test]
    fn test_960k_cascade_menu() {
        let mut ch = Channelizer::new(960_000).unwrap();
        let expect = [
            (Bandwidth::Wide, 5, 192_000),
            (Bandwidth::Khz20, 30, 32_000),
            (Bandwidth::Khz10, 60, 16_000),
            (Bandwidth::Khz6, 60, 16_000),
        ];
        for (bw, fact, rate) in expect {
            ch.set_bw(bw);
            assert_eq!(ch.dec_fact(), fact);
            assert_eq!(ch.ch_samp_rate(), rate);
        }
    }

    #[test]
    fn test_2400k_cascade_menu() {
        let mut ch = Channelizer::new(2_400_000).unwrap();
        let expect = [
            (Bandwidth::Wide, 15, 160_000),
            (Bandwidth::Khz20, 75, 32_000),
            (Bandwidth::Khz10, 150, 16_000),
            (Bandwidth::Khz6, 150, 16_000),
        ];
        for (bw, fact, rate) in expect {
            ch.set_bw(bw);
            assert_eq!(ch.dec_fact(), fact);
            assert_eq!(ch.ch_samp_rate(), rate);
        }
    }

    #[test]
    fn test_rate_identity_holds_for_every_mode() {
        for rate in [960_000, 2_400_000] {
            let mut ch = Channelizer::new(rate).unwrap();
            for bw in [Bandwidth::Wide, Bandwidth::Khz20, Bandwidth::Khz10, Bandwidth::Khz6] {
                ch.set_bw(bw);
                assert_eq!(ch.ch_samp_rate() * ch.dec_fact(), rate);
            }
        }
    }

    #[test]
    fn test_output_length_matches_dec_fact() {
        let mut ch = Channelizer::new(960_000).unwrap();
        let input = vec![Sample::new(1.0, 0.0); 9600];
        let mut out = Vec::new();

        ch.iq_received(&mut out, &input);
        assert_eq!(out.len(), 9600 / 30);

        ch.set_bw(Bandwidth::Khz10);
        ch.iq_received(&mut out, &input);
        assert_eq!(out.len(), 9600 / 60);
    }

    #[test]
    fn test_bandwidth_switch_keeps_pool_state() {
        // The first stage is shared between modes: after a switch its delay
        // line is already full, so a DC input settles immediately rather than
        // ramping from zero.
        let mut ch = Channelizer::new(960_000).unwrap();
        let input = vec![Sample::new(1.0, 0.0); 9600];
        let mut out = Vec::new();
        ch.iq_received(&mut out, &input);

        ch.set_bw(Bandwidth::Wide);
        ch.iq_received(&mut out, &input);
        let first = out[0];
        assert!(
            (first.re - 1.0).abs() < 1e-3 && first.im.abs() < 1e-3,
            "first-stage state was lost across a bandwidth switch: {first}"
        );
    }
}
