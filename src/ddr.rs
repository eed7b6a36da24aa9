//! Digital drop receivers and their registry.
//!
//! A [`Ddr`] pairs a [`Channel`] with an absolute RF frequency and the name
//! of the tuner it rides on. The [`DdrRegistry`] owns every receiver in the
//! process, enforces name uniqueness at creation, and fans tuner events out
//! to the receivers bound to that tuner. All registry mutation happens on the
//! control path; the sample path only ever walks the existing entries.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::channel::{Channel, Modulation};
use crate::config::DdrConfig;
use crate::error::{Error, Result};
use crate::tuner::Tuner;
use crate::Sample;

/// Margin in Hz kept between a channel and the edge of the tuner passband.
const PASSBAND_MARGIN: f64 = 12_500.0;

type AudioSink = Box<dyn FnMut(&[f32])>;

/// A named digital drop receiver bound to a wideband tuner.
pub struct Ddr {
    name: String,
    fq: f64,
    wbrx: String,
    tuner_rate: u32,
    tuner_ready: bool,
    channel: Channel,
    sink: Option<AudioSink>,
}

impl std::fmt::Debug for Ddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ddr")
            .field("name", &self.name)
            .field("fq", &self.fq)
            .field("wbrx", &self.wbrx)
            .field("tuner_rate", &self.tuner_rate)
            .field("tuner_ready", &self.tuner_ready)
            .field("sink", &self.sink.as_ref().map(|_| "AudioSink"))
            .finish()
    }
}

impl Ddr {
    /// The receiver's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tuned RF frequency in Hz.
    pub fn fq(&self) -> f64 {
        self.fq
    }

    /// Name of the tuner this receiver is attached to.
    pub fn wbrx(&self) -> &str {
        &self.wbrx
    }

    /// Whether the channel currently fits the passband and processes batches.
    pub fn is_enabled(&self) -> bool {
        self.channel.is_enabled()
    }

    /// Whether the upstream tuner is delivering samples.
    pub fn is_ready(&self) -> bool {
        self.tuner_ready
    }

    /// The current modulation.
    pub fn modulation(&self) -> Modulation {
        self.channel.modulation()
    }

    /// Switch modulation on the live channel.
    pub fn set_modulation(&mut self, modulation: Modulation) {
        self.channel.set_modulation(modulation);
    }

    /// Sample rate of the pre-demodulation tap for the current bandwidth.
    pub fn pre_demod_sample_rate(&self) -> u32 {
        self.channel.ch_samp_rate()
    }

    /// Subscribe to the post-channelizer complex stream.
    pub fn on_pre_demod(&mut self, tap: impl FnMut(&[Sample]) + 'static) {
        self.channel.on_pre_demod(tap);
    }

    /// Attach the audio sink that receives the 16 kHz output.
    ///
    /// Every produced sample is written; backpressure is the sink's own
    /// business.
    pub fn set_audio_sink(&mut self, sink: impl FnMut(&[f32]) + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Feed one tuner-rate batch through the channel.
    pub fn iq_received(&mut self, samples: &[Sample]) {
        let audio = self.channel.iq_received(samples);
        if audio.is_empty() {
            return;
        }
        if let Some(sink) = &mut self.sink {
            sink(&audio);
        }
    }

    /// React to the tuner moving to `center_fq`.
    ///
    /// If the receiver no longer fits the passband the channel is disabled
    /// with a single warning; a later retune back into range re-enables it
    /// silently.
    pub fn tuner_fq_changed(&mut self, center_fq: u32) {
        let new_offset = self.fq - f64::from(center_fq);
        if new_offset.abs() > f64::from(self.tuner_rate / 2) - PASSBAND_MARGIN {
            if self.channel.is_enabled() {
                warn!("could not fit DDR {} into tuner {}", self.name, self.wbrx);
                self.channel.disable();
            }
            return;
        }
        self.channel.set_fq_offset(new_offset as i32);
        self.channel.enable();
    }

    /// React to the tuner's ready state.
    pub fn ready_state_changed(&mut self, ready: bool) {
        self.tuner_ready = ready;
    }
}

/// Owner of every drop receiver in the process.
///
/// Receivers are created through the registry so that name uniqueness is
/// checked before anything else is built; a failed creation leaves the
/// registry untouched.
#[derive(Default)]
pub struct DdrRegistry {
    ddrs: BTreeMap<String, Ddr>,
}

impl DdrRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a receiver named `name` from its configuration section,
    /// attached to `tuner` (the tuner the section's `WBRX` key names).
    ///
    /// Validates the configuration, builds the channel at offset
    /// `FQ - center_fq`, applies the configured modulation and runs the
    /// initial passband fit check. On any error nothing is registered.
    pub fn create(&mut self, name: &str, cfg: &DdrConfig, tuner: &dyn Tuner) -> Result<&mut Ddr> {
        if self.ddrs.contains_key(name) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        let fq = cfg.fq.ok_or_else(|| Error::MissingConfig {
            section: name.to_string(),
            key: "FQ",
        })?;
        let wbrx = cfg.wbrx.clone().ok_or_else(|| Error::MissingConfig {
            section: name.to_string(),
            key: "WBRX",
        })?;
        debug_assert_eq!(wbrx, tuner.name(), "receiver bound to the wrong tuner");

        let modulation: Modulation = cfg.modulation.as_deref().unwrap_or("FM").parse()?;

        let center_fq = tuner.center_fq();
        let mut channel = Channel::new((fq - f64::from(center_fq)) as i32, tuner.sample_rate())?;
        channel.set_modulation(modulation);

        let mut ddr = Ddr {
            name: name.to_string(),
            fq,
            wbrx,
            tuner_rate: tuner.sample_rate(),
            tuner_ready: tuner.is_ready(),
            channel,
            sink: None,
        };
        debug!(
            "DDR {}: fq={} offset={} modulation={}",
            name,
            fq,
            fq - f64::from(center_fq),
            modulation
        );
        ddr.tuner_fq_changed(center_fq);

        Ok(self.ddrs.entry(name.to_string()).or_insert(ddr))
    }

    /// Look up a receiver by name.
    pub fn get(&self, name: &str) -> Option<&Ddr> {
        self.ddrs.get(name)
    }

    /// Look up a receiver by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Ddr> {
        self.ddrs.get_mut(name)
    }

    /// Remove a receiver, detaching it from tuner event fan-out.
    pub fn remove(&mut self, name: &str) -> Option<Ddr> {
        self.ddrs.remove(name)
    }

    /// Number of registered receivers.
    pub fn len(&self) -> usize {
        self.ddrs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ddrs.is_empty()
    }

    /// Names of all registered receivers.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ddrs.keys().map(String::as_str)
    }

    /// Deliver one sample batch from the named tuner to every receiver
    /// bound to it.
    pub fn iq_received(&mut self, tuner_name: &str, samples: &[Sample]) {
        for ddr in self.ddrs.values_mut().filter(|d| d.wbrx == tuner_name) {
            ddr.iq_received(samples);
        }
    }

    /// Fan out a retune of the named tuner.
    pub fn tuner_fq_changed(&mut self, tuner_name: &str, center_fq: u32) {
        for ddr in self.ddrs.values_mut().filter(|d| d.wbrx == tuner_name) {
            ddr.tuner_fq_changed(center_fq);
        }
    }

    /// Fan out a ready-state change of the named tuner.
    pub fn ready_state_changed(&mut self, tuner_name: &str, ready: bool) {
        for ddr in self.ddrs.values_mut().filter(|d| d.wbrx == tuner_name) {
            ddr.ready_state_changed(ready);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuner::ManualTuner;

    fn cfg(fq: f64) -> DdrConfig {
        DdrConfig {
            fq: Some(fq),
            wbrx: Some("WBRX1".to_string()),
            modulation: None,
        }
    }

    fn tuner() -> ManualTuner {
        ManualTuner::new("WBRX1", 2_400_000, 100_000_000)
    }

    #[test]
    fn test_create_and_lookup() {
        let mut registry = DdrRegistry::new();
        let tuner = tuner();
        registry.create("RX1", &cfg(100_025_000.0), &tuner).unwrap();

        let ddr = registry.get("RX1").unwrap();
        assert_eq!(ddr.name(), "RX1");
        assert_eq!(ddr.fq(), 100_025_000.0);
        assert_eq!(ddr.modulation(), Modulation::Fm);
        assert!(ddr.is_enabled());
        assert!(ddr.is_ready());
    }

    #[test]
    fn test_duplicate_name_rejected_without_mutation() {
        let mut registry = DdrRegistry::new();
        let tuner = tuner();
        registry.create("RX1", &cfg(100_025_000.0), &tuner).unwrap();

        let err = registry
            .create("RX1", &cfg(100_050_000.0), &tuner)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateName(_)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("RX1").unwrap().fq(), 100_025_000.0);
    }

    #[test]
    fn test_missing_keys_rejected() {
        let mut registry = DdrRegistry::new();
        let tuner = tuner();

        let no_fq = DdrConfig {
            fq: None,
            wbrx: Some("WBRX1".to_string()),
            modulation: None,
        };
        assert!(matches!(
            registry.create("RX1", &no_fq, &tuner),
            Err(Error::MissingConfig { key: "FQ", .. })
        ));

        let no_wbrx = DdrConfig {
            fq: Some(100_025_000.0),
            wbrx: None,
            modulation: None,
        };
        assert!(matches!(
            registry.create("RX1", &no_wbrx, &tuner),
            Err(Error::MissingConfig { key: "WBRX", .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_modulation_rejected() {
        let mut registry = DdrRegistry::new();
        let tuner = tuner();
        let bad = DdrConfig {
            fq: Some(100_025_000.0),
            wbrx: Some("WBRX1".to_string()),
            modulation: Some("USB".to_string()),
        };
        assert!(matches!(
            registry.create("RX1", &bad, &tuner),
            Err(Error::UnknownModulation(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_modulation_from_config() {
        let mut registry = DdrRegistry::new();
        let tuner = tuner();
        let wbfm = DdrConfig {
            fq: Some(100_200_000.0),
            wbrx: Some("WBRX1".to_string()),
            modulation: Some("WBFM".to_string()),
        };
        let ddr = registry.create("RX1", &wbfm, &tuner).unwrap();
        assert_eq!(ddr.modulation(), Modulation::Wbfm);
        assert_eq!(ddr.pre_demod_sample_rate(), 160_000);
    }

    #[test]
    fn test_fit_boundary() {
        // Passband half-width is rate/2 - 12500: 1187500 Hz here.
        let mut registry = DdrRegistry::new();
        let tuner = tuner();

        registry
            .create("FITS", &cfg(100_000_000.0 + 1_187_500.0), &tuner)
            .unwrap();
        assert!(registry.get("FITS").unwrap().is_enabled());

        registry
            .create("WIDE", &cfg(100_000_000.0 + 1_187_501.0), &tuner)
            .unwrap();
        assert!(!registry.get("WIDE").unwrap().is_enabled());

        registry
            .create("LOW", &cfg(100_000_000.0 - 1_187_500.0), &tuner)
            .unwrap();
        assert!(registry.get("LOW").unwrap().is_enabled());
    }

    #[test]
    fn test_retune_disables_and_reenables() {
        let mut registry = DdrRegistry::new();
        let tuner = tuner();
        registry.create("RX1", &cfg(100_025_000.0), &tuner).unwrap();

        registry.tuner_fq_changed("WBRX1", 99_000_000);
        assert!(!registry.get("RX1").unwrap().is_enabled());

        registry.tuner_fq_changed("WBRX1", 100_000_000);
        assert!(registry.get("RX1").unwrap().is_enabled());
    }

    #[test]
    fn test_events_only_reach_bound_receivers() {
        let mut registry = DdrRegistry::new();
        let tuner_a = ManualTuner::new("A", 2_400_000, 100_000_000);
        let tuner_b = ManualTuner::new("B", 2_400_000, 100_000_000);

        let mut cfg_a = cfg(100_025_000.0);
        cfg_a.wbrx = Some("A".to_string());
        let mut cfg_b = cfg(100_025_000.0);
        cfg_b.wbrx = Some("B".to_string());

        registry.create("RXA", &cfg_a, &tuner_a).unwrap();
        registry.create("RXB", &cfg_b, &tuner_b).unwrap();

        // Push tuner A far away; only RXA drops out.
        registry.tuner_fq_changed("A", 90_000_000);
        assert!(!registry.get("RXA").unwrap().is_enabled());
        assert!(registry.get("RXB").unwrap().is_enabled());
    }

    #[test]
    fn test_remove() {
        let mut registry = DdrRegistry::new();
        let tuner = tuner();
        registry.create("RX1", &cfg(100_025_000.0), &tuner).unwrap();
        assert!(registry.remove("RX1").is_some());
        assert!(registry.is_empty());
        // The name is free again
        registry.create("RX1", &cfg(100_025_000.0), &tuner).unwrap();
    }

    #[test]
    fn test_ready_state_tracks_tuner() {
        let mut registry = DdrRegistry::new();
        let tuner = tuner();
        registry.create("RX1", &cfg(100_025_000.0), &tuner).unwrap();
        assert!(registry.get("RX1").unwrap().is_ready());

        registry.ready_state_changed("WBRX1", false);
        assert!(!registry.get("RX1").unwrap().is_ready());
    }
}
