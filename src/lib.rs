//! Digital drop receivers for wideband I/Q streams.
//!
//! A digital drop receiver (DDR) extracts one narrow logical channel from the
//! complex baseband stream of a shared wideband tuner: the channel is
//! translated to DC, decimated down to its channel rate through a cascade of
//! FIR stages, and demodulated as narrowband FM, wideband FM or AM into a
//! 16 kHz audio stream.
//!
//! The building blocks live in [`dsp`]; [`channel`] wires them into a
//! pipeline, and [`ddr`] binds named pipelines to a tuner and fans tuner
//! events out to them:
//!
//! ```rust
//! use droprx::{Config, DdrRegistry, ManualTuner, Sample};
//!
//! let config = Config::from_toml(r#"
//!     [RX1]
//!     FQ = 100025000.0
//!     WBRX = "WBRX1"
//! "#).unwrap();
//!
//! let tuner = ManualTuner::new("WBRX1", 2_400_000, 100_000_000);
//! let mut registry = DdrRegistry::new();
//! for (name, section) in &config.receivers {
//!     registry.create(name, section, &tuner).unwrap();
//! }
//!
//! // one tuner batch in, 16 kHz audio out through the attached sinks
//! let batch = vec![Sample::new(0.0, 0.0); 2400];
//! registry.iq_received("WBRX1", &batch);
//! ```
//!
//! Everything runs to completion on the caller's thread: one producer, no
//! locks, audio strictly in input order.

pub mod channel;
pub mod config;
pub mod ddr;
pub mod dsp;
pub mod error;
pub mod iqread;
pub mod tuner;

pub use channel::{Channel, Modulation};
pub use config::{Config, DdrConfig};
pub use ddr::{Ddr, DdrRegistry};
pub use error::{Error, Result};
pub use iqread::{IqFormat, IqRead};
pub use tuner::{ManualTuner, Tuner};

/// A complex baseband I/Q sample.
pub type Sample = num_complex::Complex<f32>;
