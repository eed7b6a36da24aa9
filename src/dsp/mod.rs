//! Digital signal processing building blocks.
//!
//! The per-channel pipeline is assembled from these pieces: a [`translate`]
//! mixer shifts the channel of interest to DC, a [`channelizer`] cascade of
//! [`decimator`] stages brings the rate down to the channel rate, and a
//! [`demod`] block turns the complex stream into real audio. The [`coeffs`]
//! module holds the offline-designed FIR tables everything filters with.

pub mod channelizer;
pub mod coeffs;
pub mod decimator;
pub mod demod;
pub mod translate;

pub use channelizer::{Bandwidth, Channelizer};
pub use decimator::{Cascade, Decimator};
pub use demod::{AmDemodulator, FmDemodulator};
pub use translate::Translate;
