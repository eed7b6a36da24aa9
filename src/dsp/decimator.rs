//! Decimate-by-M FIR filtering.
//!
//! This module provides the single-stage [`Decimator`] and the multi-stage
//! [`Cascade`] that composes up to five of them into one logical rate change.
//! The decimator keeps a dense delay line and shifts it M samples at a time,
//! which keeps the scalar loop simple and predictable; efficiency comes from
//! cascading stages, not from a polyphase commutator.
//!
//! # Example
//!
//! ```rust
//! use droprx::dsp::coeffs;
//! use droprx::dsp::decimator::Decimator;
//!
//! // Decimate real samples from 32 kHz to 16 kHz
//! let mut dec = Decimator::<f32>::new(2, &coeffs::DEC_32K_16K);
//!
//! let input = vec![1.0f32; 64];
//! let mut output = Vec::new();
//! dec.decimate(&mut output, &input);
//! assert_eq!(output.len(), 32);
//! ```

use std::ops::{AddAssign, Mul};

/// Sample types the FIR kernel can filter: real audio (`f32`) and complex
/// I/Q ([`crate::Sample`]).
pub trait Filterable: Copy + Default + AddAssign + Mul<f32, Output = Self> {}

impl<T: Copy + Default + AddAssign + Mul<f32, Output = T>> Filterable for T {}

/// A single decimate-by-M FIR stage.
///
/// Holds the design ("base") coefficients, a working copy scaled by the
/// current gain, and a delay line of one sample per tap. The decimation
/// factor and tap count are fixed at construction; gain changes rebuild the
/// working coefficients without touching the delay line.
///
/// A freshly constructed decimator starts with zeros in its delay line, so
/// the first `taps / M` outputs are a fill-in transient.
pub struct Decimator<T> {
    dec_fact: u32,
    base: Vec<f32>,
    coeff: Vec<f32>,
    z: Vec<T>,
}

impl<T: Filterable> Decimator<T> {
    /// Create a decimator with factor `dec_fact` over the given coefficient
    /// table.
    ///
    /// # Panics
    ///
    /// Panics if `dec_fact` is zero or larger than the tap count.
    pub fn new(dec_fact: u32, coeff: &[f32]) -> Self {
        assert!(dec_fact >= 1, "decimation factor must be at least 1");
        assert!(
            coeff.len() >= dec_fact as usize,
            "tap count {} must not be smaller than the decimation factor {}",
            coeff.len(),
            dec_fact
        );
        Self {
            dec_fact,
            base: coeff.to_vec(),
            coeff: coeff.to_vec(),
            z: vec![T::default(); coeff.len()],
        }
    }

    /// The decimation factor M.
    pub fn dec_fact(&self) -> u32 {
        self.dec_fact
    }

    /// The number of filter taps.
    pub fn taps(&self) -> usize {
        self.coeff.len()
    }

    /// Scale the working coefficients to `base * 10^(gain_db / 20)`.
    ///
    /// The delay line is untouched; the new gain takes effect on the next
    /// [`decimate`](Self::decimate) call.
    pub fn set_gain(&mut self, gain_db: f64) {
        let gain = 10f64.powf(gain_db / 20.0) as f32;
        self.coeff.clear();
        self.coeff.extend(self.base.iter().map(|c| c * gain));
    }

    /// Filter and downsample `input` into `out`.
    ///
    /// `out` is cleared and receives exactly `input.len() / M` samples. For
    /// each output, the delay line is shifted up by M positions, the M newest
    /// input samples land in taps `0..M` (most recent at tap 0), and the
    /// output is the dot product of the working coefficients with the line.
    ///
    /// # Panics
    ///
    /// Panics if `input.len()` is not a multiple of the decimation factor;
    /// batch sizing is the caller's contract.
    pub fn decimate(&mut self, out: &mut Vec<T>, input: &[T]) {
        let m = self.dec_fact as usize;
        assert!(
            input.len() % m == 0,
            "input batch of {} samples is not a multiple of the decimation factor {}",
            input.len(),
            m
        );

        out.clear();
        out.reserve(input.len() / m);
        let taps = self.coeff.len();
        for chunk in input.chunks_exact(m) {
            self.z.copy_within(0..taps - m, m);
            for (k, &s) in chunk.iter().enumerate() {
                self.z[m - 1 - k] = s;
            }
            let mut sum = T::default();
            for (&c, &zv) in self.coeff.iter().zip(self.z.iter()) {
                sum += zv * c;
            }
            out.push(sum);
        }
    }
}

/// An ordered composition of one to five decimator stages.
///
/// A cascade borrows its stages from a longer-lived pool (see the
/// channelizer), so delay lines survive recomposition. It holds no sample
/// state of its own; intermediate buffers are allocated per call and the
/// final stage writes straight into the caller's output vector.
pub struct Cascade<'a, T> {
    stages: Vec<&'a mut Decimator<T>>,
}

impl<'a, T: Filterable> Cascade<'a, T> {
    /// Compose `stages` into one logical decimator.
    ///
    /// # Panics
    ///
    /// Panics unless there are between one and five stages.
    pub fn new(stages: Vec<&'a mut Decimator<T>>) -> Self {
        assert!(
            (1..=5).contains(&stages.len()),
            "a cascade composes between one and five stages"
        );
        Self { stages }
    }

    /// Overall decimation factor: the product of the stage factors.
    pub fn dec_fact(&self) -> u32 {
        self.stages.iter().map(|d| d.dec_fact()).product()
    }

    /// Run `input` through every stage in order, writing the final stage's
    /// output into `out`.
    pub fn decimate(&mut self, out: &mut Vec<T>, input: &[T]) {
        let last = self.stages.len() - 1;
        let mut cur: Vec<T> = Vec::new();
        for (i, stage) in self.stages.iter_mut().enumerate() {
            if i == 0 && last == 0 {
                stage.decimate(out, input);
            } else if i == 0 {
                stage.decimate(&mut cur, input);
            } else if i == last {
                stage.decimate(out, &cur);
            } else {
                let mut next = Vec::new();
                stage.decimate(&mut next, &cur);
                cur = next;
            }
        }
    }
}
