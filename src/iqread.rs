//! Reading I/Q sample batches from files and standard input.
//!
//! The pipeline is fed whole batches of complex samples; this module turns a
//! byte stream in one of the common capture formats into such batches. The
//! chunk size is chosen by the caller and kept constant, which is what the
//! decimator cascades require.

use std::fs::File;
use std::io::{BufReader, Read, Stdin};
use std::path::Path;
use std::str::FromStr;

use crate::Sample;

/// I/Q byte format of a capture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IqFormat {
    /// Complex unsigned 8-bit, the RTL-SDR native format.
    Cu8,
    /// Complex signed 8-bit.
    Cs8,
    /// Complex signed 16-bit, little endian.
    Cs16,
    /// Complex 32-bit float, little endian.
    Cf32,
}

impl IqFormat {
    fn bytes_per_sample(self) -> usize {
        match self {
            IqFormat::Cu8 | IqFormat::Cs8 => 2,
            IqFormat::Cs16 => 4,
            IqFormat::Cf32 => 8,
        }
    }
}

impl FromStr for IqFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cu8" => Ok(IqFormat::Cu8),
            "cs8" => Ok(IqFormat::Cs8),
            "cs16" => Ok(IqFormat::Cs16),
            "cf32" => Ok(IqFormat::Cf32),
            other => Err(format!("unknown I/Q format {other:?}")),
        }
    }
}

/// Convert a raw capture buffer into complex samples.
pub fn convert_bytes_to_complex(format: IqFormat, buffer: &[u8]) -> Vec<Sample> {
    match format {
        IqFormat::Cu8 => buffer
            .chunks_exact(2)
            .map(|c| {
                Sample::new(
                    (c[0] as f32 - 127.5) / 128.0,
                    (c[1] as f32 - 127.5) / 128.0,
                )
            })
            .collect(),
        IqFormat::Cs8 => buffer
            .chunks_exact(2)
            .map(|c| Sample::new((c[0] as i8) as f32 / 128.0, (c[1] as i8) as f32 / 128.0))
            .collect(),
        IqFormat::Cs16 => buffer
            .chunks_exact(4)
            .map(|c| {
                Sample::new(
                    i16::from_le_bytes([c[0], c[1]]) as f32 / 32768.0,
                    i16::from_le_bytes([c[2], c[3]]) as f32 / 32768.0,
                )
            })
            .collect(),
        IqFormat::Cf32 => buffer
            .chunks_exact(8)
            .map(|c| {
                Sample::new(
                    f32::from_le_bytes([c[0], c[1], c[2], c[3]]),
                    f32::from_le_bytes([c[4], c[5], c[6], c[7]]),
                )
            })
            .collect(),
    }
}

/// Chunked synchronous I/Q reader.
///
/// Iterates over fixed-size sample batches; a trailing partial batch is
/// treated as end of stream.
pub struct IqRead<R: Read> {
    reader: R,
    format: IqFormat,
    chunk_size: usize,
}

impl IqRead<BufReader<File>> {
    /// Read batches of `chunk_size` samples from a capture file.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        chunk_size: usize,
        format: IqFormat,
    ) -> std::io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(Self {
            reader,
            format,
            chunk_size,
        })
    }
}

impl IqRead<BufReader<Stdin>> {
    /// Read batches of `chunk_size` samples from standard input.
    pub fn from_stdin(chunk_size: usize, format: IqFormat) -> Self {
        Self {
            reader: BufReader::new(std::io::stdin()),
            format,
            chunk_size,
        }
    }
}

impl<R: Read> Iterator for IqRead<R> {
    type Item = std::io::Result<Vec<Sample>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buffer = vec![0u8; self.chunk_size * self.format.bytes_per_sample()];
        match self.reader.read_exact(&mut buffer) {
            Ok(()) => Some(Ok(convert_bytes_to_complex(self.format, &buffer))),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => None,
            Err(e) => Some(Err(e)),
        }
    }
}
