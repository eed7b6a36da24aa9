//! Drop receiver runner: extract configured channels from an I/Q capture.
//!
//! Reads a TOML receiver configuration and a wideband I/Q stream (file or
//! stdin), runs every receiver bound to the tuner, and writes each one's
//! 16 kHz audio as signed 16-bit little-endian PCM to `<name>.pcm`.
//!
//! # Usage Examples
//!
//! ```bash
//! droprx -c receivers.toml --iq capture.iq --format cu8 \
//!        --sample-rate 2400000 --center-freq 100M
//!
//! rtl_sdr -f 100000000 -s 2400000 - | \
//!     droprx -c receivers.toml --sample-rate 2400000 --center-freq 100M
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use tracing::{error, info, warn};

use droprx::iqread::{IqFormat, IqRead};
use droprx::{Config, DdrRegistry, ManualTuner, Tuner};

/// A frequency in Hz, parsed from plain Hz or a `k`/`M`-suffixed value.
#[derive(Debug, Clone, Copy)]
struct Frequency(u32);

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(stripped) = s.strip_suffix('M') {
            let val: f64 = stripped.trim().parse().map_err(|_| "invalid MHz value")?;
            Ok(Frequency((val * 1_000_000.0) as u32))
        } else if let Some(stripped) = s.strip_suffix('k') {
            let val: f64 = stripped.trim().parse().map_err(|_| "invalid kHz value")?;
            Ok(Frequency((val * 1_000.0) as u32))
        } else {
            let val: u32 = s.parse().map_err(|_| "invalid Hz value")?;
            Ok(Frequency(val))
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Digital drop receiver for wideband I/Q captures", long_about = None)]
struct Args {
    /// Receiver configuration file (one TOML table per receiver)
    #[arg(short, long)]
    config: PathBuf,

    /// I/Q capture file; reads stdin when omitted
    #[arg(long)]
    iq: Option<PathBuf>,

    /// I/Q format of the capture (cu8, cs8, cs16, cf32)
    #[arg(long, default_value = "cu8")]
    format: String,

    /// Tuner sample rate in Hz (960000 or 2400000)
    #[arg(short, long)]
    sample_rate: u32,

    /// Tuner center frequency in Hz (accepts k/M suffix, e.g. 100M)
    #[arg(long, value_parser = Frequency::from_str)]
    center_freq: Frequency,

    /// Tuner name the WBRX configuration keys refer to
    #[arg(long, default_value = "WBRX1")]
    tuner: String,

    /// Samples per processed batch; must be a multiple of 300
    #[arg(long, default_value_t = 9600)]
    chunk_size: usize,

    /// Directory for the per-receiver .pcm output files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Verbosity level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> droprx::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .try_init();

    // Every cascade menu divides 300, so this keeps batch lengths legal for
    // all modes at either tuner rate.
    if args.chunk_size == 0 || args.chunk_size % 300 != 0 {
        error!("chunk size {} is not a multiple of 300", args.chunk_size);
        std::process::exit(1);
    }

    let format = IqFormat::from_str(&args.format)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let config = Config::from_file(&args.config)?;
    let tuner = ManualTuner::new(args.tuner.clone(), args.sample_rate, args.center_freq.0);

    let mut registry = DdrRegistry::new();
    let mut usable = 0usize;
    for (name, section) in &config.receivers {
        if section.wbrx.as_deref() != Some(tuner.name()) {
            warn!(
                "skipping receiver {}: WBRX {:?} is not tuner {}",
                name,
                section.wbrx,
                tuner.name()
            );
            continue;
        }
        let ddr = match registry.create(name, section, &tuner) {
            Ok(ddr) => ddr,
            Err(e) => {
                error!("could not create receiver {name}: {e}");
                continue;
            }
        };

        let path = args.output_dir.join(format!("{name}.pcm"));
        let mut writer = BufWriter::new(File::create(&path)?);
        ddr.set_audio_sink(move |audio| {
            for &sample in audio {
                let pcm = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
                let _ = writer.write_all(&pcm.to_le_bytes());
            }
        });
        info!(
            "receiver {}: fq={} Hz, {} -> {}",
            name,
            ddr.fq(),
            ddr.modulation(),
            path.display()
        );
        usable += 1;
    }
    if usable == 0 {
        error!("no usable receiver sections in {}", args.config.display());
        std::process::exit(1);
    }

    let source: Box<dyn Iterator<Item = std::io::Result<Vec<droprx::Sample>>>> = match &args.iq {
        Some(path) => Box::new(IqRead::from_file(path, args.chunk_size, format)?),
        None => Box::new(IqRead::from_stdin(args.chunk_size, format)),
    };

    let mut batches = 0u64;
    for chunk in source {
        registry.iq_received(tuner.name(), &chunk?);
        batches += 1;
    }
    info!(
        "processed {} batches ({} samples)",
        batches,
        batches * args.chunk_size as u64
    );

    Ok(())
}
