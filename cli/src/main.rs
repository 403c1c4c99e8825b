use clap::{Parser, Subcommand};
use hound::WavSpec;
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};
use wavetape_core::{
    CodecConfig, Protection, TapeDecoder, TapeEncoder, WavetapeError, DEFAULT_SYMBOL_RATE,
    PCM_FULL_SCALE, SAMPLE_RATE,
};

#[derive(Parser)]
#[command(name = "wavetape")]
#[command(about = "Store files as audio on cassette tape and read them back")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file to a WAV waveform
    Encode {
        /// Input file; its extension is carried in the stream header
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output WAV file
        #[arg(value_name = "OUTPUT.WAV")]
        output: PathBuf,

        /// Symbol rate in symbols per second
        #[arg(short, long, default_value_t = DEFAULT_SYMBOL_RATE)]
        speed: usize,

        /// Protect payload bytes with Hamming(12,8) error correction
        #[arg(short, long)]
        protected: bool,
    },

    /// Decode a recorded WAV waveform back to a file
    Decode {
        /// Input WAV file (16-bit PCM or 32-bit float, mono)
        #[arg(value_name = "INPUT.WAV")]
        input: PathBuf,

        /// Output base name; the recovered extension is appended
        #[arg(value_name = "OUTPUT_BASE")]
        output: PathBuf,

        /// Symbol rate in symbols per second (must match the encoder)
        #[arg(short, long, default_value_t = DEFAULT_SYMBOL_RATE)]
        speed: usize,

        /// Expect Hamming(12,8)-protected payload (must match the encoder)
        #[arg(short, long)]
        protected: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            speed,
            protected,
        } => encode_command(&input, &output, speed, protected)?,
        Commands::Decode {
            input,
            output,
            speed,
            protected,
        } => decode_command(&input, &output, speed, protected)?,
    }

    Ok(())
}

fn protection_mode(protected: bool) -> Protection {
    if protected {
        Protection::Hamming
    } else {
        Protection::Plain
    }
}

fn encode_command(
    input_path: &Path,
    output_path: &Path,
    speed: usize,
    protected: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input_path)?;
    let extension = input_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_string();
    println!(
        "Read {} bytes from {} (extension {:?})",
        data.len(),
        input_path.display(),
        extension
    );

    let config = CodecConfig::new(speed, protection_mode(protected))?;
    let encoder = TapeEncoder::new(config)?;
    let samples = encoder.encode(&data, &extension)?;
    println!("Encoded to {} audio samples", samples.len());

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let file = File::create(output_path)?;
    let mut writer = hound::WavWriter::new(file, spec)?;
    for sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * PCM_FULL_SCALE) as i16)?;
    }
    writer.finalize()?;

    println!("Wrote {}", output_path.display());
    Ok(())
}

fn decode_command(
    input_path: &Path,
    output_path: &Path,
    speed: usize,
    protected: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(input_path)?;
    let mut reader = hound::WavReader::new(file)?;

    let spec = reader.spec();
    println!(
        "Read WAV: {} Hz, {} channels, {} bits",
        spec.sample_rate, spec.channels, spec.bits_per_sample
    );

    // Hard rejection, no resampling: the stream is only meaningful at
    // the rate it was written with.
    if spec.sample_rate as usize != SAMPLE_RATE {
        return Err(WavetapeError::SampleRateMismatch {
            expected: SAMPLE_RATE,
            found: spec.sample_rate as usize,
        }
        .into());
    }
    if spec.channels != 1 {
        return Err(
            WavetapeError::UnsupportedFormat(format!("{} channels, expected mono", spec.channels))
                .into(),
        );
    }

    let samples: Vec<f32> = match spec.bits_per_sample {
        16 => {
            let int_samples: Result<Vec<i16>, _> = reader.samples::<i16>().collect();
            int_samples?
                .into_iter()
                .map(|s| s as f32 / PCM_FULL_SCALE)
                .collect()
        }
        32 if spec.sample_format == hound::SampleFormat::Float => {
            let float_samples: Result<Vec<f32>, _> = reader.samples::<f32>().collect();
            float_samples?
        }
        bits => {
            return Err(
                WavetapeError::UnsupportedFormat(format!("{} bits per sample", bits)).into(),
            );
        }
    };
    info!("extracted {} samples", samples.len());

    let config = CodecConfig::new(speed, protection_mode(protected))?;
    let decoder = TapeDecoder::new(config)?;
    let decoded = decoder.decode(&samples);
    println!(
        "Decoded {} bytes, extension {:?}",
        decoded.payload.len(),
        decoded.extension
    );

    let final_path = if decoded.extension.is_empty() {
        output_path.to_path_buf()
    } else {
        let mut name = output_path.as_os_str().to_os_string();
        name.push(".");
        name.push(&decoded.extension);
        PathBuf::from(name)
    };
    std::fs::write(&final_path, &decoded.payload)?;
    println!("Wrote {} bytes to {}", decoded.payload.len(), final_path.display());

    Ok(())
}
