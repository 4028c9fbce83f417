mod noise_field;
mod options;
mod synth;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, thread_rng};

use noise_field::RidgedPerlin;
use options::{ChannelOptions, SynthOptions};
use synth::TextureSynthesizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Channel {
    Red,
    Green,
    Blue,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ridgetex")]
#[command(about = "Ridged-noise color texture generator", long_about = None)]
struct Args {
    /// Output PNG path
    #[arg(long, default_value = "texture.png")]
    output: PathBuf,

    /// Texture width in pixels
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Texture height in pixels
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Generate a circular texture with this diameter instead of a rectangle
    #[arg(long, value_name = "DIAMETER")]
    circle: Option<u32>,

    /// World-space X offset of the sampled region
    #[arg(long, default_value_t = 0.0)]
    offset_x: f64,

    /// World-space Y offset of the sampled region
    #[arg(long, default_value_t = 0.0)]
    offset_y: f64,

    /// World units advanced per pixel
    #[arg(long, default_value_t = 0.01)]
    step: f64,

    /// Number of noise octaves to combine
    #[arg(long, default_value_t = 8)]
    octaves: u32,

    /// Frequency multiplier per octave
    #[arg(long, default_value_t = 2.85)]
    lacunarity: f64,

    /// Amplitude decay per octave
    #[arg(long, default_value_t = 0.45)]
    gain: f64,

    /// Ridge sharpness bias
    #[arg(long, default_value_t = 1.0)]
    ridge_offset: f64,

    /// Seed for the noise lattice and the intensity draw (random when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Channels mapped through the cosine color curve (e.g. --cosine red,blue)
    #[arg(long, value_delimiter = ',')]
    cosine: Vec<Channel>,

    /// Channels whose final value is inverted (e.g. --reverse green)
    #[arg(long, value_delimiter = ',')]
    reverse: Vec<Channel>,
}

impl Args {
    fn to_options(&self) -> SynthOptions {
        let channel = |which: Channel| ChannelOptions {
            use_cosine: self.cosine.contains(&which),
            reverse: self.reverse.contains(&which),
            ..ChannelOptions::default()
        };

        SynthOptions {
            octaves: self.octaves,
            lacunarity: self.lacunarity,
            gain: self.gain,
            ridge_offset: self.ridge_offset,
            step: self.step,
            red: channel(Channel::Red),
            green: channel(Channel::Green),
            blue: channel(Channel::Blue),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let options = args.to_options();

    let seed = args.seed.unwrap_or_else(|| thread_rng().r#gen());
    let mut rng = StdRng::seed_from_u64(seed);
    let synthesizer = TextureSynthesizer::new(RidgedPerlin::new(seed as u32));

    let texture = match args.circle {
        Some(diameter) => {
            println!("Synthesizing circular texture, diameter {} (seed {})...", diameter, seed);
            synthesizer.fill_circle(diameter, args.offset_x, args.offset_y, &options, &mut rng)?
        }
        None => {
            println!(
                "Synthesizing {}x{} texture (seed {})...",
                args.width, args.height, seed
            );
            synthesizer.fill_rectangle(
                args.width,
                args.height,
                args.offset_x,
                args.offset_y,
                &options,
                &mut rng,
            )?
        }
    };

    texture.save(&args.output)?;
    println!("Saved texture to {}", args.output.display());

    Ok(())
}
