use anyhow::{Result, ensure};
use rand::Rng;

/// Intensity bounds and shaping flags for a single color channel.
#[derive(Debug, Clone)]
pub struct ChannelOptions {
    /// Inclusive lower bound for the random base intensity draw
    pub min: i32,
    /// Exclusive upper bound for the random base intensity draw
    pub max: i32,
    /// Divisor applied to the drawn integer to produce the base intensity
    pub divisor: f64,
    /// Replace the linear noise response with a cosine curve
    pub use_cosine: bool,
    /// Invert the final 8-bit channel value
    pub reverse: bool,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        ChannelOptions {
            min: 0,
            max: 256,
            divisor: 255.0,
            use_cosine: false,
            reverse: false,
        }
    }
}

impl ChannelOptions {
    /// Draw a base intensity from the configured bounds.
    pub(crate) fn draw_intensity<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..self.max) as f64 / self.divisor
    }

    fn validate(&self, channel: &str) -> Result<()> {
        ensure!(
            self.min < self.max,
            "{} intensity bounds are empty: min {} must be below max {}",
            channel,
            self.min,
            self.max
        );
        ensure!(
            self.divisor.is_finite() && self.divisor != 0.0,
            "{} divisor must be finite and non-zero",
            channel
        );
        Ok(())
    }
}

/// Parameters controlling a single synthesis call
#[derive(Debug, Clone)]
pub struct SynthOptions {
    /// Number of noise octaves to combine
    pub octaves: u32,
    /// Frequency multiplier per octave
    pub lacunarity: f64,
    /// Amplitude decay per octave
    pub gain: f64,
    /// Ridge sharpness bias for the multifractal combinator
    pub ridge_offset: f64,
    /// World units advanced per pixel
    pub step: f64,
    pub red: ChannelOptions,
    pub green: ChannelOptions,
    pub blue: ChannelOptions,
}

impl Default for SynthOptions {
    fn default() -> Self {
        SynthOptions {
            octaves: 8,
            lacunarity: 2.85,
            gain: 0.45,
            ridge_offset: 1.0,
            step: 0.01,
            red: ChannelOptions::default(),
            green: ChannelOptions::default(),
            blue: ChannelOptions::default(),
        }
    }
}

impl SynthOptions {
    /// Check structural preconditions before a synthesis call.
    ///
    /// Degenerate numeric values such as a zero step or a zero-area region
    /// are allowed; they produce degenerate grids rather than failures.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.octaves > 0, "octave count must be at least 1");
        ensure!(self.lacunarity.is_finite(), "lacunarity must be finite");
        ensure!(self.gain.is_finite(), "gain must be finite");
        ensure!(self.ridge_offset.is_finite(), "ridge offset must be finite");
        ensure!(self.step.is_finite(), "step size must be finite");

        self.red.validate("red")?;
        self.green.validate("green")?;
        self.blue.validate("blue")?;

        Ok(())
    }
}
