use anyhow::Result;
use image::{Rgba, RgbaImage};
use rand::Rng;

use crate::noise_field::NoiseField;
use crate::options::{ChannelOptions, SynthOptions};

/// Per-channel base intensities, drawn once per synthesis call and reused
/// for every pixel of that call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseIntensities {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl BaseIntensities {
    fn draw<R: Rng>(options: &SynthOptions, rng: &mut R) -> Self {
        BaseIntensities {
            red: options.red.draw_intensity(rng),
            green: options.green.draw_intensity(rng),
            blue: options.blue.draw_intensity(rng),
        }
    }
}

/// Samples a noise field over a 2D region and maps each sample to a color.
///
/// The synthesizer owns the field; region size, world offset, options and
/// the randomness source are supplied per call, so calls are independent of
/// each other and of any earlier configuration.
pub struct TextureSynthesizer<N: NoiseField> {
    field: N,
}

impl<N: NoiseField> TextureSynthesizer<N> {
    pub fn new(field: N) -> Self {
        TextureSynthesizer { field }
    }

    /// Fill a width x height grid by scanning every cell.
    ///
    /// Cell (v, u) samples the field at world coordinate
    /// `(offset_x + u*step, offset_y + v*step, 0)` and lands at pixel (v, u).
    /// A 1x1 grid therefore samples exactly `(offset_x, offset_y)`.
    ///
    /// # Arguments
    /// * `width`, `height` - Grid dimensions in pixels; zero yields an empty image
    /// * `offset_x`, `offset_y` - World-space origin of the sampled region
    /// * `options` - Fractal, step and channel parameters for this call
    /// * `rng` - Source for the once-per-call base intensity draw
    pub fn fill_rectangle<R: Rng>(
        &self,
        width: u32,
        height: u32,
        offset_x: f64,
        offset_y: f64,
        options: &SynthOptions,
        rng: &mut R,
    ) -> Result<RgbaImage> {
        options.validate()?;

        let base = BaseIntensities::draw(options, rng);
        let mut grid = RgbaImage::new(width, height);

        for v in 0..width {
            let world_y = offset_y + v as f64 * options.step;

            for u in 0..height {
                let world_x = offset_x + u as f64 * options.step;
                let noise = self.field.evaluate(
                    world_x,
                    world_y,
                    0.0,
                    options.octaves,
                    options.lacunarity,
                    options.gain,
                    options.ridge_offset,
                );

                grid.put_pixel(v, u, map_noise_to_color(noise, options, base));
            }
        }

        Ok(grid)
    }

    /// Fill a diameter x diameter grid, sampling only cells inside the
    /// inscribed circle.
    ///
    /// Cells outside the mask are never written and keep the zeroed default
    /// pixel. The radius is `diameter / 2` in integer arithmetic, so an odd
    /// diameter truncates and leaves the circle slightly off-center; kept
    /// as-is.
    pub fn fill_circle<R: Rng>(
        &self,
        diameter: u32,
        offset_x: f64,
        offset_y: f64,
        options: &SynthOptions,
        rng: &mut R,
    ) -> Result<RgbaImage> {
        options.validate()?;

        let base = BaseIntensities::draw(options, rng);
        let mut grid = RgbaImage::new(diameter, diameter);

        let r = (diameter / 2) as i64;

        for x in -r..r {
            // Vertical extent of the circle at this column
            let half_chord = ((r * r - x * x) as f64).sqrt() as i64;

            for y in -half_chord..half_chord {
                let world_x = offset_x + (x + r) as f64 * options.step;
                let world_y = offset_y + (y + r) as f64 * options.step;
                let noise = self.field.evaluate(
                    world_x,
                    world_y,
                    0.0,
                    options.octaves,
                    options.lacunarity,
                    options.gain,
                    options.ridge_offset,
                );

                grid.put_pixel(
                    (x + r) as u32,
                    (y + r) as u32,
                    map_noise_to_color(noise, options, base),
                );
            }
        }

        Ok(grid)
    }
}

/// Map one noise sample to an RGBA color.
///
/// Pure: identical inputs always produce identical output. Each channel
/// scales the sample by its base intensity, or runs the cosine curve when
/// configured, then truncates into [0, 255] and optionally inverts. Alpha is
/// always fully opaque.
pub fn map_noise_to_color(noise: f64, options: &SynthOptions, base: BaseIntensities) -> Rgba<u8> {
    Rgba([
        map_channel(noise, base.red, &options.red),
        map_channel(noise, base.green, &options.green),
        map_channel(noise, base.blue, &options.blue),
        255,
    ])
}

fn map_channel(noise: f64, base: f64, options: &ChannelOptions) -> u8 {
    let raw = if options.use_cosine {
        // A zero sample sends base / noise to infinity and the cosine to
        // NaN; channel_byte pins the non-finite result to 0.
        (base / noise).cos()
    } else {
        noise * base
    };

    let value = channel_byte(raw);

    if options.reverse { 255 - value } else { value }
}

/// Truncating float-to-byte conversion; non-finite inputs pin to 0.
fn channel_byte(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }

    ((255.0 * value) as i64).clamp(0, 255) as u8
}
