use noise::{NoiseFn, Perlin};

/// A coherent-noise field that can be sampled at any 3D world coordinate.
///
/// Implementations must be deterministic for fixed inputs and safe to call
/// at arbitrary real-valued coordinates.
pub trait NoiseField {
    /// Evaluate the fractal-combined noise value at (x, y, z)
    ///
    /// # Arguments
    /// * `octaves` - Number of noise layers to combine
    /// * `lacunarity` - Frequency multiplier per octave
    /// * `gain` - Amplitude decay per octave
    /// * `offset` - Ridge sharpness bias
    ///
    /// # Returns
    /// * `f64` - Combined noise value, approximately in [0, 1]
    fn evaluate(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        lacunarity: f64,
        gain: f64,
        offset: f64,
    ) -> f64;
}

/// Ridged multifractal noise backed by a seeded Perlin lattice.
///
/// Each octave folds the lattice sample into a ridge so that creases appear
/// where the raw noise crosses zero, which gives the sharp mountain-crest
/// look the plain fBm sum lacks.
pub struct RidgedPerlin {
    perlin: Perlin,
}

impl RidgedPerlin {
    pub fn new(seed: u32) -> Self {
        RidgedPerlin {
            perlin: Perlin::new(seed),
        }
    }
}

impl NoiseField for RidgedPerlin {
    fn evaluate(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        lacunarity: f64,
        gain: f64,
        offset: f64,
    ) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            let sample = self
                .perlin
                .get([x * frequency, y * frequency, z * frequency]);

            // Fold the sample into a ridge and sharpen it
            let ridge = (offset - sample.abs()).powi(2);

            total += ridge * amplitude;
            max_amplitude += amplitude;
            amplitude *= gain;
            frequency *= lacunarity;
        }

        // Normalize by the amplitude sum so the result stays near [0, 1]
        if max_amplitude > 0.0 {
            total / max_amplitude
        } else {
            0.0
        }
    }
}
