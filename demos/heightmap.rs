//! An example to show how to make a basic heightmap, printed to the terminal.

use bevy_math::DVec2;
use simplex_tables::{prelude::*, scaled_octave_noise_2d};

// Feel free to play around with these!
const WIDTH: u32 = 96;
const HEIGHT: u32 = 40;
const OCTAVES: u32 = 6;
const PERSISTENCE: f64 = 0.5;
const SCALE: f64 = 0.03;

/// From deep water to snow.
const SHADES: &[u8] = b" .:-=+*#%@";

fn main() -> Result<(), NoiseError> {
    // The simple way.
    for y in 0..HEIGHT {
        let row: String = (0..WIDTH)
            .map(|x| -> Result<char, NoiseError> {
                // Terminal cells are about twice as tall as they are wide.
                let height = scaled_octave_noise_2d(
                    OCTAVES,
                    PERSISTENCE,
                    SCALE,
                    0.0,
                    (SHADES.len() - 1) as f64,
                    x as f64,
                    y as f64 * 2.0,
                )?;
                Ok(SHADES[height.round() as usize] as char)
            })
            .collect::<Result<_, NoiseError>>()?;
        println!("{row}");
    }

    // The same noise, built once and reused.
    let noise: common_noise::ScaledFbm<common_noise::Simplex> = (
        FractalLayers::new(Default::default(), OCTAVES, PERSISTENCE, SCALE)?,
        RemapRange::new(0.0, (SHADES.len() - 1) as f64),
    );
    let center = noise.evaluate(DVec2::new(WIDTH as f64 / 2.0, HEIGHT as f64));
    println!("Height at the center: {center:.3}.");

    Ok(())
}
