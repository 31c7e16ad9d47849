//! Shared helpers for the executable examples: tracing setup, a seeded unit
//! random helper, and a PNG dump of the field using a two-colour ramp.
use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};
use rand::Rng;
use sand_field::field::DisplacementField;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sand_field=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Uniform float in `[0, 1)`.
pub fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Colours used when dumping a field to an image.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Colour at the deepest groove (value `0.0`).
    pub groove: [u8; 3],
    /// Colour of undisturbed sand (value `1.0`).
    pub sand: [u8; 3],
    /// Flip rows so `v = 1` ends up at the top of the image.
    pub flip_y: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            groove: [140, 126, 104],
            sand: [232, 224, 208],
            flip_y: true,
        }
    }
}

impl RenderConfig {
    pub fn with_colors(mut self, groove: [u8; 3], sand: [u8; 3]) -> Self {
        self.groove = groove;
        self.sand = sand;
        self
    }

    fn shade(&self, value: f32) -> Rgb<u8> {
        let t = value.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb([
            mix(self.groove[0], self.sand[0]),
            mix(self.groove[1], self.sand[1]),
            mix(self.groove[2], self.sand[2]),
        ])
    }
}

/// Writes one pixel per field cell to `path`.
pub fn render_field_to_png(
    field: &DisplacementField,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let n = field.resolution();
    let side = u32::try_from(n).context("field too large for an image")?;
    let img = RgbImage::from_fn(side, side, |x, y| {
        let row = if config.flip_y { n - 1 - y as usize } else { y as usize };
        config.shade(field.row(row)[x as usize])
    });

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
