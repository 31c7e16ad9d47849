use glam::Vec2;
use sand_field::prelude::*;
use sand_field_examples::{init_tracing, render_field_to_png, RenderConfig};
use tracing::info;

/// Rakes one horizontal line across a 256×256 field, dumps it, then resets.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut field = DisplacementField::try_new(FieldConfig::new(256))?;
    let report = field.apply_stroke(&[Vec2::new(0.1, 0.5), Vec2::new(0.9, 0.5)], 0.02);
    info!(
        stamps = report.stamps,
        cells_lowered = report.cells_lowered,
        region = ?report.region,
        "Raked a straight band."
    );

    let band: Vec<f32> = (124..=132)
        .map(|iy| field.get(128, iy).unwrap_or(f32::NAN))
        .collect();
    info!(?band, "Profile across the band at column 128.");

    render_field_to_png(&field, &RenderConfig::default(), "strokes-straight-band.png")?;

    field.reset();
    info!(min = field.min_value(), "Field after reset.");
    Ok(())
}
