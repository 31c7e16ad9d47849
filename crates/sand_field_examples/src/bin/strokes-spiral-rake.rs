use std::f32::consts::TAU;

use glam::Vec2;
use sand_field::prelude::*;
use sand_field_examples::{init_tracing, render_field_to_png, RenderConfig};
use tracing::info;

/// A rake with several tines drags a spiral around a resting stone.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut field = DisplacementField::try_new(FieldConfig::new(1024))?;
    let center = Vec2::new(0.5, 0.5);
    let tines = 5;
    let tine_spacing = 0.012;
    let brush_width = 0.006;

    let mut total = StrokeReport::default();
    for tine in 0..tines {
        let offset = (tine as f32 - (tines - 1) as f32 / 2.0) * tine_spacing;
        let stroke = Stroke::from_points((0..=720).map(|i| {
            let t = i as f32 / 720.0;
            let angle = t * 3.0 * TAU;
            let radius = 0.08 + 0.32 * t + offset;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        }));
        let report = field.apply(&stroke, brush_width);
        total.merge(&report);
    }
    info!(
        stamps = total.stamps,
        cells_lowered = total.cells_lowered,
        "Raked spiral."
    );

    render_field_to_png(&field, &RenderConfig::default(), "strokes-spiral-rake.png")?;
    Ok(())
}
