use glam::Vec2;
use sand_field::prelude::*;
use sand_field_examples::{init_tracing, render_field_to_png, RenderConfig};
use tracing::info;

/// Drags the same figure-eight several times under both accumulation rules.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let stroke = Stroke::from_points((0..=256).map(|i| {
        let t = i as f32 / 256.0 * std::f32::consts::TAU;
        Vec2::new(0.5 + 0.35 * t.sin(), 0.5 + 0.2 * (2.0 * t).sin())
    }));

    for (name, accumulation) in [
        ("absolute", DepthAccumulation::Absolute),
        ("compounding", DepthAccumulation::Compounding),
    ] {
        let config = FieldConfig::new(512).with_accumulation(accumulation);
        let mut field = DisplacementField::try_new(config)?;
        for pass in 1..=4 {
            let report = field.apply(&stroke, 0.02);
            info!(
                mode = name,
                pass,
                cells_lowered = report.cells_lowered,
                min = field.min_value(),
                "Pass done."
            );
        }
        render_field_to_png(
            &field,
            &RenderConfig::default(),
            format!("strokes-compounding-passes-{name}.png"),
        )?;
    }
    Ok(())
}
