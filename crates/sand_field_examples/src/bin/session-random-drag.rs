use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sand_field::prelude::*;
use sand_field_examples::{init_tracing, rand01, render_field_to_png, RenderConfig};
use tracing::info;

/// Simulates a few wandering drags fed point by point, the way a host forwards
/// pointer moves, and drains the dirty rectangle after every move.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut field = DisplacementField::try_new(FieldConfig::new(512))?;
    let mut session = StrokeSession::new(0.015);
    let mut rng = StdRng::seed_from_u64(7);

    let mut uploaded_cells = 0usize;
    for drag in 0..6 {
        let mut p = Vec2::new(rand01(&mut rng), rand01(&mut rng));
        let mut heading = rand01(&mut rng) * std::f32::consts::TAU;
        session.begin(p);

        for _ in 0..200 {
            heading += (rand01(&mut rng) - 0.5) * 0.4;
            p += Vec2::new(heading.cos(), heading.sin()) * 0.004;
            session.extend(&mut field, p);
            if let Some(rect) = field.take_dirty() {
                uploaded_cells += rect.area();
            }
        }

        let stroke = session.finish();
        info!(drag, points = stroke.len(), "Finished drag.");
    }

    info!(
        uploaded_cells,
        full_uploads_equivalent = uploaded_cells as f32 / (512.0 * 512.0),
        "Partial uploads."
    );
    render_field_to_png(&field, &RenderConfig::default(), "session-random-drag.png")?;
    Ok(())
}
