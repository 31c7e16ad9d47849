#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, rand01, render_field_to_png, RenderConfig};
