mod coverage_buffer;
mod frame_renderer;
mod render_target;
mod png_render;
mod term_render;

pub use coverage_buffer::*;
pub use frame_renderer::*;
pub use render_target::*;
pub use png_render::*;
pub use term_render::*;
