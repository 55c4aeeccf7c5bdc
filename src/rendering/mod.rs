pub mod text;
pub mod window;

pub use text::render_frame;
pub use window::{draw_hud, draw_universe};
