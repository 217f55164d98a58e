mod layout;
mod render;

pub use layout::BoardLayout;
pub use render::Renderer;
