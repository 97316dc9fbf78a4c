//! Renderers turning styled text into markup

mod html;
mod latex;
mod markup;
mod renderer;

pub use html::{class_name, Html};
pub use latex::{style_token, Latex};
pub use markup::*;
pub use renderer::*;
