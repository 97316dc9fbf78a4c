//! Export style-annotated text into self-contained markup documents.

pub mod colour;
pub mod document;
pub mod error;
pub mod export;
pub mod output;
pub mod rendering;
pub mod styles;
pub mod templating;
