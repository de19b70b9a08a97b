//! Feed module
//!
//! Atom feed parsing and HTML page rendering.

pub mod parser;
pub mod renderer;

pub use parser::parse_feed;
pub use renderer::render_page;
