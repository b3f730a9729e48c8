//! SVG generation - lays out racks and renders them as an SVG string.
//!
//! - Stacking of devices and gaps (layout)
//! - Default colors per device type (colors)
//! - Device glyphs (symbols)
//!
//! Pure string building, no DOM manipulation.

mod colors;
mod layout;
mod renderer;
mod styles;
mod symbols;

pub use colors::{color_for, GENERIC_COLOR};
pub use layout::{stack_rack, Placement};
pub use renderer::{canvas_size, escape_xml, generate_svg, generate_svg_with, resolve_href};
pub use styles::RenderOptions;
pub use symbols::{glyph_for, Glyph, Paint, Primitive};
