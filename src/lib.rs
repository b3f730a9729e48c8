//! rack2svg - Convert rack layout descriptions to SVG diagrams
//!
//! Two input dialects compile to the same [`RackSet`], which a single renderer
//! turns into SVG.
//!
//! # Example
//!
//! ```rust
//! use rack2svg::{generate_svg, parse_text_markup};
//!
//! let mut racks = parse_text_markup("caption: Core\nheight: 4\nitems:\n- server[2]: Web1\n- switch: SW1").unwrap();
//! racks.rewrite_links(|link| format!("https://wiki.example/{}", link));
//! let svg = generate_svg(&racks);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Supported Dialects
//!
//! - RackML, an XML markup (`<racks><rack name="R1"><server>Web</server></rack></racks>`)
//! - rack-text, a line-oriented markup (`caption:` / `height:` / `items:`)

pub mod error;
pub mod links;
pub mod parser;
pub mod svg;
pub mod types;

pub use error::{FormatError, RackError};
pub use parser::{parse_rackml, parse_source, parse_text_markup, Dialect};
pub use svg::{generate_svg, generate_svg_with, RenderOptions};
pub use types::*;

/// Render a RackML document to SVG text.
///
/// # Example
/// ```rust
/// let svg = rack2svg::render_rackml(r#"<racks><rack height="4"><ups>UPS</ups></rack></racks>"#).unwrap();
/// assert!(svg.contains("UPS"));
/// ```
pub fn render_rackml(input: &str) -> Result<String, FormatError> {
    let rack_set = parse_rackml(input)?;
    Ok(generate_svg(&rack_set))
}

/// Render a rack-text document to SVG text.
///
/// # Example
/// ```rust
/// let svg = rack2svg::render_rack_text("caption: A\nheight: 2\nitems:\n- pdu: P1").unwrap();
/// assert!(svg.contains("P1"));
/// ```
pub fn render_rack_text(input: &str) -> Result<String, FormatError> {
    let rack_set = parse_text_markup(input)?;
    Ok(generate_svg(&rack_set))
}

/// Render source text in either dialect
pub fn render(input: &str, dialect: Dialect) -> Result<String, FormatError> {
    let rack_set = parse_source(input, dialect)?;
    Ok(generate_svg(&rack_set))
}
