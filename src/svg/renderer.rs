//! SVG renderer - converts a RackSet into an SVG string.
//!
//! Pure string building, no DOM manipulation.
//! Per rack: U scale → rack name → background → devices (bottom-up).

use log::debug;
use url::Url;

use super::colors::color_for;
use super::layout::stack_rack;
use super::styles::{
    empty_pattern, estimate_label_width, FontSizes, RenderOptions, Scale, FONT_FAMILY,
    LABEL_GUTTER, LINK_STYLE, TEXT_BASELINE_SHIFT,
};
use super::symbols::{glyph_for, GLYPH_CELL_HEIGHT};
use crate::types::{Rack, RackDevice, RackSet, RackSlot};

/// Render a rack set with the default layout
pub fn generate_svg(rack_set: &RackSet) -> String {
    generate_svg_with(rack_set, &RenderOptions::default())
}

/// Render a rack set as an SVG document.
///
/// Deterministic and infallible; an empty set gives an empty canvas.
pub fn generate_svg_with(rack_set: &RackSet, opts: &RenderOptions) -> String {
    let (width, height) = canvas_size(rack_set, opts);
    let base = rack_set.base.as_deref().and_then(|b| Url::parse(b).ok());

    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<svg baseProfile="full" height="{}" version="1.1" width="{}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
        fmt_num(height),
        fmt_num(width)
    ));
    parts.push(LINK_STYLE.to_string());
    parts.push(empty_pattern(opts.unit_height));

    let mut x_offset = opts.margin;
    for rack in &rack_set.racks {
        // Scale to the left of the rack
        parts.push(format!(
            r#"<g transform="translate({}, 0)">"#,
            fmt_num(x_offset - Scale::OFFSET)
        ));
        parts.push(render_scale(rack.height, opts));
        parts.push("</g>".to_string());

        parts.push(format!(r#"<g transform="translate({}, 0)">"#, fmt_num(x_offset)));
        parts.push(render_rack(rack, base.as_ref(), opts));
        parts.push("</g>".to_string());

        x_offset += opts.rack_width + opts.rack_spacing;
    }

    parts.push("</svg>".to_string());

    debug!(
        racks = rack_set.racks.len(),
        width = width,
        height = height;
        "Generated SVG"
    );
    parts.join("\n")
}

/// Canvas (width, height), with room for the longest label right of the racks
pub fn canvas_size(rack_set: &RackSet, opts: &RenderOptions) -> (f64, f64) {
    let max_rack_height = rack_set
        .racks
        .iter()
        .map(|r| r.height)
        .max()
        .unwrap_or(opts.default_rack_height);
    let height = 2.0 * opts.margin + opts.unit_height * f64::from(max_rack_height);

    let max_label_len = rack_set
        .racks
        .iter()
        .flat_map(|r| r.devices.iter())
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(0);

    let rack_count = rack_set.racks.len();
    let width = 2.0 * opts.margin
        + rack_count as f64 * opts.rack_width
        + rack_count.saturating_sub(1) as f64 * opts.rack_spacing
        + estimate_label_width(max_label_len);

    (width, height)
}

// ============================================================================
// U scale
// ============================================================================

fn render_scale(rack_height: u32, opts: &RenderOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    for u in (1..=rack_height).rev() {
        // Top edge of this unit
        let y = opts.margin + f64::from(rack_height - u) * opts.unit_height;

        parts.push(format!(
            r#"<text x="{}" y="{}" text-anchor="end" dominant-baseline="middle" font-family="{}" font-size="{}">{}</text>"#,
            fmt_num(Scale::TEXT_X),
            fmt_num(y + opts.unit_height / 2.0 + TEXT_BASELINE_SHIFT),
            FONT_FAMILY,
            FontSizes::SCALE,
            u
        ));
        parts.push(scale_tick(y));
    }
    parts.push(scale_tick(
        opts.margin + f64::from(rack_height) * opts.unit_height,
    ));

    parts.join("\n")
}

fn scale_tick(y: f64) -> String {
    format!(
        r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="black" stroke-width="{}"/>"#,
        fmt_num(Scale::TICK_X1),
        fmt_num(Scale::TICK_X2),
        Scale::TICK_WIDTH,
        y = fmt_num(y)
    )
}

// ============================================================================
// Rack body
// ============================================================================

fn render_rack(rack: &Rack, base: Option<&Url>, opts: &RenderOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !rack.name.is_empty() {
        parts.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="{}">{}</text>"#,
            fmt_num(opts.rack_width / 2.0),
            fmt_num(opts.margin / 2.0 + TEXT_BASELINE_SHIFT),
            FONT_FAMILY,
            escape_xml(&rack.name)
        ));
    }

    parts.push(format!(
        r#"<rect x="0" y="{}" width="{}" height="{}" fill="url(#pattern-empty)" stroke="black"/>"#,
        fmt_num(opts.margin),
        fmt_num(opts.rack_width),
        fmt_num(f64::from(rack.height) * opts.unit_height)
    ));

    let rack_bottom = f64::from(rack.height) * opts.unit_height + opts.margin;
    for placed in stack_rack(rack) {
        let RackSlot::Device(device) = placed.slot else {
            continue;
        };
        let y = rack_bottom - f64::from(placed.top()) * opts.unit_height;

        parts.push(format!(r#"<g transform="translate(0, {})">"#, fmt_num(y)));
        parts.push(render_device(device, base, opts));
        parts.push("</g>".to_string());
    }

    parts.join("\n")
}

// ============================================================================
// Devices
// ============================================================================

fn render_device(device: &RackDevice, base: Option<&Url>, opts: &RenderOptions) -> String {
    let device_height = f64::from(device.height) * opts.unit_height;
    let color = device
        .color
        .as_deref()
        .unwrap_or_else(|| color_for(&device.device_type));
    let href = device.href.as_deref().map(|h| resolve_href(h, base));
    let text_y = fmt_num(device_height / 2.0 + TEXT_BASELINE_SHIFT);

    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}" stroke="black"/>"#,
        fmt_num(opts.rack_width),
        fmt_num(device_height),
        escape_xml(color)
    ));

    // Type, centered in the body
    parts.push(format!(
        r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="{}" font-size="{}">{}</text>"#,
        fmt_num(opts.rack_width / 2.0),
        text_y,
        FONT_FAMILY,
        FontSizes::DEVICE_LABEL,
        escape_xml(&device.device_type)
    ));

    // Name, right of the rack
    if !device.name.is_empty() {
        let label = format!(
            r#"<text x="{}" y="{}" text-anchor="start" dominant-baseline="middle" font-family="{}" font-size="{}">{}</text>"#,
            fmt_num(opts.rack_width + LABEL_GUTTER),
            text_y,
            FONT_FAMILY,
            FontSizes::DEVICE_LABEL,
            escape_xml(&device.name)
        );
        match &href {
            Some(href) => parts.push(format!(
                r#"<a xlink:href="{}">{}</a>"#,
                escape_xml(href),
                label
            )),
            None => parts.push(label),
        }
    }

    if let Some(glyph) = render_glyph(&device.device_type, device_height) {
        parts.push(glyph);
    }

    let content = parts.join("\n");
    match href {
        Some(href) => format!(r#"<a href="{}">{}</a>"#, escape_xml(&href), content),
        None => content,
    }
}

fn render_glyph(device_type: &str, device_height: f64) -> Option<String> {
    let glyph = glyph_for(device_type)?;
    let shapes = glyph
        .iter()
        .map(|p| p.to_svg())
        .collect::<Vec<_>>()
        .join("\n");

    let dy = (device_height - GLYPH_CELL_HEIGHT) / 2.0;
    if dy == 0.0 {
        Some(shapes)
    } else {
        Some(format!(
            "<g transform=\"translate(0, {})\">\n{}\n</g>",
            fmt_num(dy),
            shapes
        ))
    }
}

/// Resolve `href` against `base` when the set carries an absolute base URL
pub fn resolve_href(href: &str, base: Option<&Url>) -> String {
    match base.map(|b| b.join(href)) {
        Some(Ok(url)) => url.to_string(),
        _ => href.to_string(),
    }
}

pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shortest decimal form: whole numbers print without a fraction.
pub(crate) fn fmt_num(n: f64) -> String {
    if n == 0.0 {
        // no "-0"
        "0".to_string()
    } else {
        format!("{}", n)
    }
}
