//! Layout constants and fixed styling.

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_RACK_HEIGHT;

/// Geometry of the rendered diagram, in output user units.
///
/// The defaults are the canonical layout; a config file may override any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Space around the racks on every side. Default: 25
    pub margin: f64,
    /// Height of one rack unit. Default: 25
    pub unit_height: f64,
    /// Width of a rack and of every device in it. Default: 300
    pub rack_width: f64,
    /// Horizontal gap between adjacent racks. Default: 25
    pub rack_spacing: f64,
    /// Canvas height in U when there are no racks. Default: 42
    pub default_rack_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 25.0,
            unit_height: 25.0,
            rack_width: 300.0,
            rack_spacing: 25.0,
            default_rack_height: DEFAULT_RACK_HEIGHT,
        }
    }
}

/// Font sizes (in px)
pub struct FontSizes;

impl FontSizes {
    pub const DEVICE_LABEL: f64 = 13.0;
    pub const SCALE: f64 = 12.0;
}

pub const FONT_FAMILY: &str = "sans-serif";

/// Estimated width of a label: 8px per character plus a 32px buffer
pub fn estimate_label_width(max_chars: usize) -> f64 {
    max_chars as f64 * 8.0 + 32.0
}

/// Distance between the right edge of the rack and a device label
pub const LABEL_GUTTER: f64 = 16.0;

/// Nudge applied to vertically centered text
pub const TEXT_BASELINE_SHIFT: f64 = 2.0;

/// Geometry of the U scale, relative to its group which sits 50 left of the rack
pub struct Scale;

impl Scale {
    pub const OFFSET: f64 = 50.0;
    pub const TEXT_X: f64 = 44.0;
    pub const TICK_X1: f64 = 30.0;
    pub const TICK_X2: f64 = 46.0;
    pub const TICK_WIDTH: f64 = 2.0;
}

pub const LINK_STYLE: &str = r#"<style>
            a text {
                fill: #0066cc;
                text-decoration: underline;
            }
            a:hover text {
                fill: #004499;
                filter: brightness(90%);
            }
        </style>"#;

/// Horizontal rule every unit, filling the unoccupied part of a rack
pub fn empty_pattern(unit_height: f64) -> String {
    format!(
        r##"<pattern id="pattern-empty" patternUnits="userSpaceOnUse" width="{u}" height="{u}">
            <path d="M 0 {half} L {u} {half}" fill="none" stroke="#ccc" stroke-width="1"/>
        </pattern>"##,
        u = unit_height,
        half = unit_height / 2.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_width() {
        assert_eq!(estimate_label_width(0), 32.0);
        assert_eq!(estimate_label_width(4), 64.0);
    }

    #[test]
    fn test_options_from_partial_json() {
        let opts: RenderOptions = serde_json::from_str(r#"{"rack_width": 200}"#).unwrap();
        assert_eq!(opts.rack_width, 200.0);
        assert_eq!(opts.margin, 25.0);
        assert!(serde_json::from_str::<RenderOptions>(r#"{"palette": "dark"}"#).is_err());
    }

    #[test]
    fn test_empty_pattern_matches_unit() {
        let pattern = empty_pattern(25.0);
        assert!(pattern.contains(r#"width="25" height="25""#));
        assert!(pattern.contains("M 0 12.5 L 25 12.5"));
    }
}
