//! Device glyphs.
//!
//! A glyph is a short list of drawing primitives laid out for a 1U cell
//! (300 × 25), at the left end of the device body. The renderer centers it
//! vertically on taller devices.

use super::renderer::fmt_num;

/// Fill and stroke of a primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Solid dark fill
    Solid,
    /// Solid fill, holes cut out with the even-odd rule
    SolidEvenOdd,
    /// Thick dark outline, no fill
    Outline,
    /// Like `Outline` with rounded line caps
    OutlineRound,
    /// Dark fill with a light ring
    Reel,
}

impl Paint {
    fn attrs(self) -> &'static str {
        match self {
            Paint::Solid => r##"fill="#555" stroke="none""##,
            Paint::SolidEvenOdd => r##"stroke="none" fill="#555" fill-rule="evenodd""##,
            Paint::Outline => r##"fill="none" stroke="#555" stroke-width="2""##,
            Paint::OutlineRound => {
                r##"stroke="#555" fill="none" stroke-width="2" stroke-linecap="round""##
            }
            Paint::Reel => r##"stroke="#ccc" fill="#555" stroke-width="2""##,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Path {
        d: &'static str,
        paint: Paint,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        paint: Paint,
    },
}

impl Primitive {
    pub fn to_svg(&self) -> String {
        match *self {
            Primitive::Path { d, paint } => format!(r#"<path d="{}" {}/>"#, d, paint.attrs()),
            Primitive::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                fmt_num(x),
                fmt_num(y),
                fmt_num(width),
                fmt_num(height),
                paint.attrs()
            ),
            Primitive::Circle { cx, cy, r, paint } => format!(
                r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                fmt_num(cx),
                fmt_num(cy),
                fmt_num(r),
                paint.attrs()
            ),
        }
    }
}

pub type Glyph = &'static [Primitive];

/// Height of the cell glyphs are drawn for
pub const GLYPH_CELL_HEIGHT: f64 = 25.0;

const fn port(x: f64, y: f64) -> Primitive {
    Primitive::Rect {
        x,
        y,
        width: 6.0,
        height: 5.0,
        paint: Paint::Solid,
    }
}

// 8 ports in 2 rows
const PATCH: Glyph = &[
    port(12.0, 6.0),
    port(22.0, 6.0),
    port(32.0, 6.0),
    port(42.0, 6.0),
    port(12.0, 14.0),
    port(22.0, 14.0),
    port(32.0, 14.0),
    port(42.0, 14.0),
];

// Plug
const PDU: Glyph = &[Primitive::Path {
    d: "M 14 4 V 9 M 22 4 V 9 M 10 9 H 26 V 13 Q 26 18 18 18 Q 10 18 10 13 Z M 18 18 V 22",
    paint: Paint::OutlineRound,
}];

// Enclosure with three drive slots
const STORAGE: Glyph = &[Primitive::Path {
    d: "M 10 4 H 40 V 21 H 10 Z M 12 6 V 9 H 38 V 6 Z M 12 11 V 14 H 38 V 11 Z M 12 16 V 19 H 38 V 16 Z",
    paint: Paint::SolidEvenOdd,
}];

// Chassis with a bay and two status LEDs
const SERVER: Glyph = &[Primitive::Path {
    d: "M 10 5 H 48 V 20 H 10 Z M 13 8 V 17 H 30 V 8 Z \
        M 36 11 A 1.5 1.5 0 1 0 36 14 A 1.5 1.5 0 1 0 36 11 Z \
        M 42 11 A 1.5 1.5 0 1 0 42 14 A 1.5 1.5 0 1 0 42 11 Z",
    paint: Paint::SolidEvenOdd,
}];

// Two opposing arrows
const SWITCH: Glyph = &[Primitive::Path {
    d: "M 10 9 L 16 5 L 16 7.5 L 30 7.5 L 30 10.5 L 16 10.5 L 16 13 Z \
        M 40 16 L 34 12 L 34 14.5 L 20 14.5 L 20 17.5 L 34 17.5 L 34 20 Z",
    paint: Paint::Solid,
}];

// Cartridge with two reels
const TAPE: Glyph = &[
    Primitive::Rect {
        x: 10.0,
        y: 5.0,
        width: 36.0,
        height: 15.0,
        paint: Paint::Solid,
    },
    Primitive::Circle {
        cx: 20.0,
        cy: 12.5,
        r: 4.0,
        paint: Paint::Reel,
    },
    Primitive::Circle {
        cx: 36.0,
        cy: 12.5,
        r: 4.0,
        paint: Paint::Reel,
    },
];

// Lightning bolt
const UPS: Glyph = &[Primitive::Path {
    d: "M 24 3 L 14 14 L 21 14 L 17 22 L 28 10 L 21 10 Z",
    paint: Paint::Solid,
}];

const ROUTER: Glyph = &[Primitive::Path {
    d: "M 10 12.5 H 40 M 34 7 L 40 12.5 L 34 18 M 16 7 L 10 12.5 L 16 18",
    paint: Paint::Outline,
}];

const FIREWALL: Glyph = &[Primitive::Path {
    d: "M 10 5 H 40 V 20 H 10 Z M 10 10 H 40 M 10 15 H 40 \
        M 20 5 V 10 M 30 5 V 10 M 15 10 V 15 M 25 10 V 15 M 35 10 V 15 M 20 15 V 20 M 30 15 V 20",
    paint: Paint::Outline,
}];

const KVM: Glyph = &[Primitive::Path {
    d: "M 12 4 H 36 V 16 H 12 Z M 24 16 V 20 M 18 21 H 30",
    paint: Paint::Outline,
}];

/// Sorted by type name
const GLYPHS: &[(&str, Glyph)] = &[
    ("firewall", FIREWALL),
    ("kvm", KVM),
    ("patch", PATCH),
    ("pdu", PDU),
    ("router", ROUTER),
    ("server", SERVER),
    ("storage", STORAGE),
    ("switch", SWITCH),
    ("tape", TAPE),
    ("ups", UPS),
];

/// Glyph for a device type, `None` when nothing is registered
pub fn glyph_for(device_type: &str) -> Option<Glyph> {
    GLYPHS
        .binary_search_by(|(name, _)| (*name).cmp(device_type))
        .ok()
        .map(|i| GLYPHS[i].1)
}
