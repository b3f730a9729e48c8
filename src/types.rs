//! Type definitions for parsed rack layouts
//!
//! Both input dialects produce the same [`RackSet`]. The renderer only reads it;
//! the caller owns it between parsing and rendering and may rewrite links in the
//! meantime (see [`RackSet::rewrite_links`]).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rack capacity in U when the source does not say otherwise
pub const DEFAULT_RACK_HEIGHT: u32 = 42;

/// Largest rack height either parser accepts; the U scale draws one label per unit
pub const MAX_RACK_HEIGHT: u32 = 1000;

/// Height in U of a device or gap without an explicit height
pub const DEFAULT_DEVICE_HEIGHT: u32 = 1;

lazy_static! {
    static ref RE_WIKI_LINK: Regex = Regex::new(r"\[\[([^\]]+)\]\]").unwrap();
}

/// One physical unit mounted in a rack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackDevice {
    /// Symbolic category ("server", "switch", ... or anything else).
    /// Selects the default fill color and the glyph.
    #[serde(rename = "type")]
    pub device_type: String,
    /// Display label, may be empty
    #[serde(default)]
    pub name: String,
    /// Occupied rack units
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Explicit fill, overrides the color derived from the type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// 1-based U where the bottom edge sits. `None` means auto-stacked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// First half of a qualified rack-text key (`category:type`). Not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RackDevice {
    pub fn new(device_type: impl Into<String>, height: u32) -> Self {
        Self {
            device_type: device_type.into(),
            name: String::new(),
            height,
            href: None,
            color: None,
            position: None,
            category: None,
        }
    }
}

/// Empty space reserved in a rack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// Number of devices declared before this gap
    pub index: usize,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// A named vertical enclosure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    #[serde(default)]
    pub name: String,
    pub height: u32,
    /// Declaration order, top to bottom as authored
    #[serde(default)]
    pub devices: Vec<RackDevice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<Gap>,
}

impl Rack {
    pub fn new(name: impl Into<String>, height: u32) -> Self {
        Self {
            name: name.into(),
            height,
            devices: Vec::new(),
            gaps: Vec::new(),
        }
    }

    /// Reserve `height` units after the devices declared so far.
    pub fn push_gap(&mut self, height: u32, position: Option<u32>) {
        self.gaps.push(Gap {
            index: self.devices.len(),
            height,
            position,
        });
    }

    /// Devices and gaps merged back into declaration order
    pub fn slots(&self) -> Vec<RackSlot<'_>> {
        let mut slots = Vec::with_capacity(self.devices.len() + self.gaps.len());
        let mut gaps = self.gaps.iter().peekable();
        for (i, device) in self.devices.iter().enumerate() {
            while let Some(gap) = gaps.next_if(|g| g.index <= i) {
                slots.push(RackSlot::Gap(gap));
            }
            slots.push(RackSlot::Device(device));
        }
        slots.extend(gaps.map(RackSlot::Gap));
        slots
    }
}

/// Anything that occupies vertical space in a rack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackSlot<'a> {
    Device(&'a RackDevice),
    Gap(&'a Gap),
}

impl RackSlot<'_> {
    pub fn height(&self) -> u32 {
        match self {
            RackSlot::Device(d) => d.height,
            RackSlot::Gap(g) => g.height,
        }
    }

    pub fn position(&self) -> Option<u32> {
        match self {
            RackSlot::Device(d) => d.position,
            RackSlot::Gap(g) => g.position,
        }
    }
}

/// The parsed, dialect-independent result of one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackSet {
    /// Base URL for relative device links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Caller-supplied identifier, never set by the parsers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Rendered left to right
    #[serde(default)]
    pub racks: Vec<Rack>,
}

impl RackSet {
    pub fn device_count(&self) -> usize {
        self.racks.iter().map(|r| r.devices.len()).sum()
    }

    /// Apply a link resolver to every device before rendering.
    ///
    /// Each `href` is replaced by `resolver(href)`. A `[[target]]` fragment in a
    /// device name is unwrapped in the name and the device links to
    /// `resolver(target)`.
    pub fn rewrite_links<F>(&mut self, mut resolver: F)
    where
        F: FnMut(&str) -> String,
    {
        for device in self.racks.iter_mut().flat_map(|r| r.devices.iter_mut()) {
            if let Some(href) = device.href.take() {
                device.href = Some(resolver(&href));
            }

            let Some(caps) = RE_WIKI_LINK.captures(&device.name) else {
                continue;
            };
            let target = caps[1].to_string();
            let whole = caps[0].to_string();
            device.href = Some(resolver(&target));
            device.name = device.name.replacen(&whole, &target, 1);
        }
    }
}
