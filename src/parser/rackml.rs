//! RackML (XML) parser
//!
//! ```xml
//! <racks base="https://wiki.example/">
//!   <rack name="R1" height="10">
//!     <switch href="sw1">SW1</switch>
//!     <gap height="2"/>
//!     <server height="2" at="1" color="#ccc">Web</server>
//!   </rack>
//! </racks>
//! ```
//!
//! Every element child of a `rack` is a device whose type is the tag name,
//! except `gap`, which reserves space without producing a device.

use log::{debug, warn};
use roxmltree::{Document, Node};

use super::{parse_int_or, parse_leading_int};
use crate::error::FormatError;
use crate::types::{
    Rack, RackDevice, RackSet, DEFAULT_DEVICE_HEIGHT, DEFAULT_RACK_HEIGHT, MAX_RACK_HEIGHT,
};

/// Parse a RackML document
pub fn parse_rackml(text: &str) -> Result<RackSet, FormatError> {
    let trimmed = text.trim_start();
    // Keep reported line numbers relative to the untrimmed source
    let skipped_lines = text[..text.len() - trimmed.len()].matches('\n').count();
    let doc = Document::parse(trimmed.trim_end()).map_err(|err| {
        let row = err.pos().row as usize + skipped_lines;
        FormatError::at_line(row, format!("malformed XML: {}", err))
    })?;
    let root = doc.root_element();

    if root.tag_name().name() != "racks" {
        return Err(FormatError::document("root element must be racks"));
    }

    let mut rack_set = RackSet {
        base: root.attribute("base").map(str::to_string),
        ..Default::default()
    };

    for node in root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "rack")
    {
        rack_set.racks.push(parse_rack(node));
    }

    debug!(
        racks = rack_set.racks.len(),
        devices = rack_set.device_count();
        "Parsed RackML document"
    );
    Ok(rack_set)
}

fn parse_rack(node: Node) -> Rack {
    let mut height = parse_int_or(node.attribute("height"), DEFAULT_RACK_HEIGHT, "rack height");
    if height > MAX_RACK_HEIGHT {
        warn!(value = height, max = MAX_RACK_HEIGHT; "Rack height over limit, using default");
        height = DEFAULT_RACK_HEIGHT;
    }
    let mut rack = Rack::new(node.attribute("name").unwrap_or_default(), height);

    for child in node.children().filter(|n| n.is_element()) {
        let height = parse_int_or(child.attribute("height"), DEFAULT_DEVICE_HEIGHT, "height");
        let position = child.attribute("at").and_then(|at| {
            let position = parse_leading_int(at);
            if position.is_none() {
                warn!(value = at; "Invalid at attribute, stacking automatically");
            }
            position
        });

        let tag = child.tag_name().name();
        if tag == "gap" {
            rack.push_gap(height, position);
            continue;
        }

        rack.devices.push(RackDevice {
            device_type: tag.to_string(),
            name: text_content(child).trim().to_string(),
            height,
            href: child.attribute("href").map(str::to_string),
            color: child.attribute("color").map(str::to_string),
            position,
            category: None,
        });
    }

    rack
}

/// Concatenated text of all descendants, like the DOM's `textContent`
fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
