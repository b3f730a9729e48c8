//! rack-text parser
//!
//! ```text
//! caption: Core
//! height: 4
//! items:
//! - server[2]: [Web1](https://wiki.example/web1)
//! - net:switch: SW1
//! ```
//!
//! The three header lines are required and must appear in this order. Item
//! lines start with `-`; the list ends at the first line that does not.

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::error::FormatError;
use crate::types::{Rack, RackDevice, RackSet, DEFAULT_DEVICE_HEIGHT, MAX_RACK_HEIGHT};

lazy_static! {
    // `- [category:]type[ [n] ]: label`, qualified form tried first
    static ref RE_ITEM: Regex = Regex::new(
        r"^-\s*(?:([A-Za-z][A-Za-z0-9_-]*):)?([A-Za-z][A-Za-z0-9_-]*)(?:\s*\[(\d+)\])?\s*:(.*)$"
    )
    .unwrap();
    static ref RE_LINK: Regex = Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)$").unwrap();
}

/// Parse a rack-text document into a set holding exactly one rack
pub fn parse_text_markup(text: &str) -> Result<RackSet, FormatError> {
    TextMarkupParser::new(text).parse()
}

/// Line cursor over the non-blank, trimmed lines of a document
pub struct TextMarkupParser<'a> {
    /// (1-based source line number, trimmed text)
    lines: Vec<(usize, &'a str)>,
    current: usize,
}

impl<'a> TextMarkupParser<'a> {
    pub fn new(content: &'a str) -> Self {
        let lines = content
            .split("\r\n")
            .flat_map(|chunk| chunk.split(|c: char| c == '\n' || c == '\r'))
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        Self { lines, current: 0 }
    }

    pub fn parse(mut self) -> Result<RackSet, FormatError> {
        let rack = self.parse_rack()?;

        if let Some((line_no, _)) = self.peek() {
            warn!(line = line_no; "Ignoring trailing lines after the item list");
        }
        debug!(devices = rack.devices.len(); "Parsed rack-text document");

        Ok(RackSet {
            racks: vec![rack],
            ..Default::default()
        })
    }

    fn parse_rack(&mut self) -> Result<Rack, FormatError> {
        let (_, caption) = self.expect_prefix("caption:")?;

        let (line_no, height) = self.expect_prefix("height:")?;
        let height = parse_height(height)
            .filter(|h| *h <= MAX_RACK_HEIGHT)
            .ok_or_else(|| FormatError::at_line(line_no, format!("invalid height value: {}", height)))?;

        let mut rack = Rack::new(caption, height);

        self.expect_prefix("items:")?;
        while let Some((_, line)) = self.peek() {
            if !line.starts_with('-') {
                break;
            }
            self.parse_item(&mut rack)?;
        }

        Ok(rack)
    }

    /// Consume the next line, which must start with `prefix`; returns the
    /// trimmed remainder.
    fn expect_prefix(&mut self, prefix: &str) -> Result<(usize, &'a str), FormatError> {
        let (line_no, line) = self.next_line()?;
        match line.strip_prefix(prefix) {
            Some(rest) => Ok((line_no, rest.trim())),
            None => Err(FormatError::at_line(
                line_no,
                format!("expected '{}', got: {}", prefix, line),
            )),
        }
    }

    fn parse_item(&mut self, rack: &mut Rack) -> Result<(), FormatError> {
        let (line_no, line) = self.next_line()?;

        let Some(caps) = RE_ITEM.captures(line) else {
            return Err(item_error(line_no, line));
        };

        let height = match caps.get(3) {
            Some(n) => parse_height(n.as_str()).ok_or_else(|| {
                FormatError::at_line(line_no, format!("invalid height value: {}", n.as_str()))
            })?,
            None => DEFAULT_DEVICE_HEIGHT,
        };
        let device_type = &caps[2];

        if device_type == "gap" {
            rack.push_gap(height, None);
            return Ok(());
        }

        let mut device = RackDevice::new(device_type, height);
        device.category = caps.get(1).map(|m| m.as_str().to_string());

        let label = caps[4].trim();
        match RE_LINK.captures(label) {
            Some(link) => {
                device.name = link[1].to_string();
                device.href = Some(link[2].to_string());
            }
            None => device.name = label.to_string(),
        }

        rack.devices.push(device);
        Ok(())
    }

    fn next_line(&mut self) -> Result<(usize, &'a str), FormatError> {
        match self.lines.get(self.current) {
            Some(&entry) => {
                self.current += 1;
                Ok(entry)
            }
            None => {
                let after_last = self.lines.last().map_or(1, |(n, _)| n + 1);
                Err(FormatError::at_line(after_last, "unexpected end of input"))
            }
        }
    }

    fn peek(&self) -> Option<(usize, &'a str)> {
        self.lines.get(self.current).copied()
    }
}

fn parse_height(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|h| *h >= 1)
}

/// Explain why an item line did not match the item grammar
fn item_error(line_no: usize, line: &str) -> FormatError {
    let body = line.strip_prefix('-').unwrap_or(line).trim();
    match body.split_once(':') {
        Some((key, _)) => FormatError::at_line(line_no, format!("invalid identifier: {}", key.trim())),
        None => FormatError::at_line(line_no, "expected ':' in item entry"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let input = "caption: Core\nheight: 4\nitems:\n- server[2]: Web1\n- switch: SW1";
        let set = parse_text_markup(input).unwrap();
        assert_eq!(set.racks.len(), 1);

        let rack = &set.racks[0];
        assert_eq!(rack.name, "Core");
        assert_eq!(rack.height, 4);
        assert_eq!(rack.devices.len(), 2);
        assert_eq!(rack.devices[0].device_type, "server");
        assert_eq!(rack.devices[0].height, 2);
        assert_eq!(rack.devices[0].name, "Web1");
        assert_eq!(rack.devices[1].device_type, "switch");
        assert_eq!(rack.devices[1].height, 1);
        assert_eq!(rack.devices[1].name, "SW1");
        assert!(rack.devices.iter().all(|d| d.position.is_none()));
    }

    #[test]
    fn test_qualified_key() {
        let input = "caption: R\nheight: 8\nitems:\n- net:switch[2]: Core SW\n- storage:tape: T1";
        let set = parse_text_markup(input).unwrap();
        let devices = &set.racks[0].devices;
        assert_eq!(devices[0].device_type, "switch");
        assert_eq!(devices[0].category.as_deref(), Some("net"));
        assert_eq!(devices[0].height, 2);
        assert_eq!(devices[1].device_type, "tape");
        assert_eq!(devices[1].category.as_deref(), Some("storage"));
    }

    #[test]
    fn test_label_with_colon_stays_in_name() {
        let input = "caption: R\nheight: 8\nitems:\n- server: web: primary";
        let set = parse_text_markup(input).unwrap();
        let device = &set.racks[0].devices[0];
        assert_eq!(device.device_type, "server");
        assert_eq!(device.category, None);
        assert_eq!(device.name, "web: primary");
    }

    #[test]
    fn test_link_label() {
        let input = "caption: R\nheight: 8\nitems:\n- server: [Web](https://example.com/web)";
        let set = parse_text_markup(input).unwrap();
        let device = &set.racks[0].devices[0];
        assert_eq!(device.name, "Web");
        assert_eq!(device.href.as_deref(), Some("https://example.com/web"));
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let input = "\r\n  caption:  Spaced  \r\n\r\nheight: 3\r\nitems:\r\n\r\n   - ups: U\r\n";
        let set = parse_text_markup(input).unwrap();
        assert_eq!(set.racks[0].name, "Spaced");
        assert_eq!(set.racks[0].devices[0].device_type, "ups");
    }

    #[test]
    fn test_empty_item_list() {
        let set = parse_text_markup("caption: Empty\nheight: 2\nitems:").unwrap();
        assert!(set.racks[0].devices.is_empty());
    }

    #[test]
    fn test_gap_item() {
        let input = "caption: R\nheight: 8\nitems:\n- server: A\n- gap[2]:\n- switch: B";
        let set = parse_text_markup(input).unwrap();
        let rack = &set.racks[0];
        assert_eq!(rack.devices.len(), 2);
        assert_eq!(rack.gaps.len(), 1);
        assert_eq!(rack.gaps[0].index, 1);
        assert_eq!(rack.gaps[0].height, 2);
    }

    #[test]
    fn test_list_stops_at_non_item_line() {
        let input = "caption: R\nheight: 8\nitems:\n- server: A\nnotes: ignored\n- switch: B";
        let set = parse_text_markup(input).unwrap();
        assert_eq!(set.racks[0].devices.len(), 1);
    }

    #[test]
    fn test_missing_caption() {
        let err = parse_text_markup("height: 4\nitems:").unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert!(err.message().starts_with("expected 'caption:'"));
    }

    #[test]
    fn test_invalid_height() {
        let err = parse_text_markup("caption: A\n\nheight: tall\nitems:").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.message(), "invalid height value: tall");
    }

    #[test]
    fn test_rack_height_limit() {
        let set = parse_text_markup("caption: A\nheight: 1000\nitems:").unwrap();
        assert_eq!(set.racks[0].height, MAX_RACK_HEIGHT);

        let err = parse_text_markup("caption: A\nheight: 4294967295\nitems:").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.message(), "invalid height value: 4294967295");
    }

    #[test]
    fn test_lone_cr_line_endings() {
        let err = parse_text_markup("caption: A\rheight: x\ritems:").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.message(), "invalid height value: x");

        let set = parse_text_markup("caption: A\r\rheight: 2\ritems:\r- pdu: P").unwrap();
        assert_eq!(set.racks[0].devices[0].name, "P");
    }

    #[test]
    fn test_missing_items_header() {
        let err = parse_text_markup("caption: A\nheight: 2\nlist:").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.message().starts_with("expected 'items:'"));
    }

    #[test]
    fn test_zero_item_height() {
        let err = parse_text_markup("caption: A\nheight: 4\nitems:\n- server[0]: X").unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.message(), "invalid height value: 0");
    }

    #[test]
    fn test_invalid_identifier() {
        let err = parse_text_markup("caption: A\nheight: 4\nitems:\n- 1server: X").unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.message(), "invalid identifier: 1server");

        let err = parse_text_markup("caption: A\nheight: 4\nitems:\n- server[x]: X").unwrap_err();
        assert_eq!(err.message(), "invalid identifier: server[x]");

        let err = parse_text_markup("caption: A\nheight: 4\nitems:\n--server: x").unwrap_err();
        assert_eq!(err.message(), "invalid identifier: -server");
    }

    #[test]
    fn test_item_without_colon() {
        let err = parse_text_markup("caption: A\nheight: 4\nitems:\n- server").unwrap_err();
        assert_eq!(err.message(), "expected ':' in item entry");
    }

    #[test]
    fn test_unexpected_end() {
        let err = parse_text_markup("caption: A\nheight: 4").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.message(), "unexpected end of input");
    }
}
