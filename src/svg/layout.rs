//! Vertical placement of devices and gaps inside a rack.
//!
//! Slots are stacked from the bottom of the rack in reverse declaration order,
//! so the first declared device ends up on top. A slot with an explicit
//! position is placed there, and the stacking cursor continues from its top
//! edge. Overlaps and overflow are not checked; offsets saturate at
//! `u32::MAX`.

use log::trace;

use crate::types::{Rack, RackSlot};

/// A slot with its resolved offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub slot: RackSlot<'a>,
    /// Units between the bottom of the rack and the bottom edge of the slot
    pub base: u32,
}

impl Placement<'_> {
    /// Units between the bottom of the rack and the top edge of the slot
    pub fn top(&self) -> u32 {
        self.base.saturating_add(self.slot.height())
    }
}

/// Place every slot of `rack`, in stacking order (last declared first).
pub fn stack_rack(rack: &Rack) -> Vec<Placement<'_>> {
    let mut cursor = 0u32;
    rack.slots()
        .into_iter()
        .rev()
        .map(|slot| {
            let base = match slot.position() {
                Some(position) => position.saturating_sub(1),
                None => cursor,
            };
            let placed = Placement { slot, base };
            cursor = placed.top();
            trace!(base = base, height = slot.height(); "Placed rack slot");
            placed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RackDevice;

    fn device(name: &str, height: u32, position: Option<u32>) -> RackDevice {
        let mut d = RackDevice::new("server", height);
        d.name = name.to_string();
        d.position = position;
        d
    }

    fn ranges(rack: &Rack) -> Vec<(String, u32, u32)> {
        stack_rack(rack)
            .iter()
            .map(|p| {
                let label = match p.slot {
                    RackSlot::Device(d) => d.name.clone(),
                    RackSlot::Gap(_) => "gap".to_string(),
                };
                (label, p.base, p.top())
            })
            .collect()
    }

    #[test]
    fn test_auto_stack_reverse_order() {
        let mut rack = Rack::new("r", 10);
        rack.devices = vec![device("A", 2, None), device("B", 1, None), device("C", 3, None)];
        assert_eq!(
            ranges(&rack),
            [
                ("C".to_string(), 0, 3),
                ("B".to_string(), 3, 4),
                ("A".to_string(), 4, 6)
            ]
        );
    }

    #[test]
    fn test_explicit_position_moves_cursor() {
        let mut rack = Rack::new("r", 20);
        rack.devices = vec![device("A", 1, None), device("B", 2, Some(10)), device("C", 1, None)];
        assert_eq!(
            ranges(&rack),
            [
                ("C".to_string(), 0, 1),
                ("B".to_string(), 9, 11),
                ("A".to_string(), 11, 12)
            ]
        );
    }

    #[test]
    fn test_gap_reserves_space() {
        let mut rack = Rack::new("r", 10);
        rack.devices.push(device("A", 1, None));
        rack.push_gap(2, None);
        rack.devices.push(device("B", 1, None));
        assert_eq!(
            ranges(&rack),
            [
                ("B".to_string(), 0, 1),
                ("gap".to_string(), 1, 3),
                ("A".to_string(), 3, 4)
            ]
        );
    }

    #[test]
    fn test_offsets_saturate() {
        let mut rack = Rack::new("r", 10);
        rack.devices = vec![
            device("A", 1, None),
            device("B", 2, Some(u32::MAX)),
            device("C", u32::MAX, None),
        ];
        assert_eq!(
            ranges(&rack),
            [
                ("C".to_string(), 0, u32::MAX),
                ("B".to_string(), u32::MAX - 1, u32::MAX),
                ("A".to_string(), u32::MAX, u32::MAX)
            ]
        );
    }

    #[test]
    fn test_leading_gap_does_not_move_devices() {
        let mut rack = Rack::new("R1", 10);
        rack.push_gap(1, None);
        rack.devices.push(device("A", 1, None));
        let placed = stack_rack(&rack);
        assert_eq!(placed[0].base, 0);
        assert!(matches!(placed[0].slot, RackSlot::Device(_)));
    }
}
