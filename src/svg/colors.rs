//! Default fill colors per device type

/// Fill for types missing from [`PALETTE`]
pub const GENERIC_COLOR: &str = "#e0e0e0";

/// Sorted by type name
const PALETTE: &[(&str, &str)] = &[
    ("firewall", "#f4a6a6"),
    ("kvm", "#d9d2e9"),
    ("patch", "#d9d9d9"),
    ("pdu", "#f9cb9c"),
    ("router", "#a2c4c9"),
    ("server", "#9fc5e8"),
    ("storage", "#b4a7d6"),
    ("switch", "#b6d7a8"),
    ("tape", "#ffe599"),
    ("ups", "#ea9999"),
];

/// Default fill for a device type. Unknown types get [`GENERIC_COLOR`].
pub fn color_for(device_type: &str) -> &'static str {
    PALETTE
        .binary_search_by(|(name, _)| (*name).cmp(device_type))
        .map(|i| PALETTE[i].1)
        .unwrap_or(GENERIC_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sorted() {
        assert!(PALETTE.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_known_and_unknown() {
        assert_eq!(color_for("server"), "#9fc5e8");
        assert_eq!(color_for("ups"), "#ea9999");
        assert_eq!(color_for("toaster"), GENERIC_COLOR);
        assert_eq!(color_for("Server"), GENERIC_COLOR);
    }
}
