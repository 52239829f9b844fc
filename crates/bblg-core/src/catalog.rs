//! Display attributes for each event kind
//!
//! The table is a `match` over the closed [`EventKind`] enum, so adding a kind
//! without a glyph and color fails to compile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::EventKind;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// System palette entries used by the catalog
pub mod palette {
    use super::Rgb;

    pub const YELLOW: Rgb = Rgb::new(255, 204, 0);
    pub const BLUE: Rgb = Rgb::new(0, 122, 255);
    pub const RED: Rgb = Rgb::new(255, 59, 48);
    pub const PURPLE: Rgb = Rgb::new(175, 82, 222);
    pub const ORANGE: Rgb = Rgb::new(255, 149, 0);
    pub const GREEN: Rgb = Rgb::new(52, 199, 89);
    pub const PINK: Rgb = Rgb::new(255, 45, 85);
}

/// Glyph and color shown for an event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayAttributes {
    pub glyph: &'static str,
    pub color: Rgb,
}

#[must_use]
pub const fn attributes(kind: EventKind) -> DisplayAttributes {
    let (glyph, color) = match kind {
        EventKind::Feed => ("🤱🏻", palette::YELLOW),
        EventKind::Diaper => ("🧷", palette::BLUE),
        EventKind::Nap => ("💤", palette::RED),
        EventKind::Fuss => ("😾", palette::PURPLE),
        EventKind::Weight => ("⚖️", palette::ORANGE),
        EventKind::TummyTime => ("🚼", palette::GREEN),
        EventKind::Custom => ("👨‍👩‍👧", palette::PINK),
    };
    DisplayAttributes { glyph, color }
}

#[must_use]
pub const fn display_glyph(kind: EventKind) -> &'static str {
    attributes(kind).glyph
}

#[must_use]
pub const fn display_color(kind: EventKind) -> Rgb {
    attributes(kind).color
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_kind_has_glyph_and_color() {
        for kind in EventKind::ALL {
            assert!(!display_glyph(kind).is_empty(), "{kind} has no glyph");
            assert_eq!(display_color(kind).hex().len(), 7);
        }
    }

    #[test]
    fn test_entries_are_distinct() {
        let glyphs = EventKind::ALL
            .into_iter()
            .map(display_glyph)
            .collect::<HashSet<_>>();
        let colors = EventKind::ALL
            .into_iter()
            .map(display_color)
            .collect::<HashSet<_>>();
        assert_eq!(glyphs.len(), 7);
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(display_glyph(EventKind::Nap), "💤");
        assert_eq!(display_color(EventKind::Feed), palette::YELLOW);
        assert_eq!(display_color(EventKind::Custom).hex(), "#ff2d55");
    }
}
