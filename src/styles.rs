//! The table of visual attributes for every style index a host can report.

use tracing::{debug, warn};

use crate::document::Host;

/// The visual attributes a host reports for a single style. Colours are in
/// host order (see `colour`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub foreground: u32,
    pub background: u32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for Attributes {
    /// Black on white, upright, regular weight.
    fn default() -> Self {
        Attributes {
            foreground: 0x000000,
            background: 0xffffff,
            bold: false,
            italic: false,
        }
    }
}

/// Attributes of one style along with whether the current export has
/// emitted a run in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleAttributes {
    pub attributes: Attributes,
    pub used: bool,
}

/// Style index to attributes, sized from the host's reported style bit
/// width. Owned by a single export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    entries: Vec<StyleAttributes>,
}

impl StyleTable {
    /// Read the attributes for every style in `0..2^style_bits` from the
    /// host. Styles the host has no answer for get the defaults.
    pub fn read(host: &impl Host) -> StyleTable {
        let count = style_count(host.style_bits());

        let entries = (0..count)
            .map(|style| StyleAttributes {
                attributes: host
                    .style_attributes(style)
                    .unwrap_or_default(),
                used: false,
            })
            .collect();

        debug!("Read {} styles", count);

        StyleTable { entries }
    }

    pub fn from_attributes(attributes: impl IntoIterator<Item = Attributes>) -> StyleTable {
        StyleTable {
            entries: attributes
                .into_iter()
                .map(|attributes| StyleAttributes {
                    attributes,
                    used: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }

    pub fn get(&self, style: usize) -> Option<&StyleAttributes> {
        self.entries
            .get(style)
    }

    /// Record that a run in `style` has been emitted. A style beyond the
    /// table means the host broke its own contract; the table is grown
    /// with default attributes so that rendering can continue, up to
    /// `MAX_STYLES`. Indices past that are not recorded at all.
    pub fn mark_used(&mut self, style: usize) {
        if style >= MAX_STYLES {
            warn!("Style {} is not a valid style index; ignoring it", style);
            return;
        }
        if style >= self.entries.len() {
            warn!(
                "Style {} is outside the {} styles the host reported",
                style,
                self.entries
                    .len()
            );
            self.entries
                .resize(style + 1, StyleAttributes::default());
        }
        self.entries[style].used = true;
    }

    pub fn is_used(&self, style: usize) -> bool {
        self.entries
            .get(style)
            .map_or(false, |entry| entry.used)
    }

    /// The styles marked used, in ascending index order.
    pub fn used(&self) -> impl Iterator<Item = (usize, &Attributes)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.used)
            .map(|(style, entry)| (style, &entry.attributes))
    }
}

/// Upper bound on the number of styles a table ever holds.
pub const MAX_STYLES: usize = 1 << 16;

/// Number of styles addressable with the given bit width. Widths beyond
/// what makes sense for a style index are clamped to `MAX_STYLES`.
pub fn style_count(bits: u32) -> usize {
    1usize << bits.min(16)
}
