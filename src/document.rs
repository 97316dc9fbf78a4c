//! The host side of an export: the styled text being exported and the
//! editor settings that shape the output.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::colour;
use crate::error::ExportError;
use crate::styles::{style_count, Attributes};

/// Read-only access to styled text. Offsets count characters.
pub trait CharacterStream {
    fn len(&self) -> usize;

    /// The character at `offset`, or `None` for any offset at or past the
    /// end. Never fails, so a look-ahead from the last character is safe.
    fn char_at(&self, offset: usize) -> Option<char>;

    /// The style index of the character at `offset`.
    fn style_at(&self, offset: usize) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything an export reads from the editor hosting the document.
pub trait Host: CharacterStream {
    /// The number of styles is 2 to the power of this.
    fn style_bits(&self) -> u32;

    /// Attributes for a style, or `None` if the host has nothing to say
    /// about it.
    fn style_attributes(&self, style: usize) -> Option<Attributes>;

    fn file_name(&self) -> Option<&str>;

    fn font_family(&self) -> &str;

    /// Point size of the base style.
    fn font_size(&self) -> i32;

    /// Current zoom delta in points, if the host zooms.
    fn zoom(&self) -> Option<i32> {
        None
    }

    fn tab_width(&self) -> usize;
}

/// A host held entirely in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    text: Vec<char>,
    styles: Vec<usize>,
    palette: Vec<Option<Attributes>>,
    style_bits: u32,
    file_name: Option<String>,
    font_family: String,
    font_size: i32,
    zoom: Option<i32>,
    tab_width: usize,
}

impl Buffer {
    /// Unstyled text; every character is in style 0.
    pub fn new(text: &str) -> Buffer {
        let text: Vec<char> = text
            .chars()
            .collect();
        let styles = vec![0; text.len()];

        Buffer {
            text,
            styles,
            palette: Vec::new(),
            style_bits: 5,
            file_name: None,
            font_family: "Monospace".to_string(),
            font_size: 10,
            zoom: None,
            tab_width: 4,
        }
    }

    /// Builds text from (fragment, style) pairs.
    pub fn from_runs<'a>(runs: impl IntoIterator<Item = (&'a str, usize)>) -> Buffer {
        let mut buffer = Buffer::new("");

        for (fragment, style) in runs {
            for c in fragment.chars() {
                buffer
                    .text
                    .push(c);
                buffer
                    .styles
                    .push(style);
            }
        }

        buffer
    }

    pub fn with_style(mut self, style: usize, attributes: Attributes) -> Buffer {
        self.set_style(style, attributes);
        self
    }

    pub fn with_style_bits(mut self, bits: u32) -> Buffer {
        self.style_bits = bits;
        self
    }

    pub fn with_file_name(mut self, name: &str) -> Buffer {
        self.file_name = Some(name.to_string());
        self
    }

    pub fn with_font(mut self, family: &str, size: i32) -> Buffer {
        self.font_family = family.to_string();
        self.font_size = size;
        self
    }

    pub fn with_zoom(mut self, zoom: i32) -> Buffer {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_tab_width(mut self, width: usize) -> Buffer {
        self.tab_width = width;
        self
    }

    /// Give a style its attributes. Styles beyond what the style bit width
    /// can address are ignored.
    pub fn set_style(&mut self, style: usize, attributes: Attributes) {
        if style >= style_count(self.style_bits) {
            warn!(
                "Style {} is out of range for {} style bits",
                style, self.style_bits
            );
            return;
        }
        if style >= self.palette.len() {
            self.palette
                .resize(style + 1, None);
        }
        self.palette[style] = Some(attributes);
    }

    pub fn set_tab_width(&mut self, width: usize) {
        self.tab_width = width;
    }
}

impl CharacterStream for Buffer {
    fn len(&self) -> usize {
        self.text
            .len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text
            .get(offset)
            .copied()
    }

    fn style_at(&self, offset: usize) -> usize {
        self.styles
            .get(offset)
            .copied()
            .unwrap_or(0)
    }
}

impl Host for Buffer {
    fn style_bits(&self) -> u32 {
        self.style_bits
    }

    fn style_attributes(&self, style: usize) -> Option<Attributes> {
        self.palette
            .get(style)
            .copied()
            .flatten()
    }

    fn file_name(&self) -> Option<&str> {
        self.file_name
            .as_deref()
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    fn font_size(&self) -> i32 {
        self.font_size
    }

    fn zoom(&self) -> Option<i32> {
        self.zoom
    }

    fn tab_width(&self) -> usize {
        self.tab_width
    }
}

/// On-disk form of a `Buffer`, as dumped from an editor.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Snapshot {
    #[serde(default)]
    file_name: Option<String>,
    text: String,
    #[serde(default)]
    runs: Vec<(usize, usize)>,
    #[serde(default)]
    styles: Vec<SnapshotStyle>,
    #[serde(default = "default_style_bits")]
    style_bits: u32,
    #[serde(default = "default_font_family")]
    font_family: String,
    #[serde(default = "default_font_size")]
    font_size: i32,
    #[serde(default)]
    zoom: Option<i32>,
    #[serde(default = "default_tab_width")]
    tab_width: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotStyle {
    index: usize,
    #[serde(default)]
    foreground: Option<String>,
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
}

fn default_style_bits() -> u32 {
    5
}

fn default_font_family() -> String {
    "Monospace".to_string()
}

fn default_font_size() -> i32 {
    10
}

fn default_tab_width() -> usize {
    4
}

/// Read a JSON snapshot from disk into a `Buffer`.
pub fn load(path: &Path) -> Result<Buffer, ExportError> {
    let content = std::fs::read_to_string(path).map_err(|error| {
        debug!(?error);
        ExportError::Snapshot {
            path: path.to_path_buf(),
            problem: match error.kind() {
                std::io::ErrorKind::NotFound => "file not found".to_string(),
                kind => format!("failed reading ({})", kind),
            },
        }
    })?;

    parse(&content).map_err(|problem| ExportError::Snapshot {
        path: path.to_path_buf(),
        problem,
    })
}

/// Parse the JSON text of a snapshot. The error is a description of what
/// was wrong with it.
pub fn parse(content: &str) -> Result<Buffer, String> {
    let snapshot: Snapshot =
        serde_json::from_str(content).map_err(|error| format!("malformed snapshot: {}", error))?;

    let mut buffer = Buffer::new(&snapshot.text);
    buffer.style_bits = snapshot.style_bits;

    let count = style_count(snapshot.style_bits);
    let check = |style: usize| {
        if style < count {
            Ok(style)
        } else {
            Err(format!("style {} out of range", style))
        }
    };

    let mut offset: usize = 0;
    for (length, style) in snapshot.runs {
        let style = check(style)?;
        let end = offset
            .saturating_add(length)
            .min(buffer.styles.len());
        buffer.styles[offset..end].fill(style);
        offset = end;
    }

    for entry in snapshot.styles {
        let defaults = Attributes::default();
        let attributes = Attributes {
            foreground: colour_field(entry.foreground.as_deref(), defaults.foreground)?,
            background: colour_field(entry.background.as_deref(), defaults.background)?,
            bold: entry.bold,
            italic: entry.italic,
        };
        buffer.set_style(check(entry.index)?, attributes);
    }

    buffer.file_name = snapshot.file_name;
    buffer.font_family = snapshot.font_family;
    buffer.font_size = snapshot.font_size;
    buffer.zoom = snapshot.zoom;
    buffer.tab_width = snapshot.tab_width;

    debug!(
        "Snapshot holds {} characters and {} styles",
        buffer.len(),
        buffer
            .palette
            .iter()
            .flatten()
            .count()
    );

    Ok(buffer)
}

fn colour_field(value: Option<&str>, default: u32) -> Result<u32, String> {
    match value {
        None => Ok(default),
        Some(text) => colour::parse_hex(text).ok_or_else(|| format!("invalid colour \"{}\"", text)),
    }
}
