use chrono::{DateTime, FixedOffset};

use crate::styles::StyleTable;

/// The character being escaped, the one after it, and where on the line
/// the current one sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookahead {
    pub current: char,
    pub next: Option<char>,
    pub column: usize,
    pub tab_width: usize,
}

impl Lookahead {
    /// Columns from here to the next tab stop; always at least 1.
    pub fn tab_stop(&self) -> usize {
        let width = self
            .tab_width
            .max(1);
        width - (self.column % width)
    }

    /// How the current character ends a line, if it does. The CR of a CRLF
    /// pair is elided so the pair yields a single break.
    pub fn line_ending(&self) -> Option<Outcome> {
        match (self.current, self.next) {
            ('\r', Some('\n')) => Some(Outcome::Elided),
            ('\r', _) | ('\n', _) => Some(Outcome::LineBreak),
            _ => None,
        }
    }
}

/// What escaping a character did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was written and the column is unchanged.
    Elided,
    /// The character ends the line. The renderer closes any open run,
    /// writes the line break and returns to column 0.
    LineBreak,
    /// Text was written, taking up `columns` on the line. `consumed` is
    /// set when the look-ahead character went into it as well and must be
    /// skipped.
    Written { columns: usize, consumed: bool },
}

impl Outcome {
    pub const SINGLE: Outcome = Outcome::Written {
        columns: 1,
        consumed: false,
    };

    pub const PAIR: Outcome = Outcome::Written {
        columns: 1,
        consumed: true,
    };
}

/// Font the document body is set in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub size: i32,
}

/// An output format: the markup around runs, the escaping of characters
/// within them, the definitions of the styles they use, and the document
/// skeleton it all goes into.
pub trait Markup {
    /// Whether whitespace stays in the open run even when its style
    /// differs, rather than starting a run of its own.
    fn absorbs_whitespace(&self) -> bool {
        false
    }

    /// Whether the zoom delta may be added to the font size.
    fn honours_zoom(&self) -> bool {
        false
    }

    /// Styles whose definitions are needed regardless of the text.
    fn always_used(&self) -> &'static [usize] {
        &[]
    }

    fn open_run(&self, out: &mut String, style: usize);

    /// Close the open run because another run is starting.
    fn close_run(&self, out: &mut String);

    /// Close the open run because the line is ending.
    fn close_line(&self, out: &mut String) {
        self.close_run(out)
    }

    fn line_break(&self, out: &mut String);

    fn escape(&self, out: &mut String, peek: &Lookahead) -> Outcome;

    /// Definitions for the styles marked used in the table.
    fn stylesheet(&self, table: &StyleTable, font: &Font) -> String;

    /// The document with `{export_filename}`, `{export_date}`,
    /// `{export_styles}` and `{export_content}` left to be filled in.
    fn skeleton(&self) -> &'static str;

    fn timestamp(&self, when: &DateTime<FixedOffset>) -> String;
}
