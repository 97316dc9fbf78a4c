//! Exporting a document from its host into a finished markup document.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local};
use tracing::{debug, info};

use crate::document::{CharacterStream, Host};
use crate::rendering::{render_body, Font, Html, Latex, Markup};
use crate::styles::StyleTable;
use crate::templating::{self, Fields, UNTITLED};

/// The output formats a document can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Latex,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Format> {
        match name {
            "html" => Some(Format::Html),
            "latex" | "tex" => Some(Format::Latex),
            _ => None,
        }
    }

    /// File extension, including the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Html => ".html",
            Format::Latex => ".tex",
        }
    }

    pub fn honours_zoom(&self) -> bool {
        match self {
            Format::Html => Html.honours_zoom(),
            Format::Latex => Latex.honours_zoom(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Html => write!(f, "HTML"),
            Format::Latex => write!(f, "LaTeX"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Add the host's zoom delta to the font size, where the format allows.
    pub use_zoom: bool,
}

/// A finished document, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub format: Format,
    pub text: String,
}

/// Export the host's document, dated now.
pub fn export(host: &impl Host, format: Format, options: &Options) -> Exported {
    let now = Local::now().fixed_offset();
    export_at(host, format, options, &now)
}

/// Export the host's document with the given generation date. Given the
/// same host state and date the output is identical.
pub fn export_at(
    host: &impl Host,
    format: Format,
    options: &Options,
    when: &DateTime<FixedOffset>,
) -> Exported {
    info!("Exporting {} characters as {}", host.len(), format);

    let text = match format {
        Format::Html => compose(&Html, host, options, when),
        Format::Latex => compose(&Latex, host, options, when),
    };

    Exported { format, text }
}

fn compose(
    markup: &impl Markup,
    host: &impl Host,
    options: &Options,
    when: &DateTime<FixedOffset>,
) -> String {
    let mut table = StyleTable::read(host);

    let body = render_body(markup, host, &mut table, host.tab_width());

    let font = Font {
        family: host
            .font_family()
            .to_string(),
        size: font_size(markup, host, options),
    };
    let styles = markup.stylesheet(&table, &font);

    let date = markup.timestamp(when);
    let filename = host
        .file_name()
        .unwrap_or(UNTITLED);

    debug!(
        "Body is {} bytes, stylesheet {} bytes",
        body.len(),
        styles.len()
    );

    templating::fill(
        markup.skeleton(),
        &Fields {
            filename,
            date: &date,
            styles: &styles,
            content: &body,
        },
    )
}

fn font_size(markup: &impl Markup, host: &impl Host, options: &Options) -> i32 {
    let size = host.font_size();

    if options.use_zoom && markup.honours_zoom() {
        size + host
            .zoom()
            .unwrap_or(0)
    } else {
        size
    }
}
