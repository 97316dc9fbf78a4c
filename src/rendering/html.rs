//! Renderer for XHTML documents styled with an embedded CSS stylesheet.

use chrono::{DateTime, FixedOffset};

use crate::colour::html_colour;
use crate::rendering::{Font, Lookahead, Markup, Outcome};
use crate::styles::StyleTable;

static TEMPLATE: &str = concat!(
    r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN"
  "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">

<head>
	<title>{export_filename}</title>
	<meta http-equiv="content-type" content="text/html;charset=utf-8" />
	<meta name="generator" content="stylexport "#,
    env!("CARGO_PKG_VERSION"),
    r#"" />
	<meta name="date" content="{export_date}" />
	<style type="text/css">
{export_styles}
	</style>
</head>

<body>
<p>
{export_content}
</p>
</body>
</html>
"#
);

const SPACE: &str = "&nbsp;";

/// The CSS class carrying a style's definition.
pub fn class_name(style: usize) -> String {
    format!("style_{}", style)
}

/// Each run becomes a `<span>` whose class names its style. Spaces are
/// non-breaking so that indentation survives.
pub struct Html;

impl Markup for Html {
    fn absorbs_whitespace(&self) -> bool {
        true
    }

    fn honours_zoom(&self) -> bool {
        true
    }

    fn open_run(&self, out: &mut String, style: usize) {
        out.push_str("<span class=\"");
        out.push_str(&class_name(style));
        out.push_str("\">");
    }

    fn close_run(&self, out: &mut String) {
        out.push_str("</span>");
    }

    fn line_break(&self, out: &mut String) {
        out.push_str("<br />\n");
    }

    fn escape(&self, out: &mut String, peek: &Lookahead) -> Outcome {
        if let Some(outcome) = peek.line_ending() {
            return outcome;
        }

        match peek.current {
            '\t' => {
                let stop = peek.tab_stop();
                out.push_str(&SPACE.repeat(stop));
                return Outcome::Written {
                    columns: stop,
                    consumed: false,
                };
            }
            ' ' => out.push_str(SPACE),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            c => out.push(c),
        }

        Outcome::SINGLE
    }

    fn stylesheet(&self, table: &StyleTable, font: &Font) -> String {
        let mut css = String::new();

        css.push_str(&format!(
            "\tbody\n\t{{\n\t\tfont-family: {}, monospace;\n\t\tfont-size: {}pt;\n\t}}\n",
            font.family, font.size
        ));

        for (style, attributes) in table.used() {
            css.push_str(&format!(
                "\t.{}\n\t{{\n\t\tcolor: #{};\n\t\tbackground-color: #{};\n{}{}\t}}\n",
                class_name(style),
                html_colour(attributes.foreground),
                html_colour(attributes.background),
                if attributes.bold {
                    "\t\tfont-weight: bold;\n"
                } else {
                    ""
                },
                if attributes.italic {
                    "\t\tfont-style: italic;\n"
                } else {
                    ""
                },
            ));
        }

        css
    }

    fn skeleton(&self) -> &'static str {
        TEMPLATE
    }

    fn timestamp(&self, when: &DateTime<FixedOffset>) -> String {
        when.format("%Y-%m-%dT%H:%M:%S%z")
            .to_string()
    }
}
