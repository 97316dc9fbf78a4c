//! Renderer for LaTeX documents, one macro per style.

use chrono::{DateTime, FixedOffset};

use crate::colour::tex_colour;
use crate::rendering::{Font, Lookahead, Markup, Outcome};
use crate::styles::StyleTable;

static TEMPLATE: &str = concat!(
    r#"% {export_filename} (LaTeX code generated by stylexport "#,
    env!("CARGO_PKG_VERSION"),
    r#" on {export_date})
\documentclass[a4paper]{article}
\usepackage[a4paper,margin=2cm]{geometry}
\usepackage[utf8x]{inputenc}
\usepackage[T1]{fontenc}
\usepackage{color}
\setlength{\parindent}{0em}
\setlength{\parskip}{2ex plus1ex minus0.5ex}
{export_styles}
\begin{document}
\ttfamily
\setlength{\fboxrule}{0pt}
\setlength{\fboxsep}{0pt}
{export_content}\end{document}
"#
);

/// Macro names can't contain digits, so style indices are written in base
/// 26 with the letters a to z as digits, most significant first: 0 is "a",
/// 25 is "z", 26 is "ba".
pub fn style_token(style: usize) -> String {
    let mut digits = Vec::new();
    let mut remaining = style;

    loop {
        digits.push((b'a' + (remaining % 26) as u8) as char);
        remaining /= 26;
        if remaining == 0 {
            break;
        }
    }

    digits
        .iter()
        .rev()
        .collect()
}

/// Each run becomes an invocation of the macro defined for its style.
///
/// Dashes and guillemet-like pairs are split with `\/` so that LaTeX does
/// not set them as ligatures. Only pairs are handled: in a run of three or
/// more the characters after the first pair are emitted as usual, so `---`
/// still comes out as an en dash followed by a hyphen.
pub struct Latex;

impl Markup for Latex {
    // Line breaks are set in style 0 outside of any run.
    fn always_used(&self) -> &'static [usize] {
        &[0]
    }

    fn open_run(&self, out: &mut String, style: usize) {
        out.push_str("\\style");
        out.push_str(&style_token(style));
        out.push('{');
    }

    fn close_run(&self, out: &mut String) {
        out.push_str("}\n");
    }

    fn close_line(&self, out: &mut String) {
        out.push('}');
    }

    fn line_break(&self, out: &mut String) {
        out.push_str(" \\\\\n");
    }

    fn escape(&self, out: &mut String, peek: &Lookahead) -> Outcome {
        if let Some(outcome) = peek.line_ending() {
            return outcome;
        }

        match peek.current {
            '\t' => {
                let stop = peek.tab_stop();
                out.push_str(&format!("\\hspace*{{{}em}}", stop));
                return Outcome::Written {
                    columns: stop,
                    consumed: false,
                };
            }
            ' ' if peek.next == Some(' ') => {
                out.push_str("{\\hspace*{1em}}");
                return Outcome::PAIR;
            }
            c @ ('-' | '<' | '>') if peek.next == Some(c) => {
                out.push(c);
                out.push_str("\\/");
                out.push(c);
                return Outcome::PAIR;
            }
            c @ ('{' | '}' | '_' | '&' | '$' | '#' | '%') => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\symbol{92}"),
            '~' => out.push_str("\\symbol{126}"),
            '^' => out.push_str("\\symbol{94}"),
            c => out.push(c),
        }

        Outcome::SINGLE
    }

    fn stylesheet(&self, table: &StyleTable, _font: &Font) -> String {
        let mut commands = String::new();

        for (style, attributes) in table.used() {
            commands.push_str(&format!(
                "\\newcommand{{\\style{}}}[1]{{\\noindent{{",
                style_token(style)
            ));
            if attributes.bold {
                commands.push_str("\\textbf{");
            }
            if attributes.italic {
                commands.push_str("\\textit{");
            }
            commands.push_str(&format!(
                "\\textcolor[rgb]{{{}}}{{\\fcolorbox[rgb]{{0, 0, 0}}{{{}}}{{#1}}}}",
                tex_colour(attributes.foreground),
                tex_colour(attributes.background)
            ));
            if attributes.bold {
                commands.push('}');
            }
            if attributes.italic {
                commands.push('}');
            }
            commands.push_str("}}\n");
        }

        commands
    }

    fn skeleton(&self) -> &'static str {
        TEMPLATE
    }

    fn timestamp(&self, when: &DateTime<FixedOffset>) -> String {
        when.format("%c")
            .to_string()
    }
}
