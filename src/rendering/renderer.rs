use tracing::debug;

use crate::document::CharacterStream;
use crate::rendering::{Lookahead, Markup, Outcome};
use crate::styles::StyleTable;

/// Walk the text once, wrapping each run of same-styled characters in the
/// format's run markup and escaping every character within it. Each style
/// that gets a run is marked used in the table, along with any the format
/// always needs.
pub fn render_body(
    markup: &impl Markup,
    text: &impl CharacterStream,
    table: &mut StyleTable,
    tab_width: usize,
) -> String {
    let length = text.len();
    let mut body = String::with_capacity(length * 2);

    let mut current: Option<usize> = None;
    let mut open = false;
    let mut column = 0;
    let mut offset = 0;

    while offset < length {
        let c = match text.char_at(offset) {
            Some(c) => c,
            None => break,
        };
        let style = text.style_at(offset);

        let boundary = current != Some(style) || !open;
        let absorbed = markup.absorbs_whitespace() && is_space(c);

        if boundary && !absorbed {
            if open {
                markup.close_run(&mut body);
            }
            table.mark_used(style);
            markup.open_run(&mut body, style);
            open = true;
            current = Some(style);
        }

        let peek = Lookahead {
            current: c,
            next: text.char_at(offset + 1),
            column,
            tab_width,
        };

        match markup.escape(&mut body, &peek) {
            Outcome::Elided => {
                offset += 1;
            }
            Outcome::LineBreak => {
                if open {
                    markup.close_line(&mut body);
                    open = false;
                }
                markup.line_break(&mut body);
                column = 0;
                offset += 1;
            }
            Outcome::Written { columns, consumed } => {
                column += columns;
                offset += if consumed { 2 } else { 1 };
            }
        }
    }

    if open {
        markup.close_run(&mut body);
    }

    for &style in markup.always_used() {
        table.mark_used(style);
    }

    debug!(
        "Rendered {} characters using {} styles",
        length,
        table
            .used()
            .count()
    );

    body
}

/// Whitespace in the C locale's sense: space, tab, and the line and page
/// control characters.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}
