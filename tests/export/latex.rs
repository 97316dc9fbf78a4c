#[cfg(test)]
mod latex {
    use chrono::{DateTime, FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;

    use stylexport::document::Buffer;
    use stylexport::export::{export_at, Format, Options};
    use stylexport::rendering::{render_body, Latex};
    use stylexport::styles::{Attributes, StyleTable};

    fn when() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .unwrap()
    }

    fn body(buffer: &Buffer) -> (String, StyleTable) {
        let mut table = StyleTable::from_attributes(vec![Attributes::default(); 32]);
        let body = render_body(&Latex, buffer, &mut table, 4);
        (body, table)
    }

    #[test]
    fn double_dash_ligature_broken() {
        let buffer = Buffer::from_runs([("a--b", 3)]);
        let (body, _) = body(&buffer);
        assert_eq!(body, "\\styled{a-\\/-b}\n");
    }

    #[test]
    fn triple_dash_only_splits_first_pair() {
        let buffer = Buffer::new("---");
        let (body, _) = body(&buffer);
        assert_eq!(body, "\\stylea{-\\/--}\n");
    }

    #[test]
    fn style_zero_always_defined() {
        let buffer = Buffer::from_runs([("x", 2)]);
        let (_, table) = body(&buffer);

        let used: Vec<usize> = table
            .used()
            .map(|(style, _)| style)
            .collect();
        assert_eq!(used, vec![0, 2]);

        let (_, table) = body(&Buffer::new(""));
        assert!(table.is_used(0));
    }

    #[test]
    fn whitespace_starts_its_own_run() {
        let buffer = Buffer::from_runs([("a", 1), (" ", 0), ("b", 1)]);
        let (body, _) = body(&buffer);
        assert_eq!(body, "\\styleb{a}\n\\stylea{ }\n\\styleb{b}\n");
    }

    #[test]
    fn blank_line_opens_empty_run() {
        let buffer = Buffer::new("a\r\n\nb");
        let (body, _) = body(&buffer);
        assert_eq!(
            body,
            "\\stylea{a} \\\\\n\\stylea{} \\\\\n\\stylea{b}\n"
        );
    }

    #[test]
    fn spaces_pair_up() {
        let buffer = Buffer::new("a   b");
        let (body, _) = body(&buffer);
        assert_eq!(body, "\\stylea{a{\\hspace*{1em}} b}\n");
    }

    #[test]
    fn tabs_to_next_stop() {
        let buffer = Buffer::new("abc\td");
        let (body, _) = body(&buffer);
        assert_eq!(body, "\\stylea{abc\\hspace*{1em}d}\n");
    }

    #[test]
    fn special_characters_escaped() {
        let buffer = Buffer::new("50% of $x_1 {~^\\} & #");
        let (body, _) = body(&buffer);
        assert_eq!(
            body,
            "\\stylea{50\\% of \\$x\\_1 \\{\\symbol{126}\\symbol{94}\\symbol{92}\\} \\& \\#}\n"
        );
    }

    #[test]
    fn complete_document() {
        let buffer = Buffer::new("hi")
            .with_file_name("notes.txt")
            .with_zoom(4);

        let exported = export_at(&buffer, Format::Latex, &Options { use_zoom: true }, &when());

        let expected = format!(
            r#"% notes.txt (LaTeX code generated by stylexport {} on Sat Mar  9 14:05:07 2024)
\documentclass[a4paper]{{article}}
\usepackage[a4paper,margin=2cm]{{geometry}}
\usepackage[utf8x]{{inputenc}}
\usepackage[T1]{{fontenc}}
\usepackage{{color}}
\setlength{{\parindent}}{{0em}}
\setlength{{\parskip}}{{2ex plus1ex minus0.5ex}}
\newcommand{{\stylea}}[1]{{\noindent{{\textcolor[rgb]{{0.0, 0.0, 0.0}}{{\fcolorbox[rgb]{{0, 0, 0}}{{1.0, 1.0, 1.0}}{{#1}}}}}}}}

\begin{{document}}
\ttfamily
\setlength{{\fboxrule}}{{0pt}}
\setlength{{\fboxsep}}{{0pt}}
\stylea{{hi}}
\end{{document}}
"#,
            env!("CARGO_PKG_VERSION")
        );

        assert_eq!(exported.format, Format::Latex);
        assert_eq!(exported.text, expected);
    }

    #[test]
    fn decimal_point_in_colours() {
        let buffer = Buffer::from_runs([("x", 1)]).with_style(
            1,
            Attributes {
                foreground: 0x336699,
                background: 0xc0c0c0,
                bold: false,
                italic: true,
            },
        );

        let exported = export_at(&buffer, Format::Latex, &Options::default(), &when());
        assert!(exported
            .text
            .contains("\\newcommand{\\styleb}[1]{\\noindent{\\textit{\\textcolor[rgb]{0.6, 0.4, 0.2}"));
        assert!(exported
            .text
            .contains("{\\fcolorbox[rgb]{0, 0, 0}{0.8, 0.8, 0.8}{#1}}}}}\n"));
    }
}
