#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use stylexport::document::{self, CharacterStream};
    use stylexport::error::ExportError;
    use stylexport::export::{export, Format, Options};

    fn sample_files() -> Vec<PathBuf> {
        let dir = Path::new("tests/samples/");
        assert!(dir.exists(), "samples directory missing");

        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .expect("Failed to read samples directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .path()
            })
            .filter(|path| {
                path.extension()
                    .and_then(|s| s.to_str())
                    == Some("json")
            })
            .collect();
        files.sort();

        assert!(!files.is_empty(), "No .json files found in samples directory");
        files
    }

    #[test]
    fn ensure_samples_export() {
        for file in sample_files() {
            let buffer = document::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load {:?}: {}", file, e));

            for format in [Format::Html, Format::Latex] {
                let exported = export(&buffer, format, &Options { use_zoom: true });

                assert!(
                    !exported
                        .text
                        .contains("{export_"),
                    "Placeholder left in {} export of {:?}",
                    format,
                    file
                );
                if !buffer.is_empty() {
                    assert!(
                        exported
                            .text
                            .len()
                            > buffer.len(),
                        "{} export of {:?} is shorter than its text",
                        format,
                        file
                    );
                }
            }
        }
    }

    #[test]
    fn hello_sample_styles() {
        let buffer = document::load(Path::new("tests/samples/hello.json")).unwrap();

        let html = export(&buffer, Format::Html, &Options { use_zoom: true });
        assert!(html
            .text
            .contains("<title>hello.c</title>"));
        assert!(html
            .text
            .contains("\t.style_5\n\t{\n\t\tcolor: #00007f;\n\t\tbackground-color: #ffffff;\n\t\tfont-weight: bold;\n\t}\n"));
        assert!(html
            .text
            .contains("font-size: 12pt;"));
        assert!(!html
            .text
            .contains(".style_1\n"));

        let latex = export(&buffer, Format::Latex, &Options::default());
        assert!(latex
            .text
            .contains("\\newcommand{\\stylef}[1]{\\noindent{\\textbf{"));
        assert!(latex
            .text
            .contains("\\newcommand{\\stylea}"));
    }

    #[test]
    fn missing_snapshot() {
        let result = document::load(Path::new("tests/samples/absent.json"));
        match result {
            Err(ExportError::Snapshot { problem, .. }) => assert_eq!(problem, "file not found"),
            other => panic!("expected a snapshot error, got {:?}", other.map(|_| ())),
        }
    }
}
