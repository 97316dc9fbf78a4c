#[cfg(test)]
mod output {
    use std::fs;

    use stylexport::error::ExportError;
    use stylexport::output::write;

    #[test]
    fn writes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join("out.html");

        write(&path, "<p>hello</p>", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn refuses_to_clobber_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join("out.tex");
        fs::write(&path, "original").unwrap();

        let result = write(&path, "replacement", false);
        assert!(matches!(result, Err(ExportError::Exists { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");

        write(&path, "replacement", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
    }

    #[test]
    fn reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join("missing")
            .join("out.html");

        match write(&path, "x", false) {
            Err(ExportError::Write { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected a write error, got {:?}", other),
        }
    }
}
