pub const FILENAME: &str = "{export_filename}";
pub const DATE: &str = "{export_date}";
pub const STYLES: &str = "{export_styles}";
pub const CONTENT: &str = "{export_content}";

/// Stands in for the file name of a document that has never been saved.
pub const UNTITLED: &str = "untitled";

/// The rendered pieces going into a skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub filename: &'a str,
    pub date: &'a str,
    pub styles: &'a str,
    pub content: &'a str,
}

impl<'a> Fields<'a> {
    /// The placeholder `text` starts with, and the value replacing it.
    pub fn lookup(&self, text: &str) -> Option<(&'static str, &'a str)> {
        [
            (FILENAME, self.filename),
            (DATE, self.date),
            (STYLES, self.styles),
            (CONTENT, self.content),
        ]
        .into_iter()
        .find(|(placeholder, _)| text.starts_with(*placeholder))
    }
}
