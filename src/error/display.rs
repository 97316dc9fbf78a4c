use owo_colors::OwoColorize;

use super::ExportError;

impl ExportError {
    /// Message for the terminal, with a hint where there is something the
    /// user can do about it.
    pub fn full_details(&self) -> String {
        let hint = match self {
            ExportError::Exists { .. } => Some("use --force to overwrite it"),
            _ => None,
        };

        match hint {
            Some(hint) => format!(
                "{}: {}\n{}: {}",
                "error".bright_red(),
                self,
                "hint".bright_blue(),
                hint
            ),
            None => format!("{}: {}", "error".bright_red(), self),
        }
    }
}
