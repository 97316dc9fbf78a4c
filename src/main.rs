use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use tracing::{debug, Level};

use stylexport::document::{self, Host};
use stylexport::error::ExportError;
use stylexport::export::{self, Format, Options};
use stylexport::output;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("stylexport")
        .version(VERSION)
        .about("Export styled editor text as a self-contained HTML or LaTeX document.")
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["html", "latex"])
                .default_value("html")
                .help("The kind of document to produce."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Where to write the document; '-' for standard output. Defaults to a name derived from the document's file name."),
        )
        .arg(
            Arg::new("zoom")
                .short('z')
                .long("zoom")
                .action(ArgAction::SetTrue)
                .help("Render the font size together with the current zoom level (HTML only)."),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Overwrite the output file if it already exists."),
        )
        .arg(
            Arg::new("tab-width")
                .short('t')
                .long("tab-width")
                .value_parser(clap::value_parser!(usize))
                .help("Columns between tab stops, instead of the snapshot's setting."),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log what the exporter is doing."),
        )
        .arg(
            Arg::new("snapshot")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON snapshot of the styled document to export."),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let format = matches
        .get_one::<String>("format")
        .and_then(|name| Format::from_name(name))
        .unwrap_or(Format::Html);

    let options = Options {
        use_zoom: matches.get_flag("zoom"),
    };
    if options.use_zoom && !format.honours_zoom() {
        debug!("Ignoring zoom level for {} output", format);
    }

    let snapshot = matches
        .get_one::<PathBuf>("snapshot")
        .cloned()
        .unwrap_or_default();

    let result = run(
        &snapshot,
        format,
        &options,
        matches
            .get_one::<PathBuf>("output")
            .map(PathBuf::as_path),
        matches
            .get_one::<usize>("tab-width")
            .copied(),
        matches.get_flag("force"),
    );

    match result {
        Ok(target) if target.to_str() == Some("-") => {}
        Ok(target) => {
            eprintln!(
                "Document successfully exported as '{}'.",
                target
                    .display()
                    .bold()
            );
        }
        Err(error) => {
            eprintln!("{}", error.full_details());
            std::process::exit(1);
        }
    }
}

fn run(
    snapshot: &Path,
    format: Format,
    options: &Options,
    output: Option<&Path>,
    tab_width: Option<usize>,
    force: bool,
) -> Result<PathBuf, ExportError> {
    let mut buffer = document::load(snapshot)?;

    if let Some(width) = tab_width {
        buffer.set_tab_width(width);
    }

    let target = match output {
        Some(path) => path.to_path_buf(),
        None => output::suggested_filename(buffer.file_name(), format),
    };

    let exported = export::export(&buffer, format, options);

    output::write(&target, &exported.text, force)?;

    Ok(target)
}
