//! apidoc — generate C++ API documentation initializers from a scripting README.
//!
//! Scans the README for level-6 headings naming API symbols, pairs each with
//! the line that follows it, and writes a header the host includes to
//! register `(name, signature, description)` for every entry.
//!
//! Run with no arguments from the project root:
//!
//! ```text
//! apidoc                                  # src/scriptable/README.md → src/gui/commandcompleterdocumentation.h
//! apidoc -i - -o - -f json < README.md    # stdin → stdout
//! ```

mod error;
mod model;
mod parser;
mod render;

use anyhow::Result;
use clap::Parser;
use error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Path meaning stdin for `--input` and stdout for `--output`.
const STDIO: &str = "-";

#[derive(Parser)]
#[command(
    name = "apidoc",
    about = "Generate C++ API documentation from a scripting README"
)]
struct Cli {
    /// Documentation source. Use - to read stdin.
    #[arg(short = 'i', long, default_value = "src/scriptable/README.md")]
    input: PathBuf,

    /// Generated file. Use - to write stdout.
    #[arg(short = 'o', long, default_value = "src/gui/commandcompleterdocumentation.h")]
    output: PathBuf,

    /// Output format: cpp (default), json
    #[arg(short = 'f', long, default_value = "cpp")]
    format: String,

    /// Warn about headings without a description and headings used as one
    #[arg(long)]
    strict: bool,

    /// Log debug details
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let renderer = render::create_renderer(&cli.format)?;
    debug!("using {} renderer", renderer.name());

    let input = read_input(&cli.input)?;
    let source = source_name(&cli.input);
    debug!("read {} lines from {}", input.lines().count(), source);

    let mut extractor = parser::scan(input.lines()).strict(cli.strict);
    let entries: Vec<model::ApiEntry> = extractor.by_ref().collect();
    for warning in extractor.warnings() {
        warn!("{}: {}", source, warning);
    }
    debug!("extracted {} entries", entries.len());

    let output = renderer.render(&entries, &source);
    write_output(&cli.output, &output)?;
    if !is_stdio(&cli.output) {
        info!("wrote {} entries to {}", entries.len(), cli.output.display());
    }

    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Name of the input as it appears in the generated header.
fn source_name(path: &Path) -> String {
    if is_stdio(path) {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_input(path: &Path) -> error::Result<String> {
    let unavailable = |source: io::Error| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };

    if is_stdio(path) {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).map_err(unavailable)?;
        return Ok(input);
    }
    fs::read_to_string(path).map_err(unavailable)
}

/// Write the whole output at once. Files go through a temporary sibling that
/// is renamed over the target, so a failed run never leaves a partial header.
/// An existing target keeps its permissions.
fn write_output(path: &Path, content: &str) -> error::Result<()> {
    let unwritable = |source: io::Error| Error::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };

    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes()).map_err(unwritable)?;
        return stdout.flush().map_err(unwritable);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    // Fresh headers get the usual umask-filtered mode instead of 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(unwritable)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(unwritable)?;
    }
    tmp.write_all(content.as_bytes()).map_err(unwritable)?;
    tmp.persist(path).map_err(|e| unwritable(e.error))?;
    Ok(())
}
