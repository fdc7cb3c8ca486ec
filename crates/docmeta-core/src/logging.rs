//! Tracing setup for the `docmeta` binary.
//!
//! Events go to `~/.local/state/docmeta/docmeta.log`. When that file cannot be
//! opened the binary calls [`init_logging_stderr`] instead. `RUST_LOG`
//! overrides [`DEFAULT_FILTER`].

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,docmeta=debug";

/// Appending log file shared by every event; each event writes through its own clone.
struct SharedLogFile(fs::File);

/// Per-event writer. Falls back to stderr when the file handle cannot be cloned.
enum EventWriter {
    File(fs::File),
    Stderr(io::Stderr),
}

impl io::Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            EventWriter::File(f) => f.write(buf),
            EventWriter::Stderr(e) => e.lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            EventWriter::File(f) => f.flush(),
            EventWriter::Stderr(e) => e.lock().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = EventWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => EventWriter::File(f),
            Err(_) => EventWriter::Stderr(io::stderr()),
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Location of the log file. Creates `~/.local/state/docmeta/` if missing.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("docmeta")?;
    dirs.place_state_file("docmeta.log")
        .context("create docmeta state dir")
}

/// Install the global subscriber writing plain-text events to the log file.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(BoxMakeWriter::new(SharedLogFile(file)))
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}

/// Install the global subscriber on stderr.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
