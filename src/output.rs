use crate::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Writes the report to `path`, replacing its contents, or to stdout with a
/// trailing newline when no path is given.
pub fn write_output(text: &str, path: Option<&Path>) -> Result<(), Error> {
    match path {
        Some(path) => {
            write_file(text, path).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("Wrote report to {}", path.display());
            Ok(())
        }
        None => write_line(io::stdout().lock(), text).map_err(Error::Stdout),
    }
}

fn write_file(text: &str, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}

fn write_line<W: Write>(mut w: W, text: &str) -> io::Result<()> {
    writeln!(w, "{}", text)?;
    w.flush()
}
