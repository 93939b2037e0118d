use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::encode::{encode_bytes, encode_text, BinaryContent};
use crate::error::{Error, Result};
use crate::types::{ReadMode, USAGE};

/// Loads the whole file at `path` and encodes it according to `mode`.
pub fn read_content(path: &Path, mode: ReadMode) -> Result<BinaryContent> {
    let bytes = fs::read(path).map_err(|e| Error::FileNotAccessible(path.to_path_buf(), e))?;
    log::debug!(
        "read {} bytes from {} in {mode} mode",
        bytes.len(),
        path.display()
    );

    let content = match mode {
        ReadMode::Binary => encode_bytes(&bytes),
        ReadMode::Text => {
            let text =
                String::from_utf8(bytes).map_err(|_| Error::InvalidText(path.to_path_buf()))?;
            encode_text(&text)
        }
    };
    log::debug!("encoded {} units from {}", content.units(), path.display());
    Ok(content)
}

/// One successfully encoded file, rendered as its report line.
#[derive(Debug)]
pub struct Report<'a> {
    pub path: &'a Path,
    pub mode: ReadMode,
    pub content: BinaryContent,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ReadMode::Binary => {
                write!(f, "Binary content of {}:\n{}", self.path.display(), self.content)
            }
            ReadMode::Text => {
                write!(f, "Binary content of {}: {}", self.path.display(), self.content)
            }
        }
    }
}

/// Writes the report line for `path` to `out`.
///
/// A file that cannot be opened or read is reported on `out` and is not an
/// error. Bad UTF-8 in text mode and write failures are.
pub fn process_file<W: Write>(path: &Path, mode: ReadMode, out: &mut W) -> Result<()> {
    match read_content(path, mode) {
        Ok(content) => {
            let report = Report {
                path,
                mode,
                content,
            };
            writeln!(out, "{report}")?;
        }
        Err(Error::FileNotAccessible(path, cause)) => {
            log::warn!("cannot read {}: {cause}", path.display());
            writeln!(out, "File {} not found.", path.display())?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Processes every path in order, or prints the usage prompt if there are none.
pub fn run<W: Write>(paths: &[PathBuf], mode: ReadMode, out: &mut W) -> Result<()> {
    if paths.is_empty() {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }

    for path in paths {
        process_file(path, mode, out)?;
    }
    out.flush()?;
    Ok(())
}
