use crate::constants::GZIP_FILE_EXTENSION;
use crate::Error;

use flate2::read::GzDecoder;
use log::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// The raw text content of a source. Immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Loads the full content of the file at `path` as a UTF-8 `Document`.
///
/// Files ending in `.gz` are decompressed first. A path that does not resolve
/// to a file yields `Error::NotFound`; every other read or decode failure is
/// reported as `Error::IoError`. The file is closed before this returns.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document, Error> {
    let path = path.as_ref();

    info!("Loading document from {}...", path.display());

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::IoError(err),
    })?;

    if is_gzip_path(path) {
        debug!("Decompressing gzip source");
        read_document(GzDecoder::new(file))
    } else {
        read_document(file)
    }
}

/// Reads a UTF-8 `Document` from any reader, until EOF.
pub fn read_document<R: Read>(mut reader: R) -> Result<Document, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    debug!("Read {} bytes", text.len());

    Ok(Document::from(text))
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map_or(false, |extension| extension == GZIP_FILE_EXTENSION)
}
