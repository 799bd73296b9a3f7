//! # Document Codec
//!
//! Entry points that move a [`Splits`] between text (or storage) and memory.
//!
//! ```text
//! text ──► markup::Element ──► Splits::from_element ──► Splits
//! Splits ──► Splits::to_element_with ──► markup::Element ──► text
//! ```
//!
//! Parsing is all-or-nothing: any malformed or missing required field returns an
//! error and no partially built run is exposed. File handles are scoped to the
//! single read or write call and released on every path.

use crate::markup::Element;
use crate::schema::Splits;
use crate::{Result, SplitsError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

mod export;
mod options;
mod parse;

pub use options::{FORMAT_VERSION, WriterOptions};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Parse a complete splits document.
pub fn load_from_text(text: &str) -> Result<Splits> {
    let root = Element::parse_document(text)?;
    let splits = Splits::from_element(&root)?;
    debug!(
        game = %splits.game_name,
        category = %splits.category_name,
        attempts = splits.attempt_history.len(),
        segments = splits.segments.len(),
        "Loaded splits document"
    );
    Ok(splits)
}

/// Read a complete splits document from any reader.
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Splits> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| SplitsError::file_error(PathBuf::from("<reader>"), e))?;
    load_from_text(&decode(bytes)?)
}

/// Read and parse the splits document at `path`.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Splits> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| SplitsError::file_error(path.to_path_buf(), e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read splits file");
    load_from_text(&decode(bytes)?)
}

/// Undecodable bytes are a fault of the document, not of the storage it came from.
fn decode(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| SplitsError::format_error("document encoding", e.to_string()))
}

/// Serialize with default [`WriterOptions`].
pub fn to_text(splits: &Splits) -> String {
    to_text_with(splits, &WriterOptions::default())
}

/// Serialize to a single document string.
pub fn to_text_with(splits: &Splits, options: &WriterOptions) -> String {
    let body = splits.to_element_with(options).to_xml_string();
    if options.xml_declaration { format!("{XML_DECLARATION}{body}") } else { body }
}

/// Serialize into any writer with default [`WriterOptions`].
pub fn write_to_writer<W: Write>(splits: &Splits, mut writer: W) -> Result<()> {
    writer
        .write_all(to_text(splits).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| SplitsError::file_error(PathBuf::from("<writer>"), e))
}

/// Serialize and write to `path`, creating or truncating the file.
pub fn write_to_path<P: AsRef<Path>>(splits: &Splits, path: P) -> Result<()> {
    write_to_path_with(splits, path, &WriterOptions::default())
}

/// Serialize with `options` and write to `path`, creating or truncating the file.
pub fn write_to_path_with<P: AsRef<Path>>(
    splits: &Splits,
    path: P,
    options: &WriterOptions,
) -> Result<()> {
    let path = path.as_ref();
    let text = to_text_with(splits, options);
    std::fs::write(path, &text).map_err(|e| SplitsError::file_error(path.to_path_buf(), e))?;
    debug!(path = %path.display(), bytes = text.len(), "Wrote splits file");
    Ok(())
}
