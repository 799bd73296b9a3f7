//! Writer configuration

use serde::{Deserialize, Serialize};

/// Format version written on the root element.
pub const FORMAT_VERSION: &str = "1.7.0";

/// Options controlling how a [`Splits`](crate::Splits) is written out.
///
/// The defaults produce the document shape the codec reads back losslessly.
///
/// ```rust
/// use splitwrapper::WriterOptions;
///
/// let options = WriterOptions::default().xml_declaration(true);
/// assert_eq!(options.version, "1.7.0");
/// assert!(!options.mirror_started_sync);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Value of the root `version` attribute
    pub version: String,
    /// Prefix the document with `<?xml version="1.0" encoding="UTF-8"?>`
    pub xml_declaration: bool,
    /// Write `isEndedSynced` from the attempt's start flag.
    ///
    /// Older writers of this format did this; enable it only when a downstream
    /// consumer depends on that output. Documents written this way lose the
    /// end flag on reload.
    pub mirror_started_sync: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self { version: FORMAT_VERSION.to_string(), xml_declaration: false, mirror_started_sync: false }
    }
}

impl WriterOptions {
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    pub fn mirror_started_sync(mut self, enabled: bool) -> Self {
        self.mirror_started_sync = enabled;
        self
    }
}
