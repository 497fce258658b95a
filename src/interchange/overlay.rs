//! Metadata overlays: YAML headers embedded in Markdown files.
//!
//! Every `---`-delimited YAML header in a `*.md` file under the overlay root
//! is one entry; its `uid` key names the entity and the remaining keys are
//! metadata to merge onto it (see
//! [`Store::apply_metadata_overlay`](crate::store::Store::apply_metadata_overlay)).

use indexmap::IndexMap;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use walkdir::WalkDir;

use super::InterchangeError;
use crate::diagnostics::DiagnosticCollector;
use crate::model::{Metadata, MetadataValue};

/// Uid -> metadata entries.
pub type MetadataOverlay = IndexMap<String, Metadata>;

const HEADER_PATTERN: &str = r"\-{3}(?:\s*?)\n([\s\S]+?)(?:\s*?)\n\-{3}(?:\s*?)(?:\n|$)";
const UID_KEY: &str = "uid";

/// Parses overlay headers; problems with individual headers are reported to
/// the collector and the header is skipped.
pub struct OverlayReader {
    header: Regex,
}

impl OverlayReader {
    pub fn new() -> Result<Self, InterchangeError> {
        Ok(Self {
            header: Regex::new(HEADER_PATTERN)?,
        })
    }

    /// Headers of one document. Within a document the first header for a
    /// uid wins.
    pub fn read_document(
        &self,
        text: &str,
        source: Option<Arc<str>>,
        diagnostics: &mut DiagnosticCollector,
    ) -> MetadataOverlay {
        let mut overlay = MetadataOverlay::new();
        for captures in self.header.captures_iter(text) {
            let Some(body) = captures.get(1) else {
                continue;
            };
            let mut entry: Metadata = match serde_yaml::from_str(body.as_str()) {
                Ok(entry) => entry,
                Err(err) => {
                    diagnostics.invalid_overlay_header(&err.to_string(), source.clone());
                    continue;
                }
            };
            let Some(uid) = entry.shift_remove(UID_KEY).and_then(uid_string) else {
                diagnostics.invalid_overlay_header("no uid", source.clone());
                continue;
            };
            if overlay.contains_key(&uid) {
                diagnostics.duplicate_overlay_uid(&uid, source.clone());
                continue;
            }
            overlay.insert(uid, entry);
        }
        overlay
    }

    /// Every `*.md` file under `root`, files of a directory before its
    /// subdirectories. Later documents override earlier ones key by key.
    pub fn load(
        &self,
        root: &Path,
        diagnostics: &mut DiagnosticCollector,
    ) -> Result<MetadataOverlay, InterchangeError> {
        let mut overlay = MetadataOverlay::new();
        let mut documents = 0usize;
        let walker = WalkDir::new(root).follow_links(false).sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });
        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }
            let text = std::fs::read_to_string(path)?;
            let source: Arc<str> = Arc::from(path.to_string_lossy().as_ref());
            merge(&mut overlay, self.read_document(&text, Some(source), diagnostics));
            documents += 1;
        }
        debug!(documents, uids = overlay.len(), "metadata overlay loaded");
        Ok(overlay)
    }
}

/// Merge `other` into `overlay`; keys of `other` win.
pub fn merge(overlay: &mut MetadataOverlay, other: MetadataOverlay) {
    for (uid, entry) in other {
        let target = overlay.entry(uid).or_default();
        for (key, value) in entry {
            target.insert(key, value);
        }
    }
}

fn uid_string(value: MetadataValue) -> Option<String> {
    match value {
        MetadataValue::String(s) => Some(s),
        MetadataValue::Integer(i) => Some(i.to_string()),
        MetadataValue::Float(f) => Some(f.to_string()),
        MetadataValue::Bool(b) => Some(b.to_string()),
        MetadataValue::Null
        | MetadataValue::Strings(_)
        | MetadataValue::List(_)
        | MetadataValue::Map(_) => None,
    }
}
