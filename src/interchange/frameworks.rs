//! Frameworks index: one XML document per framework moniker.
//!
//! ```xml
//! <Framework Name="net-5.0">
//!   <Namespace Name="System.IO">
//!     <Type Id="T:System.IO.File" Name="File">
//!       <Member Id="M:System.IO.File.Exists(System.String)" />
//!     </Type>
//!   </Namespace>
//! </Framework>
//! ```

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use super::InterchangeError;
use super::xml::parse_document;
use crate::store::FrameworksIndex;

/// Directory under a documentation root holding the framework documents.
pub const FRAMEWORKS_DIR: &str = "FrameworksIndex";

/// Add one framework document to the index. Namespaces are keyed by name,
/// types and members by doc id.
pub fn read_framework(input: &[u8], index: &mut FrameworksIndex) -> Result<String, InterchangeError> {
    let root = parse_document(input)?;
    let moniker = root.required_attr("Name")?.to_string();

    for ns in root.children_named("Namespace") {
        index.add(ns.required_attr("Name")?, &moniker);
        for ty in ns.children_named("Type") {
            index.add(ty.required_attr("Id")?, &moniker);
            for member in ty.children_named("Member") {
                index.add(member.required_attr("Id")?, &moniker);
            }
        }
    }
    Ok(moniker)
}

/// Load every `*.xml` under `<root>/FrameworksIndex`, in file-name order.
/// A missing directory yields an empty index.
pub fn load_frameworks(root: &Path) -> Result<FrameworksIndex, InterchangeError> {
    let dir = root.join(FRAMEWORKS_DIR);
    let mut index = FrameworksIndex::new();
    if !dir.is_dir() {
        return Ok(index);
    }

    let mut monikers = Vec::new();
    for entry in WalkDir::new(&dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "xml") {
            continue;
        }
        let bytes = std::fs::read(path)?;
        monikers.push(read_framework(&bytes, &mut index)?);
    }
    debug!(frameworks = ?monikers, entries = index.len(), "frameworks index loaded");
    Ok(index)
}
