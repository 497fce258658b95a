//! Loaders for the side indices a build consumes.
//!
//! The entity tree itself comes from the caller; this module reads the
//! optional tables laid out next to it in a documentation root:
//!
//! ```text
//! <root>/
//! ├── FrameworksIndex/*.xml     frameworks index      → FrameworksIndex
//! ├── _filter.xml               attribute/API rules   → FilterStore
//! ├── index.xml                 extension methods     → Vec<ExtensionMethod>
//! ├── _moniker2nuget.json       moniker → package
//! └── _moniker2Assembly.json    moniker → assemblies
//! ```
//!
//! Metadata overlays live in a separate tree of Markdown files and are read
//! with [`OverlayReader`].
//!
//! ## Usage
//!
//! ```ignore
//! use apidoc::interchange::load_inputs;
//! use apidoc::store::Store;
//!
//! let inputs = load_inputs(std::path::Path::new("docs"))?;
//! let mut store = Store::new(model, inputs);
//! store.build();
//! ```

mod error;
pub mod extensions;
pub mod filters;
pub mod frameworks;
pub mod mappings;
pub mod overlay;
mod xml;

pub use error::InterchangeError;
pub use extensions::{load_extension_methods, read_extension_methods};
pub use filters::{load_filters, read_filters};
pub use frameworks::{load_frameworks, read_framework};
pub use mappings::{
    load_moniker_assemblies, load_moniker_packages, read_moniker_assemblies,
    read_moniker_packages,
};
pub use overlay::{MetadataOverlay, OverlayReader};
pub use xml::{XmlElement, parse_document};

use std::path::Path;
use tracing::debug;

use crate::store::BuildInputs;

/// Read every side index present under `root` into build inputs.
/// Absent files leave the corresponding input empty.
pub fn load_inputs(root: &Path) -> Result<BuildInputs, InterchangeError> {
    let mut inputs = BuildInputs::new()
        .with_frameworks(load_frameworks(root)?)
        .with_extension_methods(load_extension_methods(root)?);
    if let Some(filters) = load_filters(root)? {
        inputs = inputs.with_filters(filters);
    }
    if let Some(packages) = load_moniker_packages(root)? {
        inputs = inputs.with_moniker_packages(packages);
    }
    if let Some(assemblies) = load_moniker_assemblies(root)? {
        inputs = inputs.with_moniker_assemblies(assemblies);
    }
    debug!(
        root = %root.display(),
        frameworks = inputs.frameworks.len(),
        extension_methods = inputs.extension_methods.len(),
        filters = inputs.filters.is_some(),
        "build inputs loaded"
    );
    Ok(inputs)
}

/// Supported file extensions of side-index documents.
pub fn supported_extensions() -> &'static [&'static str] {
    &["xml", "json", "md"]
}
