//! `_filter.xml`: attribute and API visibility rules.
//!
//! ```xml
//! <filter>
//!   <attributeFilter apply="true">
//!     <namespaceFilter name="System.Runtime.CompilerServices">
//!       <typeFilter name="*" expose="false" />
//!       <typeFilter name="ExtensionAttribute" expose="true" />
//!     </namespaceFilter>
//!   </attributeFilter>
//!   <apiFilter apply="true">
//!     <namespaceFilter name="System">
//!       <typeFilter name="Internal" expose="false" />
//!       <typeFilter name="Console" expose="true">
//!         <memberFilter name="Beep" expose="false" />
//!       </typeFilter>
//!     </namespaceFilter>
//!   </apiFilter>
//! </filter>
//! ```
//!
//! A section is read only when its `apply` attribute is `true`.

use std::path::Path;
use tracing::debug;

use super::InterchangeError;
use super::xml::{XmlElement, parse_document};
use crate::filter::{AttributeFilter, FilterStore, MemberFilter, TypeFilter};

/// File name of the filter document under a documentation root.
pub const FILTER_FILE: &str = "_filter.xml";

pub fn read_filters(input: &[u8]) -> Result<FilterStore, InterchangeError> {
    let root = parse_document(input)?;
    let mut store = FilterStore::new();

    if let Some(section) = applied_section(&root, "attributeFilter") {
        for ns in section.children_named("namespaceFilter") {
            let mut filter = AttributeFilter::new(ns.required_attr("name")?.trim());
            for ty in ns.children_named("typeFilter") {
                filter = filter.with_type(ty.required_attr("name")?.trim(), expose(ty));
            }
            store.attribute_filters.push(filter);
        }
    }

    if let Some(section) = applied_section(&root, "apiFilter") {
        for ns in section.children_named("namespaceFilter") {
            let namespace = ns.required_attr("name")?.trim();
            for ty in ns.children_named("typeFilter") {
                let type_filter =
                    TypeFilter::new(namespace, ty.required_attr("name")?.trim(), expose(ty));
                for member in ty.children_named("memberFilter") {
                    store.member_filters.push(MemberFilter::new(
                        type_filter.clone(),
                        member.required_attr("name")?.trim(),
                        expose(member),
                    ));
                }
                store.type_filters.push(type_filter);
            }
        }
    }

    debug!(
        attribute_rules = store.attribute_filters.len(),
        type_rules = store.type_filters.len(),
        member_rules = store.member_filters.len(),
        "filters read"
    );
    Ok(store)
}

/// Load `<root>/_filter.xml`; `None` when the file does not exist.
pub fn load_filters(root: &Path) -> Result<Option<FilterStore>, InterchangeError> {
    let path = root.join(FILTER_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let bytes = std::fs::read(&path)?;
    read_filters(&bytes).map(Some)
}

fn applied_section<'a>(root: &'a XmlElement, name: &str) -> Option<&'a XmlElement> {
    root.child(name)
        .filter(|section| section.attr("apply") == Some("true"))
}

/// Unparseable `expose` values read as `false`.
fn expose(element: &XmlElement) -> bool {
    element
        .attr("expose")
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(false)
}
