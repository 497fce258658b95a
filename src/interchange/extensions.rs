//! Extension-method declarations from the documentation `index.xml`.
//!
//! ```xml
//! <Overview>
//!   <ExtensionMethods>
//!     <ExtensionMethod>
//!       <Targets><Target Type="T:System.Collections.Generic.IEnumerable`1" /></Targets>
//!       <Member MemberName="Count"><Link Type="System.Linq.Enumerable"
//!         Member="M:System.Linq.Enumerable.Count``1(System.Collections.Generic.IEnumerable{``0})" /></Member>
//!     </ExtensionMethod>
//!   </ExtensionMethods>
//! </Overview>
//! ```

use std::path::Path;
use tracing::debug;

use super::InterchangeError;
use super::xml::parse_document;
use crate::store::ExtensionMethod;

/// File name of the documentation index under a documentation root.
pub const INDEX_FILE: &str = "index.xml";

pub fn read_extension_methods(input: &[u8]) -> Result<Vec<ExtensionMethod>, InterchangeError> {
    let root = parse_document(input)?;
    let Some(section) = root.child("ExtensionMethods") else {
        return Ok(Vec::new());
    };

    let mut methods = Vec::new();
    for declaration in section.children_named("ExtensionMethod") {
        let target = declaration
            .required_child("Targets")?
            .required_child("Target")?
            .required_attr("Type")?;
        let link = declaration.required_child("Member")?.required_child("Link")?;
        methods.push(ExtensionMethod::new(
            target,
            link.required_attr("Member")?,
            link.required_attr("Type")?,
        ));
    }
    debug!(count = methods.len(), "extension methods read");
    Ok(methods)
}

/// Load declarations from `<root>/index.xml`; empty when the file does not exist.
pub fn load_extension_methods(root: &Path) -> Result<Vec<ExtensionMethod>, InterchangeError> {
    let path = root.join(INDEX_FILE);
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let bytes = std::fs::read(&path)?;
    read_extension_methods(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_declarations() {
        let xml = r#"<Overview>
          <Types />
          <ExtensionMethods>
            <ExtensionMethod>
              <Targets><Target Type="T:N.IFoo" /></Targets>
              <Member MemberName="Go"><Link Type="N.Ext" Member="M:N.Ext.Go(N.IFoo)" /></Member>
            </ExtensionMethod>
          </ExtensionMethods>
        </Overview>"#;
        let methods = read_extension_methods(xml.as_bytes()).unwrap();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].target_uid(), "N.IFoo");
        assert_eq!(methods[0].member_doc_id, "M:N.Ext.Go(N.IFoo)");
        assert_eq!(methods[0].parent_type_string, "N.Ext");
        assert!(!methods[0].is_resolved());
    }

    #[test]
    fn test_declaration_without_link_is_rejected() {
        let xml = r#"<Overview><ExtensionMethods><ExtensionMethod>
            <Targets><Target Type="T:N.IFoo" /></Targets><Member />
        </ExtensionMethod></ExtensionMethods></Overview>"#;
        let err = read_extension_methods(xml.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Member/Link"));
    }

    #[test]
    fn test_missing_index_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_extension_methods(dir.path()).unwrap().is_empty());
    }
}
