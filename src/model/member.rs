//! Type members and overload-group placeholders.

use std::sync::Arc;

use super::{AssemblyInfo, Attribute, Docs, ItemData, ItemType, Parameter, RefType};
use crate::base::TypeId;

/// A member of a type.
///
/// Overload-group placeholders are members too; they have no DocId and their
/// id ends in `*`.
#[derive(Clone, Debug)]
pub struct Member {
    pub item: ItemData,
    pub display_name: String,
    pub full_display_name: String,
    /// Uid of the overload-group placeholder this member belongs to.
    pub overload: Option<Arc<str>>,
    pub is_extension_method: bool,
    /// Doc ids of the interface members this member implements.
    pub implements: Vec<Arc<str>>,
    pub(super) parent: Option<TypeId>,
}

impl Member {
    pub fn new(name: impl Into<Arc<str>>, item_type: ItemType) -> Self {
        Self {
            item: ItemData::new(name, item_type),
            display_name: String::new(),
            full_display_name: String::new(),
            overload: None,
            is_extension_method: false,
            implements: Vec::new(),
            parent: None,
        }
    }

    pub fn with_doc_id(mut self, doc_id: impl Into<Arc<str>>) -> Self {
        self.item.doc_id = Some(doc_id.into());
        self
    }

    /// Add a parameter from its raw type string.
    pub fn with_param(mut self, name: &str, raw_type: &str) -> Self {
        self.item.parameters.push(Parameter::new(name, raw_type));
        self
    }

    pub fn with_ref_param(mut self, name: &str, raw_type: &str, ref_type: RefType) -> Self {
        self.item
            .parameters
            .push(Parameter::new(name, raw_type).with_ref_type(ref_type));
        self
    }

    pub fn with_type_parameters(mut self, names: &[&str]) -> Self {
        self.item.type_parameters = names.iter().map(|n| Parameter::type_param(n)).collect();
        self
    }

    pub fn with_return(mut self, raw_type: &str) -> Self {
        self.item.return_value = Some(Parameter::returns(raw_type));
        self
    }

    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.item.modifiers.insert(
            crate::base::constants::CSHARP_MODIFIERS.to_string(),
            modifiers.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    pub fn with_signature(mut self, language: &str, syntax: &str) -> Self {
        self.item
            .signatures
            .insert(language.to_string(), syntax.to_string());
        self
    }

    pub fn with_attribute(mut self, declaration: &str) -> Self {
        self.item.attributes.push(Attribute::new(declaration));
        self
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.item.docs = Some(docs);
        self
    }

    pub fn with_assembly(mut self, assembly: AssemblyInfo) -> Self {
        self.item.assembly_info.push(assembly);
        self
    }

    pub fn with_source_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.item.source_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn id(&self) -> Option<&str> {
        self.item.id()
    }

    pub fn uid(&self) -> Option<&str> {
        self.item.uid()
    }

    /// Declaring type, once added to a model.
    pub fn parent(&self) -> Option<TypeId> {
        self.parent
    }

    /// Explicit interface implementation: the name embeds the interface.
    pub fn is_eii(&self) -> bool {
        self.item.item_type != ItemType::Constructor && self.item.name.contains('.')
    }

    pub fn is_conversion_operator(&self) -> bool {
        crate::base::constants::CONVERSION_OPERATORS.contains(&self.item.name.as_ref())
    }
}
