//! Per-build memoization of parsed type strings.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use super::{TypeDesc, parse_type, synthesize_type_id};

/// Cache of parsed type strings, owned by one build.
///
/// Unparseable strings are cached too, so each distinct string is parsed at
/// most once. The rendering helpers fall back to plain text substitutions for
/// strings the parser rejects.
#[derive(Debug, Default)]
pub struct TypeDescCache {
    descs: FxHashMap<Arc<str>, Option<Arc<TypeDesc>>>,
}

impl TypeDescCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse(&mut self, type_string: &str) -> Option<Arc<TypeDesc>> {
        if let Some(cached) = self.descs.get(type_string) {
            return cached.clone();
        }
        let parsed = parse_type(type_string).map(Arc::new);
        if parsed.is_none() {
            tracing::trace!(type_string, "unparseable type string");
        }
        self.descs.insert(Arc::from(type_string), parsed.clone());
        parsed
    }

    pub fn display_name(&mut self, type_string: &str) -> String {
        match self.get_or_parse(type_string) {
            Some(desc) => desc.display_name(),
            None => type_string.to_string(),
        }
    }

    pub fn spec_id(&mut self, type_string: &str, type_params: &[&str], member_params: &[&str]) -> String {
        match self.get_or_parse(type_string) {
            Some(desc) => desc.spec_id(type_params, member_params),
            None => type_string
                .replace('+', ".")
                .replace('<', "{")
                .replace('>', "}"),
        }
    }

    pub fn outer_uid(&mut self, type_string: &str) -> String {
        match self.get_or_parse(type_string) {
            Some(desc) => desc.outer_uid(),
            None => synthesize_type_id(type_string),
        }
    }

    pub fn len(&self) -> usize {
        self.descs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descs.is_empty()
    }
}
