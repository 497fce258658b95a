//! Type-string descriptors.
//!
//! Parameter, return and base types arrive as CLR type strings such as
//! `System.Collections.Generic.Dictionary<TKey,TValue>+KeyCollection[]`.
//! This module parses them into a [`TypeDesc`] and renders the three forms
//! the build passes need:
//!
//! - [`TypeDesc::display_name`] - short human form, `KeyCollection[]` style
//! - [`TypeDesc::spec_id`] - id encoding used inside member ids
//! - [`TypeDesc::outer_uid`] - uid of the referenced type with generic arity
//!
//! Parsing is memoized per build by [`TypeDescCache`].

mod cache;
mod parser;

pub use cache::TypeDescCache;
pub use parser::parse_type;

/// One dotted or nested segment of a type name.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeSegment {
    pub name: String,
    pub args: Vec<TypeDesc>,
    /// Introduced by `+` (a nested type) rather than `.`.
    pub nested: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeModifier {
    Pointer,
    Ref,
}

/// A parsed type string.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDesc {
    pub segments: Vec<TypeSegment>,
    /// Array ranks, outermost first (`[,][]` -> `[2, 1]`).
    pub array_ranks: Vec<usize>,
    pub modifier: Option<TypeModifier>,
}

impl TypeDesc {
    /// Short display form: namespace dropped, nested types kept, generic
    /// arguments rendered as `<A, B>`.
    pub fn display_name(&self) -> String {
        let start = self
            .segments
            .iter()
            .rposition(|s| !s.nested)
            .unwrap_or(0);
        let mut out = self.segments[start..]
            .iter()
            .map(|segment| {
                if segment.args.is_empty() {
                    segment.name.clone()
                } else {
                    let args: Vec<String> =
                        segment.args.iter().map(TypeDesc::display_name).collect();
                    format!("{}<{}>", segment.name, args.join(", "))
                }
            })
            .collect::<Vec<_>>()
            .join(".");
        for rank in &self.array_ranks {
            out.push('[');
            out.push_str(&",".repeat(rank.saturating_sub(1)));
            out.push(']');
        }
        if self.modifier == Some(TypeModifier::Pointer) {
            out.push('*');
        }
        out
    }

    /// Id encoding of the type, as used in member ids.
    ///
    /// Generic parameter names are replaced by their position: member-level
    /// parameters as ``` ``i ```, type-level parameters as `` `i ``. Generic
    /// arguments render as `{A,B}`, multi-dimensional arrays as `[0:,0:]`.
    pub fn spec_id(&self, type_params: &[&str], member_params: &[&str]) -> String {
        let mut out = match self.generic_param_name() {
            Some(name) => {
                if let Some(i) = member_params.iter().position(|p| *p == name) {
                    format!("``{i}")
                } else if let Some(i) = type_params.iter().position(|p| *p == name) {
                    format!("`{i}")
                } else {
                    name.to_string()
                }
            }
            None => self
                .segments
                .iter()
                .map(|segment| {
                    if segment.args.is_empty() {
                        segment.name.clone()
                    } else {
                        let args: Vec<String> = segment
                            .args
                            .iter()
                            .map(|a| a.spec_id(type_params, member_params))
                            .collect();
                        format!("{}{{{}}}", segment.name, args.join(","))
                    }
                })
                .collect::<Vec<_>>()
                .join("."),
        };
        for rank in &self.array_ranks {
            if *rank <= 1 {
                out.push_str("[]");
            } else {
                let dims = vec!["0:"; *rank];
                out.push('[');
                out.push_str(&dims.join(","));
                out.push(']');
            }
        }
        match self.modifier {
            Some(TypeModifier::Pointer) => out.push('*'),
            Some(TypeModifier::Ref) => out.push('@'),
            None => {}
        }
        out
    }

    /// Uid of the referenced type: generic arguments become a `` `N `` arity
    /// suffix, arrays and modifiers are dropped.
    pub fn outer_uid(&self) -> String {
        self.segments
            .iter()
            .map(|segment| {
                if segment.args.is_empty() {
                    segment.name.clone()
                } else {
                    format!("{}`{}", segment.name, segment.args.len())
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// The bare name when this is a single plain identifier (a candidate
    /// generic parameter).
    fn generic_param_name(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [only] if only.args.is_empty() => Some(&only.name),
            _ => None,
        }
    }
}

/// Synthesize a type id from a full name.
///
/// `+` becomes `.` and every innermost `<...>` group becomes `` `N `` where N
/// is the number of arguments, repeated until no group remains:
/// `Dictionary<TKey,List<T>>` -> ``Dictionary`2``.
pub fn synthesize_type_id(full_name: &str) -> String {
    let mut id = full_name.replace('+', ".");
    while let Some((open, close)) = innermost_group(&id) {
        let arity = id[open + 1..close].matches(',').count() + 1;
        id.replace_range(open..=close, &format!("`{arity}"));
    }
    id
}

/// Byte range of the first non-empty `<...>` group with no brackets inside.
fn innermost_group(s: &str) -> Option<(usize, usize)> {
    let mut open = None;
    for (i, c) in s.char_indices() {
        match c {
            '<' => open = Some(i),
            '>' => match open {
                Some(o) if i > o + 1 => return Some((o, i)),
                _ => open = None,
            },
            _ => {}
        }
    }
    None
}
