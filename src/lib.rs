//! # apidoc-base
//!
//! Resolution engine for ECMA-style API documentation models.
//!
//! A caller loads namespaces, types and members into a [`Model`], hands it to
//! a [`Store`] together with the optional side indices ([`BuildInputs`]) and
//! calls [`Store::build`]. The build assigns ids and uids, linearizes
//! inheritance, groups overloads, binds extension methods and resolves
//! attribute visibility; the store then answers lookups by name, uid and
//! doc id.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! apiscan      → runtime API names over a built store
//!   ↓
//! store        → Store, lookup tables, build inputs and options
//!   ↓
//! build        → ordered resolution passes
//!   ↓
//! filter       → attribute / API visibility rules
//! typeref      → type-string parsing and id encoding
//! diagnostics  → recoverable build faults
//!   ↓
//! model        → entity arena (namespaces, types, members)
//!   ↓
//! base         → handles and constants
//! ```
//!
//! ## Example
//!
//! ```rust
//! use apidoc::{BuildInputs, ItemType, Member, Model, Namespace, Store, TypeDef};
//!
//! let mut model = Model::new();
//! let ns = model.add_namespace(Namespace::new("System.IO"));
//! let file = model.add_type(ns, TypeDef::new("File", "System.IO.File", ItemType::Class));
//! model.add_member(
//!     file,
//!     Member::new("Exists", ItemType::Method)
//!         .with_doc_id("M:System.IO.File.Exists(System.String)")
//!         .with_param("path", "System.String"),
//! );
//!
//! let mut store = Store::new(model, BuildInputs::new());
//! store.build();
//!
//! let exists = store.member_by_uid("System.IO.File.Exists(System.String)").unwrap();
//! assert_eq!(exists.overload.as_deref(), Some("System.IO.File.Exists*"));
//! ```

// ============================================================================
// MODULES (dependency order: base → model → typeref/diagnostics/filter → build → store)
// ============================================================================

/// Foundation types: arena handles, constants
pub mod base;

/// Entity model: namespaces, types, members and their shared fields
pub mod model;

/// Type-string parsing and id encoding
pub mod typeref;

/// Diagnostics collected during a build
pub mod diagnostics;

/// Attribute and API visibility rules
pub mod filter;

/// Build passes
pub mod build;

/// The built store and its inputs
pub mod store;

/// API scan names
pub mod apiscan;

/// Side-index loaders: frameworks, filters, extension methods, mappings, overlays
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{ItemRef, MemberId, NamespaceId, TypeId};

// Re-export the model and store surface
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity};
pub use filter::FilterStore;
pub use model::{
    AssemblyInfo, Attribute, Docs, ItemData, ItemType, Member, Metadata, MetadataValue, Model,
    Namespace, Parameter, TypeDef,
};
pub use store::{BuildInputs, BuildOptions, ExtensionMethod, FrameworksIndex, Store};
