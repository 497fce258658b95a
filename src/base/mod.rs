//! Foundation types for the apidoc engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`NamespaceId`], [`TypeId`], [`MemberId`] - Arena handles into the entity model
//! - [`ItemRef`] - A handle to any entity, regardless of kind
//! - Domain constants (metadata keys, signature languages, attribute accessor prefixes)
//!
//! This module has NO dependencies on other apidoc modules.

pub mod constants;
mod ids;

pub use ids::{ItemRef, MemberId, NamespaceId, TypeId};
