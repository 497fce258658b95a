//! Build pass tests
//!
//! End-to-end checks of the resolution passes through `Store::build`:
//! - Identifiers and display names
//! - Inheritance chains and inherited members
//! - Overload groups
//! - Extension methods
//! - Attribute visibility
//! - Frameworks, packages and other metadata

mod tests_attributes;
mod tests_extensions;
mod tests_ids;
mod tests_inheritance;
mod tests_metadata;
mod tests_overloads;
