//! Domain constants shared across the build passes and exporters.

/// Metadata keys written into entity [`Metadata`](crate::model::Metadata).
pub mod meta {
    /// Version monikers the entity is available in (list of strings).
    pub const MONIKERS: &str = "monikers";
    /// Package names translated from the entity's monikers.
    pub const PACKAGE_NAMES: &str = "nuget_package_names";
    /// Assembly name -> monikers supported by both the assembly and the entity.
    pub const ASSEMBLY_MONIKER_MAPPING: &str = "assembly_moniker_mapping";
    /// Set to `true` when the entity is for internal use only.
    pub const INTERNAL_ONLY: &str = "internal_only";
    /// Uid of the CLS-compliant alternative.
    pub const ALT_COMPLIANT: &str = "alt_compliant";
    /// Caller / implementer / inheritor notes.
    pub const ADDITIONAL_NOTES: &str = "additional_notes";
    pub const CONTENT_URL: &str = "content_url";
    pub const ORIGINAL_CONTENT_URL: &str = "original_content_url";
    pub const REF_SKELETON_URL: &str = "ref_skeleton_url";

    // API scan records
    pub const API_NAME: &str = "api_name";
    pub const API_LOCATION: &str = "api_location";
    pub const TOPIC_TYPE: &str = "topic_type";
    pub const API_TYPE: &str = "api_type";
}

/// Language key under which C# modifiers are recorded.
pub const CSHARP_MODIFIERS: &str = "csharp";

/// Language key under which the C# signature is recorded.
pub const CSHARP_SIGNATURE: &str = "C#";

/// Accessor prefixes that may precede an attribute declaration.
pub const ATTRIBUTE_ACCESSOR_PREFIXES: [&str; 4] = ["get: ", "set: ", "add: ", "remove: "];

/// Suffix conventionally carried by attribute type names.
pub const ATTRIBUTE_SUFFIX: &str = "Attribute";

/// Member names that convert between types.
pub const CONVERSION_OPERATORS: [&str; 2] = ["op_Explicit", "op_Implicit"];

/// Member name of finalizers, which are never inherited.
pub const FINALIZER_NAME: &str = "Finalize";
