//! Typed arena handles.
//!
//! Every entity lives in one of the [`Model`](crate::model::Model) arenas and is
//! addressed by a small copyable handle. Parent links are handles too, so the
//! graph never holds owning back-pointers.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Create a handle from a raw arena index.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Position of the entity in its arena.
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            pub(crate) fn from_index(index: usize) -> Self {
                Self(u32::try_from(index).unwrap_or(u32::MAX))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// Handle to a [`Namespace`](crate::model::Namespace).
    NamespaceId,
    "ns"
);
arena_id!(
    /// Handle to a [`TypeDef`](crate::model::TypeDef).
    TypeId,
    "type"
);
arena_id!(
    /// Handle to a [`Member`](crate::model::Member), including overload placeholders.
    MemberId,
    "member"
);

/// A handle to an entity of any kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Namespace(NamespaceId),
    Type(TypeId),
    Member(MemberId),
}

impl From<NamespaceId> for ItemRef {
    fn from(id: NamespaceId) -> Self {
        Self::Namespace(id)
    }
}

impl From<TypeId> for ItemRef {
    fn from(id: TypeId) -> Self {
        Self::Type(id)
    }
}

impl From<MemberId> for ItemRef {
    fn from(id: MemberId) -> Self {
        Self::Member(id)
    }
}
