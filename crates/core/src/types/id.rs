//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `u32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_u32()`
/// - `From<u32>` and `Into<u32>` implementations
///
/// Ordering follows the numeric value, so ids handed out by a counter sort in
/// assignment order.
///
/// # Example
///
/// ```rust
/// # use rigo_core::define_id;
/// define_id!(ListingId);
/// define_id!(SellerId);
///
/// let listing_id = ListingId::new(1);
/// let seller_id = SellerId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ListingId = seller_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID from a u32 value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the underlying u32 value.
            #[must_use]
            pub const fn as_u32(&self) -> u32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
