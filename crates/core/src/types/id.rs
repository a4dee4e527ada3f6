//! Typed entity IDs.
//!
//! Every table in the `agriq` schema uses a `SERIAL` primary key. Wrapping the
//! raw `i32` per entity keeps a batch ID from being passed where a product ID
//! is expected.

/// Define a typed `i32` ID.
///
/// The generated type is `Copy`, hashable, serializes as a bare integer and,
/// with the `postgres` feature, encodes as a Postgres `INT4`.
///
/// ```rust
/// # use agriq_core::define_id;
/// define_id!(PalletId);
///
/// let id = PalletId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
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
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[cfg_attr(feature = "postgres", derive(::sqlx::Type))]
        #[cfg_attr(feature = "postgres", sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(BatchId);
define_id!(MovementId);
define_id!(MovementDetailId);
define_id!(ShipmentId);
define_id!(DiscardId);
define_id!(UserId);
define_id!(CustomerId);
define_id!(OrderId);
