//! crates/csb_core/src/ids.rs
//! Numeric id newtypes for representatives and customers. No I/O.
//!
//! Id `0` is reserved: the sentinel-compatible entry point uses `0` for
//! "no unique winner", so a roster id of `0` would be indistinguishable from
//! that outcome. Construction is unchecked here; the pipeline's validation
//! stage reports reserved ids.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self { Self(raw) }

            #[inline]
            pub const fn as_u32(self) -> u32 { self.0 }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(raw: u32) -> Self { Self(raw) }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    }
}

numeric_id!(
    /// Customer-success representative id.
    CsId
);
numeric_id!(
    /// Customer id.
    CustomerId
);

impl CsId {
    /// Reserved id; collides with the sentinel return of the compatibility
    /// entry point. Real roster ids start at 1.
    pub const RESERVED: CsId = CsId(0);

    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.0 == 0
    }
}
