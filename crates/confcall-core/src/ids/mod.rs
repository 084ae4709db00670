//!
//! Strongly-typed identifiers shared across the reader, selector and
//! resolver layers.
//!
//! These are string-backed wrappers so known constants can be zero-copy
//! while values read from configuration allocate only when needed.
//!

mod operation;
mod types;

pub use operation::*;
pub use types::*;

// Shared trait surface for the `Cow<'static, str>` newtypes in this module.
macro_rules! impl_string_id {
    ($ty:ident) => {
        impl $ty {
            #[must_use]
            pub const fn new(s: &'static str) -> Self {
                Self(::std::borrow::Cow::Borrowed(s))
            }

            #[must_use]
            pub const fn owned(s: String) -> Self {
                Self(::std::borrow::Cow::Owned(s))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[must_use]
            pub fn into_string(self) -> String {
                self.0.into_owned()
            }
        }

        impl From<&'static str> for $ty {
            fn from(s: &'static str) -> Self {
                Self::new(s)
            }
        }

        impl From<&String> for $ty {
            fn from(s: &String) -> Self {
                Self::owned(s.clone())
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self::owned(s)
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> Self {
                id.into_string()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::borrow::Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }
    };
}

pub(crate) use impl_string_id;
