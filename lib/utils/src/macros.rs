//! Macros for thin newtype wrappers around plain values.

/// Implement conversions and read-only access for a newtype with a single `inner` field.
///
/// The wrapper gets `From<$type>`, `From<$name> for $type`, [Deref](core::ops::Deref)
/// to the wrapped value and a pair of `const` constructors/accessors usable in
/// constant expressions.
#[macro_export]
macro_rules! impl_basic {
    ($name: ident, $type: ty) => {
        impl core::convert::From<$type> for $name {
            fn from(value: $type) -> Self {
                $name { inner: value }
            }
        }

        impl core::convert::From<$name> for $type {
            fn from(value: $name) -> $type {
                value.inner
            }
        }

        impl core::ops::Deref for $name {
            type Target = $type;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl $name {
            pub const fn from_const(value: $type) -> Self {
                $name { inner: value }
            }
            pub const fn into_const(self) -> $type {
                self.inner
            }
        }
    };
}

/// Defines a `Copy` newtype over an integer together with [impl_basic].
#[macro_export]
macro_rules! define_struct {
    (copy, $(#[$meta:meta])* $name: ident, $type: ty) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name {
            inner: $type,
        }

        $crate::impl_basic!($name, $type);
    };
}
