//! Shared-ownership handles for device nodes.
//!
//! - [Handle<T>] keeps a node alive. The PMIC core holds the handle of its parent
//!   device for as long as it is bound, and every instantiated cell is owned by a
//!   [Handle<Device>](super::device::Device) stored in its parent's child list.
//! - [HandleRef<T>] is the non-owning back-reference a child keeps to its parent,
//!   so removing a parent's children never leaves a reference cycle behind.
//!   **Consumers must handle the [None] case of [HandleRef::get_handle].**
use alloc::sync::{Arc, Weak};
use core::ops::Deref;

/// Strong owning handle backed by [Arc<T>].
#[derive(Debug)]
pub struct Handle<T> {
    inner: Arc<T>,
}

impl<T> Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> From<T> for Handle<T> {
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Handle<T> {
    /// Create a weak [HandleRef<T>] pointing at the same node.
    pub fn create_ref(&self) -> HandleRef<T> {
        HandleRef {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Whether two handles refer to the very same node.
    pub fn same_node(&self, other: &Handle<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Weak (non-owning) handle backed by [Weak<T>].
#[derive(Debug)]
pub struct HandleRef<T> {
    inner: Weak<T>,
}

impl<T> Clone for HandleRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> HandleRef<T> {
    /// Attempt to upgrade into a strong [Handle<T>].
    ///
    /// Return [None] once every owner has dropped the node.
    pub fn get_handle(&self) -> Option<Handle<T>> {
        Weak::upgrade(&self.inner).map(|inner| Handle { inner })
    }
}
