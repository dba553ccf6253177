use crate::dev::{
    handle::{Handle, HandleRef},
    resource::ResourceSpec,
};
use alloc::{boxed::Box, vec, vec::Vec};
use spin::RwLock;

/// A node in the device hierarchy.
///
/// The PMIC core is bound to one node; every cell it instantiates becomes a
/// child of that node carrying its absolute resources.
#[derive(Debug)]
pub struct Device {
    pub name: Box<str>,
    /// Instance id, [None] for single-instance cells.
    pub id: Option<u32>,
    pub parent: Option<HandleRef<Device>>,
    pub resources: Box<[ResourceSpec]>,
    pub child: RwLock<Vec<Handle<Device>>>,
}

impl Device {
    pub fn new_root(name: impl AsRef<str>) -> Handle<Device> {
        Handle::from(Device {
            name: Box::from(name.as_ref()),
            id: None,
            parent: None,
            resources: Box::new([]),
            child: RwLock::new(vec![]),
        })
    }

    /// Create a detached child node; the caller decides when it joins the parent.
    pub fn new_child(
        parent: &Handle<Device>,
        name: &str,
        id: Option<u32>,
        resources: Vec<ResourceSpec>,
    ) -> Handle<Device> {
        Handle::from(Device {
            name: Box::from(name),
            id,
            parent: Some(parent.create_ref()),
            resources: resources.into_boxed_slice(),
            child: RwLock::new(vec![]),
        })
    }

    pub fn child_count(&self) -> usize {
        self.child.read().len()
    }

    /// Snapshot of `(name, id)` for every child, in insertion order.
    pub fn child_names(&self) -> Vec<(Box<str>, Option<u32>)> {
        self.child
            .read()
            .iter()
            .map(|dev| (dev.name.clone(), dev.id))
            .collect()
    }

    /// Look up a child by name and instance id.
    pub fn find_child(&self, name: &str, id: Option<u32>) -> Option<Handle<Device>> {
        self.child
            .read()
            .iter()
            .find(|dev| dev.name.as_ref() == name && dev.id == id)
            .cloned()
    }
}
