//! Device model the PMIC core is built on: device nodes, resources and the
//! contracts of the collaborators (bus, interrupt chip, registration host).

pub mod bus;
pub mod device;
pub mod handle;
pub mod intc;
pub mod mfd;
pub mod probe;
pub mod resource;

pub use device::Device;
pub use handle::{Handle, HandleRef};
